// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors
// ABOUTME: Output formatting helpers for pantry-chef
// ABOUTME: Writes command results as pretty JSON to any writer

use std::io::Write;

use anyhow::{Context, Result};
use chef_core::constants::messages::NO_RECIPE_FOUND;
use serde::Serialize;
use serde_json::json;

/// Write any serializable value as pretty JSON followed by a newline
pub fn print_json<T>(out: &mut impl Write, value: &T) -> Result<()>
where
    T: Serialize + ?Sized,
{
    serde_json::to_writer_pretty(&mut *out, value).context("failed to render output")?;
    writeln!(out).context("failed to write output")?;
    Ok(())
}

/// Write the not-found response body
pub fn print_not_found(out: &mut impl Write) -> Result<()> {
    print_json(out, &json!({ "recipe": NO_RECIPE_FOUND }))
}
