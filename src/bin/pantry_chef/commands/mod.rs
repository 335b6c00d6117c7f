// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors
// ABOUTME: Re-exports command modules for pantry-chef
// ABOUTME: Defines the command outcome that main turns into an exit code

use std::process::ExitCode;

pub mod catalog;
pub mod recommend;
pub mod scores;

/// How a command finished when it did not error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Output was written, exit 0
    Success,
    /// No recipe was eligible, exit 1
    NotFound,
}

impl Outcome {
    /// Process exit status
    #[must_use]
    pub const fn code(self) -> u8 {
        match self {
            Self::Success => 0,
            Self::NotFound => 1,
        }
    }
}

impl From<Outcome> for ExitCode {
    fn from(outcome: Outcome) -> Self {
        Self::from(outcome.code())
    }
}
