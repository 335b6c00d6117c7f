// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors
// ABOUTME: Re-exports helper modules for pantry-chef
// ABOUTME: Provides access to JSON output formatting

pub mod output;
