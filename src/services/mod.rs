// ABOUTME: Domain service layer wiring gateways to the recommendation core
// ABOUTME: Provides entry-point-agnostic services reused by the CLI and embedders
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Domain service layer
//!
//! Services own the catalog and pantry gateways and call into
//! `chef_intelligence`. They are independent of the command-line surface.

/// Recommendation and readiness reporting over a catalog and pantry
pub mod recommendation;

pub use recommendation::{ReadinessEntry, RecommendationService};
