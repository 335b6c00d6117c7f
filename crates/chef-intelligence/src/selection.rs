// ABOUTME: Recipe selector applying the best or random policy to scored candidates
// ABOUTME: Candidates are ranked by recipe name; the random source is injected
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::fmt::{self, Display, Formatter};

use chef_core::constants::usage_modes;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::scoring::ScoredRecipes;

/// How to pick among eligible recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum SelectionPolicy {
    /// First candidate in ranking order
    #[default]
    Best,
    /// Uniformly random candidate
    Random,
}

impl SelectionPolicy {
    /// Map a pantry usage mode: exactly `"optimal"` is `Best`, anything else `Random`
    #[must_use]
    pub fn from_usage_mode(usage_mode: &str) -> Self {
        if usage_mode == usage_modes::OPTIMAL {
            Self::Best
        } else {
            Self::Random
        }
    }
}

impl Display for SelectionPolicy {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Best => f.write_str("best"),
            Self::Random => f.write_str("random"),
        }
    }
}

/// Pick one candidate name, or `None` when there are no candidates.
///
/// Candidates are ranked by ascending recipe name; the readiness value only
/// decided membership. `Best` therefore returns the alphabetically first
/// eligible recipe. `Random` draws a fresh uniform index from `rng`; `Best`
/// never touches it.
pub fn select<'a, R>(scored: &'a ScoredRecipes, policy: SelectionPolicy, rng: &mut R) -> Option<&'a str>
where
    R: Rng + ?Sized,
{
    if scored.is_empty() {
        return None;
    }

    let index = match policy {
        SelectionPolicy::Best => 0,
        SelectionPolicy::Random => rng.gen_range(0..scored.len()),
    };
    debug!(%policy, index, candidates = scored.len(), "Selecting recipe");

    scored.names().nth(index)
}
