// ABOUTME: Diet level enumeration ordered by restrictiveness
// ABOUTME: Catalog tag mapping for normal, vegetarian and vegan recipes
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::fmt::{self, Display, Formatter};

use serde::{Deserialize, Serialize};

use crate::constants::diet_tags;

/// Dietary restriction a recipe can be tagged with.
///
/// Variants are declared from least to most restrictive, so the derived
/// `Ord` matches restrictiveness. Compliance is still an exact tag match:
/// a vegan recipe is only offered to vegetarians if it is tagged as such.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum DietLevel {
    /// No restriction
    #[default]
    Normal,
    /// No meat or fish
    Vegetarian,
    /// No animal products
    Vegan,
}

impl DietLevel {
    /// All diet levels, least restrictive first
    pub const ALL: [Self; 3] = [Self::Normal, Self::Vegetarian, Self::Vegan];

    /// Lowercase tag used in catalog files
    #[must_use]
    pub const fn tag(&self) -> &'static str {
        match self {
            Self::Normal => diet_tags::NORMAL,
            Self::Vegetarian => diet_tags::VEGETARIAN,
            Self::Vegan => diet_tags::VEGAN,
        }
    }

    /// Strict tag lookup, `None` for anything that is not an exact catalog tag
    #[must_use]
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|level| level.tag() == tag)
    }
}

impl Display for DietLevel {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
