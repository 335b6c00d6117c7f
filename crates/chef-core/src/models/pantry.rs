// ABOUTME: Pantry item records and the request-scoped pantry snapshot
// ABOUTME: Builds the name-to-quantity view used by readiness scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::collections::hash_map::Iter;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::errors::RecommendationError;

/// One stored pantry record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PantryItem {
    /// Item name, matched verbatim against ingredient names
    pub name: String,
    /// Available quantity
    pub quantity: f64,
}

impl PantryItem {
    /// Create a new pantry item
    #[must_use]
    pub fn new(name: impl Into<String>, quantity: f64) -> Self {
        Self {
            name: name.into(),
            quantity,
        }
    }
}

/// Point-in-time mapping from item name to available quantity.
///
/// Built fresh for every recommendation request and only ever borrowed by
/// the scoring core.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PantrySnapshot {
    quantities: HashMap<String, f64>,
}

impl PantrySnapshot {
    /// Empty pantry
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a snapshot from stored pantry records.
    ///
    /// With `minimum_quantity` set, only items whose quantity is strictly
    /// greater than it are kept. When the same name appears twice the later
    /// record wins.
    ///
    /// # Errors
    ///
    /// Returns `InvalidQuantity` if any record has a negative or non-finite quantity
    pub fn from_items<'a>(
        items: impl IntoIterator<Item = &'a PantryItem>,
        minimum_quantity: Option<f64>,
    ) -> Result<Self, RecommendationError> {
        let mut quantities = HashMap::new();
        for item in items {
            if !item.quantity.is_finite() || item.quantity < 0.0 {
                return Err(RecommendationError::invalid_quantity(
                    format!("pantry item '{}'", item.name),
                    item.quantity,
                ));
            }
            if minimum_quantity.is_some_and(|minimum| item.quantity <= minimum) {
                continue;
            }
            quantities.insert(item.name.clone(), item.quantity);
        }
        Ok(Self { quantities })
    }

    /// Set the quantity of one item
    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>, quantity: f64) -> Self {
        self.quantities.insert(name.into(), quantity);
        self
    }

    /// Quantity on hand, zero when the item is absent
    #[must_use]
    pub fn available(&self, name: &str) -> f64 {
        self.quantities.get(name).copied().unwrap_or(0.0)
    }

    /// Whether the pantry holds a record for the item
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.quantities.contains_key(name)
    }

    /// Number of distinct items
    #[must_use]
    pub fn len(&self) -> usize {
        self.quantities.len()
    }

    /// Whether the pantry is empty
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.quantities.is_empty()
    }

    /// Iterate over `(name, quantity)` pairs in arbitrary order
    pub fn iter(&self) -> Iter<'_, String, f64> {
        self.quantities.iter()
    }
}

impl FromIterator<(String, f64)> for PantrySnapshot {
    fn from_iter<I: IntoIterator<Item = (String, f64)>>(iter: I) -> Self {
        Self {
            quantities: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a PantrySnapshot {
    type Item = (&'a String, &'a f64);
    type IntoIter = Iter<'a, String, f64>;

    fn into_iter(self) -> Self::IntoIter {
        self.quantities.iter()
    }
}
