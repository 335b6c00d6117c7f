// ABOUTME: Pantry inventory gateway producing request-scoped pantry snapshots
// ABOUTME: Defines the PantrySource trait with JSON file and in-memory implementations
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::fs;
use std::path::{Path, PathBuf};

use chef_core::errors::{AppError, AppResult};
use chef_core::models::{PantryItem, PantrySnapshot};
use tracing::debug;

use crate::catalog::io_error;

/// Source of the current pantry contents
///
/// Implementations return the raw item records; [`PantrySource::snapshot`]
/// turns them into the quantity map the recommendation core reads.
pub trait PantrySource: Send + Sync {
    /// Every stored pantry record, in storage order
    ///
    /// # Errors
    ///
    /// Returns an error if the backing store cannot be read or parsed
    fn items(&self) -> AppResult<Vec<PantryItem>>;

    /// Build a snapshot of items whose quantity is above `minimum_quantity`
    ///
    /// # Errors
    ///
    /// Returns the errors of [`PantrySource::items`], and `InvalidInput` when
    /// an item has a negative or non-finite quantity
    fn snapshot(&self, minimum_quantity: Option<f64>) -> AppResult<PantrySnapshot> {
        let items = self.items()?;
        let snapshot = PantrySnapshot::from_items(&items, minimum_quantity)?;
        debug!(
            records = items.len(),
            available = snapshot.len(),
            "Pantry snapshot taken"
        );
        Ok(snapshot)
    }
}

/// Pantry stored as a JSON array of `{"name", "quantity"}` records
#[derive(Debug, Clone)]
pub struct JsonFilePantry {
    path: PathBuf,
}

impl JsonFilePantry {
    /// Read pantry contents from `path` on every snapshot
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// File backing this pantry
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PantrySource for JsonFilePantry {
    fn items(&self) -> AppResult<Vec<PantryItem>> {
        let contents = fs::read_to_string(&self.path).map_err(|err| io_error(&self.path, err))?;
        serde_json::from_str(&contents).map_err(|err| {
            AppError::serialization(format!(
                "invalid pantry file {}: {err}",
                self.path.display()
            ))
            .with_source(err)
        })
    }
}

/// In-memory pantry, for embedding and tests
#[derive(Debug, Clone, Default)]
pub struct StaticPantry {
    items: Vec<PantryItem>,
}

impl StaticPantry {
    /// Pantry holding exactly `items`
    #[must_use]
    pub const fn new(items: Vec<PantryItem>) -> Self {
        Self { items }
    }

    /// Add one record
    #[must_use]
    pub fn with_item(mut self, name: impl Into<String>, quantity: f64) -> Self {
        self.items.push(PantryItem::new(name, quantity));
        self
    }
}

impl PantrySource for StaticPantry {
    fn items(&self) -> AppResult<Vec<PantryItem>> {
        Ok(self.items.clone())
    }
}
