// ABOUTME: Recipe catalog gateway backed by a directory of JSON recipe files
// ABOUTME: Loads, validates and indexes recipes by name for lookup and scoring
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

//! Recipe catalog
//!
//! A catalog is loaded once and is immutable afterwards; share it with
//! `Arc<Catalog>`. Each `*.json` file in the catalog directory holds one
//! recipe. Files are read in file-name order so the catalog order is stable.

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::Path;

use chef_core::constants::defaults::RECIPE_FILE_EXTENSION;
use chef_core::errors::{AppError, AppResult};
use chef_core::models::Recipe;
use tracing::{debug, info, warn};

/// Immutable, name-indexed recipe collection
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    recipes: Vec<Recipe>,
    index: HashMap<String, usize>,
}

impl Catalog {
    /// Build a catalog from already-parsed recipes
    ///
    /// # Errors
    ///
    /// Returns `InvalidFormat` for a recipe with an empty name and
    /// `ResourceAlreadyExists` when two recipes share a name
    pub fn from_recipes(recipes: impl IntoIterator<Item = Recipe>) -> AppResult<Self> {
        let mut catalog = Self::default();
        for recipe in recipes {
            catalog.insert(recipe)?;
        }
        Ok(catalog)
    }

    /// Load every `*.json` file in `dir` as one recipe
    ///
    /// Other files and subdirectories are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound` if the directory does not exist, `StorageError`
    /// on other I/O failures, `SerializationError` for a file that is not a valid
    /// recipe, and the errors of [`Catalog::from_recipes`]
    pub fn load_dir(dir: impl AsRef<Path>) -> AppResult<Self> {
        let dir = dir.as_ref();
        let entries = fs::read_dir(dir).map_err(|err| io_error(dir, err))?;

        let mut paths = Vec::new();
        for entry in entries {
            let path = entry.map_err(|err| io_error(dir, err))?.path();
            if path.is_file() && is_recipe_file(&path) {
                paths.push(path);
            }
        }
        paths.sort();

        let mut catalog = Self::default();
        for path in &paths {
            catalog.insert(Self::load_file(path)?)?;
        }

        info!(
            dir = %dir.display(),
            recipes = catalog.len(),
            "Recipe catalog loaded"
        );
        Ok(catalog)
    }

    /// Parse a single recipe file
    ///
    /// # Errors
    ///
    /// Returns `ResourceNotFound`/`StorageError` on I/O failure and
    /// `SerializationError` when the JSON is not a valid recipe
    pub fn load_file(path: impl AsRef<Path>) -> AppResult<Recipe> {
        let path = path.as_ref();
        let contents = fs::read_to_string(path).map_err(|err| io_error(path, err))?;
        let recipe: Recipe = serde_json::from_str(&contents).map_err(|err| {
            AppError::serialization(format!("invalid recipe file {}: {err}", path.display()))
                .with_source(err)
        })?;

        if !recipe.has_ingredients() {
            warn!(
                recipe = %recipe.name,
                file = %path.display(),
                "Recipe has no ingredients and will never be recommended"
            );
        }
        debug!(recipe = %recipe.name, file = %path.display(), "Recipe file parsed");
        Ok(recipe)
    }

    fn insert(&mut self, recipe: Recipe) -> AppResult<()> {
        if recipe.name.is_empty() {
            return Err(AppError::invalid_format("recipe name must not be empty"));
        }
        if self.index.contains_key(&recipe.name) {
            return Err(AppError::already_exists(format!("Recipe '{}'", recipe.name)));
        }
        self.index.insert(recipe.name.clone(), self.recipes.len());
        self.recipes.push(recipe);
        Ok(())
    }

    /// All recipes in load order
    #[must_use]
    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    /// Look up a recipe by exact name
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Recipe> {
        self.index.get(name).and_then(|&idx| self.recipes.get(idx))
    }

    /// Recipe names in load order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.recipes.iter().map(|recipe| recipe.name.as_str())
    }

    /// Number of recipes
    #[must_use]
    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    /// Whether the catalog holds no recipes
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}

fn is_recipe_file(path: &Path) -> bool {
    path.extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case(RECIPE_FILE_EXTENSION))
}

pub(crate) fn io_error(path: &Path, err: io::Error) -> AppError {
    let display = path.display().to_string();
    if err.kind() == io::ErrorKind::NotFound {
        AppError::not_found(display).with_source(err)
    } else {
        AppError::storage(format!("failed to read {display}: {err}")).with_source(err)
    }
}
