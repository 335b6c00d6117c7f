// ABOUTME: Recipe and ingredient requirement models for the recipe catalog
// ABOUTME: Preserves ingredient order from catalog JSON and carries extra recipe fields through
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pantry Chef Contributors

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use super::DietLevel;

/// Amount of one ingredient a recipe needs
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientRequirement {
    /// Ingredient name, matched verbatim against pantry item names
    pub name: String,
    /// Required amount, non-negative
    pub required_amount: f64,
}

impl IngredientRequirement {
    /// Create a new ingredient requirement
    #[must_use]
    pub fn new(name: impl Into<String>, required_amount: f64) -> Self {
        Self {
            name: name.into(),
            required_amount,
        }
    }
}

/// A catalog recipe.
///
/// In catalog JSON the ingredients are a `{"name": amount}` object; the
/// document order is kept. Any field besides `name`, `diets` and
/// `ingredients` (description, instructions, ...) is kept in `details` so
/// the complete record can be handed back to callers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    /// Unique name within the catalog
    pub name: String,
    /// Diets this recipe is explicitly tagged as compliant with
    #[serde(default)]
    pub diets: BTreeSet<DietLevel>,
    /// Ingredient requirements in catalog order
    #[serde(with = "ingredient_map")]
    pub ingredients: Vec<IngredientRequirement>,
    /// Remaining recipe fields, passed through untouched
    #[serde(flatten)]
    pub details: Map<String, Value>,
}

impl Recipe {
    /// Create a recipe with no diet tags and no ingredients
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            diets: BTreeSet::new(),
            ingredients: Vec::new(),
            details: Map::new(),
        }
    }

    /// Tag the recipe as compliant with a diet
    #[must_use]
    pub fn with_diet(mut self, diet: DietLevel) -> Self {
        self.diets.insert(diet);
        self
    }

    /// Tag the recipe with several diets
    #[must_use]
    pub fn with_diets(mut self, diets: impl IntoIterator<Item = DietLevel>) -> Self {
        self.diets.extend(diets);
        self
    }

    /// Append an ingredient requirement
    #[must_use]
    pub fn with_ingredient(mut self, name: impl Into<String>, required_amount: f64) -> Self {
        self.ingredients
            .push(IngredientRequirement::new(name, required_amount));
        self
    }

    /// Attach an extra field to the recipe record
    #[must_use]
    pub fn with_detail(mut self, key: impl Into<String>, value: Value) -> Self {
        self.details.insert(key.into(), value);
        self
    }

    /// Exact diet tag membership
    #[must_use]
    pub fn complies_with(&self, diet: DietLevel) -> bool {
        self.diets.contains(&diet)
    }

    /// Whether the recipe lists at least one ingredient
    #[must_use]
    pub fn has_ingredients(&self) -> bool {
        !self.ingredients.is_empty()
    }
}

/// (De)serializes ingredient requirements as an ordered JSON object
mod ingredient_map {
    use std::fmt::{self, Formatter};

    use serde::de::{self, MapAccess, Visitor};
    use serde::ser::SerializeMap;
    use serde::{Deserializer, Serializer};

    use super::IngredientRequirement;

    pub fn serialize<S>(ingredients: &[IngredientRequirement], serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(ingredients.len()))?;
        for ingredient in ingredients {
            map.serialize_entry(&ingredient.name, &ingredient.required_amount)?;
        }
        map.end()
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Vec<IngredientRequirement>, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(IngredientMapVisitor)
    }

    struct IngredientMapVisitor;

    impl<'de> Visitor<'de> for IngredientMapVisitor {
        type Value = Vec<IngredientRequirement>;

        fn expecting(&self, formatter: &mut Formatter) -> fmt::Result {
            formatter.write_str("a map from ingredient name to required amount")
        }

        fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
        where
            A: MapAccess<'de>,
        {
            let mut ingredients: Vec<IngredientRequirement> =
                Vec::with_capacity(access.size_hint().unwrap_or(0));

            while let Some((name, amount)) = access.next_entry::<String, f64>()? {
                if !amount.is_finite() || amount < 0.0 {
                    return Err(de::Error::custom(format!(
                        "ingredient '{name}' has invalid required amount {amount}"
                    )));
                }
                if ingredients.iter().any(|existing| existing.name == name) {
                    return Err(de::Error::custom(format!(
                        "ingredient '{name}' is listed more than once"
                    )));
                }
                ingredients.push(IngredientRequirement::new(name, amount));
            }

            Ok(ingredients)
        }
    }
}
