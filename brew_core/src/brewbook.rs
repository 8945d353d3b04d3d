//! # Brewbook
//!
//! The `Brewbook` struct is the root container for a brewer's data: recipes,
//! brews in progress and the ingredient inventory. Brewbooks serialize to
//! `.brewbook` files as human-readable JSON.
//!
//! ## Structure
//!
//! ```text
//! Brewbook
//! ├── meta: BrewbookMetadata (version, brewer, timestamps)
//! ├── settings: BrewbookSettings (defaults for new recipes, display units)
//! ├── recipes: HashMap<Uuid, Recipe>
//! ├── brews: HashMap<Uuid, Brew>
//! └── inventory: HashMap<Uuid, Ingredient>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use brew_core::brewbook::Brewbook;
//!
//! let mut book = Brewbook::new("Jane Brewer");
//! let recipe_id = book.add_recipe(book.new_recipe("Porter"));
//! let brew_id = book.start_brew(&recipe_id).unwrap();
//!
//! assert!(book.get_brew(&brew_id).is_some());
//! let json = serde_json::to_string_pretty(&book).unwrap();
//! assert!(json.contains("Porter"));
//! ```

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::brew::Brew;
use crate::errors::{BrewError, BrewResult};
use crate::ingredients::{ingredient_order, Ingredient};
use crate::recipe::{Recipe, DEFAULT_BATCH_SIZE_L, DEFAULT_BOIL_TIME_MIN, DEFAULT_EFFICIENCY_PCT};

/// Current schema version for .brewbook files
pub const SCHEMA_VERSION: &str = "0.1.0";

/// Root brewbook container.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Brewbook {
    pub meta: BrewbookMetadata,

    pub settings: BrewbookSettings,

    #[serde(default)]
    pub recipes: HashMap<Uuid, Recipe>,

    #[serde(default)]
    pub brews: HashMap<Uuid, Brew>,

    #[serde(default)]
    pub inventory: HashMap<Uuid, Ingredient>,
}

impl Brewbook {
    /// Create a new empty brewbook.
    pub fn new(brewer: impl Into<String>) -> Self {
        let now = Utc::now();
        Brewbook {
            meta: BrewbookMetadata {
                version: SCHEMA_VERSION.to_string(),
                brewer: brewer.into(),
                created: now,
                modified: now,
            },
            settings: BrewbookSettings::default(),
            recipes: HashMap::new(),
            brews: HashMap::new(),
            inventory: HashMap::new(),
        }
    }

    /// A blank recipe using this book's default process parameters.
    pub fn new_recipe(&self, name: impl Into<String>) -> Recipe {
        let mut recipe = Recipe::new(name);
        recipe.batch_size_l = self.settings.default_batch_size_l;
        recipe.boil_time_min = self.settings.default_boil_time_min;
        recipe.efficiency_pct = self.settings.default_efficiency_pct;
        recipe
    }

    /// Add a recipe. Returns the UUID assigned to it.
    pub fn add_recipe(&mut self, recipe: Recipe) -> Uuid {
        let id = Uuid::new_v4();
        info!(%id, name = %recipe.name, "recipe added");
        self.recipes.insert(id, recipe);
        self.touch();
        id
    }

    pub fn get_recipe(&self, id: &Uuid) -> Option<&Recipe> {
        self.recipes.get(id)
    }

    /// Mutable access to a recipe. Marks the brewbook as modified when found.
    pub fn get_recipe_mut(&mut self, id: &Uuid) -> Option<&mut Recipe> {
        if self.recipes.contains_key(id) {
            self.meta.modified = Utc::now();
            self.recipes.get_mut(id)
        } else {
            None
        }
    }

    /// Remove a recipe. Brews started from it keep their own snapshot.
    pub fn remove_recipe(&mut self, id: &Uuid) -> Option<Recipe> {
        let recipe = self.recipes.remove(id);
        if recipe.is_some() {
            self.touch();
        }
        recipe
    }

    /// Start a brew from a stored recipe.
    pub fn start_brew(&mut self, recipe_id: &Uuid) -> BrewResult<Uuid> {
        let recipe = self
            .recipes
            .get(recipe_id)
            .cloned()
            .ok_or_else(|| BrewError::RecipeNotFound { id: recipe_id.to_string() })?;

        let id = Uuid::new_v4();
        info!(%id, recipe = %recipe.name, "brew started");
        self.brews.insert(id, Brew::new(*recipe_id, recipe));
        self.touch();
        Ok(id)
    }

    pub fn get_brew(&self, id: &Uuid) -> Option<&Brew> {
        self.brews.get(id)
    }

    /// Mutable access to a brew, or `BrewNotFound`.
    pub fn brew_mut(&mut self, id: &Uuid) -> BrewResult<&mut Brew> {
        if !self.brews.contains_key(id) {
            return Err(BrewError::BrewNotFound { id: id.to_string() });
        }
        self.meta.modified = Utc::now();
        self.brews
            .get_mut(id)
            .ok_or_else(|| BrewError::BrewNotFound { id: id.to_string() })
    }

    pub fn remove_brew(&mut self, id: &Uuid) -> Option<Brew> {
        let brew = self.brews.remove(id);
        if brew.is_some() {
            self.touch();
        }
        brew
    }

    /// Add an ingredient to the inventory.
    pub fn add_inventory(&mut self, ingredient: impl Into<Ingredient>) -> Uuid {
        let id = Uuid::new_v4();
        self.inventory.insert(id, ingredient.into());
        self.touch();
        id
    }

    pub fn remove_inventory(&mut self, id: &Uuid) -> Option<Ingredient> {
        let item = self.inventory.remove(id);
        if item.is_some() {
            self.touch();
        }
        item
    }

    /// Inventory sorted by kind, then name.
    pub fn sorted_inventory(&self) -> Vec<(&Uuid, &Ingredient)> {
        let mut items: Vec<_> = self.inventory.iter().collect();
        items.sort_by(|a, b| ingredient_order(a.1, b.1));
        items
    }

    /// Recipes sorted by name.
    pub fn sorted_recipes(&self) -> Vec<(&Uuid, &Recipe)> {
        let mut items: Vec<_> = self.recipes.iter().collect();
        items.sort_by(|a, b| a.1.name.cmp(&b.1.name));
        items
    }

    /// Update the modified timestamp.
    pub fn touch(&mut self) {
        self.meta.modified = Utc::now();
    }
}

impl Default for Brewbook {
    fn default() -> Self {
        Brewbook::new("")
    }
}

/// Brewbook metadata stored in the file header.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BrewbookMetadata {
    /// Schema version (for migration compatibility)
    pub version: String,

    pub brewer: String,

    pub created: DateTime<Utc>,

    pub modified: DateTime<Utc>,
}

/// Unit system used when displaying values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum UnitSystem {
    #[default]
    Metric,
    Imperial,
}

/// Brewbook-wide settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BrewbookSettings {
    pub default_batch_size_l: f64,

    pub default_boil_time_min: f64,

    pub default_efficiency_pct: f64,

    #[serde(default)]
    pub units: UnitSystem,
}

impl Default for BrewbookSettings {
    fn default() -> Self {
        BrewbookSettings {
            default_batch_size_l: DEFAULT_BATCH_SIZE_L,
            default_boil_time_min: DEFAULT_BOIL_TIME_MIN,
            default_efficiency_pct: DEFAULT_EFFICIENCY_PCT,
            units: UnitSystem::Metric,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::brew::BrewStep;
    use crate::ingredients::{Fermentable, Hop, Yeast};

    #[test]
    fn test_brewbook_creation() {
        let book = Brewbook::new("Jane Brewer");
        assert_eq!(book.meta.brewer, "Jane Brewer");
        assert_eq!(book.meta.version, SCHEMA_VERSION);
        assert_eq!(book.settings.default_efficiency_pct, 70.0);
        assert!(book.recipes.is_empty());
    }

    #[test]
    fn test_new_recipe_uses_settings() {
        let mut book = Brewbook::new("Brewer");
        book.settings.default_batch_size_l = 10.0;
        book.settings.default_efficiency_pct = 65.0;

        let recipe = book.new_recipe("Small batch");
        assert_eq!(recipe.batch_size_l, 10.0);
        assert_eq!(recipe.efficiency_pct, 65.0);
    }

    #[test]
    fn test_add_remove_recipe() {
        let mut book = Brewbook::new("Brewer");
        let id = book.add_recipe(Recipe::new("IPA"));
        assert!(book.get_recipe(&id).is_some());

        book.get_recipe_mut(&id).unwrap().insert(Fermentable::grain("Pale", 6.0, 80.0, 3.0));
        assert_eq!(book.get_recipe(&id).unwrap().fermentables.len(), 1);

        assert!(book.remove_recipe(&id).is_some());
        assert!(book.remove_recipe(&id).is_none());
    }

    #[test]
    fn test_brew_snapshots_recipe() {
        let mut book = Brewbook::new("Brewer");
        let recipe_id = book.add_recipe(Recipe::new("Stout"));
        let brew_id = book.start_brew(&recipe_id).unwrap();

        book.get_recipe_mut(&recipe_id).unwrap().name = "Imperial Stout".to_string();

        let brew = book.get_brew(&brew_id).unwrap();
        assert_eq!(brew.recipe.name, "Stout");
        assert_eq!(brew.recipe_id, recipe_id);
        assert_eq!(brew.step, BrewStep::Prepare);

        book.brew_mut(&brew_id).unwrap().next_step();
        assert_eq!(book.get_brew(&brew_id).unwrap().step, BrewStep::BrewDay);
    }

    #[test]
    fn test_missing_ids() {
        let mut book = Brewbook::new("Brewer");
        let missing = Uuid::new_v4();
        assert_eq!(book.start_brew(&missing).unwrap_err().error_code(), "RECIPE_NOT_FOUND");
        assert_eq!(book.brew_mut(&missing).unwrap_err().error_code(), "BREW_NOT_FOUND");
    }

    #[test]
    fn test_failed_lookup_keeps_modified() {
        let mut book = Brewbook::new("Brewer");
        let before = book.meta.modified;

        assert!(book.brew_mut(&Uuid::new_v4()).is_err());
        assert!(book.get_recipe_mut(&Uuid::new_v4()).is_none());
        assert_eq!(book.meta.modified, before);
    }

    #[test]
    fn test_sorted_inventory() {
        let mut book = Brewbook::new("Brewer");
        book.add_inventory(Yeast::new("US-05", 78.0, 3.0));
        book.add_inventory(Hop::boil("Saaz", 3.5, 0.5, 0.0));
        let pale = book.add_inventory(Fermentable::grain("Pale", 25.0, 80.0, 3.0));

        let sorted = book.sorted_inventory();
        let names: Vec<_> = sorted.iter().map(|(_, i)| i.name()).collect();
        assert_eq!(names, ["Pale", "Saaz", "US-05"]);

        assert!(book.remove_inventory(&pale).is_some());
        assert_eq!(book.inventory.len(), 2);
    }

    #[test]
    fn test_brewbook_serialization() {
        let mut book = Brewbook::new("Jane Brewer");
        let id = book.add_recipe(Recipe::new("Porter"));
        book.start_brew(&id).unwrap();

        let json = serde_json::to_string_pretty(&book).unwrap();
        assert!(json.contains("Jane Brewer"));
        assert!(json.contains("\"Metric\""));

        let roundtrip: Brewbook = serde_json::from_str(&json).unwrap();
        assert_eq!(roundtrip.recipes.len(), 1);
        assert_eq!(roundtrip.brews.len(), 1);
    }
}
