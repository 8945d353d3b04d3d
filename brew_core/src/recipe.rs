//! # Recipe Data Structures
//!
//! The `Recipe` struct is the input of the calculation engine. It carries the
//! process parameters (batch size, boil time, efficiency, equipment) and the
//! ordered ingredient collections.
//!
//! ## Structure
//!
//! ```text
//! Recipe
//! ├── batch_size_l, boil_time_min, efficiency_pct
//! ├── equipment: Equipment (evaporation rate)
//! ├── style: Option<Style> (target ranges)
//! ├── fermentables: Vec<Fermentable>
//! ├── hops: Vec<Hop>
//! ├── yeasts: Vec<Yeast>
//! └── mash_steps: Vec<MashStep>
//! ```
//!
//! ## Example
//!
//! ```rust
//! use brew_core::ingredients::{Fermentable, Hop, IngredientKind, Yeast};
//! use brew_core::recipe::Recipe;
//!
//! let mut recipe = Recipe::new("Pale Ale");
//! recipe.insert(Fermentable::grain("Pale malt", 5.0, 80.0, 3.0));
//! recipe.insert(Hop::boil("Magnum", 12.0, 0.02, 60.0));
//! recipe.insert(Yeast::new("US-05", 78.0, 1.0));
//!
//! let removed = recipe.remove(IngredientKind::Hop, 0).unwrap();
//! assert_eq!(removed.name(), "Magnum");
//! assert!(recipe.hops.is_empty());
//! ```

use serde::{Deserialize, Serialize};

use crate::errors::{BrewError, BrewResult};
use crate::ingredients::{Fermentable, Hop, Ingredient, IngredientKind, MashStep, Yeast};

/// Default mash efficiency for new recipes (percent)
pub const DEFAULT_EFFICIENCY_PCT: f64 = 70.0;

/// Default boil time for new recipes (minutes)
pub const DEFAULT_BOIL_TIME_MIN: f64 = 60.0;

/// Default batch size for new recipes (liters)
pub const DEFAULT_BATCH_SIZE_L: f64 = 20.0;

/// Brewing equipment profile.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Equipment {
    #[serde(default)]
    pub name: String,

    /// Evaporation rate in percent per hour. Zero or negative means unset.
    #[serde(default)]
    pub evap_rate_pct: f64,
}

/// Inclusive `[min, max]` bounds of a style parameter.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct StyleRange {
    pub min: f64,
    pub max: f64,
}

impl StyleRange {
    pub const fn new(min: f64, max: f64) -> Self {
        StyleRange { min, max }
    }
}

/// Beer style guideline, used to judge a recipe's estimated metrics.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Style {
    pub name: String,

    #[serde(default)]
    pub category: String,

    /// Original gravity (specific gravity)
    pub og: StyleRange,

    /// Final gravity (specific gravity)
    pub fg: StyleRange,

    /// Bitterness (IBU)
    pub ibu: StyleRange,

    /// Color (SRM)
    pub color_srm: StyleRange,

    /// Alcohol by volume (percent)
    pub abv_pct: StyleRange,
}

/// A beer recipe.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub name: String,

    /// Target batch size in liters (into the fermenter)
    pub batch_size_l: f64,

    /// Boil duration in minutes
    pub boil_time_min: f64,

    /// Mash efficiency in percent
    pub efficiency_pct: f64,

    #[serde(default)]
    pub equipment: Equipment,

    #[serde(default)]
    pub style: Option<Style>,

    #[serde(default)]
    pub fermentables: Vec<Fermentable>,

    #[serde(default)]
    pub hops: Vec<Hop>,

    #[serde(default)]
    pub yeasts: Vec<Yeast>,

    #[serde(default)]
    pub mash_steps: Vec<MashStep>,

    #[serde(default)]
    pub notes: String,
}

impl Recipe {
    /// Create an empty recipe with default process parameters.
    ///
    /// # Example
    ///
    /// ```rust
    /// use brew_core::recipe::Recipe;
    ///
    /// let recipe = Recipe::new("Stout");
    /// assert_eq!(recipe.efficiency_pct, 70.0);
    /// assert_eq!(recipe.boil_time_min, 60.0);
    /// ```
    pub fn new(name: impl Into<String>) -> Self {
        Recipe {
            name: name.into(),
            batch_size_l: DEFAULT_BATCH_SIZE_L,
            boil_time_min: DEFAULT_BOIL_TIME_MIN,
            efficiency_pct: DEFAULT_EFFICIENCY_PCT,
            equipment: Equipment::default(),
            style: None,
            fermentables: Vec::new(),
            hops: Vec::new(),
            yeasts: Vec::new(),
            mash_steps: Vec::new(),
            notes: String::new(),
        }
    }

    /// Append an ingredient to the collection matching its kind.
    pub fn insert(&mut self, ingredient: impl Into<Ingredient>) {
        match ingredient.into() {
            Ingredient::Fermentable(f) => self.fermentables.push(f),
            Ingredient::Hop(h) => self.hops.push(h),
            Ingredient::Yeast(y) => self.yeasts.push(y),
            Ingredient::MashStep(m) => self.mash_steps.push(m),
        }
    }

    /// Remove and return the ingredient at `index` of the `kind` collection.
    pub fn remove(&mut self, kind: IngredientKind, index: usize) -> BrewResult<Ingredient> {
        if index >= self.count(kind) {
            return Err(BrewError::item_not_found(kind.label(), index));
        }

        let removed = match kind {
            IngredientKind::Fermentable => Ingredient::Fermentable(self.fermentables.remove(index)),
            IngredientKind::Hop => Ingredient::Hop(self.hops.remove(index)),
            IngredientKind::Yeast => Ingredient::Yeast(self.yeasts.remove(index)),
            IngredientKind::MashStep => Ingredient::MashStep(self.mash_steps.remove(index)),
        };
        Ok(removed)
    }

    /// Replace the ingredient at `index` of the `kind` collection. The edited
    /// entry moves to the end of its collection.
    pub fn replace(
        &mut self,
        kind: IngredientKind,
        index: usize,
        ingredient: impl Into<Ingredient>,
    ) -> BrewResult<Ingredient> {
        let ingredient = ingredient.into();
        if ingredient.kind() != kind {
            return Err(BrewError::kind_mismatch(kind.label(), ingredient.kind().label()));
        }
        let old = self.remove(kind, index)?;
        self.insert(ingredient);
        Ok(old)
    }

    /// Number of entries in the `kind` collection
    pub fn count(&self, kind: IngredientKind) -> usize {
        match kind {
            IngredientKind::Fermentable => self.fermentables.len(),
            IngredientKind::Hop => self.hops.len(),
            IngredientKind::Yeast => self.yeasts.len(),
            IngredientKind::MashStep => self.mash_steps.len(),
        }
    }

    /// Validate recipe fields as entered by a user.
    ///
    /// The calculation engine does not call this; it accepts any numbers.
    pub fn validate(&self) -> BrewResult<()> {
        if !(self.batch_size_l > 0.0) {
            return Err(BrewError::invalid_input(
                "batch_size_l",
                self.batch_size_l.to_string(),
                "Batch size must be positive",
            ));
        }
        if !(self.boil_time_min >= 0.0) {
            return Err(BrewError::invalid_input(
                "boil_time_min",
                self.boil_time_min.to_string(),
                "Boil time cannot be negative",
            ));
        }
        check_percent("efficiency_pct", self.efficiency_pct)?;

        for f in &self.fermentables {
            check_non_negative("fermentable.amount_kg", f.amount_kg)?;
            check_percent("fermentable.yield_pct", f.yield_pct)?;
            check_non_negative("fermentable.color_lovibond", f.color_lovibond)?;
        }
        for h in &self.hops {
            check_non_negative("hop.amount_kg", h.amount_kg)?;
            check_percent("hop.alpha_pct", h.alpha_pct)?;
            check_non_negative("hop.time_min", h.time_min)?;
        }
        for y in &self.yeasts {
            check_non_negative("yeast.amount", y.amount)?;
            check_percent("yeast.attenuation_pct", y.attenuation_pct)?;
        }
        Ok(())
    }
}

impl Default for Recipe {
    fn default() -> Self {
        Recipe::new("")
    }
}

fn check_percent(field: &str, value: f64) -> BrewResult<()> {
    if !(0.0..=100.0).contains(&value) {
        return Err(BrewError::invalid_input(
            field,
            value.to_string(),
            "Percentage must be between 0 and 100",
        ));
    }
    Ok(())
}

fn check_non_negative(field: &str, value: f64) -> BrewResult<()> {
    if !(value >= 0.0) {
        return Err(BrewError::invalid_input(field, value.to_string(), "Value cannot be negative"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::HopUse;

    fn test_recipe() -> Recipe {
        let mut recipe = Recipe::new("Test Pale");
        recipe.insert(Fermentable::grain("Pale", 5.0, 80.0, 3.0));
        recipe.insert(Fermentable::grain("Crystal", 0.3, 75.0, 60.0));
        recipe.insert(Hop::boil("Magnum", 12.0, 0.02, 60.0));
        recipe.insert(Yeast::new("US-05", 78.0, 1.0));
        recipe.insert(MashStep::new("Saccharification", 66.0, 60.0));
        recipe
    }

    #[test]
    fn test_insert_routes_by_kind() {
        let recipe = test_recipe();
        assert_eq!(recipe.count(IngredientKind::Fermentable), 2);
        assert_eq!(recipe.count(IngredientKind::Hop), 1);
        assert_eq!(recipe.count(IngredientKind::Yeast), 1);
        assert_eq!(recipe.count(IngredientKind::MashStep), 1);
    }

    #[test]
    fn test_remove_out_of_range() {
        let mut recipe = test_recipe();
        let err = recipe.remove(IngredientKind::Hop, 1).unwrap_err();
        assert_eq!(err, BrewError::item_not_found("hop", 1));
        assert_eq!(recipe.hops.len(), 1);
    }

    #[test]
    fn test_replace_moves_to_end() {
        let mut recipe = test_recipe();
        let old = recipe
            .replace(IngredientKind::Fermentable, 0, Fermentable::grain("Pilsner", 4.5, 81.0, 2.0))
            .unwrap();
        assert_eq!(old.name(), "Pale");
        assert_eq!(recipe.fermentables.len(), 2);
        assert_eq!(recipe.fermentables[0].name, "Crystal");
        assert_eq!(recipe.fermentables[1].name, "Pilsner");
    }

    #[test]
    fn test_replace_missing_index_keeps_recipe() {
        let mut recipe = test_recipe();
        let before = recipe.clone();
        assert!(recipe
            .replace(IngredientKind::Hop, 5, Hop::boil("Saaz", 3.5, 0.02, 10.0))
            .is_err());
        assert_eq!(recipe, before);
    }

    #[test]
    fn test_replace_kind_mismatch_keeps_recipe() {
        let mut recipe = test_recipe();
        let before = recipe.clone();

        let err = recipe
            .replace(IngredientKind::Fermentable, 0, Hop::boil("Saaz", 3.5, 0.02, 10.0))
            .unwrap_err();
        assert_eq!(err, BrewError::kind_mismatch("fermentable", "hop"));
        assert_eq!(err.error_code(), "KIND_MISMATCH");
        assert_eq!(recipe, before);
    }

    #[test]
    fn test_validate() {
        let mut recipe = test_recipe();
        assert!(recipe.validate().is_ok());

        recipe.batch_size_l = 0.0;
        assert!(recipe.validate().is_err());

        let mut recipe = test_recipe();
        recipe.yeasts[0].attenuation_pct = 120.0;
        let err = recipe.validate().unwrap_err();
        assert_eq!(err.error_code(), "INVALID_INPUT");

        let mut recipe = test_recipe();
        recipe.hops[0].amount_kg = f64::NAN;
        assert!(recipe.validate().is_err());
    }

    #[test]
    fn test_recipe_json_defaults() {
        let json = r#"{
            "name": "Minimal",
            "batch_size_l": 10.0,
            "boil_time_min": 60.0,
            "efficiency_pct": 75.0,
            "hops": [
                { "name": "Cascade", "alpha_pct": 6.0, "amount_kg": 0.05, "use": "Dry Hop", "time_min": 0.0 }
            ]
        }"#;
        let recipe: Recipe = serde_json::from_str(json).unwrap();
        assert!(recipe.fermentables.is_empty());
        assert!(recipe.style.is_none());
        assert_eq!(recipe.equipment.evap_rate_pct, 0.0);
        assert_eq!(recipe.hops[0].hop_use, HopUse::DryHop);
    }

    #[test]
    fn test_recipe_serialization_roundtrip() {
        let mut recipe = test_recipe();
        recipe.style = Some(Style {
            name: "American Pale Ale".to_string(),
            category: "Pale American Ale".to_string(),
            og: StyleRange::new(1.045, 1.060),
            fg: StyleRange::new(1.010, 1.015),
            ibu: StyleRange::new(30.0, 50.0),
            color_srm: StyleRange::new(5.0, 10.0),
            abv_pct: StyleRange::new(4.5, 6.2),
        });
        let json = serde_json::to_string_pretty(&recipe).unwrap();
        let roundtrip: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(recipe, roundtrip);
    }
}
