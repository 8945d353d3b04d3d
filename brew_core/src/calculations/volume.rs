//! # Volume Calculations
//!
//! Water volumes needed to hit the recipe's batch size: what goes into the
//! kettle before the boil, and the total including grain absorption.

use crate::recipe::Recipe;

/// Evaporation rate used when the equipment profile has none (fraction per hour)
pub const DEFAULT_EVAP_RATE: f64 = 0.2;

/// Water retained by spent grain (liters per kilogram)
pub const GRAIN_ABSORPTION_L_PER_KG: f64 = 1.0;

/// Evaporation rate as a fraction per hour.
///
/// Falls back to [`DEFAULT_EVAP_RATE`] when the equipment rate is unset or
/// not positive.
pub fn evaporation_rate(recipe: &Recipe) -> f64 {
    if recipe.equipment.evap_rate_pct > 0.0 {
        recipe.equipment.evap_rate_pct / 100.0
    } else {
        DEFAULT_EVAP_RATE
    }
}

/// Volume needed before boiling (liters).
///
/// `batch_size * (1 + boil_time/60 * evap_rate)`
pub fn boil_volume(recipe: &Recipe) -> f64 {
    recipe.batch_size_l * (1.0 + recipe.boil_time_min / 60.0 * evaporation_rate(recipe))
}

/// Total water volume needed (liters): boil volume plus what the grain absorbs.
pub fn total_volume(recipe: &Recipe) -> f64 {
    let grain_kg: f64 = recipe
        .fermentables
        .iter()
        .filter(|f| f.fermentable_type.is_grain())
        .map(|f| f.amount_kg)
        .sum();

    boil_volume(recipe) + grain_kg * GRAIN_ABSORPTION_L_PER_KG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::{Fermentable, FermentableType};

    #[test]
    fn test_boil_volume_default_evaporation() {
        let recipe = Recipe::new("Test");
        // 20 * (1 + 60/60 * 0.2) = 24.0
        assert!((boil_volume(&recipe) - 24.0).abs() < 1e-9);

        let mut negative = Recipe::new("Test");
        negative.equipment.evap_rate_pct = -5.0;
        assert!((boil_volume(&negative) - 24.0).abs() < 1e-9);
    }

    #[test]
    fn test_boil_volume_equipment_rate() {
        let mut recipe = Recipe::new("Test");
        recipe.boil_time_min = 90.0;
        recipe.equipment.evap_rate_pct = 10.0;
        // 20 * (1 + 1.5 * 0.1) = 23.0
        assert!((boil_volume(&recipe) - 23.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_volume_counts_grain_only() {
        let mut recipe = Recipe::new("Test");
        recipe.insert(Fermentable::grain("Pale", 5.0, 80.0, 3.0));
        recipe.insert(Fermentable::grain("Candi sugar", 0.5, 100.0, 1.0).with_type(FermentableType::Sugar));
        assert!((total_volume(&recipe) - 29.0).abs() < 1e-9);
    }

    #[test]
    fn test_total_volume_increases_with_grain() {
        let mut recipe = Recipe::new("Test");
        recipe.insert(Fermentable::grain("Pale", 5.0, 80.0, 3.0));
        let before = total_volume(&recipe);
        recipe.fermentables[0].amount_kg = 5.5;
        assert!(total_volume(&recipe) > before);
    }
}
