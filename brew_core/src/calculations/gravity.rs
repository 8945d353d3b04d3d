//! # Gravity and Alcohol
//!
//! Original gravity from the extract the mash yields, final gravity from the
//! yeasts' weighted attenuation, and alcohol by volume from both.
//!
//! Gravities are specific gravities (water = 1.000). A gravity that cannot be
//! computed (no extract, no yeast) is `None`, never a numeric placeholder.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::calculations::gravity::{original_gravity, final_gravity, abv};
//! use brew_core::ingredients::{Fermentable, Yeast};
//! use brew_core::recipe::Recipe;
//!
//! let mut recipe = Recipe::new("Pale");
//! assert_eq!(original_gravity(&recipe), None);
//!
//! recipe.insert(Fermentable::grain("Pale", 5.0, 80.0, 3.0));
//! recipe.insert(Yeast::new("US-05", 75.0, 1.0));
//!
//! let og = original_gravity(&recipe);
//! let fg = final_gravity(og, &recipe.yeasts);
//! assert!((og.unwrap() - 1.05195).abs() < 1e-5);
//! assert!(abv(og, fg).unwrap() > 5.0);
//! ```

use crate::ingredients::Yeast;
use crate::recipe::Recipe;

/// Gravity points: `(sg * 1000) - 1000`, e.g. 1.050 -> 50.
pub fn gravity_points(sg: f64) -> f64 {
    sg * 1000.0 - 1000.0
}

/// Extract (kg) the mash delivers: `Σ amount * yield/100`, scaled by efficiency.
pub fn extract_kg(recipe: &Recipe) -> f64 {
    let raw: f64 = recipe
        .fermentables
        .iter()
        .map(|f| f.amount_kg * f.yield_pct / 100.0)
        .sum();

    raw * recipe.efficiency_pct / 100.0
}

/// Estimated original gravity.
///
/// `(batch_size - e/1.59 + e) / batch_size`, or `None` when the recipe yields
/// no extract.
pub fn original_gravity(recipe: &Recipe) -> Option<f64> {
    let e = extract_kg(recipe);
    if e == 0.0 {
        return None;
    }
    Some((recipe.batch_size_l - (e / 1.59) + e) / recipe.batch_size_l)
}

/// Mean attenuation (fraction) of all yeasts, weighted by pitched amount.
///
/// `None` when the total yeast amount is zero, including the no-yeast case.
pub fn weighted_attenuation(yeasts: &[Yeast]) -> Option<f64> {
    let (weighted, amount) = yeasts.iter().fold((0.0_f64, 0.0_f64), |(w, a), y| {
        (w + y.attenuation_pct / 100.0 * y.amount, a + y.amount)
    });

    if amount == 0.0 {
        return None;
    }
    Some(weighted / amount)
}

/// Estimated final gravity, `None` when OG or yeast data is missing.
pub fn final_gravity(og: Option<f64>, yeasts: &[Yeast]) -> Option<f64> {
    let og = og?;
    let attenuation = weighted_attenuation(yeasts)?;

    let di = gravity_points(og);
    let df = di * (1.0 - attenuation);

    Some((df + 1000.0) / 1000.0)
}

/// Alcohol by volume (percent) from an original and a final gravity.
///
/// `76.08 * (og - fg) / (1.775 - og) * (fg / 0.794)`
pub fn abv(og: Option<f64>, fg: Option<f64>) -> Option<f64> {
    let (og, fg) = (og?, fg?);
    let abv = 76.08 * (og - fg) / (1.775 - og);
    Some(abv * (fg / 0.794))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::Fermentable;

    fn pale_recipe() -> Recipe {
        let mut recipe = Recipe::new("Pale");
        recipe.insert(Fermentable::grain("Pale", 5.0, 80.0, 3.0));
        recipe
    }

    #[test]
    fn test_extract() {
        // 5 * 80/100 * 0.7 = 2.8
        assert!((extract_kg(&pale_recipe()) - 2.8).abs() < 1e-9);
    }

    #[test]
    fn test_original_gravity() {
        // (20 - 2.8/1.59 + 2.8) / 20
        let og = original_gravity(&pale_recipe()).unwrap();
        assert!((og - 1.0519497).abs() < 1e-6);
    }

    #[test]
    fn test_original_gravity_unset() {
        assert_eq!(original_gravity(&Recipe::new("Empty")), None);

        let mut zero_yield = Recipe::new("Water");
        zero_yield.insert(Fermentable::grain("Rice hulls", 0.2, 0.0, 0.0));
        assert_eq!(original_gravity(&zero_yield), None);
    }

    #[test]
    fn test_original_gravity_monotonic_in_amount() {
        let mut recipe = pale_recipe();
        let before = original_gravity(&recipe).unwrap();
        recipe.fermentables[0].amount_kg += 0.5;
        assert!(original_gravity(&recipe).unwrap() > before);
    }

    #[test]
    fn test_weighted_attenuation() {
        let yeasts = vec![Yeast::new("A", 70.0, 1.0), Yeast::new("B", 80.0, 3.0)];
        // (0.70 * 1 + 0.80 * 3) / 4
        assert!((weighted_attenuation(&yeasts).unwrap() - 0.775).abs() < 1e-12);

        assert_eq!(weighted_attenuation(&[]), None);
        assert_eq!(weighted_attenuation(&[Yeast::new("Dry", 75.0, 0.0)]), None);
    }

    #[test]
    fn test_final_gravity() {
        let og = original_gravity(&pale_recipe());
        let fg = final_gravity(og, &[Yeast::new("US-05", 75.0, 1.0)]).unwrap();
        // di = 51.95, df = di * 0.25
        assert!((fg - 1.0129874).abs() < 1e-6);
    }

    #[test]
    fn test_final_gravity_unset() {
        let yeasts = vec![Yeast::new("US-05", 75.0, 1.0)];
        assert_eq!(final_gravity(None, &yeasts), None);
        assert_eq!(final_gravity(Some(1.050), &[]), None);
        assert_eq!(final_gravity(Some(1.050), &[Yeast::new("US-05", 75.0, 0.0)]), None);
    }

    #[test]
    fn test_abv() {
        let value = abv(Some(1.0519497), Some(1.0129874)).unwrap();
        assert!((value - 5.2303).abs() < 1e-3);

        assert_eq!(abv(None, None), None);
        assert_eq!(abv(Some(1.050), None), None);
    }

    #[test]
    fn test_gravity_points() {
        assert!((gravity_points(1.050) - 50.0).abs() < 1e-9);
    }
}
