//! # Ingredients
//!
//! Recipe ingredient types: fermentables, hops, yeasts and mash steps.
//! Units follow BeerXML: kilograms for amounts, minutes for times,
//! percent for yields, alpha acids and attenuation.
//!
//! The [`Ingredient`] enum wraps all four kinds so that recipe editing and
//! inventory storage can work with any of them through one type.
//!
//! ## JSON Example
//!
//! ```json
//! { "kind": "Hop", "name": "Saaz", "alpha_pct": 3.5, "amount_kg": 0.03,
//!   "use": "Boil", "time_min": 60.0 }
//! ```

use std::cmp::Ordering;
use std::collections::HashMap;

use serde::{Deserialize, Serialize};

// ============================================================================
// Fermentables
// ============================================================================

/// Fermentable type per BeerXML.
///
/// Only the `Grain` / non-grain distinction matters to calculations: grain
/// absorbs water and contributes to color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum FermentableType {
    #[default]
    Grain,
    Sugar,
    Extract,
    #[serde(rename = "Dry Extract")]
    DryExtract,
    Adjunct,
}

impl FermentableType {
    /// Whether this fermentable is mashed grain
    pub fn is_grain(self) -> bool {
        matches!(self, FermentableType::Grain)
    }
}

/// A fermentable (malt, sugar, extract) addition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fermentable {
    pub name: String,

    #[serde(rename = "type", default)]
    pub fermentable_type: FermentableType,

    /// Weight in kilograms
    pub amount_kg: f64,

    /// Extractable sugar yield in percent
    pub yield_pct: f64,

    /// Color in degrees Lovibond
    pub color_lovibond: f64,
}

impl Fermentable {
    /// Create a grain fermentable.
    pub fn grain(name: impl Into<String>, amount_kg: f64, yield_pct: f64, color_lovibond: f64) -> Self {
        Fermentable {
            name: name.into(),
            fermentable_type: FermentableType::Grain,
            amount_kg,
            yield_pct,
            color_lovibond,
        }
    }

    /// Set the fermentable type.
    pub fn with_type(mut self, fermentable_type: FermentableType) -> Self {
        self.fermentable_type = fermentable_type;
        self
    }
}

// ============================================================================
// Hops
// ============================================================================

/// When a hop addition is made.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum HopUse {
    Mash,
    #[serde(rename = "First Wort")]
    FirstWort,
    #[default]
    Boil,
    Aroma,
    #[serde(rename = "Dry Hop", alias = "Dry hop")]
    DryHop,
}

impl HopUse {
    /// Late and post-boil additions do not isomerize, so they add no bitterness.
    pub fn contributes_bitterness(self) -> bool {
        !matches!(self, HopUse::DryHop | HopUse::Aroma)
    }

    pub fn label(self) -> &'static str {
        match self {
            HopUse::Mash => "Mash",
            HopUse::FirstWort => "First Wort",
            HopUse::Boil => "Boil",
            HopUse::Aroma => "Aroma",
            HopUse::DryHop => "Dry Hop",
        }
    }

    /// Position in brew-day order (mash first, dry hop last)
    pub fn priority(self) -> u8 {
        match self {
            HopUse::Mash => 0,
            HopUse::FirstWort => 1,
            HopUse::Boil => 2,
            HopUse::Aroma => 3,
            HopUse::DryHop => 4,
        }
    }
}

/// A hop addition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Hop {
    pub name: String,

    /// Alpha acid content in percent
    pub alpha_pct: f64,

    /// Weight in kilograms
    pub amount_kg: f64,

    #[serde(rename = "use", default)]
    pub hop_use: HopUse,

    /// Boil time remaining when the hop is added, in minutes
    pub time_min: f64,
}

impl Hop {
    /// Create a boil addition.
    pub fn boil(name: impl Into<String>, alpha_pct: f64, amount_kg: f64, time_min: f64) -> Self {
        Hop {
            name: name.into(),
            alpha_pct,
            amount_kg,
            hop_use: HopUse::Boil,
            time_min,
        }
    }

    /// Set the hop use.
    pub fn with_use(mut self, hop_use: HopUse) -> Self {
        self.hop_use = hop_use;
        self
    }
}

// ============================================================================
// Yeasts
// ============================================================================

/// A yeast pitch.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Yeast {
    pub name: String,

    /// Apparent attenuation in percent
    pub attenuation_pct: f64,

    /// Pitched amount. Only used to weight attenuation across several yeasts,
    /// so any consistent unit works.
    pub amount: f64,
}

impl Yeast {
    pub fn new(name: impl Into<String>, attenuation_pct: f64, amount: f64) -> Self {
        Yeast {
            name: name.into(),
            attenuation_pct,
            amount,
        }
    }
}

// ============================================================================
// Mash Steps
// ============================================================================

/// A mash rest. Does not feed any calculation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MashStep {
    pub name: String,

    /// Rest temperature in °C
    pub step_temp_c: f64,

    /// Rest duration in minutes
    pub step_time_min: f64,
}

impl MashStep {
    pub fn new(name: impl Into<String>, step_temp_c: f64, step_time_min: f64) -> Self {
        MashStep {
            name: name.into(),
            step_temp_c,
            step_time_min,
        }
    }
}

// ============================================================================
// Tagged union
// ============================================================================

/// Discriminant of [`Ingredient`], used to address a recipe collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum IngredientKind {
    Fermentable,
    Hop,
    Yeast,
    MashStep,
}

impl IngredientKind {
    /// Lowercase label for messages
    pub fn label(self) -> &'static str {
        match self {
            IngredientKind::Fermentable => "fermentable",
            IngredientKind::Hop => "hop",
            IngredientKind::Yeast => "yeast",
            IngredientKind::MashStep => "mash step",
        }
    }
}

/// Any recipe ingredient.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind")]
pub enum Ingredient {
    Fermentable(Fermentable),
    Hop(Hop),
    Yeast(Yeast),
    MashStep(MashStep),
}

impl Ingredient {
    pub fn kind(&self) -> IngredientKind {
        match self {
            Ingredient::Fermentable(_) => IngredientKind::Fermentable,
            Ingredient::Hop(_) => IngredientKind::Hop,
            Ingredient::Yeast(_) => IngredientKind::Yeast,
            Ingredient::MashStep(_) => IngredientKind::MashStep,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            Ingredient::Fermentable(f) => &f.name,
            Ingredient::Hop(h) => &h.name,
            Ingredient::Yeast(y) => &y.name,
            Ingredient::MashStep(m) => &m.name,
        }
    }
}

impl From<Fermentable> for Ingredient {
    fn from(f: Fermentable) -> Self {
        Ingredient::Fermentable(f)
    }
}

impl From<Hop> for Ingredient {
    fn from(h: Hop) -> Self {
        Ingredient::Hop(h)
    }
}

impl From<Yeast> for Ingredient {
    fn from(y: Yeast) -> Self {
        Ingredient::Yeast(y)
    }
}

impl From<MashStep> for Ingredient {
    fn from(m: MashStep) -> Self {
        Ingredient::MashStep(m)
    }
}

// ============================================================================
// Ordering
// ============================================================================

/// Largest amount first, then lightest color, then name.
pub fn fermentable_order(a: &Fermentable, b: &Fermentable) -> Ordering {
    b.amount_kg
        .total_cmp(&a.amount_kg)
        .then(a.color_lovibond.total_cmp(&b.color_lovibond))
        .then_with(|| a.name.cmp(&b.name))
}

/// Brew-day use order, then longest time, largest amount, highest alpha, name.
pub fn hop_order(a: &Hop, b: &Hop) -> Ordering {
    a.hop_use
        .priority()
        .cmp(&b.hop_use.priority())
        .then(b.time_min.total_cmp(&a.time_min))
        .then(b.amount_kg.total_cmp(&a.amount_kg))
        .then(b.alpha_pct.total_cmp(&a.alpha_pct))
        .then_with(|| a.name.cmp(&b.name))
}

/// Largest amount first, then highest attenuation, then name.
pub fn yeast_order(a: &Yeast, b: &Yeast) -> Ordering {
    b.amount
        .total_cmp(&a.amount)
        .then(b.attenuation_pct.total_cmp(&a.attenuation_pct))
        .then_with(|| a.name.cmp(&b.name))
}

/// Lowest temperature first.
pub fn mash_step_order(a: &MashStep, b: &MashStep) -> Ordering {
    a.step_temp_c.total_cmp(&b.step_temp_c)
}

/// Inventory order: kind first, then name.
pub fn ingredient_order(a: &Ingredient, b: &Ingredient) -> Ordering {
    a.kind().cmp(&b.kind()).then_with(|| a.name().cmp(b.name()))
}

// ============================================================================
// Add-up
// ============================================================================

/// Ingredients merged by name with summed amounts, as needed on brew day.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AddedUpIngredients {
    pub fermentables: Vec<Fermentable>,
    pub hops: Vec<Hop>,
    pub yeasts: Vec<Yeast>,
}

impl AddedUpIngredients {
    /// Merge same-named entries (first occurrence keeps its other fields)
    /// and sort each list in its canonical order.
    pub fn from_parts(fermentables: &[Fermentable], hops: &[Hop], yeasts: &[Yeast]) -> Self {
        let mut fermentables = merge_by_name(fermentables, |f| &f.name, |f| &mut f.amount_kg);
        fermentables.sort_by(fermentable_order);

        let mut hops = merge_by_name(hops, |h| &h.name, |h| &mut h.amount_kg);
        hops.sort_by(hop_order);

        let mut yeasts = merge_by_name(yeasts, |y| &y.name, |y| &mut y.amount);
        yeasts.sort_by(yeast_order);

        AddedUpIngredients {
            fermentables,
            hops,
            yeasts,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.fermentables.is_empty() && self.hops.is_empty() && self.yeasts.is_empty()
    }
}

fn merge_by_name<T, N, A>(items: &[T], name: N, amount: A) -> Vec<T>
where
    T: Clone,
    N: Fn(&T) -> &String,
    A: Fn(&mut T) -> &mut f64,
{
    let mut merged: Vec<T> = Vec::new();
    let mut seen: HashMap<String, usize> = HashMap::new();

    for item in items {
        let mut item = item.clone();
        match seen.get(name(&item)).copied() {
            Some(idx) => {
                let extra = *amount(&mut item);
                *amount(&mut merged[idx]) += extra;
            }
            None => {
                seen.insert(name(&item).clone(), merged.len());
                merged.push(item);
            }
        }
    }

    merged
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hop_use_bitterness() {
        assert!(HopUse::Boil.contributes_bitterness());
        assert!(HopUse::FirstWort.contributes_bitterness());
        assert!(HopUse::Mash.contributes_bitterness());
        assert!(!HopUse::Aroma.contributes_bitterness());
        assert!(!HopUse::DryHop.contributes_bitterness());
    }

    #[test]
    fn test_hop_use_serialization() {
        assert_eq!(serde_json::to_string(&HopUse::DryHop).unwrap(), "\"Dry Hop\"");
        let lower: HopUse = serde_json::from_str("\"Dry hop\"").unwrap();
        assert_eq!(lower, HopUse::DryHop);
        let fw: HopUse = serde_json::from_str("\"First Wort\"").unwrap();
        assert_eq!(fw, HopUse::FirstWort);
    }

    #[test]
    fn test_ingredient_tagged_json() {
        let hop: Ingredient = Hop::boil("Saaz", 3.5, 0.03, 60.0).into();
        let json = serde_json::to_string(&hop).unwrap();
        assert!(json.contains("\"kind\":\"Hop\""));
        assert!(json.contains("\"use\":\"Boil\""));

        let parsed: Ingredient = serde_json::from_str(
            r#"{"kind":"Fermentable","name":"Pils","type":"Grain","amount_kg":4.0,"yield_pct":80.0,"color_lovibond":2.0}"#,
        )
        .unwrap();
        assert_eq!(parsed.kind(), IngredientKind::Fermentable);
        assert_eq!(parsed.name(), "Pils");
    }

    #[test]
    fn test_fermentable_order() {
        let mut list = vec![
            Fermentable::grain("Crystal", 0.5, 75.0, 60.0),
            Fermentable::grain("Pale", 4.0, 80.0, 3.0),
            Fermentable::grain("Munich", 0.5, 78.0, 9.0),
            Fermentable::grain("Aromatic", 0.5, 78.0, 9.0),
        ];
        list.sort_by(fermentable_order);
        let names: Vec<_> = list.iter().map(|f| f.name.as_str()).collect();
        assert_eq!(names, ["Pale", "Aromatic", "Munich", "Crystal"]);
    }

    #[test]
    fn test_hop_order() {
        let mut list = vec![
            Hop::boil("Cascade", 6.0, 0.02, 0.0).with_use(HopUse::DryHop),
            Hop::boil("Saaz", 3.5, 0.02, 15.0),
            Hop::boil("Magnum", 12.0, 0.02, 60.0),
            Hop::boil("Hallertau", 4.0, 0.01, 60.0).with_use(HopUse::FirstWort),
        ];
        list.sort_by(hop_order);
        let names: Vec<_> = list.iter().map(|h| h.name.as_str()).collect();
        assert_eq!(names, ["Hallertau", "Magnum", "Saaz", "Cascade"]);
    }

    #[test]
    fn test_yeast_and_mash_order() {
        let mut yeasts = vec![Yeast::new("US-05", 78.0, 1.0), Yeast::new("S-04", 75.0, 2.0)];
        yeasts.sort_by(yeast_order);
        assert_eq!(yeasts[0].name, "S-04");

        let mut steps = vec![MashStep::new("Mash out", 78.0, 10.0), MashStep::new("Saccharification", 66.0, 60.0)];
        steps.sort_by(mash_step_order);
        assert_eq!(steps[0].name, "Saccharification");
    }

    #[test]
    fn test_ingredient_order_by_kind_then_name() {
        let mut inventory: Vec<Ingredient> = vec![
            Yeast::new("US-05", 78.0, 1.0).into(),
            Hop::boil("Saaz", 3.5, 0.1, 0.0).into(),
            Fermentable::grain("Pale", 25.0, 80.0, 3.0).into(),
            Hop::boil("Cascade", 6.0, 0.1, 0.0).into(),
        ];
        inventory.sort_by(ingredient_order);
        let names: Vec<_> = inventory.iter().map(|i| i.name()).collect();
        assert_eq!(names, ["Pale", "Cascade", "Saaz", "US-05"]);
    }

    #[test]
    fn test_add_up_merges_by_name() {
        let fermentables = vec![
            Fermentable::grain("Pale", 2.0, 80.0, 3.0),
            Fermentable::grain("Crystal", 0.3, 75.0, 60.0),
            Fermentable::grain("Pale", 2.5, 80.0, 3.0),
        ];
        let hops = vec![
            Hop::boil("Saaz", 3.5, 0.02, 60.0),
            Hop::boil("Saaz", 3.5, 0.03, 10.0),
        ];
        let yeasts = vec![Yeast::new("US-05", 78.0, 1.0)];

        let added = AddedUpIngredients::from_parts(&fermentables, &hops, &yeasts);
        assert_eq!(added.fermentables.len(), 2);
        assert_eq!(added.fermentables[0].name, "Pale");
        assert!((added.fermentables[0].amount_kg - 4.5).abs() < 1e-12);

        assert_eq!(added.hops.len(), 1);
        assert!((added.hops[0].amount_kg - 0.05).abs() < 1e-12);
        assert_eq!(added.hops[0].time_min, 60.0);

        assert_eq!(added.yeasts.len(), 1);
        assert!(!added.is_empty());
    }
}
