//! # Brewing Calculations
//!
//! The calculation engine: pure functions deriving estimated metrics from a
//! [`Recipe`]. Nothing here mutates the recipe, caches results or fails;
//! every call recomputes from the recipe's current fields in a single pass
//! over its ingredients.
//!
//! A metric that cannot be computed from the data at hand is `None`:
//!
//! - no extract (no fermentables, or zero yield): OG and everything built on
//!   it (FG, ABV, IBU/GU, IBU/RE) is unset
//! - no yeast amount: FG, ABV and IBU/RE are unset
//!
//! ## Available Calculations
//!
//! - [`volume`] - Boil and total water volumes
//! - [`gravity`] - Original/final gravity and ABV
//! - [`color`] - Morey SRM and display swatch
//! - [`bitterness`] - Tinseth IBU, IBU/GU and IBU/RE
//! - [`conformance`] - Style range gauges
//!
//! ## Example
//!
//! ```rust
//! use brew_core::calculations::calculate;
//! use brew_core::ingredients::{Fermentable, Hop, Yeast};
//! use brew_core::recipe::Recipe;
//!
//! let mut recipe = Recipe::new("Pale Ale");
//! recipe.insert(Fermentable::grain("Pale malt", 5.0, 80.0, 3.0));
//! recipe.insert(Hop::boil("Magnum", 12.0, 0.02, 60.0));
//! recipe.insert(Yeast::new("US-05", 75.0, 1.0));
//!
//! let calc = calculate(&recipe);
//! assert!((calc.boil_volume_l - 24.0).abs() < 1e-9);
//! assert!(calc.og.is_some());
//! println!("IBU: {:.1}", calc.ibu);
//! ```

pub mod bitterness;
pub mod color;
pub mod conformance;
pub mod gravity;
pub mod volume;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::recipe::Recipe;

pub use color::Rgb;
pub use conformance::{Gauge, Metric};

/// Everything the engine derives from a recipe.
///
/// ## JSON Example
///
/// ```json
/// {
///   "boil_volume_l": 24.0,
///   "total_volume_l": 29.0,
///   "og": 1.0519,
///   "fg": 1.0130,
///   "color_srm": 6.49,
///   "abv_pct": 5.23,
///   "ibu": 27.2,
///   "ibu_gu": 0.52,
///   "ibu_re": 5.43,
///   "gauges": []
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Calculation {
    /// Volume needed before boiling (liters)
    pub boil_volume_l: f64,

    /// Total water needed including grain absorption (liters)
    pub total_volume_l: f64,

    /// Estimated original gravity
    pub og: Option<f64>,

    /// Estimated final gravity
    pub fg: Option<f64>,

    /// Estimated color (SRM)
    pub color_srm: f64,

    /// Estimated alcohol by volume (percent)
    pub abv_pct: Option<f64>,

    /// Estimated bitterness (IBU)
    pub ibu: f64,

    /// BU:GU ratio
    pub ibu_gu: Option<f64>,

    /// IBU:RE ratio
    pub ibu_re: Option<f64>,

    /// Gauges in [`Metric::ALL`] order. Style metrics only appear when the
    /// recipe has a style; the two ratios are always present.
    pub gauges: Vec<Gauge>,
}

impl Calculation {
    /// Value of a metric, `None` if unset
    pub fn value(&self, metric: Metric) -> Option<f64> {
        match metric {
            Metric::Og => self.og,
            Metric::Fg => self.fg,
            Metric::Abv => self.abv_pct,
            Metric::Ibu => Some(self.ibu),
            Metric::Color => Some(self.color_srm),
            Metric::IbuGu => self.ibu_gu,
            Metric::IbuRe => self.ibu_re,
        }
    }

    /// Gauge of a metric, if it has a range
    pub fn gauge(&self, metric: Metric) -> Option<&Gauge> {
        self.gauges.iter().find(|g| g.metric == metric)
    }

    /// Boil volume rounded to 0.1 L for display
    pub fn display_boil_volume(&self) -> f64 {
        conformance::round_to(self.boil_volume_l, 1)
    }

    /// Display swatch for the estimated color
    pub fn color_rgb(&self) -> Rgb {
        color::srm_to_rgb(self.color_srm)
    }
}

/// Run every calculation on a recipe.
///
/// OG and FG are computed once and shared by the formulas that depend on them.
pub fn calculate(recipe: &Recipe) -> Calculation {
    let boil_volume_l = volume::boil_volume(recipe);
    let total_volume_l = volume::total_volume(recipe);

    let og = gravity::original_gravity(recipe);
    let fg = gravity::final_gravity(og, &recipe.yeasts);
    let abv_pct = gravity::abv(og, fg);

    let color_srm = color::color_srm(&recipe.fermentables, recipe.batch_size_l);

    let ibu = bitterness::ibu(&recipe.hops, og, recipe.batch_size_l);
    let ibu_gu = bitterness::ibu_gu(ibu, og);
    let ibu_re = bitterness::ibu_re(ibu, og, fg);

    debug!(
        recipe = %recipe.name,
        ?og,
        ?fg,
        ibu,
        color_srm,
        "calculated recipe"
    );

    let mut calc = Calculation {
        boil_volume_l,
        total_volume_l,
        og,
        fg,
        color_srm,
        abv_pct,
        ibu,
        ibu_gu,
        ibu_re,
        gauges: Vec::with_capacity(Metric::ALL.len()),
    };

    let style = recipe.style.as_ref();
    calc.gauges = Metric::ALL
        .iter()
        .filter_map(|&metric| {
            metric
                .range(style)
                .map(|range| Gauge::new(metric, calc.value(metric), range))
        })
        .collect();

    calc
}
