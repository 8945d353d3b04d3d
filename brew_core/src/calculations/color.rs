//! # Color
//!
//! Beer color estimated with the Morey power-law approximation, plus the RGB
//! swatch shown next to it.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::ingredients::Fermentable;

/// Lightest SRM the swatch can show
pub const MIN_DISPLAY_SRM: f64 = 0.1;

/// Darkest SRM the swatch can show
pub const MAX_DISPLAY_SRM: f64 = 40.0;

/// Malt color units: `Σ amount * color` over grain fermentables.
pub fn malt_color_units(fermentables: &[Fermentable]) -> f64 {
    fermentables
        .iter()
        .filter(|f| f.fermentable_type.is_grain())
        .map(|f| f.amount_kg * f.color_lovibond)
        .sum()
}

/// Estimated color in SRM (Morey).
///
/// `2.9396 * (4.23 * mcu / batch_size) ^ 0.6859`, and 0 when no grain adds color.
pub fn color_srm(fermentables: &[Fermentable], batch_size_l: f64) -> f64 {
    let mcu = malt_color_units(fermentables);
    if mcu == 0.0 {
        return 0.0;
    }
    2.9396 * (4.23 * mcu / batch_size_l).powf(0.6859)
}

/// 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    /// `#rrggbb` form
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }
}

impl fmt::Display for Rgb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({}, {}, {})", self.r, self.g, self.b)
    }
}

/// Approximate display color of a beer of the given SRM.
///
/// The SRM is rounded to one decimal and clamped to
/// `[MIN_DISPLAY_SRM, MAX_DISPLAY_SRM]` first.
pub fn srm_to_rgb(srm: f64) -> Rgb {
    let key = ((srm * 10.0).round() / 10.0).clamp(MIN_DISPLAY_SRM, MAX_DISPLAY_SRM);
    let channel = |base: f64| (255.0 * base.powf(key)).round() as u8;

    Rgb {
        r: channel(0.975),
        g: channel(0.88),
        b: channel(0.7),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredients::FermentableType;

    #[test]
    fn test_color_srm() {
        let grains = vec![Fermentable::grain("Pale", 5.0, 80.0, 3.0)];
        // 2.9396 * (4.23 * 15 / 20)^0.6859
        assert!((color_srm(&grains, 20.0) - 6.4893).abs() < 1e-3);
    }

    #[test]
    fn test_color_ignores_non_grain() {
        let sugars = vec![Fermentable::grain("Dark candi", 1.0, 100.0, 80.0).with_type(FermentableType::Sugar)];
        assert_eq!(malt_color_units(&sugars), 0.0);
        assert_eq!(color_srm(&sugars, 20.0), 0.0);
        assert_eq!(color_srm(&[], 20.0), 0.0);
    }

    #[test]
    fn test_color_monotonic_in_grain_amount() {
        let mut grains = vec![Fermentable::grain("Munich", 3.0, 78.0, 9.0)];
        let before = color_srm(&grains, 20.0);
        grains[0].amount_kg = 3.5;
        assert!(color_srm(&grains, 20.0) > before);
    }

    #[test]
    fn test_srm_to_rgb_palest() {
        let rgb = srm_to_rgb(0.0);
        assert_eq!(rgb, Rgb { r: 254, g: 252, b: 246 });
        assert_eq!(rgb.to_string(), "rgb(254, 252, 246)");
        assert_eq!(rgb.to_hex(), "#fefcf6");
    }

    #[test]
    fn test_srm_to_rgb_clamps() {
        assert_eq!(srm_to_rgb(55.0), srm_to_rgb(40.0));
        assert_eq!(srm_to_rgb(-3.0), srm_to_rgb(0.1));

        let pale = srm_to_rgb(4.0);
        let dark = srm_to_rgb(30.0);
        assert!(dark.r < pale.r && dark.g < pale.g);
    }
}
