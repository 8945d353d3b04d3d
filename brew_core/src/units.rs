//! # Unit Types
//!
//! Type-safe wrappers for brewing units. These are plain f64 newtypes that
//! serialize as bare numbers.
//!
//! ## Metric Units (Primary)
//!
//! Recipes are stored in metric units, matching the BeerXML convention:
//! - Volume: liters (L)
//! - Mass: kilograms (kg)
//! - Color: SRM
//! - Temperature: degrees Celsius
//!
//! Imperial conversions exist for display only.
//!
//! ## Example
//!
//! ```rust
//! use brew_core::units::{Gallons, Kilograms, Liters, Pounds};
//!
//! let batch = Liters(20.0);
//! let gallons: Gallons = batch.into();
//! assert!((gallons.0 - 5.28344).abs() < 1e-5);
//!
//! let malt: Pounds = Kilograms(5.0).into();
//! assert!((malt.0 - 11.0231).abs() < 1e-4);
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Div, Mul, Sub};

/// US gallons per liter
pub const L_TO_GALLON: f64 = 0.264172;

/// Pounds per kilogram
pub const KG_TO_POUND: f64 = 2.20462;

/// Ounces per kilogram
pub const KG_TO_OUNCE: f64 = 35.274;

/// EBC per SRM
pub const SRM_TO_EBC: f64 = 1.97;

// ============================================================================
// Volume Units
// ============================================================================

/// Volume in liters
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Liters(pub f64);

/// Volume in US gallons
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Gallons(pub f64);

impl From<Liters> for Gallons {
    fn from(l: Liters) -> Self {
        Gallons(l.0 * L_TO_GALLON)
    }
}

impl From<Gallons> for Liters {
    fn from(gal: Gallons) -> Self {
        Liters(gal.0 / L_TO_GALLON)
    }
}

// ============================================================================
// Mass Units
// ============================================================================

/// Mass in kilograms
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Kilograms(pub f64);

/// Mass in pounds
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Pounds(pub f64);

/// Mass in ounces
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ounces(pub f64);

impl From<Kilograms> for Pounds {
    fn from(kg: Kilograms) -> Self {
        Pounds(kg.0 * KG_TO_POUND)
    }
}

impl From<Pounds> for Kilograms {
    fn from(lb: Pounds) -> Self {
        Kilograms(lb.0 / KG_TO_POUND)
    }
}

impl From<Kilograms> for Ounces {
    fn from(kg: Kilograms) -> Self {
        Ounces(kg.0 * KG_TO_OUNCE)
    }
}

impl From<Ounces> for Kilograms {
    fn from(oz: Ounces) -> Self {
        Kilograms(oz.0 / KG_TO_OUNCE)
    }
}

// ============================================================================
// Color Units
// ============================================================================

/// Beer color on the Standard Reference Method scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Srm(pub f64);

/// Beer color on the European Brewery Convention scale
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Ebc(pub f64);

impl From<Srm> for Ebc {
    fn from(srm: Srm) -> Self {
        Ebc(srm.0 * SRM_TO_EBC)
    }
}

impl From<Ebc> for Srm {
    fn from(ebc: Ebc) -> Self {
        Srm(ebc.0 / SRM_TO_EBC)
    }
}

// ============================================================================
// Temperature Units
// ============================================================================

/// Temperature in degrees Celsius
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Celsius(pub f64);

/// Temperature in degrees Fahrenheit
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Fahrenheit(pub f64);

impl From<Celsius> for Fahrenheit {
    fn from(c: Celsius) -> Self {
        Fahrenheit(c.0 * 9.0 / 5.0 + 32.0)
    }
}

impl From<Fahrenheit> for Celsius {
    fn from(f: Fahrenheit) -> Self {
        Celsius((f.0 - 32.0) * 5.0 / 9.0)
    }
}

// ============================================================================
// Arithmetic Implementations
// ============================================================================

macro_rules! impl_arithmetic {
    ($type:ty, $suffix:expr) => {
        impl Add for $type {
            type Output = Self;
            fn add(self, rhs: Self) -> Self::Output {
                Self(self.0 + rhs.0)
            }
        }

        impl Sub for $type {
            type Output = Self;
            fn sub(self, rhs: Self) -> Self::Output {
                Self(self.0 - rhs.0)
            }
        }

        impl Mul<f64> for $type {
            type Output = Self;
            fn mul(self, rhs: f64) -> Self::Output {
                Self(self.0 * rhs)
            }
        }

        impl Div<f64> for $type {
            type Output = Self;
            fn div(self, rhs: f64) -> Self::Output {
                Self(self.0 / rhs)
            }
        }

        impl fmt::Display for $type {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                match f.precision() {
                    Some(p) => write!(f, "{:.*} {}", p, self.0, $suffix),
                    None => write!(f, "{} {}", self.0, $suffix),
                }
            }
        }
    };
}

impl_arithmetic!(Liters, "L");
impl_arithmetic!(Gallons, "gal");
impl_arithmetic!(Kilograms, "kg");
impl_arithmetic!(Pounds, "lb");
impl_arithmetic!(Ounces, "oz");
impl_arithmetic!(Srm, "SRM");
impl_arithmetic!(Ebc, "EBC");
impl_arithmetic!(Celsius, "°C");
impl_arithmetic!(Fahrenheit, "°F");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_liters_to_gallons() {
        let gal: Gallons = Liters(10.0).into();
        assert!((gal.0 - 2.64172).abs() < 1e-9);

        let back: Liters = gal.into();
        assert!((back.0 - 10.0).abs() < 1e-9);
    }

    #[test]
    fn test_mass_conversions() {
        let oz: Ounces = Kilograms(0.028).into();
        assert!((oz.0 - 0.987672).abs() < 1e-6);

        let kg: Kilograms = Pounds(2.20462).into();
        assert!((kg.0 - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_color_and_temperature() {
        let ebc: Ebc = Srm(10.0).into();
        assert!((ebc.0 - 19.7).abs() < 1e-9);

        let f: Fahrenheit = Celsius(67.0).into();
        assert!((f.0 - 152.6).abs() < 1e-9);
        let c: Celsius = Fahrenheit(212.0).into();
        assert!((c.0 - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_arithmetic() {
        let a = Liters(10.0);
        let b = Liters(5.0);
        assert_eq!((a + b).0, 15.0);
        assert_eq!((a - b).0, 5.0);
        assert_eq!((a * 2.0).0, 20.0);
        assert_eq!((a / 2.0).0, 5.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{:.1}", Liters(24.04)), "24.0 L");
        assert_eq!(format!("{}", Kilograms(5.0)), "5 kg");
    }

    #[test]
    fn test_serialization() {
        let l = Liters(12.5);
        let json = serde_json::to_string(&l).unwrap();
        assert_eq!(json, "12.5");

        let roundtrip: Liters = serde_json::from_str(&json).unwrap();
        assert_eq!(l, roundtrip);
    }
}
