//! # Style Conformance
//!
//! Places each estimated metric on a gauge between a lower and an upper
//! bound: whether it falls inside, and where (0-100) a display cursor sits.

use serde::{Deserialize, Serialize};

use crate::recipe::{Style, StyleRange};

/// Fixed range shown for the BU:GU ratio
pub const IBU_GU_RANGE: StyleRange = StyleRange::new(0.2, 1.2);

/// Fixed range shown for the IBU:RE ratio
pub const IBU_RE_RANGE: StyleRange = StyleRange::new(0.0, 15.0);

/// A metric the engine reports on a gauge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Metric {
    Og,
    Fg,
    Abv,
    Ibu,
    Color,
    IbuGu,
    IbuRe,
}

impl Metric {
    /// Gauge order used for display
    pub const ALL: [Metric; 7] = [
        Metric::Og,
        Metric::Fg,
        Metric::Abv,
        Metric::Ibu,
        Metric::Color,
        Metric::IbuGu,
        Metric::IbuRe,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Metric::Og => "OG",
            Metric::Fg => "FG",
            Metric::Abv => "ABV",
            Metric::Ibu => "IBU",
            Metric::Color => "Color",
            Metric::IbuGu => "IBU/GU",
            Metric::IbuRe => "IBU/RE",
        }
    }

    /// Decimal places shown for this metric
    pub fn decimals(self) -> u32 {
        match self {
            Metric::Og | Metric::Fg => 3,
            Metric::Abv => 1,
            Metric::Ibu | Metric::Color | Metric::IbuGu | Metric::IbuRe => 2,
        }
    }

    /// Range to judge this metric against. Ratios have fixed ranges; the
    /// others come from the style, if any.
    pub fn range(self, style: Option<&Style>) -> Option<StyleRange> {
        match self {
            Metric::IbuGu => Some(IBU_GU_RANGE),
            Metric::IbuRe => Some(IBU_RE_RANGE),
            Metric::Og => style.map(|s| s.og),
            Metric::Fg => style.map(|s| s.fg),
            Metric::Abv => style.map(|s| s.abv_pct),
            Metric::Ibu => style.map(|s| s.ibu),
            Metric::Color => style.map(|s| s.color_srm),
        }
    }
}

/// Round `value` to `decimals` places.
pub fn round_to(value: f64, decimals: u32) -> f64 {
    let factor = 10_f64.powi(decimals as i32);
    (value * factor).round() / factor
}

/// `min <= value <= max`
pub fn in_range(value: f64, range: StyleRange) -> bool {
    range.min <= value && value <= range.max
}

/// Cursor position (0-100) of `value` within `range`, pinned at both ends.
pub fn cursor(value: f64, range: StyleRange) -> f64 {
    if value <= range.min {
        return 0.0;
    }
    if value >= range.max {
        return 100.0;
    }
    (value - range.min) * 100.0 / (range.max - range.min)
}

/// One metric placed on its range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Gauge {
    pub metric: Metric,

    /// Unrounded value, `None` when the metric could not be computed
    pub value: Option<f64>,

    pub min: f64,
    pub max: f64,

    pub in_range: bool,

    /// 0 to 100
    pub cursor: f64,
}

impl Gauge {
    /// Build a gauge. An unset value is out of range with its cursor at 0.
    pub fn new(metric: Metric, value: Option<f64>, range: StyleRange) -> Self {
        let (in_range, cursor) = match value {
            Some(v) => (in_range(v, range), cursor(v, range)),
            None => (false, 0.0),
        };

        Gauge {
            metric,
            value,
            min: range.min,
            max: range.max,
            in_range,
            cursor,
        }
    }

    /// Value rounded for display
    pub fn display_value(&self) -> Option<f64> {
        self.value.map(|v| round_to(v, self.metric.decimals()))
    }
}
