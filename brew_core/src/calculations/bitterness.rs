//! # Bitterness
//!
//! IBU estimated with the Tinseth method, and the two bitterness ratios built
//! on it: IBU/GU (bitterness against gravity units) and IBU/RE (bitterness
//! against real extract, a subjective-bitterness index).

use std::f64::consts::E;

use crate::calculations::gravity::gravity_points;
use crate::ingredients::Hop;

/// Tinseth utilization of one hop addition at wort gravity `og`.
///
/// `1.65 * 0.000125^(og-1) * (1 - e^(-0.04*time)) / 4.15`
pub fn tinseth_utilization(og: f64, time_min: f64) -> f64 {
    let bigness = 1.65 * 0.000125_f64.powf(og - 1.0);
    let boil_time_factor = (1.0 - E.powf(-0.04 * time_min)) / 4.15;
    bigness * boil_time_factor
}

/// IBU contributed by a single hop, regardless of its use.
pub fn hop_ibu(hop: &Hop, og: f64, batch_size_l: f64) -> f64 {
    // mg of alpha acids per liter
    let alpha_mg_per_l = hop.alpha_pct / 100.0 * (hop.amount_kg * 1000.0) * 1000.0 / batch_size_l;
    tinseth_utilization(og, hop.time_min) * alpha_mg_per_l
}

/// Total bitterness (IBU) of all boil-stage hops.
///
/// Aroma and dry hop additions are skipped. Without an original gravity the
/// wort is taken as water (1.000).
pub fn ibu(hops: &[Hop], og: Option<f64>, batch_size_l: f64) -> f64 {
    let og = og.unwrap_or(1.0);
    hops.iter()
        .filter(|h| h.hop_use.contributes_bitterness())
        .map(|h| hop_ibu(h, og, batch_size_l))
        .sum()
}

/// BU:GU ratio, `IBU / gravity points`.
pub fn ibu_gu(ibu: f64, og: Option<f64>) -> Option<f64> {
    let og = og?;
    Some(ibu / gravity_points(og))
}

/// IBU:RE ratio.
///
/// `IBU / (0.1808 * og' + 0.8192 * fg')` with `og'` and `fg'` the gravity
/// points divided by 4.
pub fn ibu_re(ibu: f64, og: Option<f64>, fg: Option<f64>) -> Option<f64> {
    let og = gravity_points(og?) / 4.0;
    let fg = gravity_points(fg?) / 4.0;
    Some(ibu / ((0.1808 * og) + (0.8192 * fg)))
}
