//! Mean lunar node (Rahu/Ketu) longitude.
//!
//! The mean ascending node follows a secular polynomial in Julian
//! centuries from J2000.0 (Meeus, *Astronomical Algorithms*, Ch. 47):
//!
//! `Omega = 125.04452 - 1934.136261 T + 0.0020708 T^2 + T^3 / 450000`
//!
//! Ketu, the descending node, is always exactly opposite Rahu.

use crate::util::normalize_360;

/// Mean tropical longitude of Rahu in degrees [0, 360).
///
/// `t` = Julian centuries since J2000.0. Returns `None` when the polynomial
/// cannot produce a usable value (non-finite input or overflow), so the
/// caller can take its documented fallback.
pub fn mean_rahu_deg(t: f64) -> Option<f64> {
    let omega = 125.044_52 - 1_934.136_261 * t + 0.002_070_8 * t * t + t * t * t / 450_000.0;
    omega.is_finite().then(|| normalize_360(omega))
}

/// Ketu longitude from a Rahu longitude, in [0, 360).
pub fn ketu_from_rahu(rahu_deg: f64) -> f64 {
    normalize_360(rahu_deg + 180.0)
}

/// Coarse Rahu estimate: the point opposite the Moon.
///
/// Used only when the polynomial path is unavailable.
pub fn rahu_from_moon(moon_deg: f64) -> f64 {
    normalize_360(moon_deg + 180.0)
}
