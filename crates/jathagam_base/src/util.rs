//! Shared utility functions for chart calculations.

/// Normalize an angle to [0, 360) degrees.
pub fn normalize_360(deg: f64) -> f64 {
    let r = deg.rem_euclid(360.0);
    // Tiny negatives round up to exactly 360.0.
    if r >= 360.0 { 0.0 } else { r }
}

/// 1-based cyclic house distance of `rashi_index` counted from `reference_index`.
///
/// Both arguments are 0-based rashi indices. The result is
/// `((rashi - reference) mod 12) + 1`, so the reference sign itself is house 1
/// and the sign just before it is house 12.
pub fn house_from(rashi_index: u8, reference_index: u8) -> u8 {
    ((rashi_index as i16 - reference_index as i16).rem_euclid(12) + 1) as u8
}

/// Whether a 1-based house number is a kendra (angular house: 1, 4, 7, 10).
pub fn is_kendra(house: u8) -> bool {
    matches!(house, 1 | 4 | 7 | 10)
}
