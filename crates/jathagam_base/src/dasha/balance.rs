//! Birth balance of the first dasha period.

use crate::nakshatra::{NAKSHATRA_SPAN, NakshatraInfo};

/// Unelapsed share of the birth nakshatra's period.
///
/// Returns `(balance_years, elapsed_fraction)` where the fraction is how far
/// the Moon has crossed its nakshatra, in [0, 1).
pub fn nakshatra_birth_balance(birth: &NakshatraInfo, entry_period_years: f64) -> (f64, f64) {
    let elapsed = birth.degrees_in_nakshatra / NAKSHATRA_SPAN;
    (entry_period_years * (1.0 - elapsed), elapsed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nakshatra::nakshatra_from_longitude;

    fn balance(lon: f64, years: f64) -> (u8, f64, f64) {
        let info = nakshatra_from_longitude(lon);
        let (left, frac) = nakshatra_birth_balance(&info, years);
        (info.nakshatra_index, left, frac)
    }

    #[test]
    fn full_period_at_nakshatra_start() {
        let (idx, left, frac) = balance(0.0, 7.0);
        assert_eq!(idx, 0);
        assert_eq!(left, 7.0);
        assert_eq!(frac, 0.0);
    }

    #[test]
    fn quarter_elapsed() {
        // A quarter into Purva Phalguni (Venus, 20 years)
        let lon = 10.0 * NAKSHATRA_SPAN + NAKSHATRA_SPAN / 4.0;
        let (idx, left, frac) = balance(lon, 20.0);
        assert_eq!(idx, 10);
        assert!((frac - 0.25).abs() < 1e-9);
        assert!((left - 15.0).abs() < 1e-8);
    }

    #[test]
    fn almost_nothing_left_near_end() {
        let (idx, left, _) = balance(NAKSHATRA_SPAN - 0.001, 7.0);
        assert_eq!(idx, 0);
        assert!(left > 0.0 && left < 0.001);
    }

    #[test]
    fn negative_longitude_wraps_to_revati() {
        let (idx, _, frac) = balance(-1.0, 17.0);
        assert_eq!(idx, 26);
        assert!(frac > 0.9);
    }
}
