//! Equal-house (bhava) division from the ascendant.
//!
//! House *i* (1-12) begins at `ascendant + (i - 1) * 30` deg. Quadrant
//! systems are not provided.

use serde::Serialize;

use crate::graha::Graha;
use crate::rashi::{Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// One equal house.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bhava {
    /// House number, 1-12.
    pub number: u8,
    /// Sidereal cusp longitude in [0, 360).
    pub cusp_deg: f64,
    /// Rashi occupying the cusp.
    pub rashi: Rashi,
    /// Lord of that rashi.
    pub lord: Graha,
}

/// Cusp longitudes of the 12 equal houses starting from `ascendant_deg`.
pub fn equal_cusps(ascendant_deg: f64) -> [f64; 12] {
    let mut cusps = [0.0; 12];
    for (i, cusp) in cusps.iter_mut().enumerate() {
        *cusp = normalize_360(ascendant_deg + (i as f64) * 30.0);
    }
    cusps
}

/// The 12 equal houses for a sidereal ascendant longitude.
pub fn equal_bhavas(ascendant_deg: f64) -> [Bhava; 12] {
    let cusps = equal_cusps(ascendant_deg);
    std::array::from_fn(|i| {
        let rashi = rashi_from_longitude(cusps[i]).rashi;
        Bhava {
            number: (i as u8) + 1,
            cusp_deg: cusps[i],
            rashi,
            lord: rashi.lord(),
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equal_cusps_30_deg_apart() {
        let cusps = equal_cusps(100.0);
        for (i, c) in cusps.iter().enumerate() {
            let expected = normalize_360(100.0 + (i as f64) * 30.0);
            assert!((c - expected).abs() < 1e-10, "cusp[{i}] = {c}, expected {expected}");
        }
    }

    #[test]
    fn equal_cusps_wrap_around() {
        let cusps = equal_cusps(350.0);
        assert!((cusps[0] - 350.0).abs() < 1e-10);
        assert!((cusps[1] - 20.0).abs() < 1e-10);
        assert!((cusps[11] - 320.0).abs() < 1e-10);
    }

    #[test]
    fn bhava_numbers_and_signs() {
        let bhavas = equal_bhavas(15.0);
        for (i, b) in bhavas.iter().enumerate() {
            assert_eq!(b.number as usize, i + 1);
            assert_eq!(b.rashi.index() as usize, i);
            assert_eq!(b.lord, b.rashi.lord());
        }
        assert_eq!(bhavas[0].rashi, Rashi::Mesha);
        assert_eq!(bhavas[0].lord, Graha::Mangal);
    }
}
