//! Linear ayanamsa model and tropical-to-sidereal conversion.
//!
//! The ayanamsa is the angular offset between the tropical zodiac (defined
//! by the vernal equinox) and the sidereal zodiac (anchored to fixed stars).
//! As the equinox precesses westward, the ayanamsa increases over time.
//!
//! The model here is linear in time: a reference value at J2000.0 plus a
//! constant annual rate. The default parameters are the Lahiri values
//! (23.85 deg at J2000.0, 0.01397 deg per Julian year).

use serde::{Deserialize, Serialize};

use crate::util::normalize_360;

/// Julian Date of the J2000.0 epoch (2000-01-01 12:00 TT).
pub const J2000_JD: f64 = 2_451_545.0;

/// Days per Julian year.
pub const DAYS_PER_JULIAN_YEAR: f64 = 365.25;

/// Days per Julian century.
pub const DAYS_PER_JULIAN_CENTURY: f64 = 36_525.0;

/// Lahiri ayanamsa at J2000.0 in degrees.
pub const LAHIRI_J2000_DEG: f64 = 23.85;

/// Lahiri precession rate in degrees per Julian year.
pub const LAHIRI_RATE_DEG_PER_YEAR: f64 = 0.01397;

/// Parameters of a linear ayanamsa model.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AyanamsaModel {
    /// Ayanamsa at J2000.0 in degrees.
    pub reference_j2000_deg: f64,
    /// Annual drift in degrees per Julian year. Positive for precession.
    pub rate_deg_per_year: f64,
}

impl AyanamsaModel {
    /// Lahiri (Chitrapaksha) linear model.
    pub const LAHIRI: Self = Self {
        reference_j2000_deg: LAHIRI_J2000_DEG,
        rate_deg_per_year: LAHIRI_RATE_DEG_PER_YEAR,
    };

    /// Ayanamsa in degrees at a Julian Day.
    pub fn at_jd(&self, jd: f64) -> f64 {
        let years = (jd - J2000_JD) / DAYS_PER_JULIAN_YEAR;
        self.reference_j2000_deg + self.rate_deg_per_year * years
    }
}

impl Default for AyanamsaModel {
    fn default() -> Self {
        Self::LAHIRI
    }
}

/// Lahiri ayanamsa in degrees at a Julian Day.
///
/// `ayanamsa(jd) = 23.85 + 0.01397 * (jd - 2451545.0) / 365.25`
pub fn ayanamsa_deg(jd: f64) -> f64 {
    AyanamsaModel::LAHIRI.at_jd(jd)
}

/// Convert a tropical longitude to sidereal, result in [0, 360).
pub fn to_sidereal(tropical_lon_deg: f64, ayanamsa_deg: f64) -> f64 {
    normalize_360(tropical_lon_deg - ayanamsa_deg)
}

/// Convert a Julian Day to Julian centuries since J2000.0.
pub fn jd_to_centuries(jd: f64) -> f64 {
    (jd - J2000_JD) / DAYS_PER_JULIAN_CENTURY
}
