//! Combined rashi + nakshatra classification of a sidereal longitude.

use serde::Serialize;

use crate::graha::Graha;
use crate::nakshatra::{Nakshatra, nakshatra_from_longitude};
use crate::rashi::{Dms, Rashi, rashi_from_longitude};
use crate::util::normalize_360;

/// Where a sidereal longitude falls on the zodiac.
///
/// Every field is a deterministic function of `longitude`, so two
/// classifications of the same longitude never disagree.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZodiacPosition {
    /// Sidereal longitude in [0, 360).
    pub longitude: f64,
    pub rashi: Rashi,
    /// 1-based sign number (1 = Mesha).
    pub rashi_number: u8,
    /// Degrees within the rashi [0, 30).
    pub degrees_in_rashi: f64,
    pub dms: Dms,
    pub nakshatra: Nakshatra,
    /// 1-based nakshatra number (1 = Ashwini).
    pub nakshatra_number: u8,
    /// Pada (quarter) within the nakshatra, 1-4.
    pub pada: u8,
    /// Degrees within the nakshatra [0, 13.333...).
    pub degrees_in_nakshatra: f64,
}

impl ZodiacPosition {
    /// Ruling graha of the occupied rashi.
    pub const fn rashi_lord(&self) -> Graha {
        self.rashi.lord()
    }

    /// Ruling graha of the occupied nakshatra.
    pub const fn nakshatra_lord(&self) -> Graha {
        self.nakshatra.lord()
    }
}

/// Classify a sidereal longitude. Input is normalized to [0, 360) first.
pub fn classify(sidereal_lon_deg: f64) -> ZodiacPosition {
    let longitude = normalize_360(sidereal_lon_deg);
    let r = rashi_from_longitude(longitude);
    let n = nakshatra_from_longitude(longitude);
    ZodiacPosition {
        longitude,
        rashi: r.rashi,
        rashi_number: r.rashi_index + 1,
        degrees_in_rashi: r.degrees_in_rashi,
        dms: r.dms,
        nakshatra: n.nakshatra,
        nakshatra_number: n.nakshatra_index + 1,
        pada: n.pada,
        degrees_in_nakshatra: n.degrees_in_nakshatra,
    }
}
