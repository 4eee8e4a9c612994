//! The twelve sidereal signs.
//!
//! Signs are fixed 30 deg slices of the sidereal ecliptic starting at
//! Mesha. A longitude is located by floor division after reduction to
//! [0, 360).

use serde::Serialize;

use crate::graha::{Graha, rashi_lord};
use crate::util::normalize_360;

/// Width of one rashi in degrees.
pub const RASHI_SPAN: f64 = 30.0;

/// Sidereal sign, Mesha (Aries) first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Rashi {
    #[serde(rename = "Aries")]
    Mesha,
    #[serde(rename = "Taurus")]
    Vrishabha,
    #[serde(rename = "Gemini")]
    Mithuna,
    #[serde(rename = "Cancer")]
    Karka,
    #[serde(rename = "Leo")]
    Simha,
    #[serde(rename = "Virgo")]
    Kanya,
    #[serde(rename = "Libra")]
    Tula,
    #[serde(rename = "Scorpio")]
    Vrischika,
    #[serde(rename = "Sagittarius")]
    Dhanu,
    #[serde(rename = "Capricorn")]
    Makara,
    #[serde(rename = "Aquarius")]
    Kumbha,
    #[serde(rename = "Pisces")]
    Meena,
}

/// All 12 rashis in order (0 = Mesha, 11 = Meena).
pub const ALL_RASHIS: [Rashi; 12] = [
    Rashi::Mesha,
    Rashi::Vrishabha,
    Rashi::Mithuna,
    Rashi::Karka,
    Rashi::Simha,
    Rashi::Kanya,
    Rashi::Tula,
    Rashi::Vrischika,
    Rashi::Dhanu,
    Rashi::Makara,
    Rashi::Kumbha,
    Rashi::Meena,
];

impl Rashi {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Mesha => "Mesha",
            Self::Vrishabha => "Vrishabha",
            Self::Mithuna => "Mithuna",
            Self::Karka => "Karka",
            Self::Simha => "Simha",
            Self::Kanya => "Kanya",
            Self::Tula => "Tula",
            Self::Vrischika => "Vrischika",
            Self::Dhanu => "Dhanu",
            Self::Makara => "Makara",
            Self::Kumbha => "Kumbha",
            Self::Meena => "Meena",
        }
    }

    /// English (Western) sign name, used for serialization.
    pub const fn western_name(self) -> &'static str {
        match self {
            Self::Mesha => "Aries",
            Self::Vrishabha => "Taurus",
            Self::Mithuna => "Gemini",
            Self::Karka => "Cancer",
            Self::Simha => "Leo",
            Self::Kanya => "Virgo",
            Self::Tula => "Libra",
            Self::Vrischika => "Scorpio",
            Self::Dhanu => "Sagittarius",
            Self::Makara => "Capricorn",
            Self::Kumbha => "Aquarius",
            Self::Meena => "Pisces",
        }
    }

    /// Tamil display label.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Mesha => "மேஷம்",
            Self::Vrishabha => "ரிஷபம்",
            Self::Mithuna => "மிதுனம்",
            Self::Karka => "கடகம்",
            Self::Simha => "சிம்மம்",
            Self::Kanya => "கன்னி",
            Self::Tula => "துலாம்",
            Self::Vrischika => "விருச்சிகம்",
            Self::Dhanu => "தனுசு",
            Self::Makara => "மகரம்",
            Self::Kumbha => "கும்பம்",
            Self::Meena => "மீனம்",
        }
    }

    /// Position in [`ALL_RASHIS`], Mesha = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based sign number (Mesha=1 .. Meena=12).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Ruling graha of this sign.
    pub const fn lord(self) -> Graha {
        rashi_lord(self)
    }

    /// Rashi for a 1-based sign number. Returns None outside 1..=12.
    pub fn from_number(number: u8) -> Option<Rashi> {
        number
            .checked_sub(1)
            .and_then(|i| ALL_RASHIS.get(i as usize).copied())
    }

    pub const fn all() -> &'static [Rashi; 12] {
        &ALL_RASHIS
    }
}

impl std::fmt::Display for Rashi {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.western_name())
    }
}

/// An angle split into whole degrees, arc-minutes and arc-seconds.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dms {
    pub degrees: u16,
    pub minutes: u8,
    /// Fractional arc-seconds in [0, 60).
    pub seconds: f64,
}

impl Dms {
    /// Split the magnitude of `deg`; the sign is dropped.
    pub fn from_degrees(deg: f64) -> Self {
        let magnitude = deg.abs();
        let whole = magnitude.trunc();
        let arcmin = (magnitude - whole) * 60.0;
        let minutes = arcmin.trunc();
        Self {
            degrees: whole as u16,
            minutes: minutes as u8,
            seconds: (arcmin - minutes) * 60.0,
        }
    }

    pub fn to_degrees(&self) -> f64 {
        f64::from(self.degrees) + f64::from(self.minutes) / 60.0 + self.seconds / 3600.0
    }
}

impl std::fmt::Display for Dms {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}°{:02}'{:05.2}\"", self.degrees, self.minutes, self.seconds)
    }
}

/// Sign occupied by a sidereal longitude and the offset into it.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RashiInfo {
    pub rashi: Rashi,
    /// Same as `rashi.index()`.
    pub rashi_index: u8,
    /// Offset into the sign in [0, 30).
    pub degrees_in_rashi: f64,
    /// `degrees_in_rashi` as DMS.
    pub dms: Dms,
}

/// Classify a sidereal longitude into its rashi.
///
/// Signs are half-open 30 deg slices starting at 0 deg Mesha; the input is
/// reduced to [0, 360) first so 360 and 0 agree.
pub fn rashi_from_longitude(sidereal_lon_deg: f64) -> RashiInfo {
    let lon = normalize_360(sidereal_lon_deg);
    // Rounding in normalize_360 can land on 360.0 itself.
    let rashi_index = ((lon / RASHI_SPAN) as u8).min(11);
    let degrees_in_rashi = lon - f64::from(rashi_index) * RASHI_SPAN;
    RashiInfo {
        rashi: ALL_RASHIS[rashi_index as usize],
        rashi_index,
        degrees_in_rashi,
        dms: Dms::from_degrees(degrees_in_rashi),
    }
}
