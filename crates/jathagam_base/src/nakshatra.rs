//! The 27 lunar mansions and their padas.
//!
//! Each nakshatra is 360/27 deg wide and split into four padas. Lords repeat
//! the Vimshottari order every nine mansions, so Ashwini, Magha and Mula all
//! belong to Ketu.

use serde::Serialize;

use crate::dasha::VIMSHOTTARI_SEQUENCE;
use crate::graha::Graha;
use crate::util::normalize_360;

/// Width of one nakshatra in degrees.
pub const NAKSHATRA_SPAN: f64 = 360.0 / 27.0;

/// Width of one pada in degrees.
pub const PADA_SPAN: f64 = NAKSHATRA_SPAN / 4.0;

/// The 27 nakshatras from Ashwini to Revati.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[repr(u8)]
pub enum Nakshatra {
    Ashwini,
    Bharani,
    Krittika,
    Rohini,
    Mrigashira,
    Ardra,
    Punarvasu,
    Pushya,
    Ashlesha,
    Magha,
    #[serde(rename = "Purva Phalguni")]
    PurvaPhalguni,
    #[serde(rename = "Uttara Phalguni")]
    UttaraPhalguni,
    Hasta,
    Chitra,
    Swati,
    Vishakha,
    Anuradha,
    Jyeshtha,
    Mula,
    #[serde(rename = "Purva Ashadha")]
    PurvaAshadha,
    #[serde(rename = "Uttara Ashadha")]
    UttaraAshadha,
    Shravana,
    Dhanishta,
    Shatabhisha,
    #[serde(rename = "Purva Bhadrapada")]
    PurvaBhadrapada,
    #[serde(rename = "Uttara Bhadrapada")]
    UttaraBhadrapada,
    Revati,
}

/// All 27 nakshatras in order (0 = Ashwini, 26 = Revati).
pub const ALL_NAKSHATRAS: [Nakshatra; 27] = [
    Nakshatra::Ashwini,
    Nakshatra::Bharani,
    Nakshatra::Krittika,
    Nakshatra::Rohini,
    Nakshatra::Mrigashira,
    Nakshatra::Ardra,
    Nakshatra::Punarvasu,
    Nakshatra::Pushya,
    Nakshatra::Ashlesha,
    Nakshatra::Magha,
    Nakshatra::PurvaPhalguni,
    Nakshatra::UttaraPhalguni,
    Nakshatra::Hasta,
    Nakshatra::Chitra,
    Nakshatra::Swati,
    Nakshatra::Vishakha,
    Nakshatra::Anuradha,
    Nakshatra::Jyeshtha,
    Nakshatra::Mula,
    Nakshatra::PurvaAshadha,
    Nakshatra::UttaraAshadha,
    Nakshatra::Shravana,
    Nakshatra::Dhanishta,
    Nakshatra::Shatabhisha,
    Nakshatra::PurvaBhadrapada,
    Nakshatra::UttaraBhadrapada,
    Nakshatra::Revati,
];

impl Nakshatra {
    /// Canonical name of the nakshatra.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Ashwini => "Ashwini",
            Self::Bharani => "Bharani",
            Self::Krittika => "Krittika",
            Self::Rohini => "Rohini",
            Self::Mrigashira => "Mrigashira",
            Self::Ardra => "Ardra",
            Self::Punarvasu => "Punarvasu",
            Self::Pushya => "Pushya",
            Self::Ashlesha => "Ashlesha",
            Self::Magha => "Magha",
            Self::PurvaPhalguni => "Purva Phalguni",
            Self::UttaraPhalguni => "Uttara Phalguni",
            Self::Hasta => "Hasta",
            Self::Chitra => "Chitra",
            Self::Swati => "Swati",
            Self::Vishakha => "Vishakha",
            Self::Anuradha => "Anuradha",
            Self::Jyeshtha => "Jyeshtha",
            Self::Mula => "Mula",
            Self::PurvaAshadha => "Purva Ashadha",
            Self::UttaraAshadha => "Uttara Ashadha",
            Self::Shravana => "Shravana",
            Self::Dhanishta => "Dhanishta",
            Self::Shatabhisha => "Shatabhisha",
            Self::PurvaBhadrapada => "Purva Bhadrapada",
            Self::UttaraBhadrapada => "Uttara Bhadrapada",
            Self::Revati => "Revati",
        }
    }

    /// Tamil display label.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Ashwini => "அசுவினி",
            Self::Bharani => "பரணி",
            Self::Krittika => "கார்த்திகை",
            Self::Rohini => "ரோகிணி",
            Self::Mrigashira => "மிருகசீரிடம்",
            Self::Ardra => "திருவாதிரை",
            Self::Punarvasu => "புனர்பூசம்",
            Self::Pushya => "பூசம்",
            Self::Ashlesha => "ஆயில்யம்",
            Self::Magha => "மகம்",
            Self::PurvaPhalguni => "பூரம்",
            Self::UttaraPhalguni => "உத்திரம்",
            Self::Hasta => "ஹஸ்தம்",
            Self::Chitra => "சித்திரை",
            Self::Swati => "சுவாதி",
            Self::Vishakha => "விசாகம்",
            Self::Anuradha => "அனுஷம்",
            Self::Jyeshtha => "கேட்டை",
            Self::Mula => "மூலம்",
            Self::PurvaAshadha => "பூராடம்",
            Self::UttaraAshadha => "உத்திராடம்",
            Self::Shravana => "திருவோணம்",
            Self::Dhanishta => "அவிட்டம்",
            Self::Shatabhisha => "சதயம்",
            Self::PurvaBhadrapada => "பூரட்டாதி",
            Self::UttaraBhadrapada => "உத்திரட்டாதி",
            Self::Revati => "ரேவதி",
        }
    }

    /// Position in [`ALL_NAKSHATRAS`], Ashwini = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// 1-based nakshatra number (Ashwini=1 .. Revati=27).
    pub const fn number(self) -> u8 {
        self.index() + 1
    }

    /// Ruling graha, drawn cyclically from the Vimshottari sequence.
    pub const fn lord(self) -> Graha {
        VIMSHOTTARI_SEQUENCE[(self.index() % 9) as usize]
    }

    /// Sidereal longitude where this nakshatra begins.
    pub fn start_deg(self) -> f64 {
        self.index() as f64 * NAKSHATRA_SPAN
    }

    /// Nakshatra for a 1-based number. Returns None outside 1..=27.
    pub fn from_number(number: u8) -> Option<Nakshatra> {
        number
            .checked_sub(1)
            .and_then(|i| ALL_NAKSHATRAS.get(i as usize).copied())
    }

    pub const fn all() -> &'static [Nakshatra; 27] {
        &ALL_NAKSHATRAS
    }
}

impl std::fmt::Display for Nakshatra {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Mansion and quarter occupied by a sidereal longitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct NakshatraInfo {
    pub nakshatra: Nakshatra,
    /// Same as `nakshatra.index()`.
    pub nakshatra_index: u8,
    /// 1-4.
    pub pada: u8,
    pub degrees_in_nakshatra: f64,
    pub degrees_in_pada: f64,
}

/// Classify a sidereal longitude into nakshatra and pada.
pub fn nakshatra_from_longitude(sidereal_lon_deg: f64) -> NakshatraInfo {
    let lon = normalize_360(sidereal_lon_deg);
    let nakshatra_index = ((lon / NAKSHATRA_SPAN) as u8).min(26);
    let degrees_in_nakshatra = lon - f64::from(nakshatra_index) * NAKSHATRA_SPAN;
    let quarter = ((degrees_in_nakshatra / PADA_SPAN) as u8).min(3);
    NakshatraInfo {
        nakshatra: ALL_NAKSHATRAS[nakshatra_index as usize],
        nakshatra_index,
        pada: quarter + 1,
        degrees_in_nakshatra,
        degrees_in_pada: degrees_in_nakshatra - f64::from(quarter) * PADA_SPAN,
    }
}
