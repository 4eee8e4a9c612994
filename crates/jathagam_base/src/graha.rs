//! The nine grahas, their display labels, and rashi lordship.
//!
//! Sun through Saturn are observed bodies supplied by a position source.
//! Rahu and Ketu are the lunar nodes, computed rather than observed.

use serde::Serialize;

use crate::rashi::{ALL_RASHIS, Rashi};

/// A graha. Variant order is the traditional weekday-lord order with the
/// nodes last.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[repr(u8)]
pub enum Graha {
    #[serde(rename = "Sun")]
    Surya,
    #[serde(rename = "Moon")]
    Chandra,
    #[serde(rename = "Mars")]
    Mangal,
    #[serde(rename = "Mercury")]
    Buddh,
    #[serde(rename = "Jupiter")]
    Guru,
    #[serde(rename = "Venus")]
    Shukra,
    #[serde(rename = "Saturn")]
    Shani,
    Rahu,
    Ketu,
}

/// Every graha, indexable by [`Graha::index`].
pub const ALL_GRAHAS: [Graha; 9] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
    Graha::Rahu,
    Graha::Ketu,
];

/// Sun through Saturn: the bodies a position source is asked for.
pub const SAPTA_GRAHAS: [Graha; 7] = [
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Buddh,
    Graha::Guru,
    Graha::Shukra,
    Graha::Shani,
];

/// Natural benefics checked by the kendra yoga rule.
pub const BENEFICS: [Graha; 4] = [Graha::Guru, Graha::Shukra, Graha::Buddh, Graha::Chandra];

impl Graha {
    /// Traditional name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Surya => "Surya",
            Self::Chandra => "Chandra",
            Self::Mangal => "Mangal",
            Self::Buddh => "Buddh",
            Self::Guru => "Guru",
            Self::Shukra => "Shukra",
            Self::Shani => "Shani",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// English name of the graha. This is the canonical display name.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Surya => "Sun",
            Self::Chandra => "Moon",
            Self::Mangal => "Mars",
            Self::Buddh => "Mercury",
            Self::Guru => "Jupiter",
            Self::Shukra => "Venus",
            Self::Shani => "Saturn",
            Self::Rahu => "Rahu",
            Self::Ketu => "Ketu",
        }
    }

    /// Tamil display label.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Surya => "சூரியன்",
            Self::Chandra => "சந்திரன்",
            Self::Mangal => "செவ்வாய்",
            Self::Buddh => "புதன்",
            Self::Guru => "குரு",
            Self::Shukra => "சுக்ரன்",
            Self::Shani => "சனி",
            Self::Rahu => "ராகு",
            Self::Ketu => "கேது",
        }
    }

    /// Position in [`ALL_GRAHAS`], Surya = 0.
    pub const fn index(self) -> u8 {
        self as u8
    }

    /// Whether this graha is a lunar node (computed, not observed).
    pub const fn is_node(self) -> bool {
        matches!(self, Self::Rahu | Self::Ketu)
    }

    /// Look up a graha by English or Sanskrit name, case-insensitive.
    pub fn from_name(name: &str) -> Option<Graha> {
        ALL_GRAHAS.into_iter().find(|g| {
            g.english_name().eq_ignore_ascii_case(name) || g.name().eq_ignore_ascii_case(name)
        })
    }
}

impl std::fmt::Display for Graha {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.english_name())
    }
}

/// Lord of a rashi. Mars, Venus, Mercury, Jupiter and Saturn each rule two
/// signs; the Sun and Moon one each; the nodes none.
pub const fn rashi_lord(rashi: Rashi) -> Graha {
    match rashi {
        Rashi::Mesha => Graha::Mangal,
        Rashi::Vrishabha => Graha::Shukra,
        Rashi::Mithuna => Graha::Buddh,
        Rashi::Karka => Graha::Chandra,
        Rashi::Simha => Graha::Surya,
        Rashi::Kanya => Graha::Buddh,
        Rashi::Tula => Graha::Shukra,
        Rashi::Vrischika => Graha::Mangal,
        Rashi::Dhanu => Graha::Guru,
        Rashi::Makara => Graha::Shani,
        Rashi::Kumbha => Graha::Shani,
        Rashi::Meena => Graha::Guru,
    }
}

/// Lord of the rashi at a 0-based index, `None` past Meena.
pub fn rashi_lord_by_index(rashi_index: u8) -> Option<Graha> {
    ALL_RASHIS.get(rashi_index as usize).map(|&r| rashi_lord(r))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_matches_table_position() {
        for (i, g) in ALL_GRAHAS.into_iter().enumerate() {
            assert_eq!(usize::from(g.index()), i);
            assert_eq!(g.is_node(), i >= 7);
        }
        assert_eq!(&ALL_GRAHAS[..7], &SAPTA_GRAHAS[..]);
    }

    #[test]
    fn names_resolve_both_ways() {
        for g in ALL_GRAHAS {
            assert_eq!(Graha::from_name(g.english_name()), Some(g));
            assert_eq!(Graha::from_name(&g.name().to_uppercase()), Some(g));
            assert!(!g.tamil_name().is_empty());
        }
        assert_eq!(Graha::from_name("Pluto"), None);
    }

    #[test]
    fn each_sign_has_one_lord() {
        let owned = |g: Graha| ALL_RASHIS.iter().filter(|&&r| rashi_lord(r) == g).count();
        assert_eq!(owned(Graha::Surya), 1);
        assert_eq!(owned(Graha::Chandra), 1);
        for g in [Graha::Mangal, Graha::Buddh, Graha::Guru, Graha::Shukra, Graha::Shani] {
            assert_eq!(owned(g), 2, "{g}");
        }
        assert_eq!(owned(Graha::Rahu) + owned(Graha::Ketu), 0);
        assert_eq!(rashi_lord_by_index(4), Some(Graha::Surya));
        assert_eq!(rashi_lord_by_index(12), None);
    }

    #[test]
    fn display_uses_english_name() {
        assert_eq!(Graha::Guru.to_string(), "Jupiter");
        assert_eq!(Graha::Ketu.to_string(), "Ketu");
    }
}
