//! Ten-factor (dasa porutham) marriage compatibility.
//!
//! Every factor depends only on the two Moon placements: the nakshatra
//! numbers (1-27) and rashi numbers (1-12) of the male and female charts.
//! All ten factors are scored independently and summed out of 37 points.
//!
//! Classification tables (gana, yoni, rajju, vasya, vedha, lord friendships)
//! follow the common Tamil tradition.

use serde::Serialize;

use crate::graha::Graha;
use crate::locator::ZodiacPosition;
use crate::nakshatra::Nakshatra;
use crate::rashi::Rashi;

/// Sum of all factor maxima.
pub const MAX_POINTS: f64 = 37.0;

/// The ten poruthams in evaluation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Porutham {
    Dina,
    Gana,
    Mahendra,
    StreeDeergha,
    Yoni,
    Rasi,
    RasiAdhipathi,
    Vasya,
    Rajju,
    Vedha,
}

/// All ten poruthams in evaluation order.
pub const ALL_PORUTHAMS: [Porutham; 10] = [
    Porutham::Dina,
    Porutham::Gana,
    Porutham::Mahendra,
    Porutham::StreeDeergha,
    Porutham::Yoni,
    Porutham::Rasi,
    Porutham::RasiAdhipathi,
    Porutham::Vasya,
    Porutham::Rajju,
    Porutham::Vedha,
];

/// Weight of a factor in traditional practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum Importance {
    Medium,
    High,
    #[serde(rename = "Very High")]
    VeryHigh,
}

impl Porutham {
    /// Traditional name.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Dina => "Dina Porutham",
            Self::Gana => "Gana Porutham",
            Self::Mahendra => "Mahendra Porutham",
            Self::StreeDeergha => "Stree Deergha Porutham",
            Self::Yoni => "Yoni Porutham",
            Self::Rasi => "Rasi Porutham",
            Self::RasiAdhipathi => "Rasi Adhipathi Porutham",
            Self::Vasya => "Vasya Porutham",
            Self::Rajju => "Rajju Porutham",
            Self::Vedha => "Vedha Porutham",
        }
    }

    /// Plain-English description of what the factor measures.
    pub const fn english_name(self) -> &'static str {
        match self {
            Self::Dina => "Daily Compatibility",
            Self::Gana => "Temperament Match",
            Self::Mahendra => "Progeny & Prosperity",
            Self::StreeDeergha => "Longevity & Well-being",
            Self::Yoni => "Physical Compatibility",
            Self::Rasi => "Zodiac Sign Match",
            Self::RasiAdhipathi => "Rasi Lord Match",
            Self::Vasya => "Mutual Attraction",
            Self::Rajju => "Safety & Longevity",
            Self::Vedha => "No Affliction",
        }
    }

    /// Tamil display label.
    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Dina => "தினப் பொருத்தம்",
            Self::Gana => "கணப் பொருத்தம்",
            Self::Mahendra => "மகேந்திரப் பொருத்தம்",
            Self::StreeDeergha => "ஸ்திரீ தீர்க்கப் பொருத்தம்",
            Self::Yoni => "யோனிப் பொருத்தம்",
            Self::Rasi => "ராசிப் பொருத்தம்",
            Self::RasiAdhipathi => "ராசியதிபதிப் பொருத்தம்",
            Self::Vasya => "வசியப் பொருத்தம்",
            Self::Rajju => "ரஜ்ஜுப் பொருத்தம்",
            Self::Vedha => "வேதைப் பொருத்தம்",
        }
    }

    /// Maximum points for this factor.
    pub const fn max_points(self) -> f64 {
        match self {
            Self::Dina => 3.0,
            Self::Gana => 6.0,
            Self::Mahendra => 2.0,
            Self::StreeDeergha => 3.0,
            Self::Yoni => 4.0,
            Self::Rasi => 7.0,
            Self::RasiAdhipathi => 5.0,
            Self::Vasya => 2.0,
            Self::Rajju => 3.0,
            Self::Vedha => 2.0,
        }
    }

    pub const fn importance(self) -> Importance {
        match self {
            Self::Gana | Self::Yoni | Self::Rasi | Self::Rajju => Importance::VeryHigh,
            Self::Vasya => Importance::Medium,
            _ => Importance::High,
        }
    }
}

/// Qualitative outcome of one factor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum FactorStatus {
    Excellent,
    Good,
    Average,
    Fair,
    #[serde(rename = "Not Present")]
    NotPresent,
    #[serde(rename = "Not Compatible")]
    NotCompatible,
    #[serde(rename = "Vedha Present")]
    VedhaPresent,
}

impl FactorStatus {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent",
            Self::Good => "Good",
            Self::Average => "Average",
            Self::Fair => "Fair",
            Self::NotPresent => "Not Present",
            Self::NotCompatible => "Not Compatible",
            Self::VedhaPresent => "Vedha Present",
        }
    }

    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Excellent => "மிக நல்லது",
            Self::Good => "நல்லது",
            Self::Average => "நடுத்தரம்",
            Self::Fair => "சாதாரணம்",
            Self::NotPresent => "இல்லை",
            Self::NotCompatible => "பொருந்தவில்லை",
            Self::VedhaPresent => "வேதை உள்ளது",
        }
    }
}

// ---------------------------------------------------------------------------
// Classification tables
// ---------------------------------------------------------------------------

/// Temperament class of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Gana {
    Deva,
    Manushya,
    Rakshasa,
}

const GANA: [Gana; 27] = {
    use Gana::*;
    [
        Deva, Manushya, Rakshasa, Manushya, Manushya, Deva, Manushya, Rakshasa, Manushya,
        Manushya, Rakshasa, Rakshasa, Deva, Manushya, Manushya, Rakshasa, Manushya, Rakshasa,
        Manushya, Rakshasa, Manushya, Deva, Deva, Rakshasa, Rakshasa, Deva, Deva,
    ]
};

/// Animal symbol (yoni) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Yoni {
    Horse,
    Elephant,
    Sheep,
    Serpent,
    Dog,
    Cat,
    Rat,
    Cow,
    Buffalo,
    Tiger,
    Deer,
    Lion,
    Monkey,
    Mongoose,
}

const YONI: [Yoni; 27] = {
    use Yoni::*;
    [
        Horse, Elephant, Sheep, Serpent, Dog, Cat, Rat, Cow, Buffalo, Tiger, Deer, Horse,
        Elephant, Serpent, Dog, Cat, Rat, Cow, Buffalo, Tiger, Deer, Horse, Lion, Monkey,
        Mongoose, Mongoose, Monkey,
    ]
};

impl Yoni {
    /// The one yoni hostile to this one.
    pub const fn enemy(self) -> Yoni {
        match self {
            Self::Horse => Self::Buffalo,
            Self::Buffalo => Self::Horse,
            Self::Elephant => Self::Lion,
            Self::Lion => Self::Elephant,
            Self::Sheep => Self::Monkey,
            Self::Monkey => Self::Sheep,
            Self::Serpent => Self::Mongoose,
            Self::Mongoose => Self::Serpent,
            Self::Dog => Self::Deer,
            Self::Deer => Self::Dog,
            Self::Cat => Self::Rat,
            Self::Rat => Self::Cat,
            Self::Cow => Self::Tiger,
            Self::Tiger => Self::Cow,
        }
    }
}

/// Body-zone class (rajju) of a nakshatra.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Rajju {
    Pada,
    Kati,
    Nabhi,
    Kanta,
    Uro,
    Siro,
}

const RAJJU: [Rajju; 27] = {
    use Rajju::*;
    [
        Pada, Pada, Pada, Kati, Kati, Kati, Nabhi, Nabhi, Nabhi, Kanta, Kanta, Kanta, Kanta,
        Kanta, Kanta, Uro, Uro, Uro, Siro, Siro, Siro, Pada, Pada, Pada, Kati, Kati, Kati,
    ]
};

/// Nakshatra number pairs (1-based) that afflict each other.
const VEDHA_PAIRS: [(u8, u8); 14] = [
    (1, 11),
    (2, 5),
    (3, 18),
    (4, 12),
    (6, 9),
    (7, 16),
    (8, 21),
    (10, 19),
    (13, 24),
    (14, 23),
    (15, 22),
    (17, 26),
    (20, 27),
    (25, 26),
];

/// Female rashi numbers attracted to each male rashi number (index 0 = Mesha).
const VASYA: [&[u8]; 12] = [
    &[1, 5, 9],
    &[2, 6, 10],
    &[3, 11],
    &[4, 8, 12],
    &[1, 5, 9],
    &[2, 6, 10],
    &[3, 7, 11],
    &[4, 8, 12],
    &[1, 5, 9],
    &[2, 6, 10],
    &[3, 7, 11],
    &[4, 8, 12],
];

/// Friends of each rashi lord for the Rasi Adhipathi factor.
///
/// Rahu and Ketu rule no sign and never appear here.
pub fn lord_friends(graha: Graha) -> &'static [Graha] {
    use Graha::*;
    match graha {
        Surya => &[Chandra, Mangal, Guru],
        Chandra => &[Surya, Buddh],
        Mangal => &[Surya, Chandra, Guru],
        Buddh => &[Surya, Shukra],
        Guru => &[Surya, Chandra, Mangal],
        Shukra => &[Buddh, Shani],
        Shani => &[Buddh, Shukra],
        Rahu | Ketu => &[],
    }
}

pub fn gana_of(nakshatra: Nakshatra) -> Gana {
    GANA[nakshatra.index() as usize]
}

pub fn yoni_of(nakshatra: Nakshatra) -> Yoni {
    YONI[nakshatra.index() as usize]
}

pub fn rajju_of(nakshatra: Nakshatra) -> Rajju {
    RAJJU[nakshatra.index() as usize]
}

// ---------------------------------------------------------------------------
// Report
// ---------------------------------------------------------------------------

/// Moon placement used for matching: nakshatra and rashi.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MoonSign {
    pub nakshatra: Nakshatra,
    pub rashi: Rashi,
}

impl From<&ZodiacPosition> for MoonSign {
    fn from(pos: &ZodiacPosition) -> Self {
        Self {
            nakshatra: pos.nakshatra,
            rashi: pos.rashi,
        }
    }
}

/// Score of one factor.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PoruthamFactor {
    pub porutham: Porutham,
    pub points: f64,
    pub max_points: f64,
    pub status: FactorStatus,
    pub importance: Importance,
    pub description: String,
}

/// Overall classification band.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum MatchBand {
    #[serde(rename = "Below Average")]
    BelowAverage,
    Average,
    Good,
    Excellent,
}

impl MatchBand {
    /// Band for a percentage: >= 80 Excellent, >= 60 Good, >= 40 Average.
    pub fn from_percentage(percentage: f64) -> MatchBand {
        if percentage >= 80.0 {
            Self::Excellent
        } else if percentage >= 60.0 {
            Self::Good
        } else if percentage >= 40.0 {
            Self::Average
        } else {
            Self::BelowAverage
        }
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Excellent => "Excellent Match",
            Self::Good => "Good Match",
            Self::Average => "Average Match",
            Self::BelowAverage => "Below Average Match",
        }
    }

    pub const fn tamil_name(self) -> &'static str {
        match self {
            Self::Excellent => "மிக நல்ல பொருத்தம்",
            Self::Good => "நல்ல பொருத்தம்",
            Self::Average => "நடுத்தர பொருத்தம்",
            Self::BelowAverage => "பொருத்தம் குறைவு",
        }
    }

    pub const fn recommendation(self) -> &'static str {
        match self {
            Self::Excellent => {
                "This is an excellent match with strong compatibility across multiple factors. \
                 Marriage is highly recommended."
            }
            Self::Good => {
                "This is a good match with favorable compatibility. \
                 Marriage can proceed with confidence."
            }
            Self::Average => {
                "This is an average match. \
                 Consult an experienced astrologer for detailed analysis and remedies."
            }
            Self::BelowAverage => {
                "The compatibility is below average. \
                 Detailed consultation and remedies are strongly recommended before proceeding."
            }
        }
    }
}

/// Full ten-factor compatibility report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CompatibilityReport {
    pub factors: Vec<PoruthamFactor>,
    pub total_points: f64,
    pub max_points: f64,
    /// Unrounded `100 * total / max`.
    pub percentage: f64,
    pub band: MatchBand,
    pub recommendation: &'static str,
    pub male: MoonSign,
    pub female: MoonSign,
}

impl CompatibilityReport {
    /// Score of one factor.
    pub fn factor(&self, porutham: Porutham) -> Option<&PoruthamFactor> {
        self.factors.iter().find(|f| f.porutham == porutham)
    }
}

// ---------------------------------------------------------------------------
// Factor rules
// ---------------------------------------------------------------------------

/// Forward distance from the male nakshatra to the female one, 0..27.
fn nak_distance(male: MoonSign, female: MoonSign) -> u8 {
    (female.nakshatra.index() as i16 - male.nakshatra.index() as i16).rem_euclid(27) as u8
}

fn factor(porutham: Porutham, points: f64, status: FactorStatus, description: String) -> PoruthamFactor {
    PoruthamFactor {
        porutham,
        points,
        max_points: porutham.max_points(),
        status,
        importance: porutham.importance(),
        description,
    }
}

fn dina(male: MoonSign, female: MoonSign) -> PoruthamFactor {
    // Unsigned gap, not the forward count used by Mahendra and Stree Deergha.
    let gap = female.nakshatra.number().abs_diff(male.nakshatra.number());
    let (points, status) = match gap % 9 {
        0 => (0.0, FactorStatus::NotCompatible),
        1 => (1.5, FactorStatus::Average),
        _ => (3.0, FactorStatus::Excellent),
    };
    factor(
        Porutham::Dina,
        points,
        status,
        "Indicates physical health, well-being and daily harmony between the couple.".into(),
    )
}

fn gana(male: MoonSign, female: MoonSign) -> PoruthamFactor {
    use Gana::*;
    let (m, f) = (gana_of(male.nakshatra), gana_of(female.nakshatra));
    let (points, status) = match (m, f) {
        _ if m == f => (6.0, FactorStatus::Excellent),
        (Deva, Manushya) | (Manushya, Deva) => (5.0, FactorStatus::Good),
        (Manushya, Rakshasa) | (Rakshasa, Manushya) => (1.0, FactorStatus::Fair),
        _ => (0.0, FactorStatus::NotCompatible),
    };
    factor(
        Porutham::Gana,
        points,
        status,
        format!("Male: {m:?}, Female: {f:?}. Indicates nature and behavior compatibility."),
    )
}

fn mahendra(male: MoonSign, female: MoonSign) -> PoruthamFactor {
    let (points, status) = match nak_distance(male, female) {
        4 | 7 | 10 | 13 | 16 | 19 | 22 | 25 => (2.0, FactorStatus::Good),
        _ => (0.0, FactorStatus::NotPresent),
    };
    factor(
        Porutham::Mahendra,
        points,
        status,
        "Ensures good children, wealth and prosperity in married life.".into(),
    )
}

fn stree_deergha(male: MoonSign, female: MoonSign) -> PoruthamFactor {
    let (points, status) = if nak_distance(male, female) >= 13 {
        (3.0, FactorStatus::Good)
    } else {
        (0.0, FactorStatus::NotPresent)
    };
    factor(
        Porutham::StreeDeergha,
        points,
        status,
        "Indicates long life and good health of the wife.".into(),
    )
}

fn yoni(male: MoonSign, female: MoonSign) -> PoruthamFactor {
    let (m, f) = (yoni_of(male.nakshatra), yoni_of(female.nakshatra));
    let (points, status) = if m == f {
        (4.0, FactorStatus::Excellent)
    } else if m.enemy() == f {
        (0.0, FactorStatus::NotCompatible)
    } else {
        (2.0, FactorStatus::Good)
    };
    factor(
        Porutham::Yoni,
        points,
        status,
        format!("Male: {m:?}, Female: {f:?}. Indicates physical and sexual compatibility."),
    )
}

fn rasi(male: MoonSign, female: MoonSign) -> PoruthamFactor {
    let diff = female.rashi.number().abs_diff(male.rashi.number());
    let (points, status) = match diff {
        2..=6 => (7.0, FactorStatus::Excellent),
        7..=9 => (4.0, FactorStatus::Good),
        _ => (1.0, FactorStatus::Fair),
    };
    factor(
        Porutham::Rasi,
        points,
        status,
        "Overall harmony based on Moon sign compatibility.".into(),
    )
}

fn rasi_adhipathi(male: MoonSign, female: MoonSign) -> PoruthamFactor {
    let (m, f) = (male.rashi.lord(), female.rashi.lord());
    let (points, status) = if m == f {
        (5.0, FactorStatus::Excellent)
    } else if lord_friends(m).contains(&f) || lord_friends(f).contains(&m) {
        (4.0, FactorStatus::Good)
    } else {
        (1.0, FactorStatus::Fair)
    };
    factor(
        Porutham::RasiAdhipathi,
        points,
        status,
        format!("Male Rasi Lord: {m}, Female Rasi Lord: {f}. Indicates mutual understanding."),
    )
}

fn vasya(male: MoonSign, female: MoonSign) -> PoruthamFactor {
    let attracted = VASYA[male.rashi.index() as usize];
    let (points, status) = if attracted.contains(&female.rashi.number()) {
        (2.0, FactorStatus::Good)
    } else {
        (0.0, FactorStatus::NotPresent)
    };
    factor(
        Porutham::Vasya,
        points,
        status,
        "Indicates natural attraction and magnetic pull between partners.".into(),
    )
}

fn rajju(male: MoonSign, female: MoonSign) -> PoruthamFactor {
    let (m, f) = (rajju_of(male.nakshatra), rajju_of(female.nakshatra));
    let (points, status) = if m != f {
        (3.0, FactorStatus::Good)
    } else {
        (0.0, FactorStatus::NotCompatible)
    };
    factor(
        Porutham::Rajju,
        points,
        status,
        format!("Male: {m:?}, Female: {f:?}. Critical for longevity of relationship."),
    )
}

/// Whether two nakshatras form one of the afflicting pairs, in either order.
///
/// Only the two members of a listed pair obstruct each other; a nakshatra
/// paired with itself never counts as Vedha.
pub fn has_vedha(a: Nakshatra, b: Nakshatra) -> bool {
    let (a, b) = (a.number(), b.number());
    VEDHA_PAIRS
        .iter()
        .any(|&(x, y)| (x, y) == (a, b) || (y, x) == (a, b))
}

fn vedha(male: MoonSign, female: MoonSign) -> PoruthamFactor {
    let (points, status) = if has_vedha(male.nakshatra, female.nakshatra) {
        (0.0, FactorStatus::VedhaPresent)
    } else {
        (2.0, FactorStatus::Good)
    };
    factor(
        Porutham::Vedha,
        points,
        status,
        "Ensures no mutual affliction between the nakshatras.".into(),
    )
}

const FACTOR_RULES: [fn(MoonSign, MoonSign) -> PoruthamFactor; 10] = [
    dina,
    gana,
    mahendra,
    stree_deergha,
    yoni,
    rasi,
    rasi_adhipathi,
    vasya,
    rajju,
    vedha,
];

/// Score all ten poruthams for a male and female Moon placement.
pub fn porutham(male: MoonSign, female: MoonSign) -> CompatibilityReport {
    let factors: Vec<PoruthamFactor> = FACTOR_RULES.iter().map(|rule| rule(male, female)).collect();
    let total_points: f64 = factors.iter().map(|f| f.points).sum();
    let percentage = 100.0 * total_points / MAX_POINTS;
    let band = MatchBand::from_percentage(percentage);

    CompatibilityReport {
        factors,
        total_points,
        max_points: MAX_POINTS,
        percentage,
        band,
        recommendation: band.recommendation(),
        male,
        female,
    }
}
