//! Yoga and dosha rule engine.
//!
//! Each rule is an independent function over the chart's placements. Every
//! rule runs on every chart and all matches are collected; rules never see
//! each other's output.

use serde::Serialize;

use crate::graha::{ALL_GRAHAS, BENEFICS, Graha, SAPTA_GRAHAS};
use crate::locator::ZodiacPosition;
use crate::util::{house_from, is_kendra};

/// Houses from the lagna that give Mangal dosha.
pub const MANGAL_DOSHA_HOUSES: [u8; 6] = [1, 2, 4, 7, 8, 12];

/// Sidereal placements of the ascendant and all nine grahas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placements {
    pub ascendant: ZodiacPosition,
    /// Indexed by [`Graha::index`].
    pub grahas: [ZodiacPosition; 9],
}

impl Placements {
    /// Placement of one graha.
    pub fn of(&self, graha: Graha) -> &ZodiacPosition {
        &self.grahas[graha.index() as usize]
    }

    /// House of `graha` counted from the lagna, 1-12.
    pub fn house_of(&self, graha: Graha) -> u8 {
        house_from(self.of(graha).rashi.index(), self.ascendant.rashi.index())
    }

    /// Iterate over `(graha, placement)` pairs in traditional order.
    pub fn iter(&self) -> impl Iterator<Item = (Graha, &ZodiacPosition)> {
        ALL_GRAHAS.into_iter().zip(self.grahas.iter())
    }
}

/// Classification of a yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YogaKind {
    Benefic,
    #[serde(rename = "Raja Yoga")]
    RajaYoga,
    Karmic,
}

impl YogaKind {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Benefic => "Benefic",
            Self::RajaYoga => "Raja Yoga",
            Self::Karmic => "Karmic",
        }
    }
}

/// Strength label of a yoga.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum YogaStrength {
    Good,
    Excellent,
    Neutral,
}

impl YogaStrength {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Good => "Good",
            Self::Excellent => "Excellent",
            Self::Neutral => "Neutral",
        }
    }

    /// Whether the yoga counts as favourable.
    pub const fn is_favourable(self) -> bool {
        matches!(self, Self::Good | Self::Excellent)
    }
}

/// Severity label of a dosha.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum DoshaSeverity {
    Medium,
    High,
}

impl DoshaSeverity {
    pub const fn name(self) -> &'static str {
        match self {
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

/// A beneficial combination found in a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct YogaFinding {
    pub name: String,
    pub kind: YogaKind,
    pub strength: YogaStrength,
    pub description: String,
}

/// An affliction found in a chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DoshaFinding {
    pub name: String,
    pub severity: DoshaSeverity,
    pub description: String,
    /// House from the lagna, or `None` when the dosha spans the whole chart.
    pub house: Option<u8>,
}

type YogaRule = fn(&Placements, &mut Vec<YogaFinding>);
type DoshaRule = fn(&Placements, &mut Vec<DoshaFinding>);

const YOGA_RULES: [YogaRule; 3] = [benefics_in_kendra, gaja_kesari, rahu_ketu_axis];
const DOSHA_RULES: [DoshaRule; 3] = [mangal_dosha, kala_sarpa_dosha, pitra_dosha];

/// Evaluate every yoga rule and collect all matches.
pub fn evaluate_yogas(placements: &Placements) -> Vec<YogaFinding> {
    let mut found = Vec::new();
    for rule in YOGA_RULES {
        rule(placements, &mut found);
    }
    found
}

/// Evaluate every dosha rule and collect all matches.
pub fn evaluate_doshas(placements: &Placements) -> Vec<DoshaFinding> {
    let mut found = Vec::new();
    for rule in DOSHA_RULES {
        rule(placements, &mut found);
    }
    found
}

fn benefics_in_kendra(p: &Placements, out: &mut Vec<YogaFinding>) {
    for graha in BENEFICS {
        let house = p.house_of(graha);
        if is_kendra(house) {
            out.push(YogaFinding {
                name: format!("{graha} in Kendra"),
                kind: YogaKind::Benefic,
                strength: YogaStrength::Good,
                description: format!(
                    "{graha} is in a Kendra house ({house}), which strengthens the chart"
                ),
            });
        }
    }
}

/// Jupiter in a kendra counted from the Moon.
fn gaja_kesari(p: &Placements, out: &mut Vec<YogaFinding>) {
    let jupiter = p.of(Graha::Guru).rashi.index();
    let moon = p.of(Graha::Chandra).rashi.index();
    if is_kendra(house_from(jupiter, moon)) {
        out.push(YogaFinding {
            name: "Gaja Kesari Yoga".to_string(),
            kind: YogaKind::RajaYoga,
            strength: YogaStrength::Excellent,
            description: "Jupiter in Kendra from Moon - brings wisdom, prosperity and good character"
                .to_string(),
        });
    }
}

/// Always reported.
fn rahu_ketu_axis(p: &Placements, out: &mut Vec<YogaFinding>) {
    let rahu = p.house_of(Graha::Rahu);
    let ketu = p.house_of(Graha::Ketu);
    out.push(YogaFinding {
        name: "Rahu-Ketu Axis".to_string(),
        kind: YogaKind::Karmic,
        strength: YogaStrength::Neutral,
        description: format!(
            "Rahu in house {rahu}, Ketu in house {ketu} - indicates karmic lessons and growth areas"
        ),
    });
}

fn mangal_dosha(p: &Placements, out: &mut Vec<DoshaFinding>) {
    let house = p.house_of(Graha::Mangal);
    if MANGAL_DOSHA_HOUSES.contains(&house) {
        out.push(DoshaFinding {
            name: "Mangal Dosha (Kuja Dosha)".to_string(),
            severity: DoshaSeverity::Medium,
            description: format!(
                "Mars in house {house} - may affect marriage and relationships. \
                 Remedies: worship Lord Hanuman, recite Hanuman Chalisa"
            ),
            house: Some(house),
        });
    }
}

/// Whether all seven classical grahas lie on the arc between Ketu and Rahu.
///
/// When Ketu's longitude is below Rahu's the arc is the direct interval
/// `[ketu, rahu]`. Otherwise a graha qualifies when it is at or past Rahu or
/// at or before Ketu. The two branches are not mirror images of each other
/// and must not be merged.
pub fn hemmed_by_nodes(p: &Placements) -> bool {
    let rahu = p.of(Graha::Rahu).longitude;
    let ketu = p.of(Graha::Ketu).longitude;
    SAPTA_GRAHAS.iter().all(|&g| {
        let lon = p.of(g).longitude;
        if ketu < rahu {
            ketu <= lon && lon <= rahu
        } else {
            lon >= rahu || lon <= ketu
        }
    })
}

fn kala_sarpa_dosha(p: &Placements, out: &mut Vec<DoshaFinding>) {
    if hemmed_by_nodes(p) {
        out.push(DoshaFinding {
            name: "Kala Sarpa Dosha".to_string(),
            severity: DoshaSeverity::High,
            description: "All planets hemmed between Rahu and Ketu - may cause delays and \
                          obstacles. Remedies: worship Lord Shiva, visit Rahu-Ketu temples"
                .to_string(),
            house: None,
        });
    }
}

/// Sun and Rahu in the same rashi.
fn pitra_dosha(p: &Placements, out: &mut Vec<DoshaFinding>) {
    if p.of(Graha::Surya).rashi == p.of(Graha::Rahu).rashi {
        out.push(DoshaFinding {
            name: "Pitra Dosha (Sun-Rahu)".to_string(),
            severity: DoshaSeverity::Medium,
            description: "Sun conjunct Rahu - ancestral issues. Remedies: perform Shraddha, \
                          donate to charity"
                .to_string(),
            house: Some(p.house_of(Graha::Surya)),
        });
    }
}
