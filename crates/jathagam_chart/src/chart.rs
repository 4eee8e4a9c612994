//! Chart construction.
//!
//! A [`Chart`] is built once per (instant, location) and never updated.
//! Positions are geocentric and depend only on the instant; the ascendant
//! and houses depend on the location too.

use chrono::{DateTime, Utc};
use jathagam_base::{
    Bhava, DashaPeriod, DoshaFinding, Graha, MoonSign, Placements, YogaFinding, active_period,
    check_location, equal_bhavas, evaluate_doshas, evaluate_yogas, vimshottari_mahadashas,
};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ascendant::{Ascendant, compute_ascendant};
use crate::config::ChartConfig;
use crate::error::Result;
use crate::positions::{BodyPosition, assemble_positions};
use crate::provider::PositionProvider;
use crate::time::julian_day;

/// Birth moment and place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BirthInfo {
    pub instant: DateTime<Utc>,
    /// Degrees, north positive.
    pub latitude: f64,
    /// Degrees, east positive.
    pub longitude: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place: Option<String>,
}

impl BirthInfo {
    pub fn new(instant: DateTime<Utc>, latitude: f64, longitude: f64) -> Self {
        Self {
            instant,
            latitude,
            longitude,
            name: None,
            place: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_place(mut self, place: impl Into<String>) -> Self {
        self.place = Some(place.into());
        self
    }
}

/// A complete birth chart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Chart {
    pub birth: BirthInfo,
    pub julian_day: f64,
    /// Ayanamsa applied at the birth instant, degrees.
    pub ayanamsa: f64,
    pub ascendant: Ascendant,
    /// Indexed by [`Graha::index`].
    pub positions: [BodyPosition; 9],
    pub houses: [Bhava; 12],
    pub dashas: Vec<DashaPeriod>,
    pub yogas: Vec<YogaFinding>,
    pub doshas: Vec<DoshaFinding>,
}

impl Chart {
    pub fn position(&self, graha: Graha) -> &BodyPosition {
        &self.positions[graha.index() as usize]
    }

    pub fn moon(&self) -> &BodyPosition {
        self.position(Graha::Chandra)
    }

    /// Placements in the shape the rule engine reads.
    pub fn placements(&self) -> Placements {
        Placements {
            ascendant: self.ascendant.position,
            grahas: self.positions.map(|p| p.position),
        }
    }

    /// Moon nakshatra and rashi, the inputs to porutham matching.
    pub fn moon_sign(&self) -> MoonSign {
        MoonSign::from(&self.moon().position)
    }

    /// The mahadasha running at `instant`, if inside the 120-year cycle.
    pub fn current_dasha(&self, instant: DateTime<Utc>) -> Option<&DashaPeriod> {
        active_period(&self.dashas, instant)
    }
}

/// Build a chart from a position provider.
///
/// Location is validated before any provider call. Base position and
/// sidereal time failures propagate; the retrograde sample and node
/// fallbacks are recorded on the positions instead.
pub fn build_chart<P: PositionProvider + ?Sized>(
    provider: &P,
    birth: BirthInfo,
    config: &ChartConfig,
) -> Result<Chart> {
    config.validate()?;
    check_location(birth.latitude, birth.longitude)?;

    let instant = birth.instant;
    let jd = julian_day(instant);
    let ayanamsa = config.ayanamsa.at_jd(jd);

    let positions = assemble_positions(provider, instant, config)?;
    let ascendant = compute_ascendant(provider, instant, birth.latitude, birth.longitude, config)?;
    let houses = equal_bhavas(ascendant.longitude());

    let moon_lon = positions[Graha::Chandra.index() as usize].longitude();
    let dashas = vimshottari_mahadashas(moon_lon, instant)?;

    let mut chart = Chart {
        birth,
        julian_day: jd,
        ayanamsa,
        ascendant,
        positions,
        houses,
        dashas,
        yogas: Vec::new(),
        doshas: Vec::new(),
    };
    let placements = chart.placements();
    chart.yogas = evaluate_yogas(&placements);
    chart.doshas = evaluate_doshas(&placements);

    debug!(
        %instant,
        jd,
        ascendant = chart.ascendant.longitude(),
        yogas = chart.yogas.len(),
        doshas = chart.doshas.len(),
        "built chart"
    );

    Ok(chart)
}
