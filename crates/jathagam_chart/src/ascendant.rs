//! Sidereal ascendant from time and observer location.

use chrono::{DateTime, Utc};
use jathagam_base::{
    Graha, ZodiacPosition, ascendant_tropical_deg, check_location, classify, mc_tropical_deg,
    obliquity_deg, ramc_deg, to_sidereal,
};
use serde::Serialize;

use crate::config::ChartConfig;
use crate::error::{ProviderError, Result};
use crate::provider::PositionProvider;
use crate::time::{julian_centuries, julian_day};

/// The rising degree, classified like any graha position.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Ascendant {
    #[serde(flatten)]
    pub position: ZodiacPosition,
    /// Tropical longitude before ayanamsa correction.
    pub tropical_longitude: f64,
    /// Lord of the rising rashi.
    pub lord: Graha,
    /// Sidereal midheaven at the same instant and place.
    pub midheaven: ZodiacPosition,
}

impl Ascendant {
    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }
}

/// Compute the ascendant for an observer at `latitude_deg`, `longitude_deg`
/// (east positive).
///
/// The location is validated before the provider is consulted.
pub fn compute_ascendant<P: PositionProvider + ?Sized>(
    provider: &P,
    instant: DateTime<Utc>,
    latitude_deg: f64,
    longitude_deg: f64,
    config: &ChartConfig,
) -> Result<Ascendant> {
    check_location(latitude_deg, longitude_deg)?;

    let gast = provider.apparent_sidereal_time(instant)?;
    if !gast.is_finite() {
        return Err(ProviderError::Backend(format!("non-finite sidereal time at {instant}")).into());
    }

    let ramc = ramc_deg(gast, longitude_deg);
    let eps = obliquity_deg(julian_centuries(instant));
    let tropical = ascendant_tropical_deg(ramc, latitude_deg, eps);
    let aya = config.ayanamsa.at_jd(julian_day(instant));
    let position = classify(to_sidereal(tropical, aya));
    let midheaven = classify(to_sidereal(mc_tropical_deg(ramc, eps), aya));

    Ok(Ascendant {
        position,
        tropical_longitude: tropical,
        lord: position.rashi_lord(),
        midheaven,
    })
}
