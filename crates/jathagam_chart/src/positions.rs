//! Per-body position assembly.
//!
//! Bridges the [`PositionProvider`] and the pure-math locator. The seven
//! classical grahas are observed; Rahu and Ketu are derived. Two failures
//! are absorbed with a recorded fallback (forward retrograde sample, node
//! polynomial); every other provider failure propagates.

use chrono::{DateTime, Duration, Utc};
use jathagam_base::{
    Graha, SAPTA_GRAHAS, ZodiacPosition, classify, ketu_from_rahu, mean_rahu_deg,
    rahu_from_moon, to_sidereal,
};
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::{ChartConfig, NodeMode};
use crate::error::{ProviderError, Result};
use crate::provider::PositionProvider;
use crate::time::{julian_centuries, julian_day};

/// How the retrograde flag of a body was decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MotionSource {
    /// Compared against a forward sample.
    Sampled,
    /// Fixed by convention: Sun and Moon direct, the nodes retrograde.
    Fixed,
    /// The forward sample failed; the body is reported direct.
    SampleUnavailable,
}

/// Which path produced the Rahu longitude.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeSource {
    MeanPolynomial,
    MoonOpposition,
}

/// Sidereal placement of one graha at the chart instant.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct BodyPosition {
    pub graha: Graha,
    #[serde(flatten)]
    pub position: ZodiacPosition,
    pub is_retrograde: bool,
    pub motion: MotionSource,
    /// Set for Rahu and Ketu only.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub node_source: Option<NodeSource>,
}

impl BodyPosition {
    /// Sidereal longitude in [0, 360).
    pub fn longitude(&self) -> f64 {
        self.position.longitude
    }
}

/// Sidereal longitude of a classical graha under a fixed ayanamsa.
fn sidereal_longitude<P: PositionProvider + ?Sized>(
    provider: &P,
    graha: Graha,
    instant: DateTime<Utc>,
    aya: f64,
) -> std::result::Result<f64, ProviderError> {
    let tropical = provider.tropical_longitude(graha, instant)?;
    if !tropical.is_finite() {
        return Err(ProviderError::Backend(format!(
            "non-finite longitude for {graha} at {instant}"
        )));
    }
    Ok(to_sidereal(tropical, aya))
}

fn sample_offset(days: f64) -> Duration {
    Duration::milliseconds((days * 86_400_000.0).round() as i64)
}

/// Retrograde iff the forward sample moved backwards across the short arc.
pub fn is_backward(current_deg: f64, next_deg: f64) -> bool {
    (next_deg - current_deg + 360.0).rem_euclid(360.0) > 180.0
}

fn observe<P: PositionProvider + ?Sized>(
    provider: &P,
    graha: Graha,
    instant: DateTime<Utc>,
    config: &ChartConfig,
) -> Result<BodyPosition> {
    // The forward sample reuses the birth-instant ayanamsa so precession
    // never reads as backward motion.
    let aya = config.ayanamsa.at_jd(julian_day(instant));
    let lon = sidereal_longitude(provider, graha, instant, aya)?;

    let (is_retrograde, motion) = match graha {
        Graha::Surya | Graha::Chandra => (false, MotionSource::Fixed),
        _ => {
            let next = instant
                .checked_add_signed(sample_offset(config.retrograde_sample_days))
                .ok_or(ProviderError::OutOfRange(instant))
                .and_then(|later| sidereal_longitude(provider, graha, later, aya));
            match next {
                Ok(next_lon) => (is_backward(lon, next_lon), MotionSource::Sampled),
                Err(err) => {
                    warn!(%graha, %instant, error = %err, "forward sample failed, assuming direct motion");
                    (false, MotionSource::SampleUnavailable)
                }
            }
        }
    };

    Ok(BodyPosition {
        graha,
        position: classify(lon),
        is_retrograde,
        motion,
        node_source: None,
    })
}

fn node_pair(rahu_deg: f64, source: NodeSource) -> (BodyPosition, BodyPosition) {
    let node = |graha, lon| BodyPosition {
        graha,
        position: classify(lon),
        is_retrograde: true,
        motion: MotionSource::Fixed,
        node_source: Some(source),
    };
    (
        node(Graha::Rahu, rahu_deg),
        node(Graha::Ketu, ketu_from_rahu(rahu_deg)),
    )
}

/// Sidereal Rahu longitude and the path that produced it.
fn rahu_longitude(
    instant: DateTime<Utc>,
    moon_deg: f64,
    config: &ChartConfig,
) -> (f64, NodeSource) {
    if config.node_mode == NodeMode::MeanPolynomial {
        let jd = julian_day(instant);
        match mean_rahu_deg(julian_centuries(instant)) {
            Some(tropical) => {
                return (
                    to_sidereal(tropical, config.ayanamsa.at_jd(jd)),
                    NodeSource::MeanPolynomial,
                );
            }
            None => warn!(%instant, "node polynomial unavailable, using Moon opposition"),
        }
    }
    (rahu_from_moon(moon_deg), NodeSource::MoonOpposition)
}

/// Assemble all nine positions, indexed by [`Graha::index`].
pub fn assemble_positions<P: PositionProvider + ?Sized>(
    provider: &P,
    instant: DateTime<Utc>,
    config: &ChartConfig,
) -> Result<[BodyPosition; 9]> {
    let [sun, moon, mars, mercury, jupiter, venus, saturn] =
        SAPTA_GRAHAS.map(|graha| observe(provider, graha, instant, config));
    let moon = moon?;
    let (rahu_deg, source) = rahu_longitude(instant, moon.longitude(), config);
    let (rahu, ketu) = node_pair(rahu_deg, source);

    let positions = [
        sun?, moon, mars?, mercury?, jupiter?, venus?, saturn?, rahu, ketu,
    ];
    for body in &positions {
        debug!(
            graha = %body.graha,
            longitude = body.longitude(),
            rashi = body.position.rashi.name(),
            retrograde = body.is_retrograde,
            motion = ?body.motion,
            "assembled position"
        );
    }
    Ok(positions)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use jathagam_base::ALL_GRAHAS;
    use crate::provider::TablePositionProvider;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2000, 1, 1, 12, 0, 0).unwrap()
    }

    fn table(now: [f64; 7], next: [f64; 7]) -> TablePositionProvider {
        let t1 = t0() + Duration::days(1);
        let mut p = TablePositionProvider::new();
        for (i, g) in SAPTA_GRAHAS.into_iter().enumerate() {
            p = p.with_longitude(t0(), g, now[i]).with_longitude(t1, g, next[i]);
        }
        p
    }

    #[test]
    fn backward_detection_handles_wrap() {
        assert!(!is_backward(10.0, 11.0));
        assert!(is_backward(11.0, 10.0));
        assert!(!is_backward(359.5, 0.5));
        assert!(is_backward(0.5, 359.5));
        assert!(!is_backward(10.0, 10.0));
    }

    #[test]
    fn assembles_in_graha_order() {
        let p = table(
            [280.0, 100.0, 30.0, 290.0, 40.0, 260.0, 50.0],
            [281.0, 113.0, 30.7, 289.0, 40.1, 261.2, 49.9],
        );
        let out = assemble_positions(&p, t0(), &ChartConfig::default()).unwrap();
        for (i, g) in ALL_GRAHAS.into_iter().enumerate() {
            assert_eq!(out[i].graha, g);
        }
        assert!(!out[Graha::Mangal.index() as usize].is_retrograde);
        assert!(out[Graha::Buddh.index() as usize].is_retrograde);
        assert!(out[Graha::Shani.index() as usize].is_retrograde);
        assert_eq!(out[Graha::Surya.index() as usize].motion, MotionSource::Fixed);
        assert!(out[Graha::Rahu.index() as usize].is_retrograde);
        assert!(out[Graha::Ketu.index() as usize].is_retrograde);
    }

    #[test]
    fn stationary_body_reads_direct() {
        let p = table([100.0; 7], [100.0; 7]);
        let out = assemble_positions(&p, t0(), &ChartConfig::default()).unwrap();
        for g in [Graha::Mangal, Graha::Buddh, Graha::Guru, Graha::Shukra, Graha::Shani] {
            let body = out[g.index() as usize];
            assert_eq!(body.motion, MotionSource::Sampled);
            assert!(!body.is_retrograde, "{g} reported retrograde");
        }
    }

    #[test]
    fn ketu_opposes_rahu() {
        let p = table([0.0; 7], [0.0; 7]);
        let out = assemble_positions(&p, t0(), &ChartConfig::default()).unwrap();
        let rahu = out[Graha::Rahu.index() as usize].longitude();
        let ketu = out[Graha::Ketu.index() as usize].longitude();
        let sep = (ketu - rahu).rem_euclid(360.0);
        assert!((sep - 180.0).abs() < 1e-9, "sep = {sep}");
    }
}
