//! Porutham matching between two built charts.

use jathagam_base::{CompatibilityReport, porutham};
use tracing::debug;

use crate::chart::Chart;

/// Score the ten porutham factors from the two charts' Moon placements.
pub fn compatibility(male: &Chart, female: &Chart) -> CompatibilityReport {
    let report = porutham(male.moon_sign(), female.moon_sign());
    debug!(
        male = %male.moon_sign().nakshatra,
        female = %female.moon_sign().nakshatra,
        total = report.total_points,
        band = report.band.name(),
        "porutham"
    );
    report
}
