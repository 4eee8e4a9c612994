//! Instant to Julian Day conversion.
//!
//! UTC is used directly as the dynamical time scale. The TT-UTC offset is
//! about a minute, far below what the linear ayanamsa resolves.

use chrono::{DateTime, Utc};
use jathagam_base::ayanamsa::jd_to_centuries;

/// Julian Day of the Unix epoch (1970-01-01 00:00 UTC).
pub const UNIX_EPOCH_JD: f64 = 2_440_587.5;

const SECONDS_PER_DAY: f64 = 86_400.0;

/// Julian Day of an instant.
pub fn julian_day(instant: DateTime<Utc>) -> f64 {
    let secs = instant.timestamp() as f64 + f64::from(instant.timestamp_subsec_nanos()) * 1e-9;
    secs / SECONDS_PER_DAY + UNIX_EPOCH_JD
}

/// Julian centuries since J2000.0 for an instant.
pub fn julian_centuries(instant: DateTime<Utc>) -> f64 {
    jd_to_centuries(julian_day(instant))
}
