//! Vimshottari sequence data, timeline generation and sub-periods.

use chrono::{DateTime, Duration, Utc};

use crate::error::BaseError;
use crate::graha::Graha;
use crate::nakshatra::nakshatra_from_longitude;

use super::balance::nakshatra_birth_balance;
use super::types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};

/// Vimshottari graha sequence: Ketu, Shukra, Surya, Chandra, Mangal, Rahu, Guru, Shani, Buddh.
///
/// Nakshatra `i` (0-based) is ruled by `VIMSHOTTARI_SEQUENCE[i % 9]`.
pub const VIMSHOTTARI_SEQUENCE: [Graha; 9] = [
    Graha::Ketu,
    Graha::Shukra,
    Graha::Surya,
    Graha::Chandra,
    Graha::Mangal,
    Graha::Rahu,
    Graha::Guru,
    Graha::Shani,
    Graha::Buddh,
];

/// Vimshottari periods in years, aligned with [`VIMSHOTTARI_SEQUENCE`].
pub const VIMSHOTTARI_YEARS: [f64; 9] = [7.0, 20.0, 6.0, 10.0, 7.0, 18.0, 16.0, 19.0, 17.0];

/// Length of the full cycle in years.
pub const VIMSHOTTARI_TOTAL_YEARS: f64 = 120.0;

/// Full allotment of a graha in years.
pub fn graha_years(graha: Graha) -> f64 {
    VIMSHOTTARI_YEARS[sequence_index(graha)]
}

fn sequence_index(graha: Graha) -> usize {
    VIMSHOTTARI_SEQUENCE
        .iter()
        .position(|&g| g == graha)
        .unwrap_or(0)
}

/// Whole days for a span of years: `round(years * 365.25)`, at least one day.
fn period_days(years: f64) -> i64 {
    ((years * DAYS_PER_YEAR).round() as i64).max(1)
}

fn add_days(start: DateTime<Utc>, days: i64) -> Result<DateTime<Utc>, BaseError> {
    start
        .checked_add_signed(Duration::days(days))
        .ok_or(BaseError::InvalidInput("dasha period end is out of date range"))
}

/// Generate the nine Vimshottari mahadashas from the Moon's sidereal longitude.
///
/// The first period belongs to the birth nakshatra's lord and lasts for the
/// unelapsed share of its allotment. The other eight follow in cyclic order
/// with their full allotments. Periods are contiguous.
pub fn vimshottari_mahadashas(
    moon_sidereal_lon: f64,
    birth: DateTime<Utc>,
) -> Result<Vec<DashaPeriod>, BaseError> {
    if !moon_sidereal_lon.is_finite() {
        return Err(BaseError::InvalidInput("moon longitude must be finite"));
    }

    let birth_nak = nakshatra_from_longitude(moon_sidereal_lon);
    let start_idx = (birth_nak.nakshatra_index % 9) as usize;
    let (balance_years, _) = nakshatra_birth_balance(&birth_nak, VIMSHOTTARI_YEARS[start_idx]);

    let mut periods = Vec::with_capacity(9);
    let mut cursor = birth;

    for offset in 0..9 {
        let seq_idx = (start_idx + offset) % 9;
        let years = if offset == 0 {
            balance_years
        } else {
            VIMSHOTTARI_YEARS[seq_idx]
        };
        let end = add_days(cursor, period_days(years))?;
        periods.push(DashaPeriod {
            ruler: VIMSHOTTARI_SEQUENCE[seq_idx],
            start: cursor,
            end,
            years,
            level: DashaLevel::Mahadasha,
        });
        cursor = end;
    }

    Ok(periods)
}

/// Find the period containing `instant` (start inclusive, end exclusive).
pub fn active_period(periods: &[DashaPeriod], instant: DateTime<Utc>) -> Option<&DashaPeriod> {
    periods.iter().find(|p| p.contains(instant))
}

/// Split a mahadasha into its nine antardashas.
///
/// Each sub-period gets `parent_duration * years / 120`, starting with the
/// parent's own ruler and continuing in Vimshottari order. The last
/// sub-period is snapped to the parent end to absorb rounding drift.
pub fn antardashas(parent: &DashaPeriod) -> Vec<DashaPeriod> {
    let parent_ms = (parent.end - parent.start).num_milliseconds() as f64;
    let start_idx = sequence_index(parent.ruler);
    let mut children = Vec::with_capacity(9);
    let mut cursor = parent.start;

    for offset in 0..9 {
        let seq_idx = (start_idx + offset) % 9;
        let share = VIMSHOTTARI_YEARS[seq_idx] / VIMSHOTTARI_TOTAL_YEARS;
        let duration = Duration::milliseconds((parent_ms * share).round() as i64);
        let end = (cursor + duration).min(parent.end);
        children.push(DashaPeriod {
            ruler: VIMSHOTTARI_SEQUENCE[seq_idx],
            start: cursor,
            end,
            years: parent.years * share,
            level: DashaLevel::Antardasha,
        });
        cursor = end;
    }

    if let Some(last) = children.last_mut() {
        last.end = parent.end;
    }
    children
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;
    use crate::nakshatra::NAKSHATRA_SPAN;

    fn birth() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(1990, 5, 15, 10, 30, 0).unwrap()
    }

    #[test]
    fn years_sum_to_120() {
        let total: f64 = VIMSHOTTARI_YEARS.iter().sum();
        assert!((total - VIMSHOTTARI_TOTAL_YEARS).abs() < 1e-12);
    }

    #[test]
    fn graha_years_lookup() {
        assert_eq!(graha_years(Graha::Shukra), 20.0);
        assert_eq!(graha_years(Graha::Surya), 6.0);
        assert_eq!(graha_years(Graha::Buddh), 17.0);
    }

    #[test]
    fn ashwini_start_full_ketu() {
        let periods = vimshottari_mahadashas(0.0, birth()).unwrap();
        assert_eq!(periods.len(), 9);
        assert_eq!(periods[0].ruler, Graha::Ketu);
        assert!((periods[0].years - 7.0).abs() < 1e-12);
        assert_eq!(periods[0].duration_days(), 2557.0);
        assert_eq!(periods[1].ruler, Graha::Shukra);
        assert_eq!(periods[8].ruler, Graha::Buddh);
    }

    #[test]
    fn rohini_midpoint_half_moon() {
        let lon = 40.0 + NAKSHATRA_SPAN / 2.0;
        let periods = vimshottari_mahadashas(lon, birth()).unwrap();
        assert_eq!(periods[0].ruler, Graha::Chandra);
        assert!((periods[0].years - 5.0).abs() < 1e-9);
        assert_eq!(periods[0].duration_days(), 1826.0);
        assert_eq!(periods[1].ruler, Graha::Mangal);
    }

    #[test]
    fn quarter_into_purva_phalguni_leaves_venus_fifteen() {
        let lon = 10.0 * NAKSHATRA_SPAN + NAKSHATRA_SPAN / 4.0;
        let periods = vimshottari_mahadashas(lon, birth()).unwrap();
        assert_eq!(periods[0].ruler, Graha::Shukra);
        assert!((periods[0].years - 15.0).abs() < 1e-8);
        assert_eq!(periods[1].ruler, Graha::Surya);
        assert_eq!(periods[1].years, 6.0);
    }

    #[test]
    fn contiguous_and_increasing() {
        let periods = vimshottari_mahadashas(217.3, birth()).unwrap();
        assert_eq!(periods[0].start, birth());
        for w in periods.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
        for p in &periods {
            assert!(p.end > p.start);
        }
    }

    #[test]
    fn tiny_balance_still_one_day() {
        let lon = NAKSHATRA_SPAN - 1e-9;
        let periods = vimshottari_mahadashas(lon, birth()).unwrap();
        assert_eq!(periods[0].ruler, Graha::Ketu);
        assert_eq!(periods[0].duration_days(), 1.0);
    }

    #[test]
    fn non_finite_moon_rejected() {
        assert!(vimshottari_mahadashas(f64::NAN, birth()).is_err());
    }

    #[test]
    fn active_period_boundaries() {
        let periods = vimshottari_mahadashas(100.0, birth()).unwrap();
        assert_eq!(active_period(&periods, birth()).map(|p| p.ruler), Some(periods[0].ruler));
        let second_start = periods[1].start;
        assert_eq!(active_period(&periods, second_start).map(|p| p.ruler), Some(periods[1].ruler));
        let last_end = periods[8].end;
        assert!(active_period(&periods, last_end).is_none());
        assert!(active_period(&periods, birth() - Duration::days(1)).is_none());
    }

    #[test]
    fn antardashas_start_with_parent_ruler() {
        let periods = vimshottari_mahadashas(0.0, birth()).unwrap();
        let venus = &periods[1];
        let subs = antardashas(venus);
        assert_eq!(subs.len(), 9);
        assert_eq!(subs[0].ruler, Graha::Shukra);
        assert_eq!(subs[1].ruler, Graha::Surya);
        assert_eq!(subs[8].ruler, Graha::Ketu);
        assert_eq!(subs[0].start, venus.start);
        assert_eq!(subs[8].end, venus.end);
        for w in subs.windows(2) {
            assert_eq!(w[0].end, w[1].start);
        }
        // Venus/Venus is 20 * 20 / 120 = 3.333 years
        assert!((subs[0].years - 20.0 * 20.0 / 120.0).abs() < 1e-9);
        assert!(subs.iter().all(|s| s.level == DashaLevel::Antardasha));
    }
}
