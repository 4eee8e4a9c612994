//! Lagna (Ascendant) geometry.
//!
//! Standard spherical astronomy: the ascendant is the ecliptic point rising
//! on the eastern horizon, derived from the Right Ascension of the Meridian
//! (RAMC), the observer's latitude and the obliquity of the ecliptic.
//!
//! Sources: Meeus, "Astronomical Algorithms" (2nd ed), Chapters 13 and 22.

use crate::error::BaseError;
use crate::util::normalize_360;

/// Obliquity of the ecliptic in degrees for `t` Julian centuries since J2000.0.
///
/// `eps = 23.439291 - 0.0130042 T - 0.00000164 T^2 + 0.000000504 T^3`
pub fn obliquity_deg(t: f64) -> f64 {
    23.439_291 - 0.013_004_2 * t - 0.000_001_64 * t * t + 0.000_000_504 * t * t * t
}

/// Local sidereal time expressed in degrees: the RAMC.
///
/// `gast_hours` is Greenwich apparent sidereal time; east longitude is positive.
pub fn ramc_deg(gast_hours: f64, longitude_deg: f64) -> f64 {
    let lst_hours = gast_hours + longitude_deg / 15.0;
    normalize_360(lst_hours * 15.0)
}

/// Reject observer coordinates the ascendant formula cannot handle.
///
/// At the poles `tan(latitude)` is unbounded, so |latitude| must be < 90.
pub fn check_location(latitude_deg: f64, longitude_deg: f64) -> Result<(), BaseError> {
    if !latitude_deg.is_finite() || !longitude_deg.is_finite() {
        return Err(BaseError::InvalidLocation("coordinates must be finite"));
    }
    if latitude_deg.abs() >= 90.0 {
        return Err(BaseError::InvalidLocation(
            "latitude must be strictly between -90 and 90 deg",
        ));
    }
    if longitude_deg.abs() > 180.0 {
        return Err(BaseError::InvalidLocation(
            "longitude must be within -180..=180 deg",
        ));
    }
    Ok(())
}

/// Tropical ecliptic longitude of the Ascendant in degrees [0, 360).
///
/// `Asc = atan2(cos(RAMC), -sin(RAMC) cos(eps) - tan(phi) sin(eps))`
///
/// A full four-quadrant arctangent is required; a plain `atan` of the ratio
/// lands on the descendant for half of all sidereal times.
pub fn ascendant_tropical_deg(ramc_deg: f64, latitude_deg: f64, obliquity_deg: f64) -> f64 {
    let ramc = ramc_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    let phi = latitude_deg.to_radians();

    let asc = f64::atan2(
        ramc.cos(),
        -ramc.sin() * eps.cos() - phi.tan() * eps.sin(),
    );
    normalize_360(asc.to_degrees())
}

/// Tropical ecliptic longitude of the MC (Midheaven) in degrees [0, 360).
///
/// `MC = atan2(sin(RAMC), cos(RAMC) cos(eps))`
pub fn mc_tropical_deg(ramc_deg: f64, obliquity_deg: f64) -> f64 {
    let ramc = ramc_deg.to_radians();
    let eps = obliquity_deg.to_radians();
    normalize_360(f64::atan2(ramc.sin(), ramc.cos() * eps.cos()).to_degrees())
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPS_J2000: f64 = 23.439_291;

    #[test]
    fn obliquity_at_j2000() {
        assert!((obliquity_deg(0.0) - EPS_J2000).abs() < 1e-12);
        assert!(obliquity_deg(1.0) < obliquity_deg(0.0));
    }

    #[test]
    fn ramc_from_gast_and_longitude() {
        // 6h GAST at Greenwich = 90 deg
        assert!((ramc_deg(6.0, 0.0) - 90.0).abs() < 1e-10);
        // 80.27 E adds 80.27 deg
        assert!((ramc_deg(6.0, 80.27) - 170.27).abs() < 1e-10);
        // West longitude wraps below zero
        assert!((ramc_deg(0.0, -30.0) - 330.0).abs() < 1e-10);
    }

    /// At RAMC = 0 the vernal point culminates; on the equator the rising
    /// ecliptic point is 90 deg ahead of it (0 Cancer).
    #[test]
    fn ascendant_equator_ramc_zero() {
        let asc = ascendant_tropical_deg(0.0, 0.0, EPS_J2000);
        assert!((asc - 90.0).abs() < 1e-10, "Asc = {asc}");
    }

    #[test]
    fn ascendant_equator_ramc_180() {
        let asc = ascendant_tropical_deg(180.0, 0.0, EPS_J2000);
        assert!((asc - 270.0).abs() < 1e-10, "Asc = {asc}");
    }

    #[test]
    fn ascendant_ahead_of_mc() {
        // Ascendant lies in the quadrant following the MC
        for i in 0..36 {
            let ramc = i as f64 * 10.0;
            let asc = ascendant_tropical_deg(ramc, 13.08, EPS_J2000);
            let mc = mc_tropical_deg(ramc, EPS_J2000);
            let arc = normalize_360(asc - mc);
            assert!(arc > 0.0 && arc < 180.0, "ramc {ramc}: asc {asc} mc {mc}");
        }
    }

    #[test]
    fn ascendant_sweeps_full_circle() {
        let mut min_asc = f64::MAX;
        let mut max_asc = f64::MIN;
        for i in 0..360 {
            let asc = ascendant_tropical_deg(i as f64, 28.6, EPS_J2000);
            min_asc = min_asc.min(asc);
            max_asc = max_asc.max(asc);
        }
        assert!(min_asc < 5.0, "min_asc = {min_asc}");
        assert!(max_asc > 355.0, "max_asc = {max_asc}");
    }

    #[test]
    fn location_checks() {
        assert!(check_location(13.08, 80.27).is_ok());
        assert!(check_location(-89.9, -180.0).is_ok());
        assert!(matches!(
            check_location(90.0, 0.0),
            Err(BaseError::InvalidLocation(_))
        ));
        assert!(check_location(-90.0, 0.0).is_err());
        assert!(check_location(0.0, 180.5).is_err());
        assert!(check_location(f64::NAN, 0.0).is_err());
    }
}
