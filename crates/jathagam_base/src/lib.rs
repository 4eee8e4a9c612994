//! Pure-math Vedic chart primitives.
//!
//! This crate provides:
//! - A linear ayanamsa model and tropical-to-sidereal conversion
//! - Rashi, nakshatra and pada classification of sidereal longitudes
//! - Mean lunar nodes, lagna geometry and equal houses
//! - The Vimshottari dasha timeline with antardashas
//! - A yoga/dosha rule engine and the ten-factor porutham scorer
//!
//! Nothing here performs I/O or holds state; every function is a pure
//! function of its arguments.

pub mod ayanamsa;
pub mod bhava;
pub mod dasha;
pub mod error;
pub mod graha;
pub mod lagna;
pub mod locator;
pub mod lunar_nodes;
pub mod nakshatra;
pub mod porutham;
pub mod rashi;
pub mod util;
pub mod yoga;

pub use ayanamsa::{AyanamsaModel, J2000_JD, ayanamsa_deg, jd_to_centuries, to_sidereal};
pub use bhava::{Bhava, equal_bhavas, equal_cusps};
pub use dasha::{DashaLevel, DashaPeriod, active_period, antardashas, vimshottari_mahadashas};
pub use error::BaseError;
pub use graha::{ALL_GRAHAS, Graha, SAPTA_GRAHAS, rashi_lord};
pub use lagna::{ascendant_tropical_deg, check_location, mc_tropical_deg, obliquity_deg, ramc_deg};
pub use locator::{ZodiacPosition, classify};
pub use lunar_nodes::{ketu_from_rahu, mean_rahu_deg, rahu_from_moon};
pub use nakshatra::{ALL_NAKSHATRAS, Nakshatra, NakshatraInfo, nakshatra_from_longitude};
pub use porutham::{CompatibilityReport, MatchBand, MoonSign, Porutham, PoruthamFactor, porutham};
pub use rashi::{ALL_RASHIS, Dms, Rashi, RashiInfo, rashi_from_longitude};
pub use util::{house_from, normalize_360};
pub use yoga::{
    DoshaFinding, DoshaSeverity, Placements, YogaFinding, YogaKind, YogaStrength,
    evaluate_doshas, evaluate_yogas,
};
