//! Vimshottari dasha (planetary period) calculations.
//!
//! The Vimshottari cycle divides 120 years among the nine grahas in a fixed
//! order. The Moon's birth nakshatra selects the first ruler, and the part of
//! that nakshatra the Moon has already crossed is treated as elapsed time of
//! the first period. The remaining eight rulers follow in cyclic order with
//! their full allotments.
//!
//! Each mahadasha can be split into nine antardashas, proportionally to the
//! same allotments, starting with the mahadasha's own ruler.

pub mod balance;
pub mod types;
pub mod vimshottari;

pub use balance::nakshatra_birth_balance;
pub use types::{DAYS_PER_YEAR, DashaLevel, DashaPeriod};
pub use vimshottari::{
    VIMSHOTTARI_SEQUENCE, VIMSHOTTARI_TOTAL_YEARS, VIMSHOTTARI_YEARS, active_period, antardashas,
    graha_years, vimshottari_mahadashas,
};
