//! Vedic birth chart orchestration over a pluggable position source.
//!
//! This crate provides:
//! - The [`PositionProvider`] seam and an in-memory [`TablePositionProvider`]
//! - Per-body sidereal position assembly with retrograde sampling
//! - Rahu/Ketu derivation with an explicit Moon-opposition fallback
//! - Ascendant, equal houses, dasha timeline and yoga/dosha findings
//! - Porutham matching between two charts
//!
//! All astronomy beyond the provider's two queries lives in `jathagam_base`.

pub mod ascendant;
pub mod chart;
pub mod compatibility;
pub mod config;
pub mod error;
pub mod positions;
pub mod provider;
pub mod time;

pub use ascendant::{Ascendant, compute_ascendant};
pub use chart::{BirthInfo, Chart, build_chart};
pub use compatibility::compatibility;
pub use config::{ChartConfig, NodeMode};
pub use error::{ChartError, ProviderError, Result};
pub use positions::{BodyPosition, MotionSource, NodeSource, assemble_positions, is_backward};
pub use provider::{PositionProvider, PositionSample, TablePositionProvider};
pub use time::{UNIX_EPOCH_JD, julian_centuries, julian_day};
