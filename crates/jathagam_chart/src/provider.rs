//! The position source seam and an in-memory implementation.
//!
//! Chart code never computes planetary positions itself. It asks a
//! [`PositionProvider`] for geocentric tropical ecliptic longitudes of the
//! seven classical grahas and for Greenwich apparent sidereal time.

use std::collections::BTreeMap;
use std::path::Path;

use chrono::{DateTime, Utc};
use jathagam_base::Graha;
use serde::{Deserialize, Serialize};

use crate::error::{ProviderError, Result};

/// External source of raw positions.
///
/// Implementations must be pure lookups: the same query returns the same
/// value and no call mutates shared state.
pub trait PositionProvider {
    /// Geocentric tropical ecliptic longitude of `graha` in degrees.
    ///
    /// Only Sun through Saturn are ever requested.
    fn tropical_longitude(
        &self,
        graha: Graha,
        instant: DateTime<Utc>,
    ) -> std::result::Result<f64, ProviderError>;

    /// Greenwich apparent sidereal time in hours.
    fn apparent_sidereal_time(
        &self,
        instant: DateTime<Utc>,
    ) -> std::result::Result<f64, ProviderError>;
}

impl<P: PositionProvider + ?Sized> PositionProvider for &P {
    fn tropical_longitude(
        &self,
        graha: Graha,
        instant: DateTime<Utc>,
    ) -> std::result::Result<f64, ProviderError> {
        (**self).tropical_longitude(graha, instant)
    }

    fn apparent_sidereal_time(
        &self,
        instant: DateTime<Utc>,
    ) -> std::result::Result<f64, ProviderError> {
        (**self).apparent_sidereal_time(instant)
    }
}

/// One tabulated instant as stored in JSON.
///
/// Longitudes are keyed by English graha name (`"Sun"`, `"Moon"`, ...).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PositionSample {
    pub instant: DateTime<Utc>,
    #[serde(default)]
    pub gast_hours: Option<f64>,
    #[serde(default)]
    pub longitudes: BTreeMap<String, f64>,
}

#[derive(Debug, Clone, Default)]
struct Entry {
    gast_hours: Option<f64>,
    longitudes: BTreeMap<Graha, f64>,
}

/// Provider backed by a table of exact instants.
///
/// A query for an instant or graha missing from the table fails with
/// [`ProviderError::Unavailable`]; no interpolation is attempted.
#[derive(Debug, Clone, Default)]
pub struct TablePositionProvider {
    entries: BTreeMap<DateTime<Utc>, Entry>,
}

impl TablePositionProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from deserialized samples. Unknown graha names are rejected.
    pub fn from_samples(
        samples: impl IntoIterator<Item = PositionSample>,
    ) -> std::result::Result<Self, ProviderError> {
        let mut table = Self::new();
        for sample in samples {
            let entry = table.entries.entry(sample.instant).or_default();
            if sample.gast_hours.is_some() {
                entry.gast_hours = sample.gast_hours;
            }
            for (name, lon) in sample.longitudes {
                let graha = Graha::from_name(&name)
                    .ok_or_else(|| ProviderError::Backend(format!("unknown graha {name:?}")))?;
                entry.longitudes.insert(graha, lon);
            }
        }
        Ok(table)
    }

    /// Parse a JSON array of [`PositionSample`].
    pub fn from_json_str(json: &str) -> Result<Self> {
        let samples: Vec<PositionSample> = serde_json::from_str(json)?;
        Ok(Self::from_samples(samples)?)
    }

    /// Read a JSON array of [`PositionSample`] from a file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    /// Add or replace one longitude.
    pub fn with_longitude(mut self, instant: DateTime<Utc>, graha: Graha, lon_deg: f64) -> Self {
        self.entries
            .entry(instant)
            .or_default()
            .longitudes
            .insert(graha, lon_deg);
        self
    }

    /// Add or replace the sidereal time at an instant.
    pub fn with_sidereal_time(mut self, instant: DateTime<Utc>, gast_hours: f64) -> Self {
        self.entries.entry(instant).or_default().gast_hours = Some(gast_hours);
        self
    }

    /// Number of tabulated instants.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl PositionProvider for TablePositionProvider {
    fn tropical_longitude(
        &self,
        graha: Graha,
        instant: DateTime<Utc>,
    ) -> std::result::Result<f64, ProviderError> {
        self.entries
            .get(&instant)
            .and_then(|e| e.longitudes.get(&graha).copied())
            .ok_or(ProviderError::Unavailable {
                what: graha.english_name(),
                instant,
            })
    }

    fn apparent_sidereal_time(
        &self,
        instant: DateTime<Utc>,
    ) -> std::result::Result<f64, ProviderError> {
        self.entries
            .get(&instant)
            .and_then(|e| e.gast_hours)
            .ok_or(ProviderError::Unavailable {
                what: "sidereal time",
                instant,
            })
    }
}
