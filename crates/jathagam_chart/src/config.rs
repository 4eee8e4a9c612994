//! Chart configuration.
//!
//! Every field has a default, so an empty JSON object is a valid config.

use std::path::Path;

use jathagam_base::AyanamsaModel;
use serde::{Deserialize, Serialize};

use crate::error::{ChartError, Result};

/// How Rahu is located.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeMode {
    /// Mean node polynomial, falling back to the Moon opposition if it fails.
    #[default]
    MeanPolynomial,
    /// Always use the coarse Moon + 180 deg estimate.
    MoonOpposition,
}

/// Settings shared by every chart built with them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartConfig {
    pub ayanamsa: AyanamsaModel,
    pub node_mode: NodeMode,
    /// Offset of the forward sample used for retrograde detection.
    pub retrograde_sample_days: f64,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            ayanamsa: AyanamsaModel::LAHIRI,
            node_mode: NodeMode::MeanPolynomial,
            retrograde_sample_days: 1.0,
        }
    }
}

impl ChartConfig {
    /// Parse and validate a JSON config.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_json_str(&text)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.ayanamsa.reference_j2000_deg.is_finite()
            || !self.ayanamsa.rate_deg_per_year.is_finite()
        {
            return Err(ChartError::InvalidConfig(
                "ayanamsa parameters must be finite".to_string(),
            ));
        }
        if !self.retrograde_sample_days.is_finite() || self.retrograde_sample_days <= 0.0 {
            return Err(ChartError::InvalidConfig(format!(
                "retrograde_sample_days must be positive, got {}",
                self.retrograde_sample_days
            )));
        }
        Ok(())
    }
}
