use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};

pub const DEFAULT_MIN_SUPPORT: f64 = 0.2;
pub const DEFAULT_MIN_CONFIDENCE: f64 = 0.5;

/// Thresholds for a mining run.
///
/// Both values are fractions in `[0, 1]`. Out-of-range values are rejected
/// by [`MiningConfig::validate`], never clamped.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct MiningConfig {
    pub min_support: f64,
    pub min_confidence: f64,
}

impl Default for MiningConfig {
    fn default() -> Self {
        Self {
            min_support: DEFAULT_MIN_SUPPORT,
            min_confidence: DEFAULT_MIN_CONFIDENCE,
        }
    }
}

impl MiningConfig {
    pub fn new(min_support: f64, min_confidence: f64) -> Self {
        Self {
            min_support,
            min_confidence,
        }
    }

    pub fn with_min_support(mut self, min_support: f64) -> Self {
        self.min_support = min_support;
        self
    }

    pub fn with_min_confidence(mut self, min_confidence: f64) -> Self {
        self.min_confidence = min_confidence;
        self
    }

    pub fn validate(&self) -> Result<()> {
        check_fraction("min_support", self.min_support)?;
        check_fraction("min_confidence", self.min_confidence)
    }
}

fn check_fraction(name: &'static str, value: f64) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::InvalidThreshold { name, value })
    }
}
