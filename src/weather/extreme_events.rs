//! Extreme-event risk classification
//!
//! One generic two-threshold ternary classifier covers all the extreme
//! events of the advisory bulletin (heavy rain, heat stress, strong wind);
//! only the thresholds and the input variable change.

use std::fs;
use std::path::Path;

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::series::SeriesOps;

/// Classify each value against a lower and upper threshold:
/// 0 (no risk) below `lower_threshold`, 2 (high risk) at or above
/// `upper_threshold`, 1 (moderate) in between. Callers supply
/// `lower_threshold < upper_threshold`.
pub fn generate_risk<S: SeriesOps>(data: &S, lower_threshold: f64, upper_threshold: f64) -> S {
    data.map(|v| {
        if v >= upper_threshold {
            2.0
        } else if v < lower_threshold {
            0.0
        } else {
            1.0
        }
    })
}

/// A (lower, upper) threshold pair for one extreme event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RiskThresholds {
    pub lower: f64,
    pub upper: f64,
}

/// Operational thresholds for the three extreme events of the bulletin.
/// Defaults match the advisory service settings: heavy rain 10/30 mm,
/// heat stress 35/38 degC, strong wind 50/70 km/h.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExtremeEventConfig {
    pub heavy_rain: RiskThresholds,
    pub heat_stress: RiskThresholds,
    pub strong_wind: RiskThresholds,
}

impl Default for ExtremeEventConfig {
    fn default() -> Self {
        ExtremeEventConfig {
            heavy_rain: RiskThresholds {
                lower: 10.0,
                upper: 30.0,
            },
            heat_stress: RiskThresholds {
                lower: 35.0,
                upper: 38.0,
            },
            strong_wind: RiskThresholds {
                lower: 50.0,
                upper: 70.0,
            },
        }
    }
}

impl ExtremeEventConfig {
    /// Load thresholds from a JSON file. Missing fields fall back to the
    /// operational defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read threshold file: {path:?}"))?;
        let config =
            serde_json::from_str(&contents).with_context(|| "Failed to parse threshold JSON")?;
        Ok(config)
    }
}
