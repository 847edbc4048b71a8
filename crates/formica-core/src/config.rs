//! Run parameters.

use crate::error::{FormicaError, Result};
use serde::{Deserialize, Serialize};

/// Parameters for a single colony run.
///
/// Every field has a default, so a partial TOML table is enough to
/// override just the values you care about.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Steps in each random search leg (default: 150).
    #[serde(default = "default_step_count")]
    pub step_count: usize,
    /// Distance covered per search step (default: 1.0).
    #[serde(default = "default_step_size")]
    pub step_size: f64,
    /// Whether the third ant fails to read the trail (default: true).
    #[serde(default = "default_sensor_failure")]
    pub sensor_failure: bool,
    /// Seed for the run's random source. `None` draws a fresh seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub random_seed: Option<u64>,
    /// Points sampled along homing paths and the memorised trail (default: 50).
    #[serde(default = "default_homing_samples")]
    pub homing_samples: usize,
}

fn default_step_count() -> usize { 150 }
fn default_step_size() -> f64 { 1.0 }
fn default_sensor_failure() -> bool { true }
fn default_homing_samples() -> usize { 50 }

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            step_count: default_step_count(),
            step_size: default_step_size(),
            sensor_failure: default_sensor_failure(),
            random_seed: None,
            homing_samples: default_homing_samples(),
        }
    }
}

impl SimulationConfig {
    /// Builder-style seed override.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.random_seed = Some(seed);
        self
    }

    pub fn with_sensor_failure(mut self, failed: bool) -> Self {
        self.sensor_failure = failed;
        self
    }

    /// Reject values that would produce an empty or degenerate path.
    pub fn validate(&self) -> Result<()> {
        if self.step_count == 0 {
            return Err(FormicaError::invalid_parameter(
                "step_count",
                "must be at least 1",
            ));
        }
        if !self.step_size.is_finite() || self.step_size <= 0.0 {
            return Err(FormicaError::invalid_parameter(
                "step_size",
                format!("must be a positive finite number, got {}", self.step_size),
            ));
        }
        if self.homing_samples == 0 {
            return Err(FormicaError::invalid_parameter(
                "homing_samples",
                "must be at least 1",
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_reference_run() {
        let config = SimulationConfig::default();
        assert_eq!(config.step_count, 150);
        assert_eq!(config.step_size, 1.0);
        assert!(config.sensor_failure);
        assert_eq!(config.random_seed, None);
        assert_eq!(config.homing_samples, 50);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_degenerate_values() {
        let zero_steps = SimulationConfig { step_count: 0, ..Default::default() };
        assert!(zero_steps.validate().unwrap_err().is_invalid_parameter());

        let nan_size = SimulationConfig { step_size: f64::NAN, ..Default::default() };
        assert!(nan_size.validate().is_err());

        let negative = SimulationConfig { step_size: -1.0, ..Default::default() };
        assert!(negative.validate().is_err());

        let no_samples = SimulationConfig { homing_samples: 0, ..Default::default() };
        assert!(no_samples.validate().is_err());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: SimulationConfig =
            serde_json::from_str(r#"{"step_count": 10, "random_seed": 7}"#).unwrap();
        assert_eq!(config.step_count, 10);
        assert_eq!(config.random_seed, Some(7));
        assert_eq!(config.homing_samples, 50);
        assert!(config.sensor_failure);
    }
}
