use serde::{Deserialize, Serialize};
use super::{ConfigError, Validate};

/// Per-phase durations of the signal cycle, in milliseconds.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct SignalConfig {
    pub green_ms: f32,
    pub yellow_ms: f32,
    pub red_ms: f32,
}

impl Default for SignalConfig {
    fn default() -> Self {
        Self {
            green_ms: 5000.0,
            yellow_ms: 2000.0,
            red_ms: 5000.0,
        }
    }
}

impl Validate for SignalConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        for (phase, value) in [
            ("green", self.green_ms),
            ("yellow", self.yellow_ms),
            ("red", self.red_ms),
        ] {
            // Also rejects NaN
            if !(value > 0.0) {
                return Err(ConfigError::NonPositiveDuration { phase, value });
            }
        }
        Ok(())
    }
}
