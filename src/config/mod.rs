use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod signal;
pub mod traffic;

pub use signal::*;
pub use traffic::*;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SimulationConfig {
    #[serde(default)]
    pub signal: SignalConfig,
    #[serde(default)]
    pub traffic: TrafficConfig,
    #[serde(default)]
    pub stop_lines: StopLineConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub random: RandomConfig,
}

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RandomConfig {
    pub seed: Option<u64>,
}

impl SimulationConfig {
    pub fn load_from_file(path: &str) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file {}", path))?;
        Self::from_toml_str(&content).with_context(|| format!("invalid configuration in {}", path))
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: SimulationConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }
}

/// Reasons a configuration is rejected before a simulation is built from it.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    #[error("{phase} duration must be positive, got {value} ms")]
    NonPositiveDuration { phase: &'static str, value: f32 },
    #[error("spawn interval must be positive, got {0} ms")]
    InvalidSpawnInterval(f32),
    #[error("vehicle capacity must be greater than zero")]
    ZeroCapacity,
    #[error("speed band must satisfy 0 < min <= max, got {min}..{max}")]
    InvalidSpeedBand { min: f32, max: f32 },
    #[error("invalid intersection geometry: {0}")]
    InvalidGeometry(String),
}

pub trait Validate {
    fn validate(&self) -> std::result::Result<(), ConfigError>;
}

impl Validate for SimulationConfig {
    fn validate(&self) -> std::result::Result<(), ConfigError> {
        self.signal.validate()?;
        self.traffic.validate()?;
        self.stop_lines.validate()?;

        // Vehicles must spawn outside the stop lines and inside the bounds
        let offset = self.stop_lines.offset;
        let traffic = &self.traffic;
        if traffic.spawn_distance <= offset + self.stop_lines.proximity {
            return Err(ConfigError::InvalidGeometry(format!(
                "spawn distance {} must lie beyond the stop-line zone ending at {}",
                traffic.spawn_distance,
                offset + self.stop_lines.proximity
            )));
        }
        if traffic.bounds <= traffic.spawn_distance {
            return Err(ConfigError::InvalidGeometry(format!(
                "bounds {} must exceed spawn distance {}",
                traffic.bounds, traffic.spawn_distance
            )));
        }

        Ok(())
    }
}
