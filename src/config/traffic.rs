use serde::{Deserialize, Serialize};
use super::{ConfigError, Validate};

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TrafficConfig {
    pub spawn_interval_ms: f32,
    pub max_vehicles: usize,
    /// Speeds are per-tick increments, not rates.
    pub min_speed: f32,
    pub max_speed: f32,
    pub spawn_distance: f32,
    pub lane_height: f32,
    /// Vehicles past this distance on either axis are removed.
    pub bounds: f32,
    pub plate_prefix: String,
    pub release_on_green: bool,
}

impl Default for TrafficConfig {
    fn default() -> Self {
        Self {
            spawn_interval_ms: 3000.0,
            max_vehicles: 5,
            min_speed: 0.05,
            max_speed: 0.1,
            spawn_distance: 20.0,
            lane_height: 0.5,
            bounds: 30.0,
            plate_prefix: "京A".to_string(),
            release_on_green: true,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct StopLineConfig {
    /// Distance of each stop line from the junction centre.
    pub offset: f32,
    /// Vehicles stop once within this distance of their line (inclusive).
    pub proximity: f32,
}

impl Default for StopLineConfig {
    fn default() -> Self {
        Self {
            offset: 5.0,
            proximity: 1.5,
        }
    }
}

#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ScoringConfig {
    pub capture_reward: u32,
    pub false_positive_penalty: u32,
}

impl Default for ScoringConfig {
    fn default() -> Self {
        Self {
            capture_reward: 100,
            false_positive_penalty: 50,
        }
    }
}

impl Validate for TrafficConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.spawn_interval_ms > 0.0) {
            return Err(ConfigError::InvalidSpawnInterval(self.spawn_interval_ms));
        }

        if self.max_vehicles == 0 {
            return Err(ConfigError::ZeroCapacity);
        }

        if !(self.min_speed > 0.0) || !(self.min_speed <= self.max_speed) || !self.max_speed.is_finite() {
            return Err(ConfigError::InvalidSpeedBand {
                min: self.min_speed,
                max: self.max_speed,
            });
        }

        if !(self.spawn_distance > 0.0) || !(self.bounds > 0.0) {
            return Err(ConfigError::InvalidGeometry(
                "spawn distance and bounds must be positive".to_string(),
            ));
        }

        Ok(())
    }
}

impl Validate for StopLineConfig {
    fn validate(&self) -> Result<(), ConfigError> {
        if !(self.offset >= 0.0) {
            return Err(ConfigError::InvalidGeometry(format!(
                "stop line offset must be non-negative, got {}",
                self.offset
            )));
        }
        if !(self.proximity > 0.0) {
            return Err(ConfigError::InvalidGeometry(format!(
                "stop proximity must be positive, got {}",
                self.proximity
            )));
        }
        Ok(())
    }
}
