use super::{SignalPhase, VehicleId, VehicleManager};
use crate::config::ScoringConfig;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::fmt;

/// Result of a host-triggered capture.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureOutcome {
    Confirmed,
    FalsePositive,
    RejectedNoRedLight,
}

impl fmt::Display for CaptureOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            CaptureOutcome::Confirmed => "capture confirmed, red-light violation recorded",
            CaptureOutcome::FalsePositive => "false positive, no violating vehicle found",
            CaptureOutcome::RejectedNoRedLight => "light is not red, capture rejected",
        };
        f.write_str(message)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViolationRecord {
    pub vehicle: VehicleId,
    pub score_delta: u32,
}

pub struct ViolationDetector {
    scoring: ScoringConfig,
    rng: StdRng,
}

impl ViolationDetector {
    pub fn new(scoring: ScoringConfig, seed: Option<u64>) -> Self {
        let rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };

        Self { scoring, rng }
    }

    pub fn confirm_capture(&self, red_light: bool, vehicles: &VehicleManager) -> CaptureOutcome {
        if !red_light {
            return CaptureOutcome::RejectedNoRedLight;
        }

        if vehicles.has_violations() {
            CaptureOutcome::Confirmed
        } else {
            CaptureOutcome::FalsePositive
        }
    }

    /// One record per violating vehicle, and only while the light is red.
    pub fn sample(&self, vehicles: &VehicleManager, phase: SignalPhase) -> Vec<ViolationRecord> {
        if !phase.is_red() {
            return Vec::new();
        }

        vehicles
            .query_violations()
            .into_iter()
            .map(|vehicle| ViolationRecord {
                vehicle: vehicle.id,
                score_delta: self.scoring.capture_reward,
            })
            .collect()
    }

    /// Picks a violating vehicle at random for the host to highlight.
    pub fn pick_highlight(&mut self, vehicles: &VehicleManager) -> Option<VehicleId> {
        vehicles.random_violating(&mut self.rng).map(|v| v.id)
    }

    pub fn scoring(&self) -> &ScoringConfig {
        &self.scoring
    }
}

/// Violation count and score kept by the host.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Scoreboard {
    pub violations: u32,
    pub score: u32,
}

impl Scoreboard {
    /// Applies an outcome and returns the signed change in score.
    pub fn apply(&mut self, outcome: CaptureOutcome, scoring: &ScoringConfig) -> i64 {
        let before = self.score as i64;
        match outcome {
            CaptureOutcome::Confirmed => {
                self.violations += 1;
                self.score = self.score.saturating_add(scoring.capture_reward);
            }
            CaptureOutcome::FalsePositive => {
                // Floored at zero
                self.score = self.score.saturating_sub(scoring.false_positive_penalty);
            }
            CaptureOutcome::RejectedNoRedLight => {}
        }
        self.score as i64 - before
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
