use super::{
    CaptureOutcome, Scoreboard, SignalController, SignalPhase, TickEvents, VehicleId,
    VehicleManager, ViolationDetector, ViolationRecord,
};
use crate::config::{ConfigError, SimulationConfig, Validate};

#[derive(Debug, Clone, PartialEq)]
pub struct TickReport {
    pub phase: SignalPhase,
    pub phase_changed: bool,
    pub events: TickEvents,
}

/// Simulation context owned by the host loop: the signal, the vehicles, the
/// detector and the score, advanced together once per frame.
pub struct Intersection {
    signal: SignalController,
    vehicles: VehicleManager,
    detector: ViolationDetector,
    scoreboard: Scoreboard,
    release_on_green: bool,
    ticks: u64,
    elapsed_ms: f64,
}

impl Intersection {
    /// Builds the context from a configuration, rejecting it the same way
    /// loading from TOML would.
    pub fn new(config: &SimulationConfig, seed: Option<u64>) -> Result<Self, ConfigError> {
        config.validate()?;

        let signal = SignalController::new(config.signal.clone());
        let vehicles = VehicleManager::new(config.traffic.clone(), &config.stop_lines, seed)?;
        // Separate stream so highlight picks do not shift spawning
        let detector = ViolationDetector::new(config.scoring.clone(), seed.map(|s| s.wrapping_add(1)));

        Ok(Self {
            signal,
            vehicles,
            detector,
            scoreboard: Scoreboard::default(),
            release_on_green: config.traffic.release_on_green,
            ticks: 0,
            elapsed_ms: 0.0,
        })
    }

    pub fn tick(&mut self, dt_ms: f32) -> TickReport {
        let previous = self.signal.phase();
        self.signal.update(dt_ms);
        let phase = self.signal.phase();
        let phase_changed = phase != previous;

        if phase_changed && phase == SignalPhase::Green && self.release_on_green {
            self.vehicles.release_stopped();
        }

        let events = self.vehicles.update(phase.is_red(), dt_ms);

        self.ticks += 1;
        if dt_ms > 0.0 {
            self.elapsed_ms += dt_ms as f64;
        }

        TickReport {
            phase,
            phase_changed,
            events,
        }
    }

    /// Confirms a capture against the current frame and scores it.
    pub fn capture(&mut self) -> CaptureOutcome {
        let outcome = self.detector.confirm_capture(self.signal.is_red(), &self.vehicles);
        let delta = self.scoreboard.apply(outcome, self.detector.scoring());
        log::debug!(
            "Capture: {} (score {:+}, total {})",
            outcome, delta, self.scoreboard.score
        );
        outcome
    }

    pub fn sample(&self) -> Vec<ViolationRecord> {
        self.detector.sample(&self.vehicles, self.signal.phase())
    }

    pub fn highlight(&mut self) -> Option<VehicleId> {
        if !self.signal.is_red() {
            return None;
        }
        self.detector.pick_highlight(&self.vehicles)
    }

    pub fn signal(&self) -> &SignalController {
        &self.signal
    }

    pub fn vehicles(&self) -> &VehicleManager {
        &self.vehicles
    }

    pub fn vehicles_mut(&mut self) -> &mut VehicleManager {
        &mut self.vehicles
    }

    pub fn scoreboard(&self) -> &Scoreboard {
        &self.scoreboard
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed_ms
    }

    /// Back to initial conditions: green light, no vehicles, zero score.
    pub fn reset(&mut self) {
        self.signal.reset();
        self.vehicles.reset();
        self.scoreboard.reset();
        self.ticks = 0;
        self.elapsed_ms = 0.0;
    }
}
