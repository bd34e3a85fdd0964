use crate::config::SignalConfig;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignalPhase {
    Green,
    Yellow,
    Red,
}

impl SignalPhase {
    pub fn next(self) -> Self {
        match self {
            SignalPhase::Green => SignalPhase::Yellow,
            SignalPhase::Yellow => SignalPhase::Red,
            SignalPhase::Red => SignalPhase::Green,
        }
    }

    pub fn is_red(self) -> bool {
        self == SignalPhase::Red
    }
}

impl fmt::Display for SignalPhase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            SignalPhase::Green => "green",
            SignalPhase::Yellow => "yellow",
            SignalPhase::Red => "red",
        };
        f.write_str(name)
    }
}

/// Light intensity of the lit lamp; dark lamps emit nothing.
pub const LIT_INTENSITY: f32 = 2.0;

/// Emissive state of one lamp in the signal head, for the renderer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lamp {
    pub phase: SignalPhase,
    pub emissive: bool,
    pub intensity: f32,
}

/// Fixed-duration round-robin signal. Starts green.
#[derive(Debug, Clone)]
pub struct SignalController {
    phase: SignalPhase,
    elapsed_ms: f32,
    durations: SignalConfig,
}

impl SignalController {
    pub fn new(durations: SignalConfig) -> Self {
        Self {
            phase: SignalPhase::Green,
            elapsed_ms: 0.0,
            durations,
        }
    }

    /// Advances the phase timer. At most one transition happens per call; time
    /// beyond the active phase's duration is dropped. Non-positive deltas do nothing.
    pub fn update(&mut self, dt_ms: f32) {
        if !(dt_ms > 0.0) {
            return;
        }

        self.elapsed_ms += dt_ms;
        if self.elapsed_ms >= self.duration_of(self.phase) {
            self.elapsed_ms = 0.0;
            let previous = self.phase;
            self.phase = self.phase.next();
            log::debug!("Signal {} -> {}", previous, self.phase);
        }
    }

    pub fn phase(&self) -> SignalPhase {
        self.phase
    }

    pub fn is_red(&self) -> bool {
        self.phase == SignalPhase::Red
    }

    pub fn elapsed_ms(&self) -> f32 {
        self.elapsed_ms
    }

    pub fn remaining_ms(&self) -> f32 {
        (self.duration_of(self.phase) - self.elapsed_ms).max(0.0)
    }

    pub fn duration_of(&self, phase: SignalPhase) -> f32 {
        match phase {
            SignalPhase::Green => self.durations.green_ms,
            SignalPhase::Yellow => self.durations.yellow_ms,
            SignalPhase::Red => self.durations.red_ms,
        }
    }

    /// Lamp cue in head order: red, yellow, green. Only the active phase is lit.
    pub fn lamps(&self) -> [Lamp; 3] {
        [SignalPhase::Red, SignalPhase::Yellow, SignalPhase::Green].map(|phase| {
            let lit = phase == self.phase;
            Lamp {
                phase,
                emissive: lit,
                intensity: if lit { LIT_INTENSITY } else { 0.0 },
            }
        })
    }

    pub fn reset(&mut self) {
        self.phase = SignalPhase::Green;
        self.elapsed_ms = 0.0;
    }
}
