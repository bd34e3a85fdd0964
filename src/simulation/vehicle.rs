use super::{Heading, Point, StopLines, VehicleId};

/// Result of advancing a vehicle by one tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Advance {
    Active,
    OutOfBounds,
}

/// Simulation state of one vehicle. Meshes and bounding boxes belong to the
/// renderer, which keys them by `id`.
#[derive(Debug, Clone)]
pub struct Vehicle {
    pub id: VehicleId,
    pub position: Point,
    heading: Heading,
    pub speed: f32,
    pub color: [f32; 3],
    pub plate: String,
    stopped: bool,
    crossed_stop_line: bool,
    violating: bool,
}

impl Vehicle {
    pub fn new(id: VehicleId, position: Point, heading: Heading, speed: f32) -> Self {
        Self {
            id,
            position,
            heading,
            speed,
            color: [0.2, 0.6, 0.86],
            plate: String::new(),
            stopped: false,
            crossed_stop_line: false,
            violating: false,
        }
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    pub fn is_stopped(&self) -> bool {
        self.stopped
    }

    pub fn has_crossed_stop_line(&self) -> bool {
        self.crossed_stop_line
    }

    pub fn is_violating(&self) -> bool {
        self.violating
    }

    /// Lets a stopped vehicle move again. The violation latch is untouched.
    pub fn release(&mut self) {
        self.stopped = false;
    }

    pub fn is_out_of_bounds(&self, bounds: f32) -> bool {
        self.position.x.abs() > bounds || self.position.z.abs() > bounds
    }

    /// One fixed-timestep tick. `speed` is the distance covered per tick.
    ///
    /// On red, a vehicle still short of its line stops once inside the stop
    /// zone. Any vehicle found past its line after moving on a red tick is
    /// latched as violating, including one that was already inside the
    /// junction when the light turned.
    pub fn advance(&mut self, red_light: bool, stop_lines: &StopLines, bounds: f32) -> Advance {
        if self.stopped {
            return Advance::Active;
        }

        let watching_line = red_light && !self.crossed_stop_line;

        if watching_line && stop_lines.in_stop_zone(self.heading, &self.position) {
            self.stopped = true;
            log::debug!("Vehicle {} ({}) stopped at the line", self.id.0, self.plate);
            return Advance::Active;
        }

        self.position += self.heading.unit() * self.speed;

        if watching_line && stop_lines.for_heading(self.heading).has_passed(&self.position) {
            self.crossed_stop_line = true;
            self.violating = true;
            log::debug!("Vehicle {} ({}) ran the red light", self.id.0, self.plate);
        }

        if self.is_out_of_bounds(bounds) {
            Advance::OutOfBounds
        } else {
            Advance::Active
        }
    }
}
