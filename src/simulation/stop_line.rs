use super::{Heading, Point};
use crate::config::StopLineConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    X,
    Z,
}

/// A boundary across one approach. A vehicle has passed it once it is beyond
/// `value` in the direction given by `travel_sign`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StopLine {
    pub axis: Axis,
    pub value: f32,
    pub travel_sign: f32,
}

impl StopLine {
    fn coordinate(&self, position: &Point) -> f32 {
        match self.axis {
            Axis::X => position.x,
            Axis::Z => position.z,
        }
    }

    pub fn distance(&self, position: &Point) -> f32 {
        (self.coordinate(position) - self.value).abs()
    }

    /// Standing exactly on the line still counts as approaching.
    pub fn is_approaching(&self, position: &Point) -> bool {
        !self.has_passed(position)
    }

    pub fn has_passed(&self, position: &Point) -> bool {
        self.travel_sign * (self.coordinate(position) - self.value) > 0.0
    }
}

/// The four stop lines of the junction, each on the near side of its approach.
#[derive(Debug, Clone)]
pub struct StopLines {
    east: StopLine,
    west: StopLine,
    south: StopLine,
    north: StopLine,
    pub proximity: f32,
}

impl StopLines {
    pub fn new(config: &StopLineConfig) -> Self {
        let offset = config.offset;
        Self {
            east: StopLine { axis: Axis::X, value: -offset, travel_sign: 1.0 },
            west: StopLine { axis: Axis::X, value: offset, travel_sign: -1.0 },
            south: StopLine { axis: Axis::Z, value: -offset, travel_sign: 1.0 },
            north: StopLine { axis: Axis::Z, value: offset, travel_sign: -1.0 },
            proximity: config.proximity,
        }
    }

    pub fn for_heading(&self, heading: Heading) -> &StopLine {
        match heading {
            Heading::East => &self.east,
            Heading::West => &self.west,
            Heading::South => &self.south,
            Heading::North => &self.north,
        }
    }

    /// Whether a vehicle at `position` heading `heading` is inside the stopping
    /// zone: not past its line and within `proximity` of it.
    pub fn in_stop_zone(&self, heading: Heading, position: &Point) -> bool {
        let line = self.for_heading(heading);
        line.is_approaching(position) && line.distance(position) <= self.proximity
    }
}

impl Default for StopLines {
    fn default() -> Self {
        Self::new(&StopLineConfig::default())
    }
}
