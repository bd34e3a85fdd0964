use nalgebra::{Point3, Vector3};

pub mod signal;
pub mod stop_line;
pub mod vehicle;
pub mod manager;
pub mod detector;
pub mod intersection;

pub use signal::*;
pub use stop_line::*;
pub use vehicle::*;
pub use manager::*;
pub use detector::*;
pub use intersection::*;

pub type Vec3 = Vector3<f32>;
pub type Point = Point3<f32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VehicleId(pub usize);

/// Direction of travel. Vehicles move along the ground plane (x/z); y is height.
///
/// Compass names follow the renderer's camera, which looks down -z: north is
/// away from the viewer (-z) and south is towards it (+z), so a top-down map
/// drawn with +z pointing up shows them flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Heading {
    /// +x
    East,
    /// -x
    West,
    /// +z
    South,
    /// -z
    North,
}

impl Heading {
    pub const ALL: [Heading; 4] = [Heading::East, Heading::West, Heading::South, Heading::North];

    pub fn unit(self) -> Vec3 {
        match self {
            Heading::East => Vec3::new(1.0, 0.0, 0.0),
            Heading::West => Vec3::new(-1.0, 0.0, 0.0),
            Heading::South => Vec3::new(0.0, 0.0, 1.0),
            Heading::North => Vec3::new(0.0, 0.0, -1.0),
        }
    }

    /// Border point a vehicle with this heading enters from.
    pub fn entry_point(self, spawn_distance: f32, lane_height: f32) -> Point {
        let back = -self.unit() * spawn_distance;
        Point::new(back.x, lane_height, back.z)
    }
}
