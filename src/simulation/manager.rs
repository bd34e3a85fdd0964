use super::{Advance, Heading, StopLines, Vehicle, VehicleId};
use crate::config::{ConfigError, StopLineConfig, TrafficConfig, Validate};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_distr::{Distribution, Uniform};

const PLATE_LETTERS: &[u8] = b"ABCDEFGHJKLMNPQRSTUVWXYZ";
const PLATE_DIGITS: &[u8] = b"0123456789";

/// Vehicles added and removed during one `update`, so a renderer can attach
/// and detach visuals by id.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TickEvents {
    pub spawned: Option<VehicleId>,
    pub despawned: Vec<VehicleId>,
}

pub struct VehicleManager {
    vehicles: Vec<Vehicle>,
    config: TrafficConfig,
    stop_lines: StopLines,
    speed_band: Uniform<f32>,
    spawn_timer_ms: f32,
    next_vehicle_id: usize,
    total_spawned: u32,
    total_despawned: u32,
    rng: StdRng,
}

impl VehicleManager {
    /// Fails if the traffic or stop-line settings are out of range.
    pub fn new(
        config: TrafficConfig,
        stop_lines: &StopLineConfig,
        seed: Option<u64>,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        stop_lines.validate()?;

        let rng = if let Some(seed) = seed {
            StdRng::seed_from_u64(seed)
        } else {
            StdRng::from_entropy()
        };

        let speed_band = Uniform::new_inclusive(config.min_speed, config.max_speed);

        Ok(Self {
            vehicles: Vec::with_capacity(config.max_vehicles),
            stop_lines: StopLines::new(stop_lines),
            speed_band,
            config,
            spawn_timer_ms: 0.0,
            next_vehicle_id: 0,
            total_spawned: 0,
            total_despawned: 0,
            rng,
        })
    }

    /// Runs one tick: maybe spawns, then advances every vehicle and drops the
    /// ones that left the bounds.
    pub fn update(&mut self, red_light: bool, dt_ms: f32) -> TickEvents {
        let mut events = TickEvents::default();

        if dt_ms > 0.0 {
            self.spawn_timer_ms += dt_ms;
        }
        if self.spawn_timer_ms >= self.config.spawn_interval_ms {
            events.spawned = self.spawn_vehicle();
            // The timer restarts even when the spawn was skipped at capacity
            self.spawn_timer_ms = 0.0;
        }

        let stop_lines = &self.stop_lines;
        let bounds = self.config.bounds;
        let despawned = &mut events.despawned;
        self.vehicles.retain_mut(|vehicle| match vehicle.advance(red_light, stop_lines, bounds) {
            Advance::Active => true,
            Advance::OutOfBounds => {
                log::debug!("Vehicle {} left the intersection", vehicle.id.0);
                despawned.push(vehicle.id);
                false
            }
        });
        self.total_despawned += events.despawned.len() as u32;

        events
    }

    /// Spawns a vehicle at a random approach with a random speed.
    /// Returns `None` when at capacity.
    pub fn spawn_vehicle(&mut self) -> Option<VehicleId> {
        if self.is_full() {
            log::debug!("Spawn skipped, {} vehicles at capacity", self.vehicles.len());
            return None;
        }

        let heading = Heading::ALL[self.rng.gen_range(0..Heading::ALL.len())];
        let speed = self.speed_band.sample(&mut self.rng);

        self.spawn_with(heading, speed)
    }

    /// Spawns a vehicle with the given heading and speed. Capacity still applies.
    pub fn spawn_with(&mut self, heading: Heading, speed: f32) -> Option<VehicleId> {
        if self.is_full() {
            return None;
        }

        let id = VehicleId(self.next_vehicle_id);
        self.next_vehicle_id += 1;

        let position = heading.entry_point(self.config.spawn_distance, self.config.lane_height);
        let mut vehicle = Vehicle::new(id, position, heading, speed);
        vehicle.color = [self.rng.gen(), self.rng.gen(), self.rng.gen()];
        vehicle.plate = self.generate_plate();

        log::debug!(
            "Spawned vehicle {} ({}) heading {:?} at {:.3}/tick",
            id.0, vehicle.plate, heading, speed
        );

        self.vehicles.push(vehicle);
        self.total_spawned += 1;
        Some(id)
    }

    fn generate_plate(&mut self) -> String {
        let mut plate = self.config.plate_prefix.clone();
        plate.push(PLATE_LETTERS[self.rng.gen_range(0..PLATE_LETTERS.len())] as char);
        for _ in 0..4 {
            let pool = if self.rng.gen_bool(0.5) { PLATE_DIGITS } else { PLATE_LETTERS };
            plate.push(pool[self.rng.gen_range(0..pool.len())] as char);
        }
        plate
    }

    pub fn query_violations(&self) -> Vec<&Vehicle> {
        self.vehicles.iter().filter(|v| v.is_violating()).collect()
    }

    pub fn has_violations(&self) -> bool {
        self.vehicles.iter().any(|v| v.is_violating())
    }

    pub fn random_violating<R: Rng + ?Sized>(&self, rng: &mut R) -> Option<&Vehicle> {
        self.query_violations().choose(rng).copied()
    }

    /// Releases every stopped vehicle. Returns how many were released.
    pub fn release_stopped(&mut self) -> usize {
        let mut released = 0;
        for vehicle in self.vehicles.iter_mut().filter(|v| v.is_stopped()) {
            vehicle.release();
            released += 1;
        }
        if released > 0 {
            log::debug!("Released {} stopped vehicles", released);
        }
        released
    }

    pub fn get(&self, id: VehicleId) -> Option<&Vehicle> {
        self.vehicles.iter().find(|v| v.id == id)
    }

    pub fn get_mut(&mut self, id: VehicleId) -> Option<&mut Vehicle> {
        self.vehicles.iter_mut().find(|v| v.id == id)
    }

    pub fn vehicles(&self) -> &[Vehicle] {
        &self.vehicles
    }

    pub fn len(&self) -> usize {
        self.vehicles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.vehicles.len() >= self.config.max_vehicles
    }

    pub fn capacity(&self) -> usize {
        self.config.max_vehicles
    }

    pub fn total_spawned(&self) -> u32 {
        self.total_spawned
    }

    pub fn total_despawned(&self) -> u32 {
        self.total_despawned
    }

    /// Drops every vehicle and restarts the spawn timer. Ids keep increasing
    /// so a renderer never sees an id reused.
    pub fn reset(&mut self) {
        self.vehicles.clear();
        self.spawn_timer_ms = 0.0;
        self.total_spawned = 0;
        self.total_despawned = 0;
    }
}
