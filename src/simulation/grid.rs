//! The simulation field and its vehicles
//!
//! A grid owns every vehicle registered on it, in registration order. That
//! order is the processing order inside each step and the reporting order
//! afterwards.

use log::info;

use super::collision::{detect_collisions, CollisionMap};
use super::engine::{RunReport, SimEngine};
use super::error::{Result, SimError};
use super::outcome::VehicleOutcome;
use super::types::{Command, Direction, Position, VehicleId};
use super::vehicle::SimVehicle;

/// Extent of a grid. Cells run from `(0, 0)` to `(width - 1, height - 1)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bounds {
    pub width: i32,
    pub height: i32,
}

impl Bounds {
    pub fn contains(&self, position: Position) -> bool {
        (0..self.width).contains(&position.x) && (0..self.height).contains(&position.y)
    }
}

/// A bounded field holding the vehicles of one simulation
#[derive(Debug, Clone)]
pub struct SimGrid {
    bounds: Bounds,
    vehicles: Vec<SimVehicle>,
}

impl SimGrid {
    /// Create an empty grid; both dimensions must be at least 1
    pub fn new(width: i32, height: i32) -> Result<Self> {
        if width < 1 || height < 1 {
            return Err(SimError::InvalidDimensions { width, height });
        }
        info!("created a field of {} x {}", width, height);
        Ok(Self {
            bounds: Bounds { width, height },
            vehicles: Vec::new(),
        })
    }

    pub fn width(&self) -> i32 {
        self.bounds.width
    }

    pub fn height(&self) -> i32 {
        self.bounds.height
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn contains(&self, position: Position) -> bool {
        self.bounds.contains(position)
    }

    pub fn has_vehicle(&self, name: &str) -> bool {
        self.vehicles.iter().any(|v| v.name == name)
    }

    pub fn vehicle(&self, name: &str) -> Option<&SimVehicle> {
        self.vehicles.iter().find(|v| v.name == name)
    }

    /// All vehicles in registration order
    pub fn vehicles(&self) -> &[SimVehicle] {
        &self.vehicles
    }

    pub(crate) fn vehicles_mut(&mut self) -> &mut [SimVehicle] {
        &mut self.vehicles
    }

    pub fn is_empty(&self) -> bool {
        self.vehicles.is_empty()
    }

    /// Add a vehicle to the grid
    ///
    /// Fails if the name is blank or already taken, or if the starting
    /// position is off the grid. Nothing is added on failure.
    pub fn register(
        &mut self,
        name: &str,
        position: Position,
        direction: Direction,
        commands: Vec<Command>,
    ) -> Result<&SimVehicle> {
        if name.trim().is_empty() {
            return Err(SimError::InvalidName);
        }
        if self.has_vehicle(name) {
            return Err(SimError::DuplicateName(name.to_string()));
        }
        if !self.contains(position) {
            return Err(SimError::OutOfBounds {
                name: name.to_string(),
                x: position.x,
                y: position.y,
                width: self.bounds.width,
                height: self.bounds.height,
            });
        }

        let id = VehicleId(self.vehicles.len());
        info!(
            "registered car {} at {} facing {} with {} commands",
            name,
            position,
            direction,
            commands.len()
        );
        self.vehicles
            .push(SimVehicle::new(id, name, position, direction, commands));
        Ok(&self.vehicles[id.0])
    }

    /// Register from raw direction and command strings such as `"N"` and `"FFRL"`
    pub fn register_str(
        &mut self,
        name: &str,
        x: i32,
        y: i32,
        direction: &str,
        commands: &str,
    ) -> Result<&SimVehicle> {
        let direction: Direction = direction.parse()?;
        let commands = Command::parse_sequence(commands)?;
        self.register(name, Position::new(x, y), direction, commands)
    }

    /// Cells currently shared by two or more active vehicles
    pub fn detect_collisions(&self) -> CollisionMap {
        detect_collisions(&self.vehicles)
    }

    /// Snapshot of every vehicle's current state, in registration order
    pub fn outcomes(&self) -> Vec<VehicleOutcome> {
        self.vehicles.iter().map(VehicleOutcome::from).collect()
    }

    /// Run the simulation to completion with a fresh engine
    pub fn run(&mut self) -> Result<RunReport> {
        SimEngine::new().run(self)
    }
}
