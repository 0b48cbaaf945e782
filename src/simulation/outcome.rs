//! Final per-vehicle results of a run

use super::types::{Direction, Position, VehicleStatus};
use super::vehicle::SimVehicle;

/// What a caller gets back for each vehicle once a run is over
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VehicleOutcome {
    pub name: String,
    pub position: Position,
    /// Reported for every vehicle, including frozen ones
    pub direction: Direction,
    pub status: VehicleStatus,
}

impl VehicleOutcome {
    pub fn final_step(&self) -> Option<u32> {
        self.status.final_step()
    }

    /// Names of the other vehicles involved, if this one collided
    pub fn collided_with(&self) -> Option<&[String]> {
        match &self.status {
            VehicleStatus::Collided { with, .. } => Some(with),
            _ => None,
        }
    }
}

impl From<&SimVehicle> for VehicleOutcome {
    fn from(vehicle: &SimVehicle) -> Self {
        Self {
            name: vehicle.name.clone(),
            position: vehicle.position,
            direction: vehicle.direction,
            status: vehicle.status.clone(),
        }
    }
}
