//! Collision detection between active vehicles

use std::collections::BTreeMap;

use super::types::{Position, VehicleId};
use super::vehicle::SimVehicle;

/// Colliding cells mapped to the vehicles on them, in registration order
pub type CollisionMap = BTreeMap<Position, Vec<VehicleId>>;

/// Find every cell held by two or more active vehicles
///
/// Terminal vehicles are ignored, so a wreck or a car stopped at the border
/// never causes a new collision. Read-only: applying the consequences is up
/// to the caller.
pub fn detect_collisions(vehicles: &[SimVehicle]) -> CollisionMap {
    let mut occupancy: CollisionMap = BTreeMap::new();
    for vehicle in vehicles.iter().filter(|v| v.status.is_active()) {
        occupancy
            .entry(vehicle.position)
            .or_default()
            .push(vehicle.id);
    }
    occupancy.retain(|_, ids| ids.len() >= 2);
    occupancy
}
