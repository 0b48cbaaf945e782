//! Standalone grid simulation module
//!
//! All of the simulation logic lives here and performs no I/O. Callers build
//! a [`SimGrid`], register cars on it and run it, either directly or through
//! a [`Session`].

mod collision;
mod engine;
mod error;
mod grid;
mod outcome;
mod render;
mod scenario;
mod session;
mod types;
mod vehicle;

pub use collision::{detect_collisions, CollisionMap};
pub use engine::{RunReport, SimEngine, StepEvent, StepReport};
pub use error::{Result, SimError};
pub use grid::{Bounds, SimGrid};
pub use outcome::VehicleOutcome;
pub use render::draw_map;
pub use scenario::RandomScenario;
pub use session::{check_dimensions, Session};
pub use types::{
    Command, Direction, Position, VehicleId, VehicleStatus, DEFAULT_MAX_DIMENSION, MIN_DIMENSION,
};
pub use vehicle::{SimVehicle, VehicleUpdateResult};
