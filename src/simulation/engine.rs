//! Step-synchronized simulation engine
//!
//! Every step, each vehicle that is still active and has commands left
//! executes exactly one command, in registration order. Collisions are
//! checked right after each individual command rather than once at the end
//! of the step, so a car driving into an occupied cell is caught before the
//! next car in the same step moves.

use log::{debug, info, warn};

use super::collision::CollisionMap;
use super::error::{Result, SimError};
use super::grid::SimGrid;
use super::outcome::VehicleOutcome;
use super::types::{Direction, Position, VehicleStatus};
use super::vehicle::VehicleUpdateResult;

/// Something that happened during a step, in the order it happened
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StepEvent {
    Moved {
        vehicle: String,
        from: Position,
        to: Position,
    },
    Turned {
        vehicle: String,
        from: Direction,
        to: Direction,
    },
    StoppedAtBoundary {
        vehicle: String,
        position: Position,
        attempted: Position,
    },
    Collision {
        position: Position,
        vehicles: Vec<String>,
    },
}

/// Everything that happened during one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepReport {
    pub step: u32,
    pub events: Vec<StepEvent>,
}

/// Result of running a grid to completion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunReport {
    /// Number of steps executed
    pub steps: u32,
    /// One entry per vehicle, in registration order
    pub outcomes: Vec<VehicleOutcome>,
}

/// Drives a grid step by step
#[derive(Debug, Default)]
pub struct SimEngine {
    step: u32,
}

impl SimEngine {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of steps executed so far
    pub fn step_count(&self) -> u32 {
        self.step
    }

    /// True once no active vehicle has anything left to do
    pub fn is_finished(grid: &SimGrid) -> bool {
        !grid.vehicles().iter().any(|v| v.can_move())
    }

    /// Execute one step
    ///
    /// Returns `None` without advancing the step counter when the grid is
    /// already finished.
    pub fn step(&mut self, grid: &mut SimGrid) -> Option<StepReport> {
        if Self::is_finished(grid) {
            return None;
        }

        self.step += 1;
        let step = self.step;
        debug!("--- step {} ---", step);

        let bounds = grid.bounds();
        let mut events = Vec::new();

        for index in 0..grid.vehicles().len() {
            let vehicle = &mut grid.vehicles_mut()[index];
            let result = vehicle.update(step, &bounds);
            let name = vehicle.name.clone();

            match result {
                VehicleUpdateResult::Idle => continue,
                VehicleUpdateResult::Moved { from, to } => {
                    events.push(StepEvent::Moved {
                        vehicle: name,
                        from,
                        to,
                    });
                }
                VehicleUpdateResult::Turned { from, to } => {
                    events.push(StepEvent::Turned {
                        vehicle: name,
                        from,
                        to,
                    });
                }
                VehicleUpdateResult::StoppedAtBoundary { attempted } => {
                    events.push(StepEvent::StoppedAtBoundary {
                        vehicle: name,
                        position: vehicle.position,
                        attempted,
                    });
                }
            }

            let collisions = grid.detect_collisions();
            if !collisions.is_empty() {
                Self::apply_collisions(grid, &collisions, step, &mut events);
            }
        }

        Some(StepReport { step, events })
    }

    /// Freeze every vehicle sitting on a colliding cell
    fn apply_collisions(
        grid: &mut SimGrid,
        collisions: &CollisionMap,
        step: u32,
        events: &mut Vec<StepEvent>,
    ) {
        for (position, ids) in collisions {
            let names: Vec<String> = ids
                .iter()
                .map(|id| grid.vehicles()[id.0].name.clone())
                .collect();

            warn!(
                "collision at {} on step {} between {}",
                position,
                step,
                names.join(", ")
            );

            for id in ids {
                let vehicle = &mut grid.vehicles_mut()[id.0];
                let others = names
                    .iter()
                    .filter(|name| **name != vehicle.name)
                    .cloned()
                    .collect();
                vehicle.mark_collided(step, others);
            }

            events.push(StepEvent::Collision {
                position: *position,
                vehicles: names,
            });
        }
    }

    /// Step until finished
    pub fn run(&mut self, grid: &mut SimGrid) -> Result<RunReport> {
        self.run_with(grid, |_| {})
    }

    /// Step until finished, handing every step's report to `on_step`
    ///
    /// Fails with [`SimError::EmptyGrid`] before executing anything when no
    /// vehicle is registered.
    pub fn run_with<F>(&mut self, grid: &mut SimGrid, mut on_step: F) -> Result<RunReport>
    where
        F: FnMut(&StepReport),
    {
        if grid.is_empty() {
            info!("run requested on an empty field");
            return Err(SimError::EmptyGrid);
        }

        info!(
            "running simulation on a {} x {} field with {} cars",
            grid.width(),
            grid.height(),
            grid.vehicles().len()
        );

        let first_step = self.step;
        while let Some(report) = self.step(grid) {
            on_step(&report);
        }

        let steps = self.step - first_step;
        let outcomes = grid.outcomes();
        info!(
            "simulation finished after {} steps: {} active, {} stopped at border, {} collided",
            steps,
            outcomes.iter().filter(|o| o.status.is_active()).count(),
            outcomes
                .iter()
                .filter(|o| matches!(o.status, VehicleStatus::StoppedAtBoundary { .. }))
                .count(),
            outcomes
                .iter()
                .filter(|o| o.collided_with().is_some())
                .count()
        );

        Ok(RunReport { steps, outcomes })
    }
}
