//! Caller-owned session holding one grid at a time
//!
//! Starting over simply drops the current grid; the next `create_grid`
//! builds a fresh one.

use log::info;

use super::engine::{RunReport, SimEngine, StepReport};
use super::error::{Result, SimError};
use super::grid::SimGrid;
use super::types::{Command, Direction, Position, DEFAULT_MAX_DIMENSION, MIN_DIMENSION};
use super::vehicle::SimVehicle;

#[derive(Debug)]
pub struct Session {
    grid: Option<SimGrid>,
    max_dimension: i32,
    runs_completed: usize,
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_DIMENSION)
    }
}

impl Session {
    pub fn new(max_dimension: i32) -> Self {
        Self {
            grid: None,
            max_dimension,
            runs_completed: 0,
        }
    }

    pub fn max_dimension(&self) -> i32 {
        self.max_dimension
    }

    pub fn runs_completed(&self) -> usize {
        self.runs_completed
    }

    pub fn grid(&self) -> Option<&SimGrid> {
        self.grid.as_ref()
    }

    /// Replace the current grid with a new empty one
    ///
    /// Dimensions above the session's maximum are rejected here even though
    /// the grid itself would accept them.
    pub fn create_grid(&mut self, width: i32, height: i32) -> Result<&SimGrid> {
        check_dimensions(width, height, self.max_dimension)?;
        let grid = SimGrid::new(width, height)?;
        Ok(&*self.grid.insert(grid))
    }

    /// Drop the current grid
    pub fn start_over(&mut self) {
        if self.grid.take().is_some() {
            info!("starting over with a new field");
        }
    }

    pub fn add_vehicle(
        &mut self,
        name: &str,
        position: Position,
        direction: Direction,
        commands: Vec<Command>,
    ) -> Result<&SimVehicle> {
        self.grid_mut()?
            .register(name, position, direction, commands)
    }

    pub fn run(&mut self) -> Result<RunReport> {
        self.run_with(|_| {})
    }

    pub fn run_with<F>(&mut self, on_step: F) -> Result<RunReport>
    where
        F: FnMut(&StepReport),
    {
        let report = SimEngine::new().run_with(self.grid_mut()?, on_step)?;
        self.runs_completed += 1;
        Ok(report)
    }

    fn grid_mut(&mut self) -> Result<&mut SimGrid> {
        self.grid
            .as_mut()
            .ok_or_else(|| SimError::InvalidInput("no field has been created yet".to_string()))
    }
}

/// Validate grid dimensions against both the core minimum and a caller maximum
pub fn check_dimensions(width: i32, height: i32, max_dimension: i32) -> Result<()> {
    if width < MIN_DIMENSION || height < MIN_DIMENSION {
        return Err(SimError::InvalidDimensions { width, height });
    }
    if width > max_dimension || height > max_dimension {
        return Err(SimError::InvalidInput(format!(
            "width and height must be from {} to {}, got {} x {}",
            MIN_DIMENSION, max_dimension, width, height
        )));
    }
    Ok(())
}
