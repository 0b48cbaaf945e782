//! Vehicle state and per-step command execution

use log::{debug, warn};

use super::grid::Bounds;
use super::types::{Command, Direction, Position, VehicleId, VehicleStatus};

/// What happened when a vehicle was asked to execute its next command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleUpdateResult {
    /// Vehicle is terminal or has no commands left; nothing was consumed
    Idle,
    /// Forward move committed
    Moved { from: Position, to: Position },
    /// Heading changed in place
    Turned { from: Direction, to: Direction },
    /// Forward move would have left the grid; the vehicle is now terminal
    StoppedAtBoundary { attempted: Position },
}

/// A vehicle on the grid
#[derive(Debug, Clone)]
pub struct SimVehicle {
    pub id: VehicleId,
    pub name: String,
    pub start_position: Position,
    pub start_direction: Direction,
    pub position: Position,
    pub direction: Direction,
    pub status: VehicleStatus,
    commands: Vec<Command>,
    /// Index of the next command to execute; only ever moves forward
    cursor: usize,
}

impl SimVehicle {
    pub fn new(
        id: VehicleId,
        name: impl Into<String>,
        position: Position,
        direction: Direction,
        commands: Vec<Command>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            start_position: position,
            start_direction: direction,
            position,
            direction,
            status: VehicleStatus::Active,
            commands,
            cursor: 0,
        }
    }

    /// Commands not yet executed, in execution order
    pub fn pending_commands(&self) -> &[Command] {
        &self.commands[self.cursor..]
    }

    /// The full program the vehicle was registered with
    pub fn commands(&self) -> &[Command] {
        &self.commands
    }

    pub fn commands_executed(&self) -> usize {
        self.cursor
    }

    pub fn has_pending_commands(&self) -> bool {
        self.cursor < self.commands.len()
    }

    /// Active with at least one command left
    pub fn can_move(&self) -> bool {
        self.status.is_active() && self.has_pending_commands()
    }

    /// Pending commands rendered back to their `F`/`L`/`R` form
    pub fn pending_command_string(&self) -> String {
        self.pending_commands().iter().map(|c| c.as_char()).collect()
    }

    /// Consume and apply the next command
    ///
    /// Terminal vehicles and vehicles with an empty queue are left untouched.
    pub fn update(&mut self, step: u32, bounds: &Bounds) -> VehicleUpdateResult {
        if !self.can_move() {
            return VehicleUpdateResult::Idle;
        }

        let command = self.commands[self.cursor];
        self.cursor += 1;

        debug!(
            "step {}: {} executes {} at {} facing {}",
            step,
            self.name,
            command.as_char(),
            self.position,
            self.direction
        );

        match command {
            Command::Forward => {
                let candidate = self.position.step_forward(self.direction);
                if bounds.contains(candidate) {
                    let from = self.position;
                    self.position = candidate;
                    VehicleUpdateResult::Moved {
                        from,
                        to: candidate,
                    }
                } else {
                    warn!(
                        "{} stopped at border at {} on step {} (tried to reach {})",
                        self.name, self.position, step, candidate
                    );
                    self.status = VehicleStatus::StoppedAtBoundary { step };
                    VehicleUpdateResult::StoppedAtBoundary {
                        attempted: candidate,
                    }
                }
            }
            Command::TurnLeft => self.turn(self.direction.rotate_left()),
            Command::TurnRight => self.turn(self.direction.rotate_right()),
        }
    }

    fn turn(&mut self, to: Direction) -> VehicleUpdateResult {
        let from = self.direction;
        self.direction = to;
        VehicleUpdateResult::Turned { from, to }
    }

    /// Freeze the vehicle after a collision
    pub(crate) fn mark_collided(&mut self, step: u32, with: Vec<String>) {
        if self.status.is_active() {
            self.status = VehicleStatus::Collided { step, with };
        }
    }
}
