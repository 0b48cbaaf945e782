//! Core value types for the grid simulation
//!
//! Positions, headings and commands. None of these know about a grid.

use std::fmt;

use super::error::SimError;

/// Index of a vehicle in its grid, in registration order
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VehicleId(pub usize);

/// A cell on the grid
///
/// Axis convention: North is `y + 1`, South is `y - 1`, East is `x + 1` and
/// West is `x - 1`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one unit ahead when facing `direction`
    pub fn step_forward(&self, direction: Direction) -> Position {
        let (dx, dy) = direction.offset();
        Position {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}

/// Cardinal heading of a vehicle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// Rotate 90 degrees counter-clockwise
    pub fn rotate_left(self) -> Direction {
        match self {
            Direction::North => Direction::West,
            Direction::West => Direction::South,
            Direction::South => Direction::East,
            Direction::East => Direction::North,
        }
    }

    /// Rotate 90 degrees clockwise
    pub fn rotate_right(self) -> Direction {
        match self {
            Direction::North => Direction::East,
            Direction::East => Direction::South,
            Direction::South => Direction::West,
            Direction::West => Direction::North,
        }
    }

    /// Unit offset `(dx, dy)` of one forward move
    pub fn offset(self) -> (i32, i32) {
        match self {
            Direction::North => (0, 1),
            Direction::South => (0, -1),
            Direction::East => (1, 0),
            Direction::West => (-1, 0),
        }
    }

    pub fn as_char(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    pub fn from_char(c: char) -> Result<Direction, SimError> {
        match c {
            'N' => Ok(Direction::North),
            'E' => Ok(Direction::East),
            'S' => Ok(Direction::South),
            'W' => Ok(Direction::West),
            other => Err(SimError::InvalidDirection(other.to_string())),
        }
    }
}

impl std::str::FromStr for Direction {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Direction::from_char(c),
            _ => Err(SimError::InvalidDirection(s.to_string())),
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_char())
    }
}

/// A single instruction executed by a vehicle during one step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Command {
    /// Move one cell ahead
    Forward,
    /// Rotate 90 degrees left in place
    TurnLeft,
    /// Rotate 90 degrees right in place
    TurnRight,
}

impl Command {
    pub fn as_char(self) -> char {
        match self {
            Command::Forward => 'F',
            Command::TurnLeft => 'L',
            Command::TurnRight => 'R',
        }
    }

    pub fn from_char(c: char) -> Result<Command, SimError> {
        match c {
            'F' => Ok(Command::Forward),
            'L' => Ok(Command::TurnLeft),
            'R' => Ok(Command::TurnRight),
            other => Err(SimError::InvalidCommand(other)),
        }
    }

    /// Parse a command string such as `FFRFFL`
    ///
    /// The empty string is a valid, empty program.
    pub fn parse_sequence(s: &str) -> Result<Vec<Command>, SimError> {
        s.chars().map(Command::from_char).collect()
    }
}

/// Lifecycle of a vehicle during a run
///
/// `Active` is the only non-terminal state; once a vehicle leaves it, it
/// never comes back.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VehicleStatus {
    Active,
    StoppedAtBoundary { step: u32 },
    Collided { step: u32, with: Vec<String> },
}

impl VehicleStatus {
    pub fn is_active(&self) -> bool {
        matches!(self, VehicleStatus::Active)
    }

    /// Step at which the vehicle became terminal, if it has
    pub fn final_step(&self) -> Option<u32> {
        match self {
            VehicleStatus::Active => None,
            VehicleStatus::StoppedAtBoundary { step } | VehicleStatus::Collided { step, .. } => {
                Some(*step)
            }
        }
    }
}

/// Smallest grid dimension accepted anywhere
pub const MIN_DIMENSION: i32 = 1;

/// Upper bound the console applies to grid dimensions
pub const DEFAULT_MAX_DIMENSION: i32 = 100;
