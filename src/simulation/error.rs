//! Error type for the grid simulation

use thiserror::Error;

/// Everything that can go wrong while building or running a simulation.
///
/// All variants are recoverable: the caller decides whether to re-prompt,
/// start over or give up.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SimError {
    #[error("grid dimensions must be positive, got {width} x {height}")]
    InvalidDimensions { width: i32, height: i32 },

    #[error("car with name '{0}' already exists")]
    DuplicateName(String),

    #[error("car '{name}' cannot be placed at ({x},{y}) outside the {width} x {height} grid")]
    OutOfBounds {
        name: String,
        x: i32,
        y: i32,
        width: i32,
        height: i32,
    },

    #[error("invalid direction '{0}': only N, E, S and W are allowed")]
    InvalidDirection(String),

    #[error("invalid command '{0}': only F, L and R are allowed")]
    InvalidCommand(char),

    #[error("car name must not be empty")]
    InvalidName,

    #[error("no cars in the field")]
    EmptyGrid,

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, SimError>;
