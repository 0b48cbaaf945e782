//! Random fleet generation
//!
//! Builds a grid populated with randomly placed cars and random programs.
//! Pass a seed for reproducible scenarios.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use super::error::Result;
use super::grid::SimGrid;
use super::types::{Command, Direction, Position};

const COMMANDS: [Command; 3] = [Command::Forward, Command::TurnLeft, Command::TurnRight];

/// Parameters for a random scenario
#[derive(Debug, Clone)]
pub struct RandomScenario {
    pub width: i32,
    pub height: i32,
    pub cars: usize,
    /// Each car gets between 1 and this many commands
    pub max_commands: usize,
    pub seed: Option<u64>,
}

impl RandomScenario {
    pub fn build(&self) -> Result<SimGrid> {
        let mut rng = match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };

        let mut grid = SimGrid::new(self.width, self.height)?;
        for index in 0..self.cars {
            let name = format!("CAR{}", index + 1);
            let position = Position::new(
                rng.random_range(0..self.width),
                rng.random_range(0..self.height),
            );
            let direction = Direction::ALL[rng.random_range(0..Direction::ALL.len())];
            let commands = random_commands(&mut rng, self.max_commands.max(1));
            grid.register(&name, position, direction, commands)?;
        }
        Ok(grid)
    }
}

fn random_commands<R: Rng + ?Sized>(rng: &mut R, max_commands: usize) -> Vec<Command> {
    let len = rng.random_range(1..=max_commands);
    (0..len)
        .map(|_| COMMANDS[rng.random_range(0..COMMANDS.len())])
        .collect()
}
