use std::io::{self, Write};

use anyhow::{bail, Context, Result};
use auto_driving_sim::console;
use auto_driving_sim::simulation::{
    check_dimensions, draw_map, Position, RandomScenario, SimEngine, SimError, SimGrid,
    DEFAULT_MAX_DIMENSION,
};
use clap::Parser;

#[derive(Parser)]
#[command(name = "auto_driving_sim")]
#[command(about = "Auto driving car simulation on a bounded grid")]
struct Cli {
    /// Field width for a batch run (interactive session if omitted)
    #[arg(long, requires = "height")]
    width: Option<i32>,

    /// Field height for a batch run
    #[arg(long, requires = "width")]
    height: Option<i32>,

    /// Car to place, as "NAME X Y DIRECTION COMMANDS" (repeatable)
    #[arg(long = "car", value_name = "SPEC")]
    cars: Vec<String>,

    /// Add this many randomly placed cars
    #[arg(long, value_name = "COUNT")]
    random: Option<usize>,

    /// Seed for --random, for reproducible runs
    #[arg(long)]
    seed: Option<u64>,

    /// Longest random command string
    #[arg(long, default_value = "10")]
    max_commands: usize,

    /// Print a map of the field before and after the run
    #[arg(long)]
    map: bool,

    /// Print every step's events
    #[arg(long)]
    trace: bool,

    /// Largest accepted field width or height
    #[arg(long, default_value_t = DEFAULT_MAX_DIMENSION)]
    max_dimension: i32,
}

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match (cli.width, cli.height) {
        (Some(width), Some(height)) => run_batch(&cli, width, height),
        _ => {
            if !cli.cars.is_empty() || cli.random.is_some() {
                bail!("--width and --height are required with --car or --random");
            }
            let stdin = io::stdin();
            let stdout = io::stdout();
            console::run_interactive(stdin.lock(), stdout.lock(), cli.max_dimension)
        }
    }
}

/// Run the simulation in batch mode (no prompts)
fn run_batch(cli: &Cli, width: i32, height: i32) -> Result<()> {
    check_dimensions(width, height, cli.max_dimension).context("Invalid field size")?;

    let mut grid = match cli.random {
        Some(cars) => RandomScenario {
            width,
            height,
            cars,
            max_commands: cli.max_commands,
            seed: cli.seed,
        }
        .build()
        .context("Failed to generate random cars")?,
        None => SimGrid::new(width, height)?,
    };

    for spec in &cli.cars {
        let car = console::parse_car_spec(spec).with_context(|| format!("Invalid car '{}'", spec))?;
        grid.register(
            &car.name,
            Position::new(car.x, car.y),
            car.direction,
            car.commands,
        )
        .with_context(|| format!("Could not add car '{}'", car.name))?;
    }

    let stdout = io::stdout();
    let mut out = stdout.lock();

    writeln!(out, "You have created a field of {} x {}.", width, height)?;
    if grid.is_empty() {
        writeln!(out, "No existing cars in the field.")?;
        return Ok(());
    }

    console::write_car_list(&mut out, &grid)?;
    if cli.map {
        write!(out, "\n{}", draw_map(&grid))?;
    }

    let mut engine = SimEngine::new();
    let report = if cli.trace {
        let mut trace = Vec::new();
        let report = engine.run_with(&mut grid, |step| trace.push(step.clone()));
        for step in &trace {
            console::write_step(&mut out, step)?;
        }
        report
    } else {
        engine.run(&mut grid)
    };

    let report = match report {
        Ok(report) => report,
        Err(SimError::EmptyGrid) => {
            writeln!(out, "No existing cars in the field.")?;
            return Ok(());
        }
        Err(e) => return Err(e.into()),
    };

    writeln!(out)?;
    console::write_results(&mut out, &report)?;
    if cli.map {
        write!(out, "\n{}", draw_map(&grid))?;
    }
    Ok(())
}
