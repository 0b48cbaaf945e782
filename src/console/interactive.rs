//! Menu-driven interactive session
//!
//! Reads one answer per line. Invalid answers are reported and the same
//! question is asked again; end of input ends the session cleanly.

use std::io::{BufRead, Write};

use anyhow::{Context, Result};
use log::debug;

use super::input::{
    parse_commands, parse_dimensions, parse_menu_choice, parse_placement, MenuChoice,
};
use super::report::{write_car_list, write_results};
use crate::simulation::{Command, Direction, Position, Session, SimError};

const GOODBYE: &str = "Thank you for running the simulation. Goodbye!";

/// Line-oriented prompt over any reader/writer pair
struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Prompter<R, W> {
    /// Print `prompt` and read one trimmed line; `None` at end of input
    fn ask(&mut self, prompt: &str) -> Result<Option<String>> {
        writeln!(self.output, "\n{}", prompt).context("Failed to write prompt")?;
        self.output.flush().context("Failed to flush output")?;

        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .context("Failed to read from input")?;
        if read == 0 {
            return Ok(None);
        }
        let answer = line.trim().to_string();
        debug!("read answer '{}'", answer);
        Ok(Some(answer))
    }

    fn say(&mut self, message: impl std::fmt::Display) -> Result<()> {
        writeln!(self.output, "{}", message).context("Failed to write output")
    }

    fn ask_menu(&mut self, prompt: &str) -> Result<Option<MenuChoice>> {
        loop {
            let Some(answer) = self.ask(prompt)? else {
                return Ok(None);
            };
            match parse_menu_choice(&answer) {
                Some(choice) => return Ok(Some(choice)),
                None => self.say("Invalid input: please enter either 1 or 2.")?,
            }
        }
    }
}

/// How a field's session ended
enum FieldEnd {
    StartOver,
    Exit,
}

/// Run the interactive simulation until the user exits or input runs out
pub fn run_interactive<R: BufRead, W: Write>(
    input: R,
    output: W,
    max_dimension: i32,
) -> Result<()> {
    let mut prompter = Prompter { input, output };
    let mut session = Session::new(max_dimension);

    prompter.say("Welcome to Auto Driving Car Simulation!")?;

    loop {
        match run_field(&mut prompter, &mut session)? {
            FieldEnd::StartOver => session.start_over(),
            FieldEnd::Exit => break,
        }
    }

    prompter.say(GOODBYE)?;
    Ok(())
}

fn run_field<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut Session,
) -> Result<FieldEnd> {
    let dimensions_prompt =
        "Please enter the width and height of the simulation field in x y format:";
    loop {
        let Some(answer) = prompter.ask(dimensions_prompt)? else {
            return Ok(FieldEnd::Exit);
        };
        let created = parse_dimensions(&answer, session.max_dimension()).and_then(|(width, height)| {
            session.create_grid(width, height).map(|_| (width, height))
        });
        match created {
            Ok((width, height)) => {
                prompter.say(format!("You have created a field of {} x {}.", width, height))?;
                break;
            }
            Err(e) => prompter.say(format!("Invalid input: {}", e))?,
        }
    }

    loop {
        let main_menu =
            "Please choose from the following options:\n[1] Add a car to field\n[2] Run simulation";
        match prompter.ask_menu(main_menu)? {
            None => return Ok(FieldEnd::Exit),
            Some(MenuChoice::First) => {
                if !add_car(prompter, session)? {
                    return Ok(FieldEnd::Exit);
                }
            }
            Some(MenuChoice::Second) => match run_simulation(prompter, session)? {
                Some(end) => return Ok(end),
                None => continue,
            },
        }
    }
}

/// Collect one car; returns `false` if input ran out
fn add_car<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut Session,
) -> Result<bool> {
    let Some(grid) = session.grid() else {
        return Ok(false);
    };
    let (width, height) = (grid.width(), grid.height());

    let name = loop {
        let Some(name) = prompter.ask("Please enter the name of the car:")? else {
            return Ok(false);
        };
        if name.is_empty() {
            prompter.say("Invalid input: the car name must not be empty.")?;
        } else if session.grid().is_some_and(|g| g.has_vehicle(&name)) {
            prompter.say(format!(
                "Car '{}' already exists. Please input a different name of the car.",
                name
            ))?;
        } else {
            break name;
        }
    };

    let (position, direction) = loop {
        let prompt = format!(
            "Please enter initial position of car {} in x y Direction format:",
            name
        );
        let Some(answer) = prompter.ask(&prompt)? else {
            return Ok(false);
        };
        match parse_placement(&answer) {
            Ok((x, y, direction)) => {
                let position = Position::new(x, y);
                if session.grid().is_some_and(|g| g.contains(position)) {
                    break (position, direction);
                }
                prompter.say(format!(
                    "Car '{}' cannot be placed outside the field. Current field size is {} x {}.",
                    name, width, height
                ))?;
            }
            Err(e) => prompter.say(format!("Invalid input: {}", e))?,
        }
    };

    let commands = loop {
        let prompt = format!("Please enter the commands for car {}:", name);
        let Some(answer) = prompter.ask(&prompt)? else {
            return Ok(false);
        };
        match parse_commands(&answer) {
            Ok(commands) => break commands,
            Err(e) => prompter.say(format!("Invalid input: {}", e))?,
        }
    };

    register(prompter, session, &name, position, direction, commands)?;
    Ok(true)
}

fn register<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut Session,
    name: &str,
    position: Position,
    direction: Direction,
    commands: Vec<Command>,
) -> Result<()> {
    if let Err(e) = session.add_vehicle(name, position, direction, commands) {
        return prompter.say(format!("Could not add car: {}", e));
    }
    if let Some(grid) = session.grid() {
        write_car_list(&mut prompter.output, grid)?;
    }
    Ok(())
}

/// Run the current field; `None` means go back to the main menu
fn run_simulation<R: BufRead, W: Write>(
    prompter: &mut Prompter<R, W>,
    session: &mut Session,
) -> Result<Option<FieldEnd>> {
    if let Some(grid) = session.grid() {
        if !grid.is_empty() {
            write_car_list(&mut prompter.output, grid)?;
        }
    }

    let report = match session.run() {
        Ok(report) => report,
        Err(SimError::EmptyGrid) => {
            prompter.say("No existing cars in the field.")?;
            return Ok(None);
        }
        Err(e) => return Err(e).context("Simulation failed"),
    };

    prompter.say("")?;
    write_results(&mut prompter.output, &report)?;

    let end_menu = "Please choose from the following options:\n[1] Start over\n[2] Exit";
    Ok(Some(match prompter.ask_menu(end_menu)? {
        Some(MenuChoice::First) => FieldEnd::StartOver,
        Some(MenuChoice::Second) | None => FieldEnd::Exit,
    }))
}
