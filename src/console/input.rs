//! Parsing of user-typed lines into simulation values

use crate::simulation::{check_dimensions, Command, Direction, Result, SimError};

/// A car described on one line as `NAME X Y D COMMANDS`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CarSpec {
    pub name: String,
    pub x: i32,
    pub y: i32,
    pub direction: Direction,
    pub commands: Vec<Command>,
}

/// Menu entries offered between prompts
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    First,
    Second,
}

/// Parse `"x y"` grid dimensions, each within `1..=max_dimension`
pub fn parse_dimensions(line: &str, max_dimension: i32) -> Result<(i32, i32)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [width, height] = parts.as_slice() else {
        return Err(SimError::InvalidInput(format!(
            "expected two numbers separated by a space, got '{}'",
            line.trim()
        )));
    };
    let width = parse_int(width)?;
    let height = parse_int(height)?;
    check_dimensions(width, height, max_dimension)?;
    Ok((width, height))
}

/// Parse an initial placement in `"x y D"` form
pub fn parse_placement(line: &str) -> Result<(i32, i32, Direction)> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let [x, y, direction] = parts.as_slice() else {
        return Err(SimError::InvalidInput(
            "please enter x, y and direction separated by spaces".to_string(),
        ));
    };
    Ok((parse_int(x)?, parse_int(y)?, direction.parse()?))
}

/// Parse a command string; surrounding whitespace is ignored
pub fn parse_commands(line: &str) -> Result<Vec<Command>> {
    Command::parse_sequence(line.trim())
}

/// Parse a full car description such as `A 1 2 N FFRFFFFRRL`
///
/// The command string may be omitted for a car that never moves.
pub fn parse_car_spec(line: &str) -> Result<CarSpec> {
    let parts: Vec<&str> = line.split_whitespace().collect();
    let (name, x, y, direction, commands) = match parts.as_slice() {
        [name, x, y, direction] => (name, x, y, direction, ""),
        [name, x, y, direction, commands] => (name, x, y, direction, *commands),
        _ => {
            return Err(SimError::InvalidInput(format!(
                "expected 'NAME X Y DIRECTION COMMANDS', got '{}'",
                line.trim()
            )))
        }
    };
    Ok(CarSpec {
        name: name.to_string(),
        x: parse_int(x)?,
        y: parse_int(y)?,
        direction: direction.parse()?,
        commands: Command::parse_sequence(commands)?,
    })
}

pub fn parse_menu_choice(line: &str) -> Option<MenuChoice> {
    match line.trim() {
        "1" => Some(MenuChoice::First),
        "2" => Some(MenuChoice::Second),
        _ => None,
    }
}

fn parse_int(s: &str) -> Result<i32> {
    s.parse()
        .map_err(|_| SimError::InvalidInput(format!("'{}' is not a whole number", s)))
}
