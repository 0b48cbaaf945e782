//! Console front end for the simulation
//!
//! Parsing of typed input, text reports and the interactive menu loop. The
//! simulation module never prints; everything user-facing goes through here.

mod input;
mod interactive;
mod report;

pub use input::{
    parse_car_spec, parse_commands, parse_dimensions, parse_menu_choice, parse_placement, CarSpec,
    MenuChoice,
};
pub use interactive::run_interactive;
pub use report::{
    format_event, format_outcome, format_vehicle, write_car_list, write_results, write_step,
};
