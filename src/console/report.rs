//! Text formatting of cars, step events and run results

use std::io::Write;

use anyhow::Result;

use crate::simulation::{
    RunReport, SimGrid, SimVehicle, StepEvent, StepReport, VehicleOutcome, VehicleStatus,
};

/// `- A, (1,2) N, FFRFFFFRRL`
pub fn format_vehicle(vehicle: &SimVehicle) -> String {
    format!(
        "- {}, {} {}, {}",
        vehicle.name,
        vehicle.position,
        vehicle.direction,
        vehicle.pending_command_string()
    )
}

/// One result line per vehicle
pub fn format_outcome(outcome: &VehicleOutcome) -> String {
    match &outcome.status {
        VehicleStatus::Active => {
            format!("- {}, {} {}", outcome.name, outcome.position, outcome.direction)
        }
        VehicleStatus::StoppedAtBoundary { step } => format!(
            "- {}, stopped at border at {} at step {}",
            outcome.name, outcome.position, step
        ),
        VehicleStatus::Collided { step, with } => format!(
            "- {}, collides with {} at {} at step {}",
            outcome.name,
            with.join(", "),
            outcome.position,
            step
        ),
    }
}

pub fn format_event(event: &StepEvent) -> String {
    match event {
        StepEvent::Moved { vehicle, from, to } => format!("{} moves {} -> {}", vehicle, from, to),
        StepEvent::Turned { vehicle, from, to } => format!("{} turns {} -> {}", vehicle, from, to),
        StepEvent::StoppedAtBoundary {
            vehicle,
            position,
            attempted,
        } => format!(
            "{} stops at border at {} (blocked move to {})",
            vehicle, position, attempted
        ),
        StepEvent::Collision { position, vehicles } => {
            format!("collision at {} between {}", position, vehicles.join(", "))
        }
    }
}

pub fn write_car_list<W: Write>(out: &mut W, grid: &SimGrid) -> Result<()> {
    writeln!(out, "Your current list of cars are:")?;
    for vehicle in grid.vehicles() {
        writeln!(out, "{}", format_vehicle(vehicle))?;
    }
    Ok(())
}

pub fn write_step<W: Write>(out: &mut W, report: &StepReport) -> Result<()> {
    writeln!(out, "--- Step {} ---", report.step)?;
    for event in &report.events {
        writeln!(out, "  {}", format_event(event))?;
    }
    Ok(())
}

pub fn write_results<W: Write>(out: &mut W, report: &RunReport) -> Result<()> {
    writeln!(out, "After simulation, the result is:")?;
    for outcome in &report.outcomes {
        writeln!(out, "{}", format_outcome(outcome))?;
    }
    Ok(())
}
