//! ASCII rendering of a grid

use std::fmt::Write;

use super::grid::SimGrid;
use super::types::VehicleStatus;

/// Draw the grid with north at the top
///
/// Each car is drawn with the first letter of its name. Wrecks are drawn as
/// `X`, cars stopped at the border as `#`, and a cell holding several active
/// cars as `*`.
pub fn draw_map(grid: &SimGrid) -> String {
    let width = grid.width() as usize;
    let height = grid.height() as usize;
    let mut cells = vec![vec!['.'; width]; height];

    for vehicle in grid.vehicles() {
        // Row 0 is the northern edge
        let row = height - 1 - vehicle.position.y as usize;
        let col = vehicle.position.x as usize;
        let glyph = match vehicle.status {
            VehicleStatus::Collided { .. } => 'X',
            VehicleStatus::StoppedAtBoundary { .. } => '#',
            VehicleStatus::Active => vehicle.name.chars().next().unwrap_or('?'),
        };

        let cell = &mut cells[row][col];
        *cell = match *cell {
            '.' => glyph,
            'X' => 'X',
            _ if glyph == 'X' => 'X',
            _ => '*',
        };
    }

    let mut out = String::new();
    let _ = writeln!(out, "=== Field Map ({} x {}) ===", width, height);
    let _ = writeln!(
        out,
        "Legend: letter=Car, *=Several cars, X=Collision, #=Stopped at border, .=Empty"
    );
    for row in &cells {
        let line: String = row.iter().collect();
        let _ = writeln!(out, "{}", line);
    }
    out
}
