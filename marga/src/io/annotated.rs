//! Annotated map rendering.
//!
//! Draws the planned grid in map-file orientation with a ring of `0`s around
//! it. Obstacles, margins, the path, waypoints and the start show their
//! legend code; free and visited cells are left blank.

use log::debug;
use std::fs;
use std::path::Path;

use crate::error::Result;
use crate::grid::OccupancyGrid;

const LEGEND: &str = "Occupancy grid used for route planning

Legend:
\t0: Boundary/free
\t1: Obstacle
\t2: Safety margin
\t3: Planned path
\t4: Waypoint
\t5: Start
";

/// Render the annotated grid, northern row first.
pub fn render_annotated(grid: &OccupancyGrid) -> String {
    let width = grid.size() + 2;
    let border = vec!["0"; width].join(" ");
    let mut out = String::with_capacity((width * 2) * width);

    out.push_str(&border);
    out.push('\n');
    for row in grid.rows_top_down() {
        out.push('0');
        for class in row {
            out.push(' ');
            out.push(class.legend_symbol().unwrap_or(' '));
        }
        out.push_str(" 0\n");
    }
    out.push_str(&border);
    out.push('\n');

    out
}

/// Write the annotated grid to a file with a legend header.
pub fn write_annotated(grid: &OccupancyGrid, path: &Path) -> Result<()> {
    let text = format!("{}\n{}", LEGEND, render_annotated(grid));
    fs::write(path, text)?;
    debug!("[Grid] wrote annotated map {}", path.display());
    Ok(())
}
