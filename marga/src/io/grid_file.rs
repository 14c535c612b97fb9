//! Occupancy map text files.

use log::debug;
use std::fs;
use std::path::Path;

use crate::core::CellClass;
use crate::error::{PlanError, Result};
use crate::grid::{CoordinateFrame, OccupancyGrid};

/// Parse map text into a grid.
///
/// Blank lines are skipped. Every other line is one row of integer codes,
/// northern row first. Anything that is not an integer in `0..=255` is
/// reported with its line number; dimension and code checks are left to
/// [`OccupancyGrid::load`].
pub fn parse_grid(text: &str, size: usize, frame: CoordinateFrame) -> Result<OccupancyGrid> {
    let mut rows = Vec::with_capacity(size);

    for (number, line) in text.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let row = line
            .split_whitespace()
            .map(|token| {
                token.parse::<u8>().map_err(|_| {
                    PlanError::MalformedGrid(format!(
                        "line {}: '{}' is not a cell code",
                        number + 1,
                        token
                    ))
                })
            })
            .collect::<Result<Vec<u8>>>()?;
        rows.push(row);
    }

    OccupancyGrid::load(&rows, size, frame)
}

/// Read and parse a map file.
pub fn load_grid(path: &Path, size: usize, frame: CoordinateFrame) -> Result<OccupancyGrid> {
    debug!("[Grid] reading map {}", path.display());
    let text = fs::read_to_string(path)?;
    parse_grid(&text, size, frame)
}

/// Format a grid as map text.
///
/// Only obstacles are written as `1`; margins and search annotations are
/// derived data and come out as `0`, so the text loads back as the original
/// map.
pub fn format_grid(grid: &OccupancyGrid) -> String {
    let mut out = String::with_capacity(grid.size() * (grid.size() * 2 + 1));

    for row in grid.rows_top_down() {
        let line: Vec<&str> = row
            .iter()
            .map(|&class| if class == CellClass::Obstacle { "1" } else { "0" })
            .collect();
        out.push_str(&line.join(" "));
        out.push('\n');
    }

    out
}

/// Write a grid as a map file.
pub fn save_grid(grid: &OccupancyGrid, path: &Path) -> Result<()> {
    fs::write(path, format_grid(grid))?;
    debug!("[Grid] wrote map {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;

    #[test]
    fn test_parse_skips_blank_lines() {
        let text = "\n0 0 1\n\n0 0 0\n1 0 0\n\n";
        let grid = parse_grid(text, 3, CoordinateFrame::identity()).unwrap();

        assert_eq!(grid.classify(GridCoord::new(2, 2)), CellClass::Obstacle);
        assert_eq!(grid.classify(GridCoord::new(0, 0)), CellClass::Obstacle);
        assert_eq!(grid.count(CellClass::Obstacle), 2);
    }

    #[test]
    fn test_parse_rejects_non_numeric() {
        let result = parse_grid("0 0\n0 x\n", 2, CoordinateFrame::identity());
        match result {
            Err(PlanError::MalformedGrid(msg)) => assert!(msg.contains("line 2")),
            other => panic!("expected MalformedGrid, got {:?}", other),
        }
    }

    #[test]
    fn test_parse_rejects_negative_code() {
        let result = parse_grid("0 -1\n0 0\n", 2, CoordinateFrame::identity());
        assert!(matches!(result, Err(PlanError::MalformedGrid(_))));
    }

    #[test]
    fn test_parse_rejects_unknown_code() {
        let result = parse_grid("0 2\n0 0\n", 2, CoordinateFrame::identity());
        assert!(matches!(result, Err(PlanError::MalformedGrid(_))));
    }

    #[test]
    fn test_format_drops_annotations() {
        let mut grid = OccupancyGrid::new(3, CoordinateFrame::identity());
        grid.set_class(GridCoord::new(2, 0), CellClass::Obstacle);
        grid.set_class(GridCoord::new(1, 1), CellClass::Margin);
        grid.set_class(GridCoord::new(0, 2), CellClass::OnPath);

        assert_eq!(format_grid(&grid), "1 0 0\n0 0 0\n0 0 0\n");
    }

    #[test]
    fn test_format_then_parse() {
        let mut grid = OccupancyGrid::new(4, CoordinateFrame::identity());
        grid.set_class(GridCoord::new(0, 3), CellClass::Obstacle);
        grid.set_class(GridCoord::new(3, 1), CellClass::Obstacle);

        let parsed = parse_grid(&format_grid(&grid), 4, CoordinateFrame::identity()).unwrap();
        assert_eq!(parsed, grid);
    }
}
