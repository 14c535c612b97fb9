//! Test utilities for Marga integration tests.
//!
//! Builds the maps the scenarios below plan across.

#![allow(dead_code)]

use marga::{CellClass, CoordinateFrame, GridCoord, OccupancyGrid};

/// Side length of the default map
pub const ROOM_SIZE: usize = 32;

/// Walled room with an interior wall that forces a detour.
///
/// The outer ring is obstacle. A wall runs along column 20 from the south
/// wall up to row 24, leaving a gap to the north.
pub fn room_with_wall(size: usize) -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(size, CoordinateFrame::centered(size, 2.0));
    let last = size as i32 - 1;

    for i in 0..size as i32 {
        grid.set_class(GridCoord::new(0, i), CellClass::Obstacle);
        grid.set_class(GridCoord::new(last, i), CellClass::Obstacle);
        grid.set_class(GridCoord::new(i, 0), CellClass::Obstacle);
        grid.set_class(GridCoord::new(i, last), CellClass::Obstacle);
    }

    let wall_col = (size * 5 / 8) as i32;
    let wall_top = (size * 3 / 4) as i32;
    for row in 0..=wall_top {
        grid.set_class(GridCoord::new(row, wall_col), CellClass::Obstacle);
    }

    grid
}

/// Map text with `rows` lines of `cols` zeros.
pub fn empty_map_text(rows: usize, cols: usize) -> String {
    let line = vec!["0"; cols].join(" ");
    (0..rows).map(|_| format!("{}\n", line)).collect()
}

/// 5x5 grid (identity frame) where only a corridor with one forced turn is
/// free: east along row 0 to column 2, then diagonally up to (2, 4).
pub fn one_turn_corridor() -> OccupancyGrid {
    let mut grid = OccupancyGrid::new(5, CoordinateFrame::identity());
    let corridor = [(0, 0), (0, 1), (0, 2), (1, 3), (2, 4)];

    for (coord, _) in grid.clone().iter() {
        if !corridor.contains(&(coord.row, coord.col)) {
            grid.set_class(coord, CellClass::Obstacle);
        }
    }
    grid
}

/// Every step is 8-adjacent and every cell was free before the search.
pub fn assert_valid_path(path: &[GridCoord], before_search: &OccupancyGrid) {
    assert!(!path.is_empty(), "path is empty");
    for pair in path.windows(2) {
        assert!(
            pair[0].is_adjacent(&pair[1]),
            "{} -> {} is not a single step",
            pair[0],
            pair[1]
        );
    }
    for coord in path {
        assert_eq!(
            before_search.get(*coord),
            Some(CellClass::Free),
            "path crosses {} which was not free",
            coord
        );
    }
}

/// Is `sub` an in-order subsequence of `full`?
pub fn is_subsequence(sub: &[GridCoord], full: &[GridCoord]) -> bool {
    let mut rest = full.iter();
    sub.iter().all(|s| rest.any(|f| f == s))
}
