//! Waypoint reduction.
//!
//! A dense cell path is collapsed to the cells where the direction of travel
//! changes, plus the goal. The start cell is dropped since the robot is
//! already there.

use log::debug;

use crate::core::{CellClass, GridCoord};
use crate::grid::OccupancyGrid;

/// Collapses collinear runs of a cell path.
pub struct WaypointReducer;

impl WaypointReducer {
    /// Reduce a path to its turning points and final cell.
    ///
    /// Directions are compared as gcd-reduced step vectors, so an already
    /// reduced path (with the start prepended) reduces to itself.
    pub fn reduce(path: &[GridCoord]) -> Vec<GridCoord> {
        let Some(&last) = path.last() else {
            return Vec::new();
        };

        let mut waypoints: Vec<GridCoord> = path
            .windows(3)
            .filter(|w| w[0].direction_to(&w[1]) != w[1].direction_to(&w[2]))
            .map(|w| w[1])
            .collect();
        waypoints.push(last);

        debug!(
            "[Reduce] {} path cells -> {} waypoints",
            path.len(),
            waypoints.len()
        );
        waypoints
    }

    /// Mark waypoint cells on the grid.
    ///
    /// Only `OnPath` cells are rewritten, so the `Start` marker survives.
    pub fn annotate(grid: &mut OccupancyGrid, waypoints: &[GridCoord]) {
        for &coord in waypoints {
            if grid.get(coord) == Some(CellClass::OnPath) {
                grid.set_class(coord, CellClass::Waypoint);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::CoordinateFrame;

    fn coords(cells: &[(i32, i32)]) -> Vec<GridCoord> {
        cells.iter().map(|&(r, c)| GridCoord::new(r, c)).collect()
    }

    fn is_subsequence(sub: &[GridCoord], full: &[GridCoord]) -> bool {
        let mut rest = full.iter();
        sub.iter().all(|s| rest.any(|f| f == s))
    }

    #[test]
    fn test_straight_run_keeps_goal_only() {
        let path = coords(&[(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)]);
        assert_eq!(WaypointReducer::reduce(&path), coords(&[(0, 4)]));
    }

    #[test]
    fn test_single_turn() {
        let path = coords(&[(0, 0), (0, 1), (0, 2), (1, 3), (2, 4)]);
        assert_eq!(
            WaypointReducer::reduce(&path),
            coords(&[(0, 2), (2, 4)])
        );
    }

    #[test]
    fn test_short_paths() {
        assert!(WaypointReducer::reduce(&[]).is_empty());
        assert_eq!(
            WaypointReducer::reduce(&coords(&[(3, 3)])),
            coords(&[(3, 3)])
        );
        assert_eq!(
            WaypointReducer::reduce(&coords(&[(3, 3), (4, 4)])),
            coords(&[(4, 4)])
        );
    }

    #[test]
    fn test_zigzag_keeps_every_turn() {
        let path = coords(&[(0, 0), (1, 1), (1, 2), (2, 3), (2, 4), (2, 5)]);
        let reduced = WaypointReducer::reduce(&path);

        assert_eq!(reduced, coords(&[(1, 1), (1, 2), (2, 3), (2, 5)]));
        assert!(is_subsequence(&reduced, &path[1..]));
    }

    #[test]
    fn test_reduce_is_idempotent() {
        let path = coords(&[
            (0, 0),
            (0, 1),
            (0, 2),
            (0, 3),
            (1, 4),
            (2, 5),
            (3, 5),
            (4, 5),
            (5, 5),
            (5, 4),
        ]);
        let once = WaypointReducer::reduce(&path);

        let mut again_input = vec![path[0]];
        again_input.extend_from_slice(&once);
        let twice = WaypointReducer::reduce(&again_input);

        assert_eq!(once, coords(&[(0, 3), (2, 5), (5, 5), (5, 4)]));
        assert_eq!(once, twice);
    }

    #[test]
    fn test_annotate_keeps_start() {
        let mut grid = OccupancyGrid::new(5, CoordinateFrame::identity());
        let path = coords(&[(0, 0), (0, 1), (0, 2), (1, 3)]);
        grid.set_class(path[0], CellClass::Start);
        for &c in &path[1..] {
            grid.set_class(c, CellClass::OnPath);
        }

        WaypointReducer::annotate(&mut grid, &coords(&[(0, 0), (0, 2), (1, 3)]));

        assert_eq!(grid.classify(GridCoord::new(0, 0)), CellClass::Start);
        assert_eq!(grid.classify(GridCoord::new(0, 1)), CellClass::OnPath);
        assert_eq!(grid.classify(GridCoord::new(0, 2)), CellClass::Waypoint);
        assert_eq!(grid.classify(GridCoord::new(1, 3)), CellClass::Waypoint);
    }
}
