//! Square occupancy grid storage.

use log::debug;

use super::CoordinateFrame;
use crate::core::{CellClass, GridCoord, WorldPoint};
use crate::error::{PlanError, Result};

/// Square grid of classified cells.
///
/// The grid uses a coordinate system where:
/// - (0, 0) is the south-west corner
/// - Rows grow northwards (world +Y), columns eastwards (world +X)
/// - Cell (row, col) is stored at `row * size + col`
///
/// A grid is owned by one planning request at a time; the search takes it by
/// `&mut` so two searches can never interleave on the same instance.
#[derive(Clone, Debug, PartialEq)]
pub struct OccupancyGrid {
    size: usize,
    frame: CoordinateFrame,
    cells: Vec<CellClass>,
}

impl OccupancyGrid {
    /// Create an all-free `size × size` grid.
    pub fn new(size: usize, frame: CoordinateFrame) -> Self {
        Self {
            size,
            frame,
            cells: vec![CellClass::Free; size * size],
        }
    }

    /// Build a grid from map codes given in file order (northern row first).
    ///
    /// Fails with [`PlanError::MalformedGrid`] unless `rows` is exactly
    /// `size × size` and every code is 0 (free) or 1 (obstacle). Nothing is
    /// partially loaded.
    pub fn load(rows: &[Vec<u8>], size: usize, frame: CoordinateFrame) -> Result<Self> {
        if rows.len() != size {
            return Err(PlanError::MalformedGrid(format!(
                "expected {} rows, found {}",
                size,
                rows.len()
            )));
        }

        let mut grid = Self::new(size, frame);
        for (line, codes) in rows.iter().enumerate() {
            if codes.len() != size {
                return Err(PlanError::MalformedGrid(format!(
                    "row {} has {} cells, expected {}",
                    line + 1,
                    codes.len(),
                    size
                )));
            }

            // File line 0 is the northern-most row
            let row = size - 1 - line;
            for (col, &code) in codes.iter().enumerate() {
                let class = CellClass::from_map_code(code).ok_or_else(|| {
                    PlanError::MalformedGrid(format!(
                        "row {} column {}: unknown cell code {}",
                        line + 1,
                        col + 1,
                        code
                    ))
                })?;
                grid.cells[row * size + col] = class;
            }
        }

        debug!(
            "[Grid] loaded {}x{} grid with {} obstacle cells",
            size,
            size,
            grid.count(CellClass::Obstacle)
        );
        Ok(grid)
    }

    // === Basic Properties ===

    /// Side length in cells.
    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// The grid's coordinate frame.
    #[inline]
    pub fn frame(&self) -> &CoordinateFrame {
        &self.frame
    }

    /// Raw cell slice, row-major from the southern row.
    #[inline]
    pub fn cells(&self) -> &[CellClass] {
        &self.cells
    }

    // === Coordinate Conversion ===

    /// Convert world coordinates to grid coordinates (may be out of bounds).
    #[inline]
    pub fn to_grid(&self, point: WorldPoint) -> GridCoord {
        self.frame.to_grid(point)
    }

    /// Convert world coordinates to grid coordinates, rejecting NaN and
    /// infinite input.
    #[inline]
    pub fn try_to_grid(&self, point: WorldPoint) -> Option<GridCoord> {
        self.frame.try_to_grid(point)
    }

    /// Convert grid coordinates to world coordinates.
    #[inline]
    pub fn to_world(&self, coord: GridCoord) -> WorldPoint {
        self.frame.to_world(coord)
    }

    /// Is the coordinate inside the grid?
    #[inline]
    pub fn contains(&self, coord: GridCoord) -> bool {
        coord.row >= 0
            && coord.col >= 0
            && (coord.row as usize) < self.size
            && (coord.col as usize) < self.size
    }

    /// Linear index of an in-bounds coordinate.
    #[inline]
    pub fn index(&self, coord: GridCoord) -> Option<usize> {
        if self.contains(coord) {
            Some(coord.row as usize * self.size + coord.col as usize)
        } else {
            None
        }
    }

    /// Coordinate of a linear index.
    #[inline]
    pub fn coord_of(&self, index: usize) -> GridCoord {
        GridCoord::new((index / self.size) as i32, (index % self.size) as i32)
    }

    // === Cell Access ===

    /// Class of a cell, `None` outside the grid.
    #[inline]
    pub fn get(&self, coord: GridCoord) -> Option<CellClass> {
        self.index(coord).map(|i| self.cells[i])
    }

    /// Class of a cell. Anything outside the grid reads as an obstacle.
    #[inline]
    pub fn classify(&self, coord: GridCoord) -> CellClass {
        self.get(coord).unwrap_or(CellClass::Obstacle)
    }

    /// Set the class of a cell. Returns `false` if the cell is outside the grid.
    #[inline]
    pub fn set_class(&mut self, coord: GridCoord, class: CellClass) -> bool {
        match self.index(coord) {
            Some(i) => {
                self.cells[i] = class;
                true
            }
            None => false,
        }
    }

    /// Iterate over all cells with their coordinates.
    pub fn iter(&self) -> impl Iterator<Item = (GridCoord, CellClass)> + '_ {
        self.cells
            .iter()
            .enumerate()
            .map(move |(i, &class)| (self.coord_of(i), class))
    }

    /// Rows in display order: northern row first.
    pub fn rows_top_down(&self) -> impl Iterator<Item = &[CellClass]> + '_ {
        self.cells.chunks(self.size.max(1)).rev()
    }

    /// Number of cells with the given class.
    pub fn count(&self, class: CellClass) -> usize {
        self.cells.iter().filter(|&&c| c == class).count()
    }

    /// Reset search annotations back to `Free`.
    ///
    /// Obstacles and margins are kept, so a dilated grid can be searched
    /// again without reloading it.
    pub fn clear_annotations(&mut self) {
        for cell in &mut self.cells {
            if cell.is_annotation() {
                *cell = CellClass::Free;
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rows(text: &[&str]) -> Vec<Vec<u8>> {
        text.iter()
            .map(|line| line.bytes().map(|b| b - b'0').collect())
            .collect()
    }

    #[test]
    fn test_load_flips_rows() {
        let grid = OccupancyGrid::load(
            &rows(&["100", "000", "001"]),
            3,
            CoordinateFrame::identity(),
        )
        .unwrap();

        // Top-left of the file is the north-west corner
        assert_eq!(grid.classify(GridCoord::new(2, 0)), CellClass::Obstacle);
        // Bottom-right of the file is the south-east corner
        assert_eq!(grid.classify(GridCoord::new(0, 2)), CellClass::Obstacle);
        assert_eq!(grid.classify(GridCoord::new(0, 0)), CellClass::Free);
        assert_eq!(grid.count(CellClass::Obstacle), 2);
    }

    #[test]
    fn test_load_rejects_wrong_row_count() {
        let result = OccupancyGrid::load(&rows(&["000", "000"]), 3, CoordinateFrame::identity());
        assert!(matches!(result, Err(PlanError::MalformedGrid(_))));
    }

    #[test]
    fn test_load_rejects_short_row() {
        let result = OccupancyGrid::load(
            &rows(&["000", "00", "000"]),
            3,
            CoordinateFrame::identity(),
        );
        assert!(matches!(result, Err(PlanError::MalformedGrid(_))));
    }

    #[test]
    fn test_load_rejects_unknown_code() {
        let result = OccupancyGrid::load(
            &rows(&["000", "020", "000"]),
            3,
            CoordinateFrame::identity(),
        );
        assert!(matches!(result, Err(PlanError::MalformedGrid(_))));
    }

    #[test]
    fn test_out_of_bounds_reads_as_obstacle() {
        let mut grid = OccupancyGrid::new(4, CoordinateFrame::identity());
        assert_eq!(grid.get(GridCoord::new(-1, 0)), None);
        assert_eq!(grid.classify(GridCoord::new(4, 0)), CellClass::Obstacle);
        assert!(!grid.set_class(GridCoord::new(0, 4), CellClass::Margin));
    }

    #[test]
    fn test_rows_top_down() {
        let mut grid = OccupancyGrid::new(3, CoordinateFrame::identity());
        grid.set_class(GridCoord::new(2, 1), CellClass::Obstacle);
        let first = grid.rows_top_down().next().unwrap();
        assert_eq!(first[1], CellClass::Obstacle);
    }

    #[test]
    fn test_clear_annotations_keeps_obstacles() {
        let mut grid = OccupancyGrid::new(3, CoordinateFrame::identity());
        grid.set_class(GridCoord::new(0, 0), CellClass::Obstacle);
        grid.set_class(GridCoord::new(0, 1), CellClass::Margin);
        grid.set_class(GridCoord::new(1, 1), CellClass::Visited);
        grid.set_class(GridCoord::new(2, 2), CellClass::Waypoint);

        grid.clear_annotations();

        assert_eq!(grid.classify(GridCoord::new(0, 0)), CellClass::Obstacle);
        assert_eq!(grid.classify(GridCoord::new(0, 1)), CellClass::Margin);
        assert_eq!(grid.classify(GridCoord::new(1, 1)), CellClass::Free);
        assert_eq!(grid.classify(GridCoord::new(2, 2)), CellClass::Free);
    }

    #[test]
    fn test_grid_world_conversion_uses_frame() {
        let grid = OccupancyGrid::new(32, CoordinateFrame::default());
        let coord = GridCoord::new(5, 20);
        assert_eq!(grid.to_grid(grid.to_world(coord)), coord);
    }
}
