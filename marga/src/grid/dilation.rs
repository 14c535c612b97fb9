//! Obstacle dilation (safety margin).
//!
//! Every `Free` cell within `margin_cells` steps (8-connected) of an obstacle
//! becomes `Margin`. Rings grow outward from the obstacles one per pass. The
//! ring for a pass is computed from the state before the pass and applied
//! afterwards, so margins come out the same regardless of scan order.

use log::debug;

use super::OccupancyGrid;
use crate::core::CellClass;

/// Summary of a dilation call.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DilationReport {
    /// Passes actually applied
    pub passes: usize,
    /// Cells reclassified as `Margin`
    pub cells_marked: usize,
}

/// Grows obstacles by `margin_cells` rings of `Margin` cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GridDilator {
    margin_cells: usize,
}

impl Default for GridDilator {
    fn default() -> Self {
        Self::new(1)
    }
}

impl GridDilator {
    /// Create a dilator with a `margin_cells` wide margin (0 disables it).
    pub fn new(margin_cells: usize) -> Self {
        Self { margin_cells }
    }

    /// Margin width in cells.
    pub fn margin_cells(&self) -> usize {
        self.margin_cells
    }

    /// Dilate the grid in place.
    ///
    /// Rings are measured from `Obstacle` cells, passing through margins left
    /// by earlier calls. Repeating a call changes nothing; a later call with a
    /// wider margin extends the existing one. Calling a 1-cell dilator twice
    /// still leaves a single ring: ask for `margin_cells = 2` to get two.
    pub fn dilate(&self, grid: &mut OccupancyGrid) -> DilationReport {
        let mut report = DilationReport::default();
        let mut reached: Vec<bool> = grid
            .cells()
            .iter()
            .map(|&class| class == CellClass::Obstacle)
            .collect();

        for _ in 0..self.margin_cells {
            let ring = Self::next_ring(grid, &reached);
            // Nothing left to grow into
            if ring.is_empty() {
                break;
            }

            for index in ring {
                reached[index] = true;
                let coord = grid.coord_of(index);
                if grid.classify(coord).is_free() {
                    grid.set_class(coord, CellClass::Margin);
                    report.cells_marked += 1;
                }
            }
            report.passes += 1;
        }

        debug!(
            "[Dilate] {} pass(es), {} margin cells added",
            report.passes, report.cells_marked
        );
        report
    }

    /// First-ring dilation mask for the grid's current state.
    ///
    /// `mask[i]` is true when cell `i` is `Free` and has an `Obstacle` among
    /// its 8 neighbours. The grid is only read.
    pub fn dilation_mask(grid: &OccupancyGrid) -> Vec<bool> {
        grid.iter()
            .map(|(coord, class)| {
                class.is_free()
                    && coord
                        .neighbors_8()
                        .iter()
                        .any(|&n| grid.get(n) == Some(CellClass::Obstacle))
            })
            .collect()
    }

    /// Indices of `Free` or `Margin` cells not yet reached that touch a
    /// reached cell.
    fn next_ring(grid: &OccupancyGrid, reached: &[bool]) -> Vec<usize> {
        grid.iter()
            .enumerate()
            .filter(|&(index, (coord, class))| {
                !reached[index]
                    && matches!(class, CellClass::Free | CellClass::Margin)
                    && coord
                        .neighbors_8()
                        .iter()
                        .any(|&n| grid.index(n).is_some_and(|i| reached[i]))
            })
            .map(|(index, _)| index)
            .collect()
    }
}
