//! World ↔ grid coordinate transform.
//!
//! Every conversion between metres and cell indices goes through
//! [`CoordinateFrame`]. Nothing else in the crate scales or offsets a
//! coordinate on its own.

use serde::{Deserialize, Serialize};

use crate::core::{GridCoord, WorldPoint};

/// Linear world ↔ grid transform.
///
/// ```text
/// col = round(x * scale + offset)      x = (col - offset) / scale
/// row = round(y * scale + offset)      y = (row - offset) / scale
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct CoordinateFrame {
    /// Cells per meter
    pub scale: f64,
    /// Grid index of world zero (same for rows and columns)
    pub offset: f64,
}

impl Default for CoordinateFrame {
    fn default() -> Self {
        Self::centered(32, 2.0)
    }
}

impl CoordinateFrame {
    /// Create a frame with explicit scale and offset.
    #[inline]
    pub fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// Frame with world zero in the middle of a `size × size` grid.
    #[inline]
    pub fn centered(size: usize, scale: f64) -> Self {
        Self::new(scale, size as f64 / 2.0)
    }

    /// Unit frame: world metres equal cell indices.
    #[inline]
    pub fn identity() -> Self {
        Self::new(1.0, 0.0)
    }

    /// Side length of one cell in meters.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        1.0 / self.scale
    }

    /// Convert world coordinates to grid coordinates (may be out of bounds).
    #[inline]
    pub fn to_grid(&self, point: WorldPoint) -> GridCoord {
        GridCoord::new(self.axis_to_grid(point.y), self.axis_to_grid(point.x))
    }

    /// Like [`Self::to_grid`], but `None` for a NaN or infinite coordinate.
    #[inline]
    pub fn try_to_grid(&self, point: WorldPoint) -> Option<GridCoord> {
        point.is_finite().then(|| self.to_grid(point))
    }

    /// Unrounded `(row, col)` position of a world point, for renderers.
    #[inline]
    pub fn to_grid_continuous(&self, point: WorldPoint) -> (f64, f64) {
        (self.axis_scaled(point.y), self.axis_scaled(point.x))
    }

    /// Convert grid coordinates to world coordinates (cell center).
    #[inline]
    pub fn to_world(&self, coord: GridCoord) -> WorldPoint {
        WorldPoint::new(self.axis_to_world(coord.col), self.axis_to_world(coord.row))
    }

    #[inline]
    fn axis_to_grid(&self, meters: f64) -> i32 {
        self.axis_scaled(meters).round() as i32
    }

    #[inline]
    fn axis_scaled(&self, meters: f64) -> f64 {
        meters * self.scale + self.offset
    }

    #[inline]
    fn axis_to_world(&self, index: i32) -> f64 {
        (index as f64 - self.offset) / self.scale
    }
}
