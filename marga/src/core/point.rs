//! Point and coordinate types for the planning grid.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};

/// Grid coordinates (integer cell indices)
///
/// Row grows northwards (world +Y), column grows eastwards (world +X).
/// Coordinates may be out of bounds; the grid decides what is valid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct GridCoord {
    /// Row index (south to north)
    pub row: i32,
    /// Column index (west to east)
    pub col: i32,
}

impl GridCoord {
    /// Create a new grid coordinate
    #[inline]
    pub fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Euclidean distance to another coordinate in cells
    #[inline]
    pub fn euclidean_distance(&self, other: &GridCoord) -> f64 {
        let dr = (self.row - other.row) as f64;
        let dc = (self.col - other.col) as f64;
        (dr * dr + dc * dc).sqrt()
    }

    /// Chebyshev distance (max of row and column distance)
    #[inline]
    pub fn chebyshev_distance(&self, other: &GridCoord) -> i32 {
        (self.row - other.row)
            .abs()
            .max((self.col - other.col).abs())
    }

    /// Are the two cells 8-adjacent (distinct and touching)?
    #[inline]
    pub fn is_adjacent(&self, other: &GridCoord) -> bool {
        self.chebyshev_distance(other) == 1
    }

    /// Get the 8 neighbors (including diagonals)
    #[inline]
    pub fn neighbors_8(&self) -> [GridCoord; 8] {
        [
            GridCoord::new(self.row + 1, self.col),     // N
            GridCoord::new(self.row + 1, self.col + 1), // NE
            GridCoord::new(self.row, self.col + 1),     // E
            GridCoord::new(self.row - 1, self.col + 1), // SE
            GridCoord::new(self.row - 1, self.col),     // S
            GridCoord::new(self.row - 1, self.col - 1), // SW
            GridCoord::new(self.row, self.col - 1),     // W
            GridCoord::new(self.row + 1, self.col - 1), // NW
        ]
    }

    /// Direction of travel from `self` to `to`, reduced to its smallest
    /// integer step.
    ///
    /// Adjacent cells give their unit step; distant cells give the primitive
    /// vector along the same line, so `(0,0)→(0,3)` and `(0,3)→(0,4)` share a
    /// direction. Identical cells give `(0, 0)`.
    pub fn direction_to(&self, to: &GridCoord) -> GridCoord {
        let delta = *to - *self;
        let divisor = gcd(delta.row.unsigned_abs(), delta.col.unsigned_abs()) as i32;
        if divisor == 0 {
            return GridCoord::default();
        }
        GridCoord::new(delta.row / divisor, delta.col / divisor)
    }
}

fn gcd(mut a: u32, mut b: u32) -> u32 {
    while b != 0 {
        let t = a % b;
        a = b;
        b = t;
    }
    a
}

impl Add for GridCoord {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        GridCoord::new(self.row + other.row, self.col + other.col)
    }
}

impl Sub for GridCoord {
    type Output = Self;

    #[inline]
    fn sub(self, other: Self) -> Self {
        GridCoord::new(self.row - other.row, self.col - other.col)
    }
}

impl fmt::Display for GridCoord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

/// World coordinates (meters)
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct WorldPoint {
    /// X coordinate in meters
    pub x: f64,
    /// Y coordinate in meters
    pub y: f64,
}

impl WorldPoint {
    /// Create a new world point
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Zero point (origin)
    pub const ZERO: WorldPoint = WorldPoint { x: 0.0, y: 0.0 };

    /// Euclidean distance to another point
    #[inline]
    pub fn distance(&self, other: &WorldPoint) -> f64 {
        let dx = self.x - other.x;
        let dy = self.y - other.y;
        (dx * dx + dy * dy).sqrt()
    }

    /// Both coordinates are neither NaN nor infinite
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl fmt::Display for WorldPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.2}, {:.2})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_neighbors_are_adjacent() {
        let center = GridCoord::new(3, 3);
        for n in center.neighbors_8() {
            assert!(center.is_adjacent(&n));
        }
        assert!(!center.is_adjacent(&center));
    }

    #[test]
    fn test_euclidean_distance() {
        let a = GridCoord::new(0, 0);
        assert_relative_eq!(a.euclidean_distance(&GridCoord::new(0, 1)), 1.0);
        assert_relative_eq!(
            a.euclidean_distance(&GridCoord::new(1, 1)),
            std::f64::consts::SQRT_2
        );
        assert_relative_eq!(a.euclidean_distance(&GridCoord::new(3, 4)), 5.0);
    }

    #[test]
    fn test_direction_reduces_to_primitive_step() {
        let a = GridCoord::new(0, 0);
        assert_eq!(a.direction_to(&GridCoord::new(0, 3)), GridCoord::new(0, 1));
        assert_eq!(a.direction_to(&GridCoord::new(-2, -2)), GridCoord::new(-1, -1));
        assert_eq!(a.direction_to(&GridCoord::new(4, 2)), GridCoord::new(2, 1));
        assert_eq!(a.direction_to(&a), GridCoord::new(0, 0));
    }

    #[test]
    fn test_world_distance() {
        let a = WorldPoint::new(1.0, 1.0);
        let b = WorldPoint::new(4.0, 5.0);
        assert_relative_eq!(a.distance(&b), 5.0);
    }
}
