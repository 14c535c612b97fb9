//! Cell classes for the planning grid.
//!
//! A cell starts out as whatever the map file says (`Free` or `Obstacle`),
//! may be turned into `Margin` by dilation, and then picks up search-time
//! annotations (`Visited`, `OnPath`, `Waypoint`, `Start`) that only ever land
//! on cells that were `Free` when the search ran.

use serde::{Deserialize, Serialize};

/// Classification of a single grid cell.
///
/// The discriminants are the legend codes used by the annotated map output:
/// - `0` free space (and the border ring)
/// - `1` obstacle from the map file
/// - `2` safety margin added by dilation
/// - `3` cell on the planned path
/// - `4` waypoint retained after reduction
/// - `5` start cell
///
/// `Visited` is internal (code 6) and is drawn like free space.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[repr(u8)]
pub enum CellClass {
    /// Passable and not yet touched by a search
    #[default]
    Free = 0,

    /// Impassable, straight from the map file
    Obstacle = 1,

    /// Impassable, added next to an obstacle by dilation
    Margin = 2,

    /// On the extracted path
    OnPath = 3,

    /// On the path and kept by waypoint reduction
    Waypoint = 4,

    /// Origin of the search
    Start = 5,

    /// Expanded by the search (closed set)
    Visited = 6,
}

impl CellClass {
    /// Can a path be routed through this cell?
    ///
    /// Only untouched free cells qualify; annotated cells were free before the
    /// search but are already claimed by it.
    #[inline]
    pub fn is_free(self) -> bool {
        self == CellClass::Free
    }

    /// Is this cell impassable (obstacle or margin)?
    #[inline]
    pub fn is_blocked(self) -> bool {
        matches!(self, CellClass::Obstacle | CellClass::Margin)
    }

    /// Is this a search-time annotation on an originally free cell?
    #[inline]
    pub fn is_annotation(self) -> bool {
        matches!(
            self,
            CellClass::Visited | CellClass::OnPath | CellClass::Waypoint | CellClass::Start
        )
    }

    /// Legend code of this class.
    #[inline]
    pub fn code(self) -> u8 {
        self as u8
    }

    /// Parse a map file code. Map files only carry free (0) and obstacle (1).
    #[inline]
    pub fn from_map_code(code: u8) -> Option<Self> {
        match code {
            0 => Some(CellClass::Free),
            1 => Some(CellClass::Obstacle),
            _ => None,
        }
    }

    /// Symbol drawn in the annotated map, `None` for blank cells.
    pub fn legend_symbol(self) -> Option<char> {
        match self {
            CellClass::Free | CellClass::Visited => None,
            CellClass::Obstacle => Some('1'),
            CellClass::Margin => Some('2'),
            CellClass::OnPath => Some('3'),
            CellClass::Waypoint => Some('4'),
            CellClass::Start => Some('5'),
        }
    }
}
