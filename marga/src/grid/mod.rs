//! Occupancy grid for route planning.
//!
//! This module provides:
//! - [`CoordinateFrame`]: the one and only world ↔ grid transform
//! - [`OccupancyGrid`]: square grid of [`CellClass`](crate::CellClass) cells
//! - [`GridDilator`]: snapshot-based obstacle inflation
//!
//! ## Row order
//!
//! Row 0 is the southern-most row (lowest world Y). Map files are written
//! north-first, so loaders flip the row order and renderers flip it back.

mod dilation;
mod frame;
mod storage;

pub use dilation::{DilationReport, GridDilator};
pub use frame::CoordinateFrame;
pub use storage::OccupancyGrid;
