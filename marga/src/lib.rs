//! # Marga
//!
//! Route planning on a square occupancy grid for a small indoor robot.
//!
//! ## Overview
//!
//! Marga turns a hand-drawn occupancy map into a short list of waypoints a
//! motion controller can steer toward:
//!
//! - **Occupancy grid**: fixed-size square grid of classified cells with a
//!   single world ↔ grid coordinate frame
//! - **Dilation**: snapshot-based obstacle inflation adding a safety margin
//! - **A* search**: 8-connected best-first search with a Euclidean heuristic
//! - **Waypoint reduction**: collapses straight runs to their direction changes
//! - **Plan codec**: the count-prefixed plan file consumed by the controller
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use std::path::Path;
//! use marga::config::MargaConfig;
//! use marga::io::{load_grid, write_plan};
//! use marga::planning::RoutePlanner;
//! use marga::WorldPoint;
//!
//! let config = MargaConfig::load_default()?;
//! let mut grid = load_grid(Path::new("map.txt"), config.grid.size, config.frame())?;
//!
//! let planner = RoutePlanner::new(config.planner_config());
//! let route = planner.plan(&mut grid, WorldPoint::new(0.0, 0.0), WorldPoint::new(6.5, 6.5))?;
//!
//! write_plan(&route.plan, Path::new("plan-out.txt"))?;
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! ## Coordinate System
//!
//! - Row 0 is the southern-most row (lowest world Y), column 0 the western-most
//! - `col = round(x * scale + offset)`, `row = round(y * scale + offset)`
//! - Map files list the northern-most row first, the way a map is drawn on paper

#![warn(missing_docs)]

// Core types
pub mod core;

// Errors shared by every stage
pub mod error;

// Grid storage, coordinate frame and dilation
pub mod grid;

// Search, waypoint reduction and the route pipeline
pub mod planning;

// Map and plan files, diagnostic renderers
pub mod io;

// YAML configuration
pub mod config;

// Re-export commonly used types
pub use core::{CellClass, FixedPose, GridCoord, Pose2D, PoseSource, WorldPoint};
pub use error::{Endpoint, EndpointFault, PlanError, Result};
pub use grid::{CoordinateFrame, GridDilator, OccupancyGrid};
pub use io::Plan;
pub use planning::{GridPathfinder, PlannedRoute, PlannerConfig, RoutePlanner, WaypointReducer};
