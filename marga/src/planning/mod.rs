//! Route planning on the occupancy grid.
//!
//! This module provides:
//!
//! - **A* Search** ([`GridPathfinder`]): 8-connected best-first search with a
//!   straight-line heuristic over `Free` cells
//! - **Waypoint Reduction** ([`WaypointReducer`]): keeps only the cells where
//!   the direction of travel changes, plus the goal
//! - **Route Pipeline** ([`RoutePlanner`]): dilate → search → reduce → encode
//!
//! ## Planning a route
//!
//! ```rust,ignore
//! use marga::planning::{RoutePlanner, PlannerConfig};
//!
//! let planner = RoutePlanner::new(PlannerConfig::default());
//! let route = planner.plan(&mut grid, start, goal)?;
//! println!("{} waypoints, {:.2} m", route.waypoints.len(), route.plan.length());
//! ```

mod route;
mod search;
mod types;
mod waypoints;

pub use route::{PlannedRoute, PlannerConfig, RoutePlanner};
pub use search::GridPathfinder;
pub use types::{PathSearch, PathfinderConfig};
pub use waypoints::WaypointReducer;
