//! End-to-end route planning: dilate, search, reduce, encode.

use log::info;

use super::{GridPathfinder, PathfinderConfig, WaypointReducer};
use crate::core::{GridCoord, PoseSource, WorldPoint};
use crate::error::{Endpoint, Result};
use crate::grid::{GridDilator, OccupancyGrid};
use crate::io::{plan_file, Plan};

/// Route planner configuration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Safety margin rings grown around obstacles before searching
    pub margin_cells: usize,
    /// Search expansion budget (`None` = unlimited)
    pub max_expansions: Option<usize>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        Self {
            margin_cells: 1,
            max_expansions: None,
        }
    }
}

/// Result of a successful planning request
#[derive(Clone, Debug, PartialEq)]
pub struct PlannedRoute {
    /// Every cell from start to goal
    pub raw_path: Vec<GridCoord>,
    /// Turning points and goal (start excluded)
    pub waypoints: Vec<GridCoord>,
    /// Waypoints in world coordinates
    pub plan: Plan,
    /// Cells closed by the search
    pub nodes_expanded: usize,
    /// Cells turned into `Margin` by dilation
    pub margin_cells_added: usize,
}

/// Runs the full planning pipeline on a grid.
///
/// The grid is left annotated (margins, visited cells, path, waypoints,
/// start) for rendering. Annotations from an earlier request are cleared at
/// the start of the next one, so the same grid can be planned on again.
#[derive(Clone, Debug, Default)]
pub struct RoutePlanner {
    config: PlannerConfig,
    dilator: GridDilator,
    pathfinder: GridPathfinder,
}

impl RoutePlanner {
    /// Create a planner from configuration
    pub fn new(config: PlannerConfig) -> Self {
        let dilator = GridDilator::new(config.margin_cells);
        let pathfinder = GridPathfinder::new(PathfinderConfig {
            max_expansions: config.max_expansions,
        });
        Self {
            config,
            dilator,
            pathfinder,
        }
    }

    /// Planner with a 1-cell margin and no expansion budget
    pub fn with_defaults() -> Self {
        Self::new(PlannerConfig::default())
    }

    /// Active configuration
    pub fn config(&self) -> &PlannerConfig {
        &self.config
    }

    /// Plan a route between two world positions.
    ///
    /// Errors from any stage are returned as-is; there is no partial result.
    /// A NaN or infinite endpoint is rejected before the grid is modified.
    pub fn plan(
        &self,
        grid: &mut OccupancyGrid,
        start: WorldPoint,
        goal: WorldPoint,
    ) -> Result<PlannedRoute> {
        let start_cell = GridPathfinder::endpoint_cell(grid, start, Endpoint::Start)?;
        let goal_cell = GridPathfinder::endpoint_cell(grid, goal, Endpoint::Goal)?;

        grid.clear_annotations();
        let dilation = self.dilator.dilate(grid);

        let search = self.pathfinder.search(grid, start_cell, goal_cell)?;

        let waypoints = WaypointReducer::reduce(&search.path);
        WaypointReducer::annotate(grid, &waypoints);
        let plan = plan_file::encode(&waypoints, grid);

        info!(
            "[Route] {} -> {}: {} cells, {} waypoints, {:.2} m ({} expanded)",
            start,
            goal,
            search.path.len(),
            waypoints.len(),
            plan.length(),
            search.nodes_expanded
        );

        Ok(PlannedRoute {
            raw_path: search.path,
            waypoints,
            plan,
            nodes_expanded: search.nodes_expanded,
            margin_cells_added: dilation.cells_marked,
        })
    }

    /// Plan from the pose source's current position to `goal`.
    pub fn plan_from_pose(
        &self,
        grid: &mut OccupancyGrid,
        pose_source: &dyn PoseSource,
        goal: WorldPoint,
    ) -> Result<PlannedRoute> {
        let pose = pose_source.current_pose()?;
        self.plan(grid, pose.position(), goal)
    }
}
