//! A* grid search.

use log::{debug, trace, warn};
use std::collections::BinaryHeap;

use super::types::{FrontierEntry, NodeId, PathSearch, PathfinderConfig, SearchNode};
use crate::core::{CellClass, GridCoord, WorldPoint};
use crate::error::{Endpoint, EndpointFault, PlanError, Result};
use crate::grid::OccupancyGrid;

/// A* pathfinder over `Free` cells of an occupancy grid.
///
/// The search annotates the grid as it goes: closed cells become `Visited`,
/// and on success the path becomes `OnPath` with the first cell `Start`.
#[derive(Clone, Debug, Default)]
pub struct GridPathfinder {
    config: PathfinderConfig,
}

impl GridPathfinder {
    /// Create a new pathfinder
    pub fn new(config: PathfinderConfig) -> Self {
        Self { config }
    }

    /// Create with default configuration (no expansion budget)
    pub fn with_defaults() -> Self {
        Self::new(PathfinderConfig::default())
    }

    /// Find a path between two world positions.
    ///
    /// NaN or infinite positions are rejected before the grid is touched.
    pub fn find_path(
        &self,
        grid: &mut OccupancyGrid,
        start: WorldPoint,
        goal: WorldPoint,
    ) -> Result<Vec<GridCoord>> {
        let start_cell = Self::endpoint_cell(grid, start, Endpoint::Start)?;
        let goal_cell = Self::endpoint_cell(grid, goal, Endpoint::Goal)?;
        self.search(grid, start_cell, goal_cell).map(|s| s.path)
    }

    /// Find a path between two cells.
    pub fn find_path_cells(
        &self,
        grid: &mut OccupancyGrid,
        start: GridCoord,
        goal: GridCoord,
    ) -> Result<Vec<GridCoord>> {
        self.search(grid, start, goal).map(|s| s.path)
    }

    /// Run the search and report statistics along with the path.
    pub fn search(
        &self,
        grid: &mut OccupancyGrid,
        start: GridCoord,
        goal: GridCoord,
    ) -> Result<PathSearch> {
        trace!("[Search] start={} goal={}", start, goal);

        Self::check_endpoint(grid, start, Endpoint::Start)?;
        Self::check_endpoint(grid, goal, Endpoint::Goal)?;

        if start == goal {
            grid.set_class(start, CellClass::Start);
            return Ok(PathSearch {
                path: vec![start],
                nodes_expanded: 0,
                frontier_peak: 1,
            });
        }

        let mut arena: Vec<SearchNode> = Vec::new();
        let mut frontier = BinaryHeap::new();
        let mut closed = vec![false; grid.cells().len()];
        let mut sequence: u64 = 0;
        let mut nodes_expanded = 0;
        let mut frontier_peak = 1;

        arena.push(SearchNode {
            coord: start,
            cost_from_start: 0.0,
            parent: None,
        });
        frontier.push(FrontierEntry {
            priority: Self::heuristic(start, goal),
            sequence,
            node: 0,
        });

        while let Some(entry) = frontier.pop() {
            let current = arena[entry.node];

            // Goal reached
            if current.coord == goal {
                let path = Self::reconstruct_path(&arena, entry.node);
                Self::annotate_path(grid, &path);
                debug!(
                    "[Search] path of {} cells, cost={:.2}, nodes_expanded={}",
                    path.len(),
                    current.cost_from_start,
                    nodes_expanded
                );
                return Ok(PathSearch {
                    path,
                    nodes_expanded,
                    frontier_peak,
                });
            }

            let Some(index) = grid.index(current.coord) else {
                continue;
            };
            // Stale duplicate left behind by an earlier, cheaper push
            if closed[index] {
                continue;
            }

            if let Some(budget) = self.config.max_expansions {
                if nodes_expanded >= budget {
                    warn!("[Search] expansion budget of {} cells exhausted", budget);
                    return Err(PlanError::PathNotFound { nodes_expanded });
                }
            }

            closed[index] = true;
            nodes_expanded += 1;
            grid.set_class(current.coord, CellClass::Visited);

            for neighbor in current.coord.neighbors_8() {
                let Some(neighbor_index) = grid.index(neighbor) else {
                    continue;
                };
                if closed[neighbor_index] || !grid.classify(neighbor).is_free() {
                    continue;
                }

                let cost_from_start =
                    current.cost_from_start + current.coord.euclidean_distance(&neighbor);
                arena.push(SearchNode {
                    coord: neighbor,
                    cost_from_start,
                    parent: Some(entry.node),
                });
                sequence += 1;
                frontier.push(FrontierEntry {
                    priority: cost_from_start + Self::heuristic(neighbor, goal),
                    sequence,
                    node: arena.len() - 1,
                });
            }

            frontier_peak = frontier_peak.max(frontier.len());
        }

        debug!(
            "[Search] FAILED: frontier exhausted after expanding {} cells",
            nodes_expanded
        );
        Err(PlanError::PathNotFound { nodes_expanded })
    }

    /// Grid cell for a world endpoint; the position must be finite.
    pub(crate) fn endpoint_cell(
        grid: &OccupancyGrid,
        point: WorldPoint,
        endpoint: Endpoint,
    ) -> Result<GridCoord> {
        grid.try_to_grid(point).ok_or_else(|| {
            debug!("[Search] FAILED: {} {} is not finite", endpoint, point);
            PlanError::NonFiniteEndpoint { endpoint, point }
        })
    }

    /// Start and goal must be inside the grid and `Free`.
    fn check_endpoint(grid: &OccupancyGrid, coord: GridCoord, endpoint: Endpoint) -> Result<()> {
        let fault = match grid.get(coord) {
            None => EndpointFault::OutOfBounds,
            Some(class) if class.is_free() => return Ok(()),
            Some(class) => EndpointFault::NotFree(class),
        };
        debug!("[Search] FAILED: {} {} is {}", endpoint, coord, fault);
        Err(PlanError::InvalidEndpoint {
            endpoint,
            coord,
            fault,
        })
    }

    /// Straight-line distance to the goal in cells.
    #[inline]
    fn heuristic(from: GridCoord, goal: GridCoord) -> f64 {
        from.euclidean_distance(&goal)
    }

    /// Walk parent links back to the root and reverse.
    fn reconstruct_path(arena: &[SearchNode], goal: NodeId) -> Vec<GridCoord> {
        let mut path = Vec::new();
        let mut current = Some(goal);

        while let Some(id) = current {
            let node = &arena[id];
            path.push(node.coord);
            current = node.parent;
        }

        path.reverse();
        path
    }

    fn annotate_path(grid: &mut OccupancyGrid, path: &[GridCoord]) {
        if let Some((first, rest)) = path.split_first() {
            for &coord in rest {
                grid.set_class(coord, CellClass::OnPath);
            }
            grid.set_class(*first, CellClass::Start);
        }
    }
}
