//! A* search types.

use std::cmp::Ordering;

use crate::core::GridCoord;

/// Index of a node in the search arena.
pub(super) type NodeId = usize;

/// A node in the A* search tree.
///
/// Nodes live in an arena (`Vec<SearchNode>`) and point at their parent by
/// index, so the tree needs no reference counting and is freed in one go.
#[derive(Clone, Copy, Debug)]
pub(super) struct SearchNode {
    pub coord: GridCoord,
    pub cost_from_start: f64,
    pub parent: Option<NodeId>,
}

/// Frontier entry.
///
/// `priority` (cost from start + heuristic) is fixed when the entry is
/// pushed. `sequence` is the push order and breaks ties first-in first-out.
#[derive(Clone, Copy, Debug)]
pub(super) struct FrontierEntry {
    pub priority: f64,
    pub sequence: u64,
    pub node: NodeId,
}

impl Eq for FrontierEntry {}

impl PartialEq for FrontierEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Ord for FrontierEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reverse ordering for min-heap behavior, earliest push wins ties
        other
            .priority
            .total_cmp(&self.priority)
            .then_with(|| other.sequence.cmp(&self.sequence))
    }
}

impl PartialOrd for FrontierEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Grid search configuration
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PathfinderConfig {
    /// Maximum number of cells to expand before giving up (`None` = no limit).
    /// Running out is reported as `PathNotFound`.
    pub max_expansions: Option<usize>,
}

/// Successful search outcome
#[derive(Clone, Debug, PartialEq)]
pub struct PathSearch {
    /// Cells from start to goal inclusive, each 8-adjacent to the next
    pub path: Vec<GridCoord>,
    /// Number of cells closed during the search
    pub nodes_expanded: usize,
    /// Largest frontier size seen
    pub frontier_peak: usize,
}

impl PathSearch {
    /// Path length in cell units (1 per straight step, √2 per diagonal)
    pub fn length_cells(&self) -> f64 {
        self.path
            .windows(2)
            .map(|pair| pair[0].euclidean_distance(&pair[1]))
            .sum()
    }
}
