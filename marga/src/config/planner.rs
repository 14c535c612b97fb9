//! Planner configuration section.

use serde::{Deserialize, Serialize};

use crate::planning::PlannerConfig;

use super::defaults;

/// Planner settings section
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannerSection {
    /// Safety margin rings grown around obstacles (0 disables dilation)
    #[serde(default = "defaults::margin_cells")]
    pub margin_cells: usize,

    /// Search expansion budget (unset = unlimited)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_expansions: Option<usize>,
}

impl Default for PlannerSection {
    fn default() -> Self {
        Self {
            margin_cells: defaults::margin_cells(),
            max_expansions: None,
        }
    }
}

impl PlannerSection {
    /// Convert to PlannerConfig
    pub fn to_planner_config(&self) -> PlannerConfig {
        PlannerConfig {
            margin_cells: self.margin_cells,
            max_expansions: self.max_expansions,
        }
    }
}
