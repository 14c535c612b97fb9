//! Output configuration section.

use serde::{Deserialize, Serialize};

use super::defaults;

/// Output file settings
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSection {
    /// Annotated map path
    #[serde(default = "defaults::map_out")]
    pub map_out: String,

    /// Plan file path
    #[serde(default = "defaults::plan_out")]
    pub plan_out: String,

    /// SVG export path (no SVG when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub svg_out: Option<String>,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            map_out: defaults::map_out(),
            plan_out: defaults::plan_out(),
            svg_out: None,
        }
    }
}
