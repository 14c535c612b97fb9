//! Grid configuration section.

use serde::{Deserialize, Serialize};

use crate::grid::CoordinateFrame;

use super::defaults;

/// Grid configuration section
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GridSection {
    /// Cells per side
    #[serde(default = "defaults::grid_size")]
    pub size: usize,

    /// Cells per meter
    #[serde(default = "defaults::scale")]
    pub scale: f64,

    /// Grid index of world zero (defaults to the grid centre)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub offset: Option<f64>,
}

impl Default for GridSection {
    fn default() -> Self {
        Self {
            size: defaults::grid_size(),
            scale: defaults::scale(),
            offset: None,
        }
    }
}

impl GridSection {
    /// Convert to a coordinate frame
    pub fn to_frame(&self) -> CoordinateFrame {
        match self.offset {
            Some(offset) => CoordinateFrame::new(self.scale, offset),
            None => CoordinateFrame::centered(self.size, self.scale),
        }
    }
}
