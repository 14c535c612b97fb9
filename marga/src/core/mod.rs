//! Core types: cell classes, coordinates and poses.

mod cell;
mod point;
mod pose;

pub use cell::CellClass;
pub use point::{GridCoord, WorldPoint};
pub use pose::{FixedPose, Pose2D, PoseSource};
