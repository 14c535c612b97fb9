//! Error types for route planning.

use std::fmt;

use thiserror::Error;

use crate::core::{CellClass, GridCoord, WorldPoint};

/// Which end of the requested route is at fault.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Endpoint {
    /// The robot's starting position
    Start,
    /// The requested destination
    Goal,
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Endpoint::Start => write!(f, "start"),
            Endpoint::Goal => write!(f, "goal"),
        }
    }
}

/// Why an endpoint cannot be used.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EndpointFault {
    /// The cell lies outside the grid
    OutOfBounds,
    /// The cell is not free (obstacle, margin or already annotated)
    NotFree(CellClass),
}

impl fmt::Display for EndpointFault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EndpointFault::OutOfBounds => write!(f, "outside the grid"),
            EndpointFault::NotFree(class) => write!(f, "not free ({:?})", class),
        }
    }
}

/// Planning error type
#[derive(Error, Debug)]
pub enum PlanError {
    /// Map input has the wrong dimensions or an unknown cell code
    #[error("Malformed grid: {0}")]
    MalformedGrid(String),

    /// Plan input has an odd coordinate count or a non-numeric token
    #[error("Malformed plan: {0}")]
    MalformedPlan(String),

    /// Start or goal cell is outside the grid or not free
    #[error("Invalid {endpoint} cell {coord}: {fault}")]
    InvalidEndpoint {
        /// Which endpoint was rejected
        endpoint: Endpoint,
        /// Grid cell the endpoint mapped to
        coord: GridCoord,
        /// What is wrong with it
        fault: EndpointFault,
    },

    /// Start or goal has a NaN or infinite coordinate
    #[error("Invalid {endpoint} position {point}: coordinates must be finite")]
    NonFiniteEndpoint {
        /// Which endpoint was rejected
        endpoint: Endpoint,
        /// The requested position
        point: WorldPoint,
    },

    /// The frontier ran dry (or the expansion budget ran out) before the goal
    #[error("No path found after expanding {nodes_expanded} cells")]
    PathNotFound {
        /// Cells closed before giving up
        nodes_expanded: usize,
    },

    /// Localization could not provide a start pose
    #[error("Pose unavailable: {0}")]
    PoseUnavailable(String),

    /// File read/write failure
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result alias for planning operations
pub type Result<T> = std::result::Result<T, PlanError>;
