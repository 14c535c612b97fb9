//! Robot pose and the localization interface the planner consumes.

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

use super::WorldPoint;
use crate::error::{PlanError, Result};

/// 2D robot pose (position + heading).
#[derive(Clone, Copy, Debug, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose2D {
    /// X position in meters.
    pub x: f64,
    /// Y position in meters.
    pub y: f64,
    /// Heading angle in radians [-π, π), CCW positive from X-axis.
    pub theta: f64,
}

impl Pose2D {
    /// Create a new pose.
    ///
    /// # Arguments
    /// * `x` - X position in meters
    /// * `y` - Y position in meters
    /// * `theta` - Heading angle in radians (will be normalized to [-π, π))
    #[inline]
    pub fn new(x: f64, y: f64, theta: f64) -> Self {
        Self {
            x,
            y,
            theta: normalize_angle(theta),
        }
    }

    /// Position part of the pose.
    #[inline]
    pub fn position(&self) -> WorldPoint {
        WorldPoint::new(self.x, self.y)
    }
}

/// Normalize an angle to [-π, π).
#[inline]
pub(crate) fn normalize_angle(angle: f64) -> f64 {
    let wrapped = (angle + PI).rem_euclid(2.0 * PI);
    wrapped - PI
}

/// Source of the robot's current pose estimate.
///
/// Localization lives outside this crate; the planner only needs to ask
/// where the robot is before it searches.
pub trait PoseSource {
    /// Current pose estimate, or `PoseUnavailable` while localization has no
    /// hypothesis yet.
    fn current_pose(&self) -> Result<Pose2D>;
}

/// Pose source that always reports the same pose.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedPose(pub Pose2D);

impl PoseSource for FixedPose {
    fn current_pose(&self) -> Result<Pose2D> {
        let pose = self.0;
        if !(pose.x.is_finite() && pose.y.is_finite()) {
            return Err(PlanError::PoseUnavailable(format!(
                "non-finite position ({}, {})",
                pose.x, pose.y
            )));
        }
        Ok(pose)
    }
}
