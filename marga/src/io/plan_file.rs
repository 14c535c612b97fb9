//! Plan encoding and the plan file format.
//!
//! A plan file is a whitespace-separated token stream: an even integer `L`
//! followed by exactly `L` numbers, read as `L / 2` consecutive `x y` pairs
//! in metres. Line breaks carry no meaning.

use log::debug;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::core::{GridCoord, WorldPoint};
use crate::error::{PlanError, Result};
use crate::grid::OccupancyGrid;

/// Ordered waypoints in world coordinates.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    points: Vec<WorldPoint>,
}

impl From<Vec<WorldPoint>> for Plan {
    fn from(points: Vec<WorldPoint>) -> Self {
        Self { points }
    }
}

impl Plan {
    /// Create a plan from world points.
    pub fn new(points: Vec<WorldPoint>) -> Self {
        Self { points }
    }

    /// Waypoints in order.
    #[inline]
    pub fn points(&self) -> &[WorldPoint] {
        &self.points
    }

    /// Number of waypoints.
    #[inline]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the plan has no waypoints.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Number of coordinates written to a plan file (twice the waypoints).
    #[inline]
    pub fn coordinate_count(&self) -> usize {
        self.points.len() * 2
    }

    /// Length of the polyline through the waypoints, in metres.
    pub fn length(&self) -> f64 {
        self.points
            .windows(2)
            .map(|pair| pair[0].distance(&pair[1]))
            .sum()
    }

    /// Plan file text: the coordinate count, then one `x y` pair per line.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n", self.coordinate_count());
        for p in &self.points {
            out.push_str(&format!("{} {}\n", p.x, p.y));
        }
        out
    }
}

/// Convert grid waypoints to world coordinates.
pub fn encode(waypoints: &[GridCoord], grid: &OccupancyGrid) -> Plan {
    Plan::new(waypoints.iter().map(|&c| grid.to_world(c)).collect())
}

/// Parse plan text.
///
/// Rejects a missing or negative count, an odd count, non-numeric or
/// non-finite coordinates, and any mismatch between the count and the number
/// of coordinates that follow.
pub fn decode(text: &str) -> Result<Plan> {
    let mut tokens = text.split_whitespace();

    let count_token = tokens
        .next()
        .ok_or_else(|| PlanError::MalformedPlan("missing coordinate count".to_string()))?;
    let count: usize = count_token.parse().map_err(|_| {
        PlanError::MalformedPlan(format!(
            "coordinate count '{}' is not a non-negative integer",
            count_token
        ))
    })?;
    if count % 2 != 0 {
        return Err(PlanError::MalformedPlan(format!(
            "odd coordinate count {}: x and y values do not pair up",
            count
        )));
    }

    let values = tokens
        .enumerate()
        .map(|(i, token)| match token.parse::<f64>() {
            Ok(v) if v.is_finite() => Ok(v),
            _ => Err(PlanError::MalformedPlan(format!(
                "coordinate {}: '{}' is not a number",
                i + 1,
                token
            ))),
        })
        .collect::<Result<Vec<f64>>>()?;

    if values.len() != count {
        return Err(PlanError::MalformedPlan(format!(
            "expected {} coordinates, found {}",
            count,
            values.len()
        )));
    }

    let points = values
        .chunks_exact(2)
        .map(|pair| WorldPoint::new(pair[0], pair[1]))
        .collect();
    Ok(Plan::new(points))
}

/// Read and decode a plan file.
pub fn read_plan(path: &Path) -> Result<Plan> {
    let text = fs::read_to_string(path)?;
    let plan = decode(&text)?;
    debug!("[Plan] read {} waypoints from {}", plan.len(), path.display());
    Ok(plan)
}

/// Write a plan file.
pub fn write_plan(plan: &Plan, path: &Path) -> Result<()> {
    fs::write(path, plan.to_text())?;
    debug!("[Plan] wrote {} waypoints to {}", plan.len(), path.display());
    Ok(())
}

/// Two-column `x y` table for the console.
pub fn format_plan_table(plan: &Plan) -> String {
    let mut out = String::from("     x      y\n");
    for p in plan.points() {
        out.push_str(&format!("{:>6} {:>6}\n", p.x, p.y));
    }
    out
}
