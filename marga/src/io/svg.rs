//! SVG visualization of a planned grid.
//!
//! Renders the annotated occupancy grid and the route to SVG:
//! - Obstacles, safety margins and cells expanded by the search
//! - The raw path cells and the retained waypoints
//! - The waypoint polyline from the start, as the robot will drive it

use log::debug;
use std::fmt::{self, Write};
use std::fs;
use std::path::Path;

use crate::core::{CellClass, WorldPoint};
use crate::error::Result;
use crate::grid::OccupancyGrid;
use crate::io::Plan;

/// SVG color scheme for visualization
#[derive(Clone, Debug)]
pub struct SvgColorScheme {
    /// Free cell color
    pub free: &'static str,
    /// Obstacle color
    pub obstacle: &'static str,
    /// Safety margin color
    pub margin: &'static str,
    /// Expanded (visited) cell color
    pub visited: &'static str,
    /// Path cell color
    pub path: &'static str,
    /// Waypoint cell and marker color
    pub waypoint: &'static str,
    /// Start cell color
    pub start: &'static str,
    /// Route polyline color
    pub route: &'static str,
}

impl Default for SvgColorScheme {
    fn default() -> Self {
        Self {
            free: "#FFFFFF",
            obstacle: "#333333",
            margin: "#999999",
            visited: "#DDEEFF",
            path: "#88CC88",
            waypoint: "#FF8800",
            start: "#22AA22",
            route: "#2222AA",
        }
    }
}

impl SvgColorScheme {
    fn fill(&self, class: CellClass) -> &'static str {
        match class {
            CellClass::Free => self.free,
            CellClass::Obstacle => self.obstacle,
            CellClass::Margin => self.margin,
            CellClass::Visited => self.visited,
            CellClass::OnPath => self.path,
            CellClass::Waypoint => self.waypoint,
            CellClass::Start => self.start,
        }
    }
}

/// Configuration for SVG rendering
#[derive(Clone, Debug)]
pub struct SvgConfig {
    /// Pixels per cell
    pub cell_px: f64,
    /// Route line width
    pub route_width: f64,
    /// Waypoint marker radius
    pub marker_radius: f64,
    /// Color scheme
    pub colors: SvgColorScheme,
    /// Padding around the map in pixels
    pub padding: f64,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            cell_px: 16.0,
            route_width: 2.0,
            marker_radius: 4.0,
            colors: SvgColorScheme::default(),
            padding: 20.0,
        }
    }
}

/// SVG visualization builder
pub struct SvgVisualizer {
    config: SvgConfig,
    grid: OccupancyGrid,
    title: Option<String>,
    start: Option<WorldPoint>,
    waypoints: Vec<WorldPoint>,
}

impl SvgVisualizer {
    /// Create a new SVG visualizer
    pub fn new(grid: OccupancyGrid, config: SvgConfig) -> Self {
        Self {
            config,
            grid,
            title: None,
            start: None,
            waypoints: Vec::new(),
        }
    }

    /// Set a title to display
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Starting point of the route polyline
    pub fn with_start(mut self, start: WorldPoint) -> Self {
        self.start = Some(start);
        self
    }

    /// Add waypoints as markers joined by the route line
    pub fn with_waypoints(mut self, waypoints: Vec<WorldPoint>) -> Self {
        self.waypoints = waypoints;
        self
    }

    /// Add the waypoints of a plan
    pub fn with_plan(self, plan: &Plan) -> Self {
        self.with_waypoints(plan.points().to_vec())
    }

    /// Render to SVG string
    pub fn render(&self) -> String {
        let mut svg = String::new();
        // Writing to a String cannot fail
        let _ = self.write_document(&mut svg);
        svg
    }

    /// Save to file
    pub fn save(&self, path: &Path) -> Result<()> {
        fs::write(path, self.render())?;
        debug!("[Svg] wrote {}", path.display());
        Ok(())
    }

    fn map_px(&self) -> f64 {
        self.grid.size() as f64 * self.config.cell_px
    }

    fn title_height(&self) -> f64 {
        if self.title.is_some() {
            30.0
        } else {
            0.0
        }
    }

    fn write_document(&self, svg: &mut String) -> fmt::Result {
        let padding = self.config.padding;
        let map_px = self.map_px();
        let title_height = self.title_height();
        let legend_height = 30.0;

        let width = map_px + 2.0 * padding;
        let height = map_px + 2.0 * padding + title_height + legend_height;

        writeln!(svg, r#"<?xml version="1.0" encoding="UTF-8"?>"#)?;
        writeln!(
            svg,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{:.0}" height="{:.0}" viewBox="0 0 {:.0} {:.0}">"#,
            width, height, width, height
        )?;
        writeln!(svg, r##"  <rect width="100%" height="100%" fill="#F8F8F8"/>"##)?;

        if let Some(ref title) = self.title {
            writeln!(
                svg,
                r##"  <text x="{:.0}" y="22" font-family="sans-serif" font-size="16" font-weight="bold" text-anchor="middle" fill="#333">{}</text>"##,
                width / 2.0,
                title
            )?;
        }

        writeln!(
            svg,
            r#"  <g transform="translate({:.0}, {:.0})">"#,
            padding,
            padding + title_height
        )?;
        self.write_grid(svg)?;
        self.write_route(svg)?;
        writeln!(svg, "  </g>")?;

        self.write_legend(svg, padding + title_height + map_px + 10.0)?;

        writeln!(svg, "</svg>")
    }

    /// Grid cells, northern row at the top
    fn write_grid(&self, svg: &mut String) -> fmt::Result {
        let cell = self.config.cell_px;
        let map_px = self.map_px();

        writeln!(svg, r#"    <g id="grid">"#)?;
        writeln!(
            svg,
            r##"      <rect width="{:.1}" height="{:.1}" fill="{}" stroke="#CCC"/>"##,
            map_px, map_px, self.config.colors.free
        )?;

        for (coord, class) in self.grid.iter() {
            if class == CellClass::Free {
                continue;
            }
            let px_x = coord.col as f64 * cell;
            let px_y = map_px - (coord.row + 1) as f64 * cell;
            writeln!(
                svg,
                r#"      <rect x="{:.1}" y="{:.1}" width="{:.1}" height="{:.1}" fill="{}"/>"#,
                px_x,
                px_y,
                cell,
                cell,
                self.config.colors.fill(class)
            )?;
        }

        writeln!(svg, "    </g>")
    }

    /// Waypoint polyline and markers
    fn write_route(&self, svg: &mut String) -> fmt::Result {
        if self.waypoints.is_empty() {
            return Ok(());
        }

        writeln!(svg, r#"    <g id="route">"#)?;

        let mut path_d = String::new();
        let points = self.start.iter().chain(self.waypoints.iter());
        for (i, point) in points.enumerate() {
            let (px, py) = self.to_px(*point);
            let command = if i == 0 { "M" } else { " L" };
            write!(path_d, "{} {:.1} {:.1}", command, px, py)?;
        }
        writeln!(
            svg,
            r#"      <path d="{}" fill="none" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round" opacity="0.8"/>"#,
            path_d, self.config.colors.route, self.config.route_width
        )?;

        for point in &self.waypoints {
            let (px, py) = self.to_px(*point);
            writeln!(
                svg,
                r#"      <circle cx="{:.1}" cy="{:.1}" r="{:.1}" fill="{}" stroke="white" stroke-width="1"/>"#,
                px, py, self.config.marker_radius, self.config.colors.waypoint
            )?;
        }

        writeln!(svg, "    </g>")
    }

    fn write_legend(&self, svg: &mut String, y_offset: f64) -> fmt::Result {
        writeln!(
            svg,
            r#"  <g id="legend" font-family="sans-serif" font-size="12" transform="translate({:.0}, {:.0})">"#,
            self.config.padding, y_offset
        )?;

        let entries = [
            (CellClass::Obstacle, "Obstacle"),
            (CellClass::Margin, "Margin"),
            (CellClass::OnPath, "Path"),
            (CellClass::Waypoint, "Waypoint"),
            (CellClass::Start, "Start"),
        ];
        for (i, (class, label)) in entries.iter().enumerate() {
            let x = i as f64 * 80.0;
            writeln!(
                svg,
                r#"    <rect x="{:.0}" y="0" width="12" height="12" fill="{}"/>"#,
                x,
                self.config.colors.fill(*class)
            )?;
            writeln!(
                svg,
                r##"    <text x="{:.0}" y="11" fill="#333">{}</text>"##,
                x + 16.0,
                label
            )?;
        }

        writeln!(svg, "  </g>")
    }

    /// World point to pixel position inside the map group
    fn to_px(&self, point: WorldPoint) -> (f64, f64) {
        let (row, col) = self.grid.frame().to_grid_continuous(point);
        let cell = self.config.cell_px;
        (
            (col + 0.5) * cell,
            self.map_px() - (row + 0.5) * cell,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridCoord;
    use crate::grid::CoordinateFrame;

    #[test]
    fn test_svg_render_basic() {
        let grid = OccupancyGrid::new(10, CoordinateFrame::identity());
        let svg = SvgVisualizer::new(grid, SvgConfig::default()).render();

        assert!(svg.contains("<svg"));
        assert!(svg.contains("</svg>"));
        assert!(svg.contains(r#"id="grid""#));
        assert!(!svg.contains(r#"id="route""#));
    }

    #[test]
    fn test_svg_with_route() {
        let mut grid = OccupancyGrid::new(4, CoordinateFrame::identity());
        grid.set_class(GridCoord::new(3, 3), CellClass::Obstacle);
        let plan = Plan::new(vec![WorldPoint::new(2.0, 0.0), WorldPoint::new(2.0, 2.0)]);

        let svg = SvgVisualizer::new(grid, SvgConfig::default())
            .with_title("Route")
            .with_start(WorldPoint::ZERO)
            .with_plan(&plan)
            .render();

        assert!(svg.contains("Route"));
        assert!(svg.contains(r#"id="route""#));
        // Start cell centre, then the two waypoints
        assert!(svg.contains("M 8.0 56.0 L 40.0 56.0 L 40.0 24.0"));
        assert_eq!(svg.matches("<circle").count(), 2);
        // Obstacle in the north-east corner
        assert!(svg.contains(r##"<rect x="48.0" y="0.0" width="16.0" height="16.0" fill="#333333"/>"##));
    }

    #[test]
    fn test_svg_save() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("route.svg");
        let grid = OccupancyGrid::new(3, CoordinateFrame::identity());

        SvgVisualizer::new(grid, SvgConfig::default())
            .save(&path)
            .unwrap();

        assert!(fs::read_to_string(&path).unwrap().ends_with("</svg>\n"));
    }
}
