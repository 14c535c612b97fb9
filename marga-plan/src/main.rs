//! marga-plan - Route planner for VacuumTiger maps
//!
//! Loads an occupancy map, grows a safety margin around obstacles, searches
//! for a route from the start to the goal and reduces it to waypoints.
//!
//! ## Outputs
//!
//! - **Annotated map**: printed to the console and written with a legend
//! - **Plan file**: coordinate count followed by `x y` waypoint pairs
//! - **SVG** (optional): coloured grid with the route drawn on top

mod cli;
mod error;

use cli::{Cli, Command, PlanArgs};
use error::{MargaPlanError, Result};

use clap::Parser;
use marga::config::MargaConfig;
use marga::io::{
    format_plan_table, load_grid, read_plan, render_annotated, write_annotated, write_plan,
    SvgConfig, SvgVisualizer,
};
use marga::{FixedPose, Pose2D, RoutePlanner, WorldPoint};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_FILTER: &str = "marga_plan=info,marga=info";

fn main() -> ExitCode {
    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .init();

    let cli = Cli::parse();

    match run(cli.command) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Plan(args) => plan(args),
        Command::Show { plan } => show(&plan),
    }
}

fn plan(args: PlanArgs) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => {
            info!("Loading configuration from {:?}", path);
            MargaConfig::load(path)?
        }
        None => MargaConfig::load_default()?,
    };
    if let Some(margin) = args.margin {
        config.planner.margin_cells = margin;
    }

    let start = world_point("start", &args.start)?;
    let goal = world_point("goal", &args.goal)?;

    info!("marga-plan v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Grid {}x{} at {} cells/m, margin {} cell(s)",
        config.grid.size, config.grid.size, config.grid.scale, config.planner.margin_cells
    );

    let mut grid = load_grid(&args.map, config.grid.size, config.frame())?;

    let planner = RoutePlanner::new(config.planner_config());
    let pose_source = FixedPose(Pose2D::new(start.x, start.y, 0.0));
    let route = planner.plan_from_pose(&mut grid, &pose_source, goal)?;

    let mut stdout = std::io::stdout().lock();
    if !args.quiet_map {
        writeln!(stdout, "{}", render_annotated(&grid))?;
    }

    let map_out = output_path(args.map_out, &config.output.map_out);
    write_annotated(&grid, &map_out)?;
    info!("Annotated map written to {:?}", map_out);

    let plan_out = output_path(args.plan_out, &config.output.plan_out);
    write_plan(&route.plan, &plan_out)?;
    info!(
        "Plan with {} waypoints written to {:?}",
        route.plan.len(),
        plan_out
    );

    // Read back what the controller will read
    let written = read_plan(&plan_out)?;
    write!(stdout, "{}", format_plan_table(&written))?;

    let svg_out = args
        .svg
        .or_else(|| config.output.svg_out.as_ref().map(PathBuf::from));
    if let Some(path) = svg_out {
        SvgVisualizer::new(grid, SvgConfig::default())
            .with_title(format!("{} to {}", start, goal))
            .with_start(start)
            .with_plan(&route.plan)
            .save(&path)?;
        info!("SVG written to {:?}", path);
    }

    Ok(())
}

fn show(path: &Path) -> Result<()> {
    let plan = read_plan(path)?;
    info!("{} waypoints, {:.2} m", plan.len(), plan.length());
    write!(std::io::stdout().lock(), "{}", format_plan_table(&plan))?;
    Ok(())
}

fn world_point(name: &str, values: &[f64]) -> Result<WorldPoint> {
    match values {
        [x, y] => Ok(WorldPoint::new(*x, *y)),
        _ => Err(MargaPlanError::Usage(format!(
            "--{} takes exactly two values, got {}",
            name,
            values.len()
        ))),
    }
}

fn output_path(explicit: Option<PathBuf>, configured: &str) -> PathBuf {
    explicit.unwrap_or_else(|| PathBuf::from(configured))
}
