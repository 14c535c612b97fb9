//! Command-line arguments.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Plan a route across an occupancy map
#[derive(Parser, Debug)]
#[command(name = "marga-plan")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Plan a route and write the annotated map and plan file
    Plan(PlanArgs),

    /// Print the waypoints of an existing plan file
    Show {
        /// Plan file to read
        #[arg(long, default_value = "plan-out.txt")]
        plan: PathBuf,
    },
}

#[derive(Args, Debug)]
pub struct PlanArgs {
    /// Occupancy map file (rows of 0/1, northern row first)
    #[arg(long)]
    pub map: PathBuf,

    /// Goal position in meters
    #[arg(
        long,
        required = true,
        num_args = 2,
        value_names = ["X", "Y"],
        allow_negative_numbers = true
    )]
    pub goal: Vec<f64>,

    /// Start position in meters
    #[arg(
        long,
        num_args = 2,
        value_names = ["X", "Y"],
        allow_negative_numbers = true,
        default_values_t = [0.0, 0.0]
    )]
    pub start: Vec<f64>,

    /// Configuration file (default: configs/marga.yaml when present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Annotated map output (overrides config)
    #[arg(long)]
    pub map_out: Option<PathBuf>,

    /// Plan file output (overrides config)
    #[arg(long)]
    pub plan_out: Option<PathBuf>,

    /// SVG export (overrides config)
    #[arg(long)]
    pub svg: Option<PathBuf>,

    /// Safety margin in cells (overrides config)
    #[arg(long)]
    pub margin: Option<usize>,

    /// Do not print the annotated map
    #[arg(long)]
    pub quiet_map: bool,
}
