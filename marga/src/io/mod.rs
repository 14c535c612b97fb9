//! Map and plan files, and diagnostic output.
//!
//! - **Grid files**: `N` lines of `N` whitespace-separated `0`/`1` codes,
//!   northern row first
//! - **Plan files**: a coordinate count followed by `x y` pairs in metres
//! - **Annotated map**: the planned grid drawn with legend codes
//! - **SVG export**: coloured grid with the waypoint polyline
//!
//! ## Reading a plan back
//!
//! ```rust,ignore
//! use marga::io::{read_plan, format_plan_table};
//! use std::path::Path;
//!
//! let plan = read_plan(Path::new("plan-out.txt"))?;
//! print!("{}", format_plan_table(&plan));
//! ```

pub mod annotated;
pub mod grid_file;
pub mod plan_file;
pub mod svg;

pub use annotated::{render_annotated, write_annotated};
pub use grid_file::{format_grid, load_grid, parse_grid, save_grid};
pub use plan_file::{decode, encode, format_plan_table, read_plan, write_plan, Plan};
pub use svg::{SvgColorScheme, SvgConfig, SvgVisualizer};
