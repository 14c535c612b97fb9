//! Configuration loading for Marga.
//!
//! Loads all configuration from a single YAML file with sensible defaults.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use marga::config::MargaConfig;
//!
//! // Load from default path (configs/marga.yaml), falling back to defaults
//! let config = MargaConfig::load_default()?;
//!
//! // Convert to runtime types
//! let frame = config.frame();
//! let planner_config = config.planner_config();
//! ```
//!
//! ## Configuration Sections
//!
//! | Section | Description |
//! |---------|-------------|
//! | [`GridSection`] | Grid size and world ↔ grid transform |
//! | [`PlannerSection`] | Safety margin and search budget |
//! | [`OutputSection`] | Output file paths |
//!
//! ## Example YAML
//!
//! ```yaml
//! grid:
//!   size: 32        # cells per side
//!   scale: 2.0      # cells per meter (0.5 m cells)
//!   # offset: 16.0  # grid index of world zero, defaults to size / 2
//!
//! planner:
//!   margin_cells: 1
//!   # max_expansions: 5000
//!
//! output:
//!   map_out: map-out.txt
//!   plan_out: plan-out.txt
//!   # svg_out: route.svg
//! ```

mod defaults;
mod error;
mod grid;
mod marga;
mod output;
mod planner;

// Re-export main types
pub use error::ConfigLoadError;
pub use marga::MargaConfig;

// Re-export section types
pub use grid::GridSection;
pub use output::OutputSection;
pub use planner::PlannerSection;
