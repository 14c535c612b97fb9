//! Main MargaConfig and conversion methods.

use std::path::Path;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::grid::CoordinateFrame;
use crate::planning::PlannerConfig;

use super::error::ConfigLoadError;
use super::grid::GridSection;
use super::output::OutputSection;
use super::planner::PlannerSection;

/// Default configuration file, relative to the working directory
const DEFAULT_PATH: &str = "configs/marga.yaml";

/// Full Marga configuration loaded from YAML
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, Default)]
pub struct MargaConfig {
    /// Grid settings
    #[serde(default)]
    pub grid: GridSection,

    /// Planner settings
    #[serde(default)]
    pub planner: PlannerSection,

    /// Output settings
    #[serde(default)]
    pub output: OutputSection,
}

impl MargaConfig {
    /// Load configuration from a YAML file
    pub fn load(path: &Path) -> Result<Self, ConfigLoadError> {
        let contents =
            std::fs::read_to_string(path).map_err(|e| ConfigLoadError::Io(e.to_string()))?;
        let config = Self::from_yaml(&contents)?;
        debug!("[Config] loaded {}", path.display());
        Ok(config)
    }

    /// Load from default config path (configs/marga.yaml), or defaults if it
    /// does not exist
    pub fn load_default() -> Result<Self, ConfigLoadError> {
        let path = Path::new(DEFAULT_PATH);
        if path.exists() {
            Self::load(path)
        } else {
            Ok(Self::default())
        }
    }

    /// Parse from YAML string and validate
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigLoadError> {
        let config: Self =
            serde_yaml::from_str(yaml).map_err(|e| ConfigLoadError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Reject values the planner cannot work with
    pub fn validate(&self) -> Result<(), ConfigLoadError> {
        if self.grid.size == 0 {
            return Err(ConfigLoadError::Invalid(
                "grid.size must be at least 1".to_string(),
            ));
        }
        if !(self.grid.scale.is_finite() && self.grid.scale > 0.0) {
            return Err(ConfigLoadError::Invalid(format!(
                "grid.scale must be a positive number, got {}",
                self.grid.scale
            )));
        }
        if let Some(offset) = self.grid.offset {
            if !offset.is_finite() {
                return Err(ConfigLoadError::Invalid(format!(
                    "grid.offset must be finite, got {}",
                    offset
                )));
            }
        }
        Ok(())
    }

    /// World ↔ grid transform for the configured grid
    pub fn frame(&self) -> CoordinateFrame {
        self.grid.to_frame()
    }

    /// Get the route planner config
    pub fn planner_config(&self) -> PlannerConfig {
        self.planner.to_planner_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_config() {
        let config = MargaConfig::default();
        assert_eq!(config.grid.size, 32);
        assert_eq!(config.planner.margin_cells, 1);
        assert_eq!(config.output.plan_out, "plan-out.txt");
        assert_eq!(config.frame(), CoordinateFrame::new(2.0, 16.0));
    }

    #[test]
    fn test_yaml_roundtrip() {
        let mut config = MargaConfig::default();
        config.planner.max_expansions = Some(500);
        let yaml = serde_yaml::to_string(&config).unwrap();
        let parsed = MargaConfig::from_yaml(&yaml).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config = MargaConfig::from_yaml("grid:\n  size: 64\n").unwrap();
        assert_eq!(config.grid.size, 64);
        assert_relative_eq!(config.grid.scale, 2.0);
        // Offset follows the configured size
        assert_relative_eq!(config.frame().offset, 32.0);
        assert_eq!(config.planner_config(), PlannerConfig::default());
    }

    #[test]
    fn test_explicit_offset() {
        let config = MargaConfig::from_yaml("grid:\n  scale: 1.0\n  offset: 0.0\n").unwrap();
        assert_eq!(config.frame(), CoordinateFrame::identity());
    }

    #[test]
    fn test_rejects_bad_scale() {
        let result = MargaConfig::from_yaml("grid:\n  scale: 0.0\n");
        assert!(matches!(result, Err(ConfigLoadError::Invalid(_))));
    }

    #[test]
    fn test_rejects_zero_size() {
        let result = MargaConfig::from_yaml("grid:\n  size: 0\n");
        assert!(matches!(result, Err(ConfigLoadError::Invalid(_))));
    }

    #[test]
    fn test_parse_error() {
        let result = MargaConfig::from_yaml("planner:\n  margin_cells: lots\n");
        assert!(matches!(result, Err(ConfigLoadError::Parse(_))));
    }

    #[test]
    fn test_load_missing_file() {
        let result = MargaConfig::load(Path::new("does/not/exist.yaml"));
        assert!(matches!(result, Err(ConfigLoadError::Io(_))));
    }
}
