//! Error types for marga-plan

use marga::config::ConfigLoadError;
use marga::PlanError;
use thiserror::Error;

/// marga-plan error type
#[derive(Error, Debug)]
pub enum MargaPlanError {
    #[error(transparent)]
    Plan(#[from] PlanError),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigLoadError),

    #[error("Output error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid arguments: {0}")]
    Usage(String),
}

pub type Result<T> = std::result::Result<T, MargaPlanError>;
