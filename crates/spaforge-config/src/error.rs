//! Configuration loading and validation errors.

use std::path::PathBuf;

use thiserror::Error;

use crate::validate::ValidationReport;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("configuration file not found: {}", .0.display())]
    NotFound(PathBuf),

    #[error("YAML parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("configuration file is empty: {}", .0.display())]
    EmptyDocument(PathBuf),

    #[error("invalid configuration:\n{0}")]
    Validation(ValidationReport),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
