//! Synthesis errors.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum SynthError {
    #[error("failed to render build specification: {0}")]
    BuildSpec(#[source] serde_yaml::Error),

    #[error("failed to render resource template: {0}")]
    Template(#[source] serde_json::Error),
}

pub type SynthResult<T> = std::result::Result<T, SynthError>;
