//! Build specification generation.
//!
//! Derives the document the external build executor consumes from a
//! deployment configuration. Pure projection: the same configuration always
//! produces the same specification, computed fresh on each call.

use serde::{Deserialize, Serialize};
use spaforge_core::DeploymentConfig;

use crate::{SynthError, SynthResult};

/// Build specification format version understood by the build executor.
pub const BUILDSPEC_VERSION: &str = "0.2";

/// The generated build specification document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildSpec {
    pub version: String,
    pub phases: Phases,
    pub artifacts: Artifacts,
}

/// Ordered command lists for the install and build phases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phases {
    pub install: Phase,
    pub build: Phase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phase {
    pub commands: Vec<String>,
}

/// Artifact rule: which files, relative to which directory.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Artifacts {
    pub files: Vec<String>,
    #[serde(rename = "base-directory")]
    pub base_directory: String,
}

impl BuildSpec {
    /// Derive the build specification from a configuration.
    pub fn from_config(config: &DeploymentConfig) -> Self {
        Self {
            version: BUILDSPEC_VERSION.to_string(),
            phases: Phases {
                install: Phase {
                    commands: vec![config.build.install_command.clone()],
                },
                build: Phase {
                    commands: vec![config.build.build_command.clone()],
                },
            },
            artifacts: Artifacts {
                files: vec!["**/*".to_string()],
                base_directory: config.build.output_directory.clone(),
            },
        }
    }

    /// Render as the YAML document consumed by the build executor.
    pub fn to_yaml(&self) -> SynthResult<String> {
        serde_yaml::to_string(self).map_err(SynthError::BuildSpec)
    }
}
