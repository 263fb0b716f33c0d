//! Configuration document loading.

use std::fs;
use std::io::ErrorKind;
use std::path::Path;

use spaforge_core::DeploymentConfig;
use tracing::debug;

use crate::{ConfigError, ConfigResult};

/// Read and deserialize a deployment configuration.
///
/// Performs one blocking read. Optional fields come back with their
/// documented defaults filled in, but the result is not yet guaranteed
/// valid; run [`crate::validate`] before handing it to resource synthesis.
pub fn load(path: impl AsRef<Path>) -> ConfigResult<DeploymentConfig> {
    let path = path.as_ref();

    let text = fs::read_to_string(path).map_err(|e| match e.kind() {
        ErrorKind::NotFound => ConfigError::NotFound(path.to_path_buf()),
        _ => ConfigError::Io(e),
    })?;

    // An empty file, or one holding only comments, parses to YAML null.
    let value: serde_yaml::Value = serde_yaml::from_str(&text)?;
    if value.is_null() {
        return Err(ConfigError::EmptyDocument(path.to_path_buf()));
    }

    let config: DeploymentConfig = serde_yaml::from_value(value)?;
    debug!(project = %config.project_name, path = %path.display(), "loaded configuration");
    Ok(config)
}
