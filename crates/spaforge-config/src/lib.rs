//! Deployment configuration loading and validation.
//!
//! This crate handles:
//! - Reading the YAML configuration document (`spaforge.yml`)
//! - Filling defaults for optional fields
//! - Validating the result before any resource synthesis happens

pub mod error;
pub mod loader;
pub mod validate;

pub use error::{ConfigError, ConfigResult};
pub use loader::load;
pub use validate::{ValidationReport, validate};
