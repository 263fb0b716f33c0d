//! Core domain types for the spaforge deployment tool.
//!
//! This crate contains:
//! - The deployment configuration value object and its sections
//! - The table of deployable AWS regions
//! - Resource names derived from the project namespace

pub mod config;
pub mod region;

pub use config::{
    BuildSettings, DEFAULT_NOTIFICATION_EMAIL, DeploymentConfig, DomainSettings,
    NotificationSettings, SourceSettings,
};
pub use region::{CERTIFICATE_REGION, VALID_REGIONS, is_valid_region};
