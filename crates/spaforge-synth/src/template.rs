//! Resource template assembly.
//!
//! The template follows the CloudFormation document format: a format
//! version, a map of logical id to resource definition, and a map of named
//! outputs. `BTreeMap` keeps rendered output deterministic.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::{SynthError, SynthResult};

/// Template format version understood by the provisioning platform.
pub const TEMPLATE_FORMAT_VERSION: &str = "2010-09-09";

/// A declarative resource template.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Template {
    #[serde(rename = "AWSTemplateFormatVersion")]
    pub format_version: String,
    pub description: String,
    pub resources: BTreeMap<String, Resource>,
    pub outputs: BTreeMap<String, Output>,
}

/// A single resource definition.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Resource {
    #[serde(rename = "Type")]
    pub resource_type: String,
    #[serde(rename = "Properties")]
    pub properties: Value,
    #[serde(rename = "DependsOn", skip_serializing_if = "Option::is_none")]
    pub depends_on: Option<Vec<String>>,
}

/// A named template output.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct Output {
    pub description: String,
    pub value: Value,
}

impl Template {
    /// Create an empty template.
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            format_version: TEMPLATE_FORMAT_VERSION.to_string(),
            description: description.into(),
            resources: BTreeMap::new(),
            outputs: BTreeMap::new(),
        }
    }

    /// Add a resource under a logical id.
    pub fn add_resource(&mut self, logical_id: &str, resource: Resource) {
        self.resources.insert(logical_id.to_string(), resource);
    }

    /// Add a named output.
    pub fn add_output(&mut self, name: &str, description: &str, value: Value) {
        self.outputs.insert(
            name.to_string(),
            Output {
                description: description.to_string(),
                value,
            },
        );
    }

    /// Render as the JSON document consumed by the provisioning platform.
    pub fn to_json(&self) -> SynthResult<String> {
        serde_json::to_string_pretty(self).map_err(SynthError::Template)
    }
}
