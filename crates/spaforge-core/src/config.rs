//! Deployment configuration value objects.

use serde::{Deserialize, Serialize};

/// Address subscribed to the notification topic when the configuration
/// does not name one.
pub const DEFAULT_NOTIFICATION_EMAIL: &str = "builds@spaforge.dev";

fn default_branch() -> String {
    "main".to_string()
}

fn default_install_command() -> String {
    "npm ci".to_string()
}

fn default_build_command() -> String {
    "npm run build".to_string()
}

fn default_output_directory() -> String {
    "dist".to_string()
}

fn default_notification_email() -> String {
    DEFAULT_NOTIFICATION_EMAIL.to_string()
}

/// A user's deployment configuration for a single page application.
///
/// Deserialized from the `spaforge.yml` document. Required fields that are
/// absent in the document come out as empty strings rather than failing
/// deserialization, so that validation can report every missing field in
/// one pass. Unknown keys are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DeploymentConfig {
    /// Project name, the namespace key for all derived resource names.
    #[serde(default)]
    pub project_name: String,
    /// Where the application source lives.
    #[serde(default)]
    pub source: SourceSettings,
    /// Target AWS region code.
    #[serde(default)]
    pub region: String,
    /// Custom domain settings.
    #[serde(default)]
    pub domain: DomainSettings,
    /// Build notification settings.
    #[serde(default)]
    pub notification: NotificationSettings,
    /// Build commands and artifact location.
    #[serde(default)]
    pub build: BuildSettings,
}

impl DeploymentConfig {
    /// Name of the site bucket.
    pub fn bucket_name(&self) -> String {
        format!("{}-site", self.project_name)
    }

    /// Name of the build project.
    pub fn build_project_name(&self) -> String {
        format!("{}-build", self.project_name)
    }

    /// Name of the notification topic.
    pub fn topic_name(&self) -> String {
        format!("{}-notifications", self.project_name)
    }
}

/// Source repository settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SourceSettings {
    /// Repository URL (`https://github.com/{owner}/{repo}`).
    #[serde(default)]
    pub repository_url: String,
    /// Branch to build and deploy.
    #[serde(default = "default_branch")]
    pub branch: String,
}

impl Default for SourceSettings {
    fn default() -> Self {
        Self {
            repository_url: String::new(),
            branch: default_branch(),
        }
    }
}

/// Custom domain settings. `certificate_arn` is required whenever
/// `custom_domain` is set; validation enforces that pairing.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DomainSettings {
    /// Domain to serve the site from, e.g. `example.com`.
    pub custom_domain: Option<String>,
    /// ARN of the ACM certificate covering the custom domain.
    pub certificate_arn: Option<String>,
}

/// Build notification settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    /// Address subscribed to build and deploy notifications.
    #[serde(default = "default_notification_email")]
    pub email: String,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            email: default_notification_email(),
        }
    }
}

/// Build commands and artifact output location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildSettings {
    /// Command that installs dependencies.
    #[serde(default = "default_install_command")]
    pub install_command: String,
    /// Command that produces the production bundle.
    #[serde(default = "default_build_command")]
    pub build_command: String,
    /// Directory the build writes the bundle into.
    #[serde(default = "default_output_directory")]
    pub output_directory: String,
}

impl Default for BuildSettings {
    fn default() -> Self {
        Self {
            install_command: default_install_command(),
            build_command: default_build_command(),
            output_directory: default_output_directory(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DeploymentConfig::default();
        assert_eq!(config.source.branch, "main");
        assert_eq!(config.notification.email, DEFAULT_NOTIFICATION_EMAIL);
        assert_eq!(config.build.install_command, "npm ci");
        assert_eq!(config.build.build_command, "npm run build");
        assert_eq!(config.build.output_directory, "dist");
    }

    #[test]
    fn test_derived_resource_names() {
        let config = DeploymentConfig {
            project_name: "my-app".to_string(),
            ..Default::default()
        };
        assert_eq!(config.bucket_name(), "my-app-site");
        assert_eq!(config.build_project_name(), "my-app-build");
        assert_eq!(config.topic_name(), "my-app-notifications");
    }
}
