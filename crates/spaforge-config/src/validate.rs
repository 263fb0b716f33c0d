//! Configuration validation rules.
//!
//! Every rule is evaluated independently and all violations are collected,
//! so a user fixes their configuration in one round trip instead of
//! discovering problems one at a time. Any violation blocks resource
//! synthesis entirely.

use std::fmt;
use std::sync::LazyLock;

use regex::Regex;
use spaforge_core::{CERTIFICATE_REGION, DeploymentConfig, is_valid_region};

use crate::{ConfigError, ConfigResult};

static PROJECT_NAME_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Za-z0-9_-]+$").unwrap());

static REPOSITORY_URL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^https://github\.com/[\w-]+/[\w-]+$").unwrap());

static EMAIL_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap());

/// Outcome of validating a deployment configuration.
#[derive(Debug, Clone, Default)]
pub struct ValidationReport {
    /// Rule violations. Any entry makes the configuration unusable.
    pub errors: Vec<String>,
    /// Non-fatal findings, reported alongside a successful result.
    pub warnings: Vec<String>,
}

impl ValidationReport {
    /// Whether the configuration passed every rule.
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a hard failure when any rule was violated.
    pub fn into_result(self) -> ConfigResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ConfigError::Validation(self))
        }
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for error in &self.errors {
            if !first {
                writeln!(f)?;
            }
            write!(f, "{error}")?;
            first = false;
        }
        Ok(())
    }
}

/// Validate a loaded configuration.
///
/// Pure function: no I/O, never fails. Rule order is fixed so messages come
/// out in a stable order.
pub fn validate(config: &DeploymentConfig) -> ValidationReport {
    let mut report = ValidationReport::default();

    if config.project_name.is_empty() {
        report.errors.push("projectName is required".to_string());
    } else if !PROJECT_NAME_RE.is_match(&config.project_name) {
        report.errors.push(format!(
            "projectName '{}' may only contain letters, digits, hyphens and underscores",
            config.project_name
        ));
    }

    if config.source.repository_url.is_empty() {
        report
            .errors
            .push("source.repositoryUrl is required".to_string());
    } else if !REPOSITORY_URL_RE.is_match(&config.source.repository_url) {
        report.errors.push(format!(
            "source.repositoryUrl '{}' must look like https://github.com/{{owner}}/{{repo}}",
            config.source.repository_url
        ));
    }

    if config.region.is_empty() {
        report.errors.push("region is required".to_string());
    } else if !is_valid_region(&config.region) {
        report.errors.push(format!(
            "region '{}' is not a known AWS region",
            config.region
        ));
    }

    if let Some(custom_domain) = &config.domain.custom_domain {
        if config.domain.certificate_arn.is_none() {
            report.errors.push(format!(
                "domain.certificateArn is required when domain.customDomain ('{custom_domain}') is set"
            ));
        }
        if is_valid_region(&config.region) && config.region != CERTIFICATE_REGION {
            report.warnings.push(format!(
                "custom domains need a certificate in {CERTIFICATE_REGION}; region is '{}'",
                config.region
            ));
        }
    }

    if !EMAIL_RE.is_match(&config.notification.email) {
        report.errors.push(format!(
            "notification.email '{}' is not a valid email address",
            config.notification.email
        ));
    }

    report
}

#[cfg(test)]
mod tests {
    use spaforge_core::{BuildSettings, DomainSettings, NotificationSettings, SourceSettings};

    use super::*;

    fn valid_config() -> DeploymentConfig {
        DeploymentConfig {
            project_name: "my-app".to_string(),
            source: SourceSettings {
                repository_url: "https://github.com/acme/site".to_string(),
                branch: "main".to_string(),
            },
            region: "us-east-1".to_string(),
            domain: DomainSettings::default(),
            notification: NotificationSettings::default(),
            build: BuildSettings::default(),
        }
    }

    #[test]
    fn test_valid_config_passes() {
        let report = validate(&valid_config());
        assert!(report.is_valid());
        assert!(report.errors.is_empty());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_missing_required_fields_all_reported() {
        let report = validate(&DeploymentConfig::default());
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|e| e.contains("projectName")));
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("source.repositoryUrl"))
        );
        assert!(report.errors.iter().any(|e| e.contains("region")));
    }

    #[test]
    fn test_project_name_character_set() {
        let mut config = valid_config();
        config.project_name = "my app!".to_string();
        let report = validate(&config);
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|e| e.contains("projectName")));
    }

    #[test]
    fn test_bad_repository_url() {
        let mut config = valid_config();
        config.source.repository_url = "not-a-url".to_string();
        let report = validate(&config);
        assert!(!report.is_valid());
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("source.repositoryUrl"))
        );
    }

    #[test]
    fn test_non_github_url_rejected() {
        let mut config = valid_config();
        config.source.repository_url = "https://gitlab.com/acme/site".to_string();
        assert!(!validate(&config).is_valid());
    }

    #[test]
    fn test_unknown_region() {
        let mut config = valid_config();
        config.region = "us-moon-1".to_string();
        let report = validate(&config);
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|e| e.contains("region")));
    }

    #[test]
    fn test_custom_domain_requires_certificate() {
        let mut config = valid_config();
        config.domain.custom_domain = Some("example.com".to_string());
        let report = validate(&config);
        assert!(!report.is_valid());
        assert!(report.errors.iter().any(|e| e.contains("certificateArn")));
    }

    #[test]
    fn test_custom_domain_outside_certificate_region_warns() {
        let mut config = valid_config();
        config.region = "us-west-2".to_string();
        config.domain.custom_domain = Some("example.com".to_string());
        config.domain.certificate_arn =
            Some("arn:aws:acm:us-east-1:123456789012:certificate/abc".to_string());

        let report = validate(&config);
        assert!(report.is_valid());
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("us-east-1"));
    }

    #[test]
    fn test_custom_domain_in_certificate_region_no_warning() {
        let mut config = valid_config();
        config.domain.custom_domain = Some("example.com".to_string());
        config.domain.certificate_arn =
            Some("arn:aws:acm:us-east-1:123456789012:certificate/abc".to_string());

        let report = validate(&config);
        assert!(report.is_valid());
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_bad_notification_email() {
        let mut config = valid_config();
        config.notification.email = "not-an-email".to_string();
        let report = validate(&config);
        assert!(!report.is_valid());
        assert!(
            report
                .errors
                .iter()
                .any(|e| e.contains("notification.email"))
        );
    }

    #[test]
    fn test_violations_are_collected_not_short_circuited() {
        let mut config = valid_config();
        config.project_name = "bad name".to_string();
        config.source.repository_url = "nope".to_string();
        config.region = "us-moon-1".to_string();
        config.notification.email = "nope".to_string();

        let report = validate(&config);
        assert_eq!(report.errors.len(), 4);
    }

    #[test]
    fn test_into_result() {
        assert!(validate(&valid_config()).into_result().is_ok());

        let report = validate(&DeploymentConfig::default());
        let err = report.into_result().unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert!(err.to_string().contains("projectName"));
    }
}
