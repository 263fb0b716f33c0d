//! Resource definition synthesis for spaforge.
//!
//! Turns a validated deployment configuration into the declarative
//! documents the external platforms consume:
//! - a resource template (site bucket, CDN distribution, build project,
//!   notification topic) for the provisioning platform
//! - a build specification for the build executor
//!
//! Everything here is a pure projection over the configuration; no network
//! or filesystem access.

pub mod bucket;
pub mod build_project;
pub mod buildspec;
pub mod distribution;
pub mod error;
pub mod notification;
pub mod template;

pub use buildspec::BuildSpec;
pub use error::{SynthError, SynthResult};
pub use template::{Output, Resource, Template};

use serde_json::json;
use spaforge_core::DeploymentConfig;

/// Assemble the full resource template for a configuration.
///
/// The caller is responsible for validating the configuration first; a
/// configuration that failed validation must never reach this point.
pub fn synthesize(config: &DeploymentConfig) -> SynthResult<Template> {
    let mut template = Template::new(format!(
        "Single page application deployment for {}",
        config.project_name
    ));

    template.add_resource(bucket::SITE_BUCKET, bucket::bucket(config));
    template.add_resource(bucket::SITE_BUCKET_POLICY, bucket::bucket_policy(config));
    template.add_resource(
        distribution::DISTRIBUTION,
        distribution::distribution(config),
    );
    template.add_resource(build_project::BUILD_ROLE, build_project::role(config));

    let buildspec_yaml = BuildSpec::from_config(config).to_yaml()?;
    template.add_resource(
        build_project::BUILD_PROJECT,
        build_project::project(config, &buildspec_yaml),
    );

    template.add_resource(notification::NOTIFICATION_TOPIC, notification::topic(config));
    template.add_resource(
        notification::NOTIFICATION_SUBSCRIPTION,
        notification::subscription(config),
    );

    template.add_output(
        "BucketName",
        "Name of the site bucket",
        json!(config.bucket_name()),
    );
    template.add_output(
        "DistributionDomain",
        "Domain name of the CDN distribution",
        json!({ "Fn::GetAtt": [distribution::DISTRIBUTION, "DomainName"] }),
    );
    let site_url = match &config.domain.custom_domain {
        Some(custom_domain) => json!(format!("https://{custom_domain}")),
        None => json!({
            "Fn::Join": ["", [
                "https://",
                { "Fn::GetAtt": [distribution::DISTRIBUTION, "DomainName"] },
            ]],
        }),
    };
    template.add_output("SiteUrl", "Public URL of the deployed site", site_url);
    template.add_output(
        "NotificationTopicArn",
        "ARN of the notification topic",
        json!({ "Ref": notification::NOTIFICATION_TOPIC }),
    );

    Ok(template)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config() -> DeploymentConfig {
        let mut config = DeploymentConfig {
            project_name: "my-app".to_string(),
            region: "us-east-1".to_string(),
            ..Default::default()
        };
        config.source.repository_url = "https://github.com/acme/site".to_string();
        config
    }

    #[test]
    fn test_synthesize_emits_expected_resource_set() {
        let template = synthesize(&config()).unwrap();
        let ids: Vec<&str> = template.resources.keys().map(String::as_str).collect();
        assert_eq!(
            ids,
            vec![
                "BuildProject",
                "BuildRole",
                "Distribution",
                "NotificationSubscription",
                "NotificationTopic",
                "SiteBucket",
                "SiteBucketPolicy",
            ]
        );
        assert_eq!(template.outputs.len(), 4);
    }

    #[test]
    fn test_inlined_buildspec_matches_generator() {
        let config = config();
        let template = synthesize(&config).unwrap();
        let expected = BuildSpec::from_config(&config).to_yaml().unwrap();
        assert_eq!(
            template.resources["BuildProject"].properties["Source"]["BuildSpec"],
            serde_json::json!(expected)
        );
    }

    #[test]
    fn test_site_url_prefers_custom_domain() {
        let mut config = config();
        let template = synthesize(&config).unwrap();
        assert!(template.outputs["SiteUrl"].value.is_object());

        config.domain.custom_domain = Some("example.com".to_string());
        config.domain.certificate_arn =
            Some("arn:aws:acm:us-east-1:123456789012:certificate/abc".to_string());
        let template = synthesize(&config).unwrap();
        assert_eq!(
            template.outputs["SiteUrl"].value,
            serde_json::json!("https://example.com")
        );
    }

    #[test]
    fn test_synthesize_is_deterministic() {
        let config = config();
        let first = synthesize(&config).unwrap().to_json().unwrap();
        let second = synthesize(&config).unwrap().to_json().unwrap();
        assert_eq!(first, second);
    }
}
