//! CLI command implementations.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, bail};
use spaforge_core::DeploymentConfig;
use spaforge_synth::{BuildSpec, synthesize};
use tracing::debug;

const STARTER_CONFIG: &str = r#"# spaforge deployment configuration
projectName: my-app

source:
  repositoryUrl: https://github.com/acme/my-app
  # branch: main

region: us-east-1

# Serve the site from your own domain. The certificate must cover the
# domain and live in us-east-1.
# domain:
#   customDomain: example.com
#   certificateArn: arn:aws:acm:us-east-1:123456789012:certificate/abc

# Build and deploy notifications go to builds@spaforge.dev unless you set
# your own address.
# notification:
#   email: you@example.com

# build:
#   installCommand: npm ci
#   buildCommand: npm run build
#   outputDirectory: dist
"#;

/// Load a configuration and require it to be valid. Warnings go to stderr;
/// any rule violation aborts before synthesis.
fn load_checked(path: &Path) -> Result<DeploymentConfig> {
    let config = spaforge_config::load(path)?;
    let report = spaforge_config::validate(&config);
    for warning in &report.warnings {
        eprintln!("warning: {warning}");
    }
    report.into_result()?;
    Ok(config)
}

pub fn validate(path: &Path) -> Result<()> {
    let config = spaforge_config::load(path)?;
    let report = spaforge_config::validate(&config);

    for warning in &report.warnings {
        println!("warning: {warning}");
    }

    if report.is_valid() {
        println!("Configuration is valid");
        Ok(())
    } else {
        for error in &report.errors {
            println!("error: {error}");
        }
        std::process::exit(1);
    }
}

pub fn synth(path: &Path, output: &Path) -> Result<()> {
    let config = load_checked(path)?;

    fs::create_dir_all(output)
        .with_context(|| format!("failed to create output directory {}", output.display()))?;

    let template = synthesize(&config)?;
    let template_path = output.join("template.json");
    fs::write(&template_path, template.to_json()?)
        .with_context(|| format!("failed to write {}", template_path.display()))?;

    let buildspec_path = output.join("buildspec.yml");
    fs::write(&buildspec_path, BuildSpec::from_config(&config).to_yaml()?)
        .with_context(|| format!("failed to write {}", buildspec_path.display()))?;

    debug!(project = %config.project_name, "synthesized resource definitions");
    println!("Wrote {}", template_path.display());
    println!("Wrote {}", buildspec_path.display());
    Ok(())
}

pub fn buildspec(path: &Path) -> Result<()> {
    let config = load_checked(path)?;
    print!("{}", BuildSpec::from_config(&config).to_yaml()?);
    Ok(())
}

pub fn init(path: &Path, force: bool) -> Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists (use --force to overwrite)",
            path.display()
        );
    }

    fs::write(path, STARTER_CONFIG)
        .with_context(|| format!("failed to write {}", path.display()))?;
    println!("Wrote {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use tempfile::NamedTempFile;

    use super::*;

    #[test]
    fn test_starter_config_round_trips() {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(STARTER_CONFIG.as_bytes()).unwrap();

        let config = spaforge_config::load(file.path()).unwrap();
        let report = spaforge_config::validate(&config);
        assert!(report.is_valid(), "starter config invalid: {report}");
        assert!(report.warnings.is_empty());
        assert_eq!(config.project_name, "my-app");
    }

    #[test]
    fn test_init_refuses_to_overwrite() {
        let file = NamedTempFile::new().unwrap();
        let result = init(file.path(), false);
        assert!(result.is_err());

        init(file.path(), true).unwrap();
        let written = fs::read_to_string(file.path()).unwrap();
        assert_eq!(written, STARTER_CONFIG);
    }
}
