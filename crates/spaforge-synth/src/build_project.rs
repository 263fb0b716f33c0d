//! Build pipeline resource definitions.

use serde_json::json;
use spaforge_core::DeploymentConfig;

use crate::template::Resource;

/// Logical id of the build service role.
pub const BUILD_ROLE: &str = "BuildRole";

/// Logical id of the build project.
pub const BUILD_PROJECT: &str = "BuildProject";

/// Service role the build project assumes. Scoped to writing the site
/// bucket and its own log streams.
pub fn role(config: &DeploymentConfig) -> Resource {
    Resource {
        resource_type: "AWS::IAM::Role".to_string(),
        properties: json!({
            "AssumeRolePolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": { "Service": "codebuild.amazonaws.com" },
                    "Action": "sts:AssumeRole",
                }],
            },
            "Policies": [{
                "PolicyName": format!("{}-build-policy", config.project_name),
                "PolicyDocument": {
                    "Version": "2012-10-17",
                    "Statement": [
                        {
                            "Effect": "Allow",
                            "Action": ["s3:PutObject", "s3:DeleteObject", "s3:ListBucket"],
                            "Resource": [
                                format!("arn:aws:s3:::{}", config.bucket_name()),
                                format!("arn:aws:s3:::{}/*", config.bucket_name()),
                            ],
                        },
                        {
                            "Effect": "Allow",
                            "Action": [
                                "logs:CreateLogGroup",
                                "logs:CreateLogStream",
                                "logs:PutLogEvents",
                            ],
                            "Resource": "*",
                        },
                    ],
                },
            }],
        }),
        depends_on: None,
    }
}

/// Build project wired to the source repository, with the generated build
/// specification inlined and a webhook on pushes to the configured branch.
/// The OAuth grant connecting the platform to the repository host is set up
/// out of band.
pub fn project(config: &DeploymentConfig, buildspec_yaml: &str) -> Resource {
    Resource {
        resource_type: "AWS::CodeBuild::Project".to_string(),
        properties: json!({
            "Name": config.build_project_name(),
            "ServiceRole": { "Fn::GetAtt": [BUILD_ROLE, "Arn"] },
            "Source": {
                "Type": "GITHUB",
                "Location": config.source.repository_url,
                "BuildSpec": buildspec_yaml,
            },
            "SourceVersion": config.source.branch,
            "Artifacts": { "Type": "NO_ARTIFACTS" },
            "Environment": {
                "Type": "LINUX_CONTAINER",
                "ComputeType": "BUILD_GENERAL1_SMALL",
                "Image": "aws/codebuild/standard:7.0",
            },
            "Triggers": {
                "Webhook": true,
                "FilterGroups": [[
                    { "Type": "EVENT", "Pattern": "PUSH" },
                    {
                        "Type": "HEAD_REF",
                        "Pattern": format!("^refs/heads/{}$", config.source.branch),
                    },
                ]],
            },
        }),
        depends_on: None,
    }
}
