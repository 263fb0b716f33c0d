//! Site bucket resource definitions.

use serde_json::json;
use spaforge_core::DeploymentConfig;

use crate::template::Resource;

/// Logical id of the site bucket.
pub const SITE_BUCKET: &str = "SiteBucket";

/// Logical id of the site bucket policy.
pub const SITE_BUCKET_POLICY: &str = "SiteBucketPolicy";

/// Storage bucket the built site is uploaded into, configured for static
/// website hosting. The error document is `index.html` so client-side
/// routes resolve.
pub fn bucket(config: &DeploymentConfig) -> Resource {
    Resource {
        resource_type: "AWS::S3::Bucket".to_string(),
        properties: json!({
            "BucketName": config.bucket_name(),
            "WebsiteConfiguration": {
                "IndexDocument": "index.html",
                "ErrorDocument": "index.html",
            },
            "PublicAccessBlockConfiguration": {
                "BlockPublicPolicy": false,
                "RestrictPublicBuckets": false,
            },
        }),
        depends_on: None,
    }
}

/// Public read policy for the site bucket objects.
pub fn bucket_policy(config: &DeploymentConfig) -> Resource {
    Resource {
        resource_type: "AWS::S3::BucketPolicy".to_string(),
        properties: json!({
            "Bucket": { "Ref": SITE_BUCKET },
            "PolicyDocument": {
                "Version": "2012-10-17",
                "Statement": [{
                    "Effect": "Allow",
                    "Principal": "*",
                    "Action": "s3:GetObject",
                    "Resource": format!("arn:aws:s3:::{}/*", config.bucket_name()),
                }],
            },
        }),
        depends_on: None,
    }
}
