//! CDN distribution resource definition.

use serde_json::json;
use spaforge_core::DeploymentConfig;

use crate::bucket::SITE_BUCKET;
use crate::template::Resource;

/// Logical id of the CDN distribution.
pub const DISTRIBUTION: &str = "Distribution";

const ORIGIN_ID: &str = "site-origin";

/// CDN distribution fronting the site bucket's website endpoint.
///
/// 403/404 from the origin are rewritten to `/index.html` with a 200 so
/// deep links into client-side routes load the application shell. When a
/// custom domain is configured the distribution carries it as an alias
/// together with its viewer certificate; otherwise the platform default
/// certificate is used.
pub fn distribution(config: &DeploymentConfig) -> Resource {
    let mut properties = json!({
        "DistributionConfig": {
            "Enabled": true,
            "DefaultRootObject": "index.html",
            "Origins": [{
                "Id": ORIGIN_ID,
                "DomainName": format!(
                    "{}.s3-website-{}.amazonaws.com",
                    config.bucket_name(),
                    config.region
                ),
                "CustomOriginConfig": { "OriginProtocolPolicy": "http-only" },
            }],
            "DefaultCacheBehavior": {
                "TargetOriginId": ORIGIN_ID,
                "ViewerProtocolPolicy": "redirect-to-https",
                "ForwardedValues": { "QueryString": false },
            },
            "CustomErrorResponses": [
                { "ErrorCode": 403, "ResponseCode": 200, "ResponsePagePath": "/index.html" },
                { "ErrorCode": 404, "ResponseCode": 200, "ResponsePagePath": "/index.html" },
            ],
        },
    });

    if let Some(custom_domain) = &config.domain.custom_domain {
        properties["DistributionConfig"]["Aliases"] = json!([custom_domain]);
        if let Some(certificate_arn) = &config.domain.certificate_arn {
            properties["DistributionConfig"]["ViewerCertificate"] = json!({
                "AcmCertificateArn": certificate_arn,
                "SslSupportMethod": "sni-only",
                "MinimumProtocolVersion": "TLSv1.2_2021",
            });
        }
    }

    Resource {
        resource_type: "AWS::CloudFront::Distribution".to_string(),
        properties,
        depends_on: Some(vec![SITE_BUCKET.to_string()]),
    }
}
