//! Notification topic resource definitions.

use serde_json::json;
use spaforge_core::DeploymentConfig;

use crate::template::Resource;

/// Logical id of the notification topic.
pub const NOTIFICATION_TOPIC: &str = "NotificationTopic";

/// Logical id of the email subscription.
pub const NOTIFICATION_SUBSCRIPTION: &str = "NotificationSubscription";

/// Topic that receives build and deploy notifications.
pub fn topic(config: &DeploymentConfig) -> Resource {
    Resource {
        resource_type: "AWS::SNS::Topic".to_string(),
        properties: json!({
            "TopicName": config.topic_name(),
        }),
        depends_on: None,
    }
}

/// Email subscription for the configured address. The address is always
/// present after loading; when the user left it out it is the fallback
/// maintainer address. Delivery confirmation is handled by the transport.
pub fn subscription(config: &DeploymentConfig) -> Resource {
    Resource {
        resource_type: "AWS::SNS::Subscription".to_string(),
        properties: json!({
            "TopicArn": { "Ref": NOTIFICATION_TOPIC },
            "Protocol": "email",
            "Endpoint": config.notification.email,
        }),
        depends_on: None,
    }
}
