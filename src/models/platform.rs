use serde::{Deserialize, Serialize};

use super::enums::{PlatformStatus, PlatformUsage};

/// Body of a platform creation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformRequest {
    /// Platform name shown to payers
    pub name: String,
    /// Contact phone number
    pub phone_number: String,
    /// Contact email address
    pub email: String,
    /// Callback URL for payment notifications
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notification_url: Option<String>,
    /// Intended usage
    pub platform_usage: PlatformUsage,
}

/// A platform as returned by the API
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlatformResponse {
    /// Platform name
    pub name: String,
    /// Token identifying the platform in later calls
    pub platform_token: String,
    /// Contact phone number
    #[serde(default)]
    pub phone_number: Option<String>,
    /// Contact email address
    #[serde(default)]
    pub email: Option<String>,
    /// Callback URL for payment notifications
    #[serde(default)]
    pub notification_url: Option<String>,
    /// Platform status
    pub status: PlatformStatus,
    /// Intended usage
    pub platform_usage: PlatformUsage,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_serializes_camel_case_without_empty_notification_url() {
        let request = PlatformRequest {
            name: "Test platform".to_string(),
            phone_number: "0612345678".to_string(),
            email: "client@platform.com".to_string(),
            notification_url: None,
            platform_usage: PlatformUsage::PaymentRequestForMyself,
        };

        let json = serde_json::to_value(&request).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "name": "Test platform",
                "phoneNumber": "0612345678",
                "email": "client@platform.com",
                "platformUsage": "PAYMENT_REQUEST_FOR_MYSELF"
            })
        );
    }

    #[test]
    fn response_decodes_status_and_usage() {
        let body = r#"{"name":"p","platformToken":"pt1","phoneNumber":"06","email":"a@b.c","status":"ACTIVE","platformUsage":"PAYMENT_REQUEST_FOR_OTHERS"}"#;

        let platform: PlatformResponse = serde_json::from_str(body).unwrap();

        assert_eq!(platform.platform_token, "pt1");
        assert_eq!(platform.status, PlatformStatus::Active);
        assert_eq!(platform.platform_usage, PlatformUsage::PaymentRequestForOthers);
        assert!(platform.notification_url.is_none());
    }
}
