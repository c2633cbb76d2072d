//! Base URLs and URL suffixes of the Tikkie API
//!
//! Suffixes are appended to the environment's API base URL. Tokens are
//! inserted verbatim; they are opaque alphanumeric identifiers issued by the
//! API itself.

/// API base URL of the sandbox environment
pub const SANDBOX_API_BASE_URL: &str = "https://api-sandbox.abnamro.com/v1";

/// API base URL of the production environment
pub const PRODUCTION_API_BASE_URL: &str = "https://api.abnamro.com/v1";

/// OAuth token URL (JWT audience) of the sandbox environment
pub const SANDBOX_OAUTH_TOKEN_URL: &str = "https://auth-sandbox.abnamro.com/oauth/token";

/// OAuth token URL (JWT audience) of the production environment
pub const PRODUCTION_OAUTH_TOKEN_URL: &str = "https://auth.abnamro.com/oauth/token";

/// Authentication endpoint
pub const AUTHENTICATION_URL_SUFFIX: &str = "/oauth/token";

/// Platform collection
pub const PLATFORM_URL_SUFFIX: &str = "/tikkie/platforms";

/// Users of a platform
#[must_use]
pub fn user_url_suffix(platform_token: &str) -> String {
    format!("/tikkie/platforms/{platform_token}/users")
}

/// Payment request creation on a user's bank account
#[must_use]
pub fn payment_creation_url_suffix(
    platform_token: &str,
    user_token: &str,
    bank_account_token: &str,
) -> String {
    format!(
        "/tikkie/platforms/{platform_token}/users/{user_token}/bankaccounts/{bank_account_token}/paymentrequests"
    )
}

/// Payment requests of a user
#[must_use]
pub fn user_payments_url_suffix(platform_token: &str, user_token: &str) -> String {
    format!("/tikkie/platforms/{platform_token}/users/{user_token}/paymentrequests")
}

/// A single payment request
#[must_use]
pub fn payment_url_suffix(platform_token: &str, user_token: &str, payment_request_token: &str) -> String {
    format!(
        "/tikkie/platforms/{platform_token}/users/{user_token}/paymentrequests/{payment_request_token}"
    )
}
