use std::sync::Arc;

use tracing::debug;

use super::require_token;
use crate::Result;
use crate::authorized::AuthorizedRequestHandler;
use crate::models::{UserRequest, UserResponse};
use crate::transport::RequestContent;
use crate::urls::user_url_suffix;

/// User listing and enrollment
pub struct UsersHandler {
    requests: Arc<AuthorizedRequestHandler>,
}

impl UsersHandler {
    /// Create a handler routing through `requests`
    pub fn new(requests: Arc<AuthorizedRequestHandler>) -> Self {
        Self { requests }
    }

    /// Users enrolled under a platform
    pub async fn get_users(&self, platform_token: &str) -> Result<Vec<UserResponse>> {
        let platform_token = require_token("platform token", platform_token)?;
        self.requests.get(&user_url_suffix(platform_token)).await
    }

    /// Enroll a user under `request.platform_token`
    pub async fn create_user(&self, request: &UserRequest) -> Result<UserResponse> {
        let platform_token = require_token("platform token", &request.platform_token)?;
        debug!(platform_token, "Creating user");
        let content = RequestContent::json(request)?;
        self.requests.post(&user_url_suffix(platform_token), content).await
    }
}
