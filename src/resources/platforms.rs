use std::sync::Arc;

use tracing::debug;

use crate::Result;
use crate::authorized::AuthorizedRequestHandler;
use crate::models::{PlatformRequest, PlatformResponse};
use crate::transport::RequestContent;
use crate::urls::PLATFORM_URL_SUFFIX;

/// Platform listing and creation
pub struct PlatformsHandler {
    requests: Arc<AuthorizedRequestHandler>,
}

impl PlatformsHandler {
    /// Create a handler routing through `requests`
    pub fn new(requests: Arc<AuthorizedRequestHandler>) -> Self {
        Self { requests }
    }

    /// All platforms of the API key's owner
    pub async fn get_platforms(&self) -> Result<Vec<PlatformResponse>> {
        self.requests.get(PLATFORM_URL_SUFFIX).await
    }

    /// Create a platform
    pub async fn create_platform(&self, request: &PlatformRequest) -> Result<PlatformResponse> {
        debug!(name = %request.name, usage = request.platform_usage.as_str(), "Creating platform");
        let content = RequestContent::json(request)?;
        self.requests.post(PLATFORM_URL_SUFFIX, content).await
    }
}
