//! Authentication handler
//!
//! Owns the shared [`AuthorizationToken`] and refreshes it with the
//! client-credentials JWT-bearer grant whenever it has expired.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use parking_lot::RwLock;
use tokio::sync::Mutex;
use tracing::{debug, info};

use super::api_key_header;
use super::jwt::sign_client_assertion;
use super::token::{AuthenticationResponse, AuthorizationToken};
use crate::Result;
use crate::config::Configuration;
use crate::response::parse_response;
use crate::transport::{HttpRequest, HttpTransport, RequestContent};
use crate::urls::AUTHENTICATION_URL_SUFFIX;

/// `client_assertion_type` of the JWT-bearer grant
pub const CLIENT_ASSERTION_TYPE: &str = "urn:ietf:params:oauth:client-assertion-type:jwt-bearer";

/// `grant_type` of the authentication request
pub const GRANT_TYPE: &str = "client_credentials";

/// `scope` requested from the provider
pub const SCOPE: &str = "tikkie";

/// Source of a valid authorization token for authorized calls
#[async_trait]
pub trait Authenticator: Send + Sync {
    /// Authenticate when the current token is absent or expired; no-op otherwise
    async fn authenticate_if_expired(&self) -> Result<()>;

    /// Snapshot of the current token
    fn authorization_token(&self) -> AuthorizationToken;
}

/// Authenticates against the API and caches the resulting token
pub struct AuthenticationHandler {
    config: Arc<Configuration>,
    transport: Arc<dyn HttpTransport>,
    token: Arc<RwLock<AuthorizationToken>>,
    /// Serializes re-authentication so concurrent callers share one request
    refresh: Mutex<()>,
}

impl AuthenticationHandler {
    /// Create a handler with no token yet
    pub fn new(config: Arc<Configuration>, transport: Arc<dyn HttpTransport>) -> Self {
        Self::with_token(config, transport, AuthorizationToken::default())
    }

    /// Create a handler starting from an existing token
    pub fn with_token(
        config: Arc<Configuration>,
        transport: Arc<dyn HttpTransport>,
        token: AuthorizationToken,
    ) -> Self {
        Self {
            config,
            transport,
            token: Arc::new(RwLock::new(token)),
            refresh: Mutex::new(()),
        }
    }

    /// Shared handle on the token, for read access by other components
    pub fn shared_token(&self) -> Arc<RwLock<AuthorizationToken>> {
        Arc::clone(&self.token)
    }

    fn is_token_expired(&self) -> bool {
        self.token.read().is_expired()
    }

    /// POST the signed client assertion to the token endpoint
    async fn authenticate(&self) -> Result<AuthenticationResponse> {
        let assertion = sign_client_assertion(&self.config, Utc::now())?;
        let content = RequestContent::form([
            ("client_assertion", assertion.as_str()),
            ("client_assertion_type", CLIENT_ASSERTION_TYPE),
            ("grant_type", GRANT_TYPE),
            ("scope", SCOPE),
        ]);

        let url = format!("{}{}", self.config.api_base_url(), AUTHENTICATION_URL_SUFFIX);
        let mut request = HttpRequest::post(url, content);
        let (name, value) = api_key_header(self.config.api_key())?;
        request.headers.insert(name, value);

        let response = self.transport.send(request).await?;
        parse_response(&response)
    }
}

#[async_trait]
impl Authenticator for AuthenticationHandler {
    async fn authenticate_if_expired(&self) -> Result<()> {
        if !self.is_token_expired() {
            return Ok(());
        }

        let _guard = self.refresh.lock().await;
        if !self.is_token_expired() {
            debug!("Token was refreshed by a concurrent caller");
            return Ok(());
        }

        debug!(environment = ?self.config.environment(), "Token expired, authenticating");
        let response = self.authenticate().await?;
        let expires_in = response.expires_in;

        self.token.write().update_from(response, Utc::now());
        info!(expires_in, "Authenticated with the Tikkie API");
        Ok(())
    }

    fn authorization_token(&self) -> AuthorizationToken {
        self.token.read().clone()
    }
}
