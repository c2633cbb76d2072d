//! Top-level client
//!
//! [`TikkieClient`] wires the transport, authentication and resource handlers
//! together and exposes one method per API operation.

use std::sync::Arc;
use std::time::Duration;

use crate::Result;
use crate::auth::{AuthenticationHandler, Authenticator, AuthorizationToken};
use crate::authorized::AuthorizedRequestHandler;
use crate::config::Configuration;
use crate::models::{
    PaymentRequest, PaymentResponse, PlatformRequest, PlatformResponse, SinglePaymentRequest,
    SinglePaymentRequestResponse, UserPaymentRequest, UserPaymentResponse, UserRequest,
    UserResponse,
};
use crate::resources::{PaymentRequestsHandler, PlatformsHandler, UsersHandler};
use crate::transport::{HttpTransport, ReqwestTransport};

/// Client of the Tikkie payment request API
pub struct TikkieClient {
    config: Arc<Configuration>,
    authentication: Arc<AuthenticationHandler>,
    platforms: PlatformsHandler,
    users: UsersHandler,
    payment_requests: PaymentRequestsHandler,
}

impl TikkieClient {
    /// Create a client using the default reqwest transport
    pub fn new(config: Configuration) -> Result<Self> {
        Self::with_timeout(config, None)
    }

    /// Create a client whose requests time out after `timeout`
    pub fn with_timeout(config: Configuration, timeout: Option<Duration>) -> Result<Self> {
        let transport = ReqwestTransport::with_timeout(timeout)?;
        Ok(Self::with_transport(config, Arc::new(transport)))
    }

    /// Create a client on top of a custom transport
    pub fn with_transport(config: Configuration, transport: Arc<dyn HttpTransport>) -> Self {
        let config = Arc::new(config);
        let authentication = Arc::new(AuthenticationHandler::new(
            Arc::clone(&config),
            Arc::clone(&transport),
        ));
        let requests = Arc::new(AuthorizedRequestHandler::new(
            Arc::clone(&config),
            Arc::clone(&authentication) as Arc<dyn Authenticator>,
            transport,
        ));

        Self {
            config,
            authentication,
            platforms: PlatformsHandler::new(Arc::clone(&requests)),
            users: UsersHandler::new(Arc::clone(&requests)),
            payment_requests: PaymentRequestsHandler::new(requests),
        }
    }

    /// Configuration the client was built with
    pub fn configuration(&self) -> &Configuration {
        &self.config
    }

    /// Snapshot of the current authorization token
    pub fn authorization_token(&self) -> AuthorizationToken {
        self.authentication.authorization_token()
    }

    /// List the platforms of the API key's owner
    pub async fn get_platforms(&self) -> Result<Vec<PlatformResponse>> {
        self.platforms.get_platforms().await
    }

    /// Create a platform
    pub async fn create_platform(&self, request: &PlatformRequest) -> Result<PlatformResponse> {
        self.platforms.create_platform(request).await
    }

    /// List the users of a platform
    pub async fn get_users(&self, platform_token: &str) -> Result<Vec<UserResponse>> {
        self.users.get_users(platform_token).await
    }

    /// Enroll a user under a platform
    pub async fn create_user(&self, request: &UserRequest) -> Result<UserResponse> {
        self.users.create_user(request).await
    }

    /// Create a payment request
    pub async fn create_payment_request(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        self.payment_requests.create_payment_request(request).await
    }

    /// List the payment requests of a user
    pub async fn get_user_payment_requests(
        &self,
        request: &UserPaymentRequest,
    ) -> Result<UserPaymentResponse> {
        self.payment_requests.get_user_payment_requests(request).await
    }

    /// Fetch a single payment request
    pub async fn get_payment_request(
        &self,
        request: &SinglePaymentRequest,
    ) -> Result<SinglePaymentRequestResponse> {
        self.payment_requests.get_payment_request(request).await
    }
}
