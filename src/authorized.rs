//! Authorized request pipeline
//!
//! Every call makes sure a valid token is present, attaches the
//! `Authorization` and `API-Key` headers, sends the request and decodes the
//! response.

use std::sync::Arc;

use reqwest::header::{AUTHORIZATION, HeaderValue};
use serde::de::DeserializeOwned;
use tracing::debug;

use crate::auth::{Authenticator, api_key_header};
use crate::config::Configuration;
use crate::response::parse_response;
use crate::transport::{HttpRequest, HttpTransport, RequestContent};
use crate::{Error, Result};

/// Sends authenticated requests against the configured environment
pub struct AuthorizedRequestHandler {
    config: Arc<Configuration>,
    authenticator: Arc<dyn Authenticator>,
    transport: Arc<dyn HttpTransport>,
}

impl AuthorizedRequestHandler {
    /// Create a handler that authenticates through `authenticator`
    pub fn new(
        config: Arc<Configuration>,
        authenticator: Arc<dyn Authenticator>,
        transport: Arc<dyn HttpTransport>,
    ) -> Self {
        Self {
            config,
            authenticator,
            transport,
        }
    }

    /// GET `{api base}{url_suffix}` and decode the body as `T`
    pub async fn get<T: DeserializeOwned>(&self, url_suffix: &str) -> Result<T> {
        let request = HttpRequest::get(self.url(url_suffix));
        self.send(request).await
    }

    /// POST `content` to `{api base}{url_suffix}` and decode the body as `T`
    pub async fn post<T: DeserializeOwned>(&self, url_suffix: &str, content: RequestContent) -> Result<T> {
        let request = HttpRequest::post(self.url(url_suffix), content);
        self.send(request).await
    }

    fn url(&self, url_suffix: &str) -> String {
        format!("{}{}", self.config.api_base_url(), url_suffix)
    }

    async fn send<T: DeserializeOwned>(&self, mut request: HttpRequest) -> Result<T> {
        self.authenticator.authenticate_if_expired().await?;

        let token = self.authenticator.authorization_token();
        let mut authorization = HeaderValue::from_str(&token.authorization_value())
            .map_err(|_| Error::invalid_argument("access token is not a valid header value"))?;
        authorization.set_sensitive(true);
        request.headers.insert(AUTHORIZATION, authorization);

        let (name, value) = api_key_header(self.config.api_key())?;
        request.headers.insert(name, value);

        debug!(method = %request.method, url = %request.url, "Authorized request");
        let response = self.transport.send(request).await?;
        parse_response(&response)
    }
}
