//! HTTP transport seam
//!
//! Every network call of the client goes through [`HttpTransport`]. The
//! production implementation is [`ReqwestTransport`]; tests inject recording
//! fakes instead.

mod http;

pub use self::http::ReqwestTransport;

use async_trait::async_trait;
use bytes::Bytes;
use reqwest::header::{HeaderMap, HeaderValue};
use reqwest::{Method, StatusCode};
use serde::Serialize;

use crate::Result;

/// Content type of JSON request bodies
pub const JSON_CONTENT_TYPE: &str = "application/json; charset=utf-8";

/// Content type of form-url-encoded request bodies
pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// Transport trait for API communication
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Perform a request and read the full response body.
    ///
    /// Only transport failures are errors; any HTTP status is returned as a
    /// response.
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse>;
}

/// An outgoing request
#[derive(Debug, Clone)]
pub struct HttpRequest {
    /// HTTP method
    pub method: Method,
    /// Absolute URL
    pub url: String,
    /// Request headers
    pub headers: HeaderMap,
    /// Optional body with its content type
    pub content: Option<RequestContent>,
}

impl HttpRequest {
    /// GET request without headers
    pub fn get(url: impl Into<String>) -> Self {
        Self {
            method: Method::GET,
            url: url.into(),
            headers: HeaderMap::new(),
            content: None,
        }
    }

    /// POST request with a body
    pub fn post(url: impl Into<String>, content: RequestContent) -> Self {
        Self {
            method: Method::POST,
            url: url.into(),
            headers: HeaderMap::new(),
            content: Some(content),
        }
    }
}

/// A request body together with its content type
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestContent {
    /// `Content-Type` header value
    pub content_type: HeaderValue,
    /// Encoded body
    pub body: Bytes,
}

impl RequestContent {
    /// Body with an explicit content type
    pub fn new(content_type: HeaderValue, body: impl Into<Bytes>) -> Self {
        Self {
            content_type,
            body: body.into(),
        }
    }

    /// Serialize a value as a JSON body
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<Self> {
        let body = serde_json::to_vec(value)?;
        Ok(Self::new(HeaderValue::from_static(JSON_CONTENT_TYPE), body))
    }

    /// Encode key/value pairs as a form-url-encoded body, keeping their order
    pub fn form<'a>(pairs: impl IntoIterator<Item = (&'a str, &'a str)>) -> Self {
        let body = url::form_urlencoded::Serializer::new(String::new())
            .extend_pairs(pairs)
            .finish();
        Self::new(HeaderValue::from_static(FORM_CONTENT_TYPE), body)
    }
}

/// A fully read response
#[derive(Debug, Clone)]
pub struct HttpResponse {
    /// Status code
    pub status: StatusCode,
    /// Response body
    pub body: Bytes,
}

impl HttpResponse {
    /// Response with a status and body
    pub fn new(status: StatusCode, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// True for 2xx statuses
    pub fn is_success(&self) -> bool {
        self.status.is_success()
    }
}
