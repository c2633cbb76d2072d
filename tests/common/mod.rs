//! Shared fixtures for integration tests

#![allow(dead_code)]

use std::collections::VecDeque;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use reqwest::StatusCode;
use tikkie_client::Result;
use tikkie_client::config::Configuration;
use tikkie_client::transport::{HttpRequest, HttpResponse, HttpTransport};

pub const PRIVATE_KEY_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/rsa_private_key.pem");
pub const PUBLIC_KEY: &[u8] = include_bytes!("../fixtures/rsa_public_key.pem");
pub const EC_KEY_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/ec_private_key.pem");
pub const CORRUPTED_KEY_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/corrupted_key.pem");

pub const API_KEY: &str = "test-api-key";

/// Sandbox configuration with the fixture key
pub fn sandbox_config() -> Configuration {
    Configuration::new(API_KEY, PRIVATE_KEY_PATH, true).unwrap()
}

/// Production configuration with the fixture key
pub fn production_config() -> Configuration {
    Configuration::new(API_KEY, PRIVATE_KEY_PATH, false).unwrap()
}

/// Body of a successful authentication
pub fn token_body(access_token: &str, expires_in: i64) -> String {
    format!(
        r#"{{"access_token":"{access_token}","expires_in":{expires_in},"scope":"tikkie","token_type":"Bearer"}}"#
    )
}

/// Transport that records requests and replays queued responses
#[derive(Default)]
pub struct MockTransport {
    responses: Mutex<VecDeque<HttpResponse>>,
    requests: Mutex<Vec<HttpRequest>>,
    delay: Option<Duration>,
}

impl MockTransport {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sleep before answering, to widen race windows
    pub fn with_delay(mut self, delay: Duration) -> Self {
        self.delay = Some(delay);
        self
    }

    pub fn respond(self, status: StatusCode, body: impl Into<String>) -> Self {
        self.responses
            .lock()
            .push_back(HttpResponse::new(status, body.into()));
        self
    }

    pub fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().clone()
    }

    pub fn call_count(&self) -> usize {
        self.requests.lock().len()
    }
}

#[async_trait]
impl HttpTransport for MockTransport {
    async fn send(&self, request: HttpRequest) -> Result<HttpResponse> {
        self.requests.lock().push(request);
        if let Some(delay) = self.delay {
            tokio::time::sleep(delay).await;
        }
        Ok(self.responses.lock().pop_front().unwrap_or_else(|| {
            HttpResponse::new(
                StatusCode::INTERNAL_SERVER_ERROR,
                r#"{"errors":[{"code":"NO_RESPONSE_QUEUED"}]}"#,
            )
        }))
    }
}
