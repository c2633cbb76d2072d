//! Authorized request pipeline tests

mod common;

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use pretty_assertions::assert_eq;
use reqwest::header::AUTHORIZATION;
use reqwest::{Method, StatusCode};
use serde_json::{Value, json};

use common::{API_KEY, MockTransport, sandbox_config, token_body};
use tikkie_client::auth::{AuthenticationHandler, Authenticator, AuthorizationToken};
use tikkie_client::authorized::AuthorizedRequestHandler;
use tikkie_client::models::ErrorResponse;
use tikkie_client::transport::{JSON_CONTENT_TYPE, RequestContent};
use tikkie_client::{Error, Result, urls};

/// Authenticator that counts gate calls and hands out a fixed token
struct CountingAuthenticator {
    calls: AtomicUsize,
    fail: bool,
}

impl CountingAuthenticator {
    fn new() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: false,
        }
    }

    fn failing() -> Self {
        Self {
            calls: AtomicUsize::new(0),
            fail: true,
        }
    }

    fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Authenticator for CountingAuthenticator {
    async fn authenticate_if_expired(&self) -> Result<()> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        if self.fail {
            return Err(Error::Upstream {
                status: StatusCode::UNAUTHORIZED,
                errors: vec![ErrorResponse {
                    code: Some("AUTH".to_string()),
                    ..Default::default()
                }],
            });
        }
        Ok(())
    }

    fn authorization_token(&self) -> AuthorizationToken {
        AuthorizationToken {
            access_token: "abc".to_string(),
            token_expiration_date: Some(Utc::now() + Duration::minutes(5)),
            scope: "tikkie".to_string(),
            token_type: "Bearer".to_string(),
        }
    }
}

fn handler(
    authenticator: Arc<CountingAuthenticator>,
    transport: Arc<MockTransport>,
) -> AuthorizedRequestHandler {
    AuthorizedRequestHandler::new(Arc::new(sandbox_config()), authenticator, transport)
}

// ============================================================================
// Headers and gate
// ============================================================================

#[tokio::test]
async fn get_attaches_both_headers_after_one_gate_call() {
    let authenticator = Arc::new(CountingAuthenticator::new());
    let transport = Arc::new(MockTransport::new().respond(StatusCode::OK, "[]"));
    let handler = handler(authenticator.clone(), transport.clone());

    let platforms: Vec<Value> = handler.get(urls::PLATFORM_URL_SUFFIX).await.unwrap();

    assert!(platforms.is_empty());
    assert_eq!(authenticator.calls(), 1);

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::GET);
    assert_eq!(request.url, "https://api-sandbox.abnamro.com/v1/tikkie/platforms");
    assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
    assert_eq!(request.headers.get("api-key").unwrap(), API_KEY);
    assert_eq!(request.headers.len(), 2);
    assert!(request.content.is_none());
}

#[tokio::test]
async fn post_forwards_content_untouched() {
    let authenticator = Arc::new(CountingAuthenticator::new());
    let transport = Arc::new(MockTransport::new().respond(StatusCode::CREATED, r#"{"ok":true}"#));
    let handler = handler(authenticator.clone(), transport.clone());
    let content = RequestContent::json(&json!({"name": "Shop"})).unwrap();

    let body: Value = handler
        .post(urls::PLATFORM_URL_SUFFIX, content.clone())
        .await
        .unwrap();

    assert_eq!(body, json!({"ok": true}));
    assert_eq!(authenticator.calls(), 1);

    let request = &transport.requests()[0];
    assert_eq!(request.method, Method::POST);
    assert_eq!(request.content.as_ref(), Some(&content));
    assert_eq!(request.content.as_ref().unwrap().content_type, JSON_CONTENT_TYPE);
    assert_eq!(request.headers.get(AUTHORIZATION).unwrap(), "Bearer abc");
}

#[tokio::test]
async fn every_call_runs_the_gate() {
    let authenticator = Arc::new(CountingAuthenticator::new());
    let transport = Arc::new(
        MockTransport::new()
            .respond(StatusCode::OK, "[]")
            .respond(StatusCode::OK, "[]")
            .respond(StatusCode::OK, "[]"),
    );
    let handler = handler(authenticator.clone(), transport);

    for _ in 0..3 {
        let _: Vec<Value> = handler.get(urls::PLATFORM_URL_SUFFIX).await.unwrap();
    }

    assert_eq!(authenticator.calls(), 3);
}

// ============================================================================
// Failures
// ============================================================================

#[tokio::test]
async fn error_envelope_surfaces_as_upstream_error() {
    // GIVEN: the resource answers 400 with one error
    let authenticator = Arc::new(CountingAuthenticator::new());
    let transport = Arc::new(
        MockTransport::new().respond(StatusCode::BAD_REQUEST, r#"{"errors":[{"code":"X","message":"bad"}]}"#),
    );
    let handler = handler(authenticator, transport);

    // WHEN
    let err = handler
        .get::<Vec<Value>>(urls::PLATFORM_URL_SUFFIX)
        .await
        .unwrap_err();

    // THEN
    assert_eq!(err.to_string(), "Server status code: 400 Bad Request: X: bad");
    let errors = err.upstream_errors().unwrap();
    assert_eq!(errors.len(), 1);
    assert_eq!(errors[0].code.as_deref(), Some("X"));
    assert_eq!(errors[0].message.as_deref(), Some("bad"));
}

#[tokio::test]
async fn authentication_failure_aborts_before_the_request() {
    let authenticator = Arc::new(CountingAuthenticator::failing());
    let transport = Arc::new(MockTransport::new());
    let handler = handler(authenticator.clone(), transport.clone());

    let err = handler
        .get::<Vec<Value>>(urls::PLATFORM_URL_SUFFIX)
        .await
        .unwrap_err();

    assert_eq!(err.upstream_errors().unwrap()[0].code.as_deref(), Some("AUTH"));
    assert_eq!(authenticator.calls(), 1);
    assert_eq!(transport.call_count(), 0);
}

#[tokio::test]
async fn mismatched_success_body_is_malformed() {
    let authenticator = Arc::new(CountingAuthenticator::new());
    let transport = Arc::new(MockTransport::new().respond(StatusCode::OK, r#"{"not":"a list"}"#));
    let handler = handler(authenticator, transport);

    let err = handler
        .get::<Vec<Value>>(urls::PLATFORM_URL_SUFFIX)
        .await
        .unwrap_err();

    assert!(matches!(err, Error::MalformedResponse { status, .. } if status == StatusCode::OK));
}

// ============================================================================
// Full pipeline
// ============================================================================

#[tokio::test]
async fn real_authenticator_fetches_token_then_calls_resource() {
    let config = Arc::new(sandbox_config());
    let transport = Arc::new(
        MockTransport::new()
            .respond(StatusCode::OK, token_body("T", 60))
            .respond(StatusCode::OK, "[]"),
    );
    let authentication = Arc::new(AuthenticationHandler::new(config.clone(), transport.clone()));
    let handler = AuthorizedRequestHandler::new(config, authentication, transport.clone());

    let _: Vec<Value> = handler.get(urls::PLATFORM_URL_SUFFIX).await.unwrap();

    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert!(requests[0].url.ends_with(urls::AUTHENTICATION_URL_SUFFIX));
    assert!(requests[1].url.ends_with(urls::PLATFORM_URL_SUFFIX));
    assert_eq!(requests[1].headers.get(AUTHORIZATION).unwrap(), "Bearer T");
}
