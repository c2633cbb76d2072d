//! Tikkie payment request API client
//!
//! Async client for the ABN AMRO Tikkie payment request API.
//!
//! # Features
//!
//! - **Client-credentials auth**: RS256-signed JWT assertions exchanged for bearer tokens
//! - **Token cache**: tokens are reused until expiry and refreshed single-flight
//! - **Typed resources**: platforms, users and payment requests
//! - **Structured errors**: upstream error envelopes decoded into [`models::ErrorResponse`]
//! - **Pluggable transport**: any [`transport::HttpTransport`] can replace the reqwest default
//!
//! # Example
//!
//! ```no_run
//! use tikkie_client::{TikkieClient, config::Configuration};
//!
//! # async fn run() -> tikkie_client::Result<()> {
//! let config = Configuration::new("my-api-key", "private_rsa.pem", true)?;
//! let client = TikkieClient::new(config)?;
//! let platforms = client.get_platforms().await?;
//! # let _ = platforms;
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

pub mod auth;
pub mod authorized;
pub mod cli;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod resources;
pub mod response;
pub mod transport;
pub mod urls;

pub use client::TikkieClient;
pub use error::{Error, Result};

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Setup tracing/logging
///
/// Logs go to stderr so command output on stdout stays machine-readable.
pub fn setup_tracing(level: &str, format: Option<&str>) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let subscriber = tracing_subscriber::registry().with(filter);

    match format {
        Some("json") => {
            subscriber
                .with(fmt::layer().json().with_writer(std::io::stderr))
                .try_init()
                .map_err(|e| Error::Config(e.to_string()))?;
        }
        _ => {
            subscriber
                .with(fmt::layer().with_writer(std::io::stderr))
                .try_init()
                .map_err(|e| Error::Config(e.to_string()))?;
        }
    }

    Ok(())
}
