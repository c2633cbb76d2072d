//! Error types for the Tikkie client

use std::io;
use std::path::PathBuf;

use reqwest::StatusCode;
use thiserror::Error;

use crate::models::ErrorResponse;

/// Result type alias for the Tikkie client
pub type Result<T> = std::result::Result<T, Error>;

/// Tikkie client errors
#[derive(Error, Debug)]
pub enum Error {
    /// A required argument was missing or empty
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The private key path does not reference an existing file
    #[error("Private key file not found: {}", .0.display())]
    FileNotFound(PathBuf),

    /// The private key file could not be parsed as a PEM-encoded RSA key
    #[error("Invalid RSA private key data: {0}")]
    InvalidKeyData(String),

    /// Signing the client assertion failed
    #[error("JWT signing failed: {0}")]
    Signing(#[from] jsonwebtoken::errors::Error),

    /// The API answered with a non-success status code
    #[error("Server status code: {status}{}", describe_errors(errors))]
    Upstream {
        /// HTTP status returned by the API
        status: StatusCode,
        /// Decoded `errors` array of the error envelope
        errors: Vec<ErrorResponse>,
    },

    /// The response body could not be decoded into the expected shape
    #[error("Malformed response body (HTTP {status}): {source}")]
    MalformedResponse {
        /// HTTP status of the undecodable response
        status: StatusCode,
        /// Underlying JSON error
        #[source]
        source: serde_json::Error,
    },

    /// Transport-level failure (DNS, connect, timeout, reset)
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON encoding error for request bodies
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl Error {
    /// Create an invalid-argument error
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument(message.into())
    }

    /// True when the API answered with a non-success status
    #[must_use]
    pub fn is_upstream(&self) -> bool {
        matches!(self, Self::Upstream { .. })
    }

    /// Decoded API errors, if this is an upstream error response
    #[must_use]
    pub fn upstream_errors(&self) -> Option<&[ErrorResponse]> {
        match self {
            Self::Upstream { errors, .. } => Some(errors),
            _ => None,
        }
    }

    /// HTTP status carried by the error, when one was received
    #[must_use]
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Self::Upstream { status, .. } | Self::MalformedResponse { status, .. } => Some(*status),
            Self::Transport(e) => e.status(),
            _ => None,
        }
    }
}

/// `: CODE: message; CODE: message` suffix, empty when the envelope had no entries
fn describe_errors(errors: &[ErrorResponse]) -> String {
    if errors.is_empty() {
        return String::new();
    }
    let entries: Vec<String> = errors.iter().map(ToString::to_string).collect();
    format!(": {}", entries.join("; "))
}
