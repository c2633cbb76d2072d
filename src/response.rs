//! Uniform decoding of API responses

use serde::de::DeserializeOwned;
use tracing::warn;

use crate::models::ErrorResponses;
use crate::transport::HttpResponse;
use crate::{Error, Result};

/// Decode a response into `T`, or into an [`Error::Upstream`] for non-2xx.
///
/// A body that does not decode, either as `T` on success or as the
/// `{ "errors": [...] }` envelope on failure, is an
/// [`Error::MalformedResponse`].
pub fn parse_response<T: DeserializeOwned>(response: &HttpResponse) -> Result<T> {
    let status = response.status;

    if response.is_success() {
        return serde_json::from_slice(&response.body)
            .map_err(|source| Error::MalformedResponse { status, source });
    }

    let envelope: ErrorResponses = serde_json::from_slice(&response.body)
        .map_err(|source| Error::MalformedResponse { status, source })?;

    warn!(
        status = %status,
        errors = envelope.errors.len(),
        first_code = envelope.errors.first().and_then(|e| e.code.as_deref()).unwrap_or(""),
        "API returned an error response"
    );

    Err(Error::Upstream {
        status,
        errors: envelope.errors,
    })
}
