//! Client-credentials authentication
//!
//! The client proves its identity with an RS256-signed JWT assertion and
//! receives a bearer token, cached until it expires.

mod handler;
mod jwt;
mod key;
mod token;

pub use handler::{
    AuthenticationHandler, Authenticator, CLIENT_ASSERTION_TYPE, GRANT_TYPE, SCOPE,
};
pub use jwt::{ClientAssertionClaims, sign_client_assertion};
pub use key::RsaSigningKey;
pub use token::{AuthenticationResponse, AuthorizationToken};

use reqwest::header::{HeaderName, HeaderValue};

use crate::{Error, Result};

/// Header carrying the API key on every request
pub const API_KEY_HEADER: &str = "api-key";

/// `API-Key` header for the given key, marked sensitive
pub(crate) fn api_key_header(api_key: &str) -> Result<(HeaderName, HeaderValue)> {
    let mut value = HeaderValue::from_str(api_key)
        .map_err(|_| Error::invalid_argument("api key contains characters not allowed in a header"))?;
    value.set_sensitive(true);
    Ok((HeaderName::from_static(API_KEY_HEADER), value))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn api_key_header_is_sensitive() {
        let (name, value) = api_key_header("abc123").unwrap();

        assert_eq!(name.as_str(), "api-key");
        assert_eq!(value, "abc123");
        assert!(value.is_sensitive());
    }

    #[test]
    fn api_key_with_newline_is_rejected() {
        let err = api_key_header("abc\n123").unwrap_err();

        assert!(matches!(err, Error::InvalidArgument(_)));
    }
}
