//! Client assertion JWTs for the client-credentials JWT-bearer flow

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{Algorithm, Header};
use serde::{Deserialize, Serialize};

use crate::Result;
use crate::config::Configuration;

/// How far `nbf` is backdated so minor clock skew does not reject the token
pub const NOT_BEFORE_LEEWAY_MINUTES: i64 = 1;

/// Claim set of a client assertion
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientAssertionClaims {
    /// Expiry (unix seconds)
    pub exp: i64,
    /// Not-before (unix seconds)
    pub nbf: i64,
    /// Issuer name
    pub iss: String,
    /// Subject, the API key
    pub sub: String,
    /// Audience, the OAuth token URL of the environment
    pub aud: String,
}

impl ClientAssertionClaims {
    /// Claims for an assertion issued at `now`
    #[must_use]
    pub fn new(config: &Configuration, now: DateTime<Utc>) -> Self {
        let expires_at = now + Duration::minutes(i64::from(config.token_expiration_minutes()));
        let not_before = now - Duration::minutes(NOT_BEFORE_LEEWAY_MINUTES);

        Self {
            exp: expires_at.timestamp(),
            nbf: not_before.timestamp(),
            iss: config.issuer_name().to_string(),
            sub: config.api_key().to_string(),
            aud: config.oauth_token_url().to_string(),
        }
    }
}

/// Build and RS256-sign a client assertion issued at `now`
pub fn sign_client_assertion(config: &Configuration, now: DateTime<Utc>) -> Result<String> {
    let claims = ClientAssertionClaims::new(config, now);
    let token = jsonwebtoken::encode(
        &Header::new(Algorithm::RS256),
        &claims,
        config.signing_key().encoding_key(),
    )?;
    Ok(token)
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;
    use jsonwebtoken::{DecodingKey, Validation};
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::config::Environment;

    const KEY_PATH: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/rsa_private_key.pem");
    const PUBLIC_KEY: &[u8] = include_bytes!("../../tests/fixtures/rsa_public_key.pem");

    fn config(test_environment: bool) -> Configuration {
        Configuration::new("my-api-key", KEY_PATH, test_environment).unwrap()
    }

    #[test]
    fn claims_follow_configuration() {
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let claims = ClientAssertionClaims::new(&config(true), now);

        assert_eq!(
            claims,
            ClientAssertionClaims {
                exp: now.timestamp() + 600,
                nbf: now.timestamp() - 60,
                iss: "TikkieAPI Rust".to_string(),
                sub: "my-api-key".to_string(),
                aud: "https://auth-sandbox.abnamro.com/oauth/token".to_string(),
            }
        );
    }

    #[test]
    fn audience_tracks_environment() {
        let now = Utc::now();

        let sandbox = ClientAssertionClaims::new(&config(true), now);
        let production = ClientAssertionClaims::new(&config(false), now);

        assert_eq!(sandbox.aud, Environment::Sandbox.oauth_token_url());
        assert_eq!(production.aud, Environment::Production.oauth_token_url());
        assert_ne!(sandbox.aud, production.aud);
    }

    #[test]
    fn custom_expiration_and_issuer() {
        let now = Utc::now();
        let config = config(false)
            .with_token_expiration_minutes(2)
            .with_issuer_name("custom");

        let claims = ClientAssertionClaims::new(&config, now);

        assert_eq!(claims.exp - now.timestamp(), 120);
        assert_eq!(claims.iss, "custom");
    }

    #[test]
    fn signed_assertion_verifies_with_public_key() {
        let config = config(true);

        let token = sign_client_assertion(&config, Utc::now()).unwrap();

        let header = jsonwebtoken::decode_header(&token).unwrap();
        assert_eq!(header.alg, Algorithm::RS256);

        let mut validation = Validation::new(Algorithm::RS256);
        validation.set_audience(&[config.oauth_token_url()]);
        validation.set_issuer(&[config.issuer_name()]);
        let decoded = jsonwebtoken::decode::<ClientAssertionClaims>(
            &token,
            &DecodingKey::from_rsa_pem(PUBLIC_KEY).unwrap(),
            &validation,
        )
        .unwrap();

        assert_eq!(decoded.claims.sub, "my-api-key");
    }

    #[test]
    fn payload_decodes_without_signature_check() {
        use base64::Engine as _;
        use base64::engine::general_purpose::URL_SAFE_NO_PAD;

        let config = config(false);
        let token = sign_client_assertion(&config, Utc::now()).unwrap();

        let payload = token.split('.').nth(1).unwrap();
        let claims: ClientAssertionClaims =
            serde_json::from_slice(&URL_SAFE_NO_PAD.decode(payload).unwrap()).unwrap();

        assert_eq!(claims.sub, config.api_key());
        assert_eq!(claims.aud, config.oauth_token_url());
        assert_eq!(claims.iss, config.issuer_name());
    }

    #[test]
    fn signing_is_deterministic_for_fixed_time() {
        let config = config(true);
        let now = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();

        let first = sign_client_assertion(&config, now).unwrap();
        let second = sign_client_assertion(&config, now).unwrap();

        assert_eq!(first, second);
    }
}
