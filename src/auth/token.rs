//! Authorization token state

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Deserializer, Serialize};

/// Largest accepted token lifetime, in seconds
pub const MAX_EXPIRES_IN_SECONDS: i64 = 4_294_967_295;

/// Body of a successful authentication response
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthenticationResponse {
    /// Bearer credential
    pub access_token: String,
    /// Lifetime in seconds
    #[serde(deserialize_with = "seconds_from_number_or_string")]
    pub expires_in: i64,
    /// Granted scope
    #[serde(default)]
    pub scope: String,
    /// Token type, usually `Bearer`
    pub token_type: String,
}

fn seconds_from_number_or_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<i64, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Seconds {
        Number(i64),
        Text(String),
    }

    let seconds = match Seconds::deserialize(deserializer)? {
        Seconds::Number(n) => n,
        Seconds::Text(s) => s
            .trim()
            .parse()
            .map_err(|_| serde::de::Error::custom(format!("invalid expires_in: {s}")))?,
    };

    if !(0..=MAX_EXPIRES_IN_SECONDS).contains(&seconds) {
        return Err(serde::de::Error::custom(format!(
            "expires_in out of range: {seconds}"
        )));
    }
    Ok(seconds)
}

/// The bearer credential currently in use plus its metadata.
///
/// A fresh token has no expiration date and counts as expired.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorizationToken {
    /// Opaque bearer credential
    pub access_token: String,
    /// Instant the credential stops being valid
    pub token_expiration_date: Option<DateTime<Utc>>,
    /// Scope granted by the last authentication
    pub scope: String,
    /// Token type, e.g. `Bearer`
    pub token_type: String,
}

impl AuthorizationToken {
    /// True if the token was never obtained or its expiration has been reached
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(Utc::now())
    }

    /// Expiry check against an explicit clock reading
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        match self.token_expiration_date {
            None => true,
            Some(expiration) => now >= expiration,
        }
    }

    /// Value of the `Authorization` header: `"{token_type} {access_token}"`
    pub fn authorization_value(&self) -> String {
        format!("{} {}", self.token_type, self.access_token)
    }

    /// Replace every field with a fresh authentication result received at `now`.
    ///
    /// A lifetime that does not fit the calendar leaves the token expired at `now`.
    pub fn update_from(&mut self, response: AuthenticationResponse, now: DateTime<Utc>) {
        let expiration = Duration::try_seconds(response.expires_in)
            .and_then(|lifetime| now.checked_add_signed(lifetime))
            .unwrap_or(now);
        self.token_expiration_date = Some(expiration);
        self.access_token = response.access_token;
        self.scope = response.scope;
        self.token_type = response.token_type;
    }
}
