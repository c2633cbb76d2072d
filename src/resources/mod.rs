//! Resource operations of the payment request API
//!
//! Each handler validates its path tokens, builds the URL suffix and routes
//! the call through the [`AuthorizedRequestHandler`](crate::authorized::AuthorizedRequestHandler).

mod payments;
mod platforms;
mod users;

pub use payments::PaymentRequestsHandler;
pub use platforms::PlatformsHandler;
pub use users::UsersHandler;

use crate::{Error, Result};

/// Reject an empty path token before any network activity
fn require_token<'a>(name: &str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        return Err(Error::invalid_argument(format!("{name} must not be empty")));
    }
    Ok(value)
}
