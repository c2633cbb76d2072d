//! Error envelope returned by the API on non-success responses

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize};

/// A single error entry of the API error envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorResponse {
    /// Provider error code
    #[serde(default)]
    pub code: Option<String>,
    /// Human-readable message
    #[serde(default)]
    pub message: Option<String>,
    /// Link to the error documentation
    #[serde(default)]
    pub reference: Option<String>,
    /// Trace identifier to quote to provider support
    #[serde(default)]
    pub trace_id: Option<String>,
    /// HTTP status echoed by the API, as text even when sent as a number
    #[serde(default, deserialize_with = "text_or_number")]
    pub status: Option<String>,
    /// Error category
    #[serde(default)]
    pub category: Option<String>,
}

impl fmt::Display for ErrorResponse {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}: {}",
            self.code.as_deref().unwrap_or("UNKNOWN"),
            self.message.as_deref().unwrap_or("no message")
        )
    }
}

fn text_or_number<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Status {
        Text(String),
        Number(i64),
    }

    Ok(Option::<Status>::deserialize(deserializer)?.map(|status| match status {
        Status::Text(s) => s,
        Status::Number(n) => n.to_string(),
    }))
}

/// The `{ "errors": [...] }` envelope
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorResponses {
    /// Decoded error entries, in the order the API sent them
    pub errors: Vec<ErrorResponse>,
}
