use std::fmt::Write as _;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::enums::{OnlinePaymentStatus, PaymentRequestStatus};

/// Date format the API expects for `fromDate` / `toDate` query parameters
pub(crate) const QUERY_DATE_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

/// Body of a payment request creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRequest {
    /// Platform the user is enrolled under (path only)
    #[serde(skip)]
    pub platform_token: String,
    /// User the request is made for (path only)
    #[serde(skip)]
    pub user_token: String,
    /// Bank account receiving the payments (path only)
    #[serde(skip)]
    pub bank_account_token: String,
    /// Fixed amount in cents; `None` lets the payer choose
    #[serde(
        default,
        serialize_with = "serialize_cents",
        deserialize_with = "deserialize_cents",
        skip_serializing_if = "Option::is_none"
    )]
    pub amount_in_cents: Option<u64>,
    /// ISO-4217 currency code, e.g. `EUR`
    pub currency: String,
    /// Description shown to the payer
    pub description: String,
    /// Caller-side reference, e.g. an invoice number
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// Result of a payment request creation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentResponse {
    /// URL to share with payers
    pub payment_request_url: String,
    /// Token identifying the payment request in later calls
    pub payment_request_token: String,
    /// Caller-side reference echoed back
    #[serde(default)]
    pub external_id: Option<String>,
}

/// Query for the payment requests of a user
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserPaymentRequest {
    /// Platform the user is enrolled under
    pub platform_token: String,
    /// User whose payment requests are listed
    pub user_token: String,
    /// Index of the first result
    pub offset: u32,
    /// Maximum number of results
    pub limit: u32,
    /// Only requests created at or after this instant
    pub from_date: Option<DateTime<Utc>>,
    /// Only requests created at or before this instant
    pub to_date: Option<DateTime<Utc>>,
}

impl UserPaymentRequest {
    /// `fromDate` in the API's query format
    #[must_use]
    pub fn from_date_string(&self) -> Option<String> {
        self.from_date.map(|d| d.format(QUERY_DATE_FORMAT).to_string())
    }

    /// `toDate` in the API's query format
    #[must_use]
    pub fn to_date_string(&self) -> Option<String> {
        self.to_date.map(|d| d.format(QUERY_DATE_FORMAT).to_string())
    }

    /// Query string starting with `?`.
    ///
    /// Date values are written as-is, colons included; the API accepts them
    /// unescaped.
    #[must_use]
    pub fn query_string(&self) -> String {
        let mut query = format!("?offset={}&limit={}", self.offset, self.limit);
        if let Some(from) = self.from_date_string() {
            let _ = write!(query, "&fromDate={from}");
        }
        if let Some(to) = self.to_date_string() {
            let _ = write!(query, "&toDate={to}");
        }
        query
    }
}

/// Page of payment requests of a user
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserPaymentResponse {
    /// Payment requests in this page
    #[serde(default)]
    pub payment_requests: Vec<SinglePaymentRequestResponse>,
    /// Total number of payment requests of the user
    #[serde(default)]
    pub total_elements: u32,
}

/// Address of a single payment request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SinglePaymentRequest {
    /// Platform the user is enrolled under
    pub platform_token: String,
    /// User the request belongs to
    pub user_token: String,
    /// The payment request
    pub payment_request_token: String,
}

/// A payment request with its payments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SinglePaymentRequestResponse {
    /// Token identifying the payment request
    pub payment_request_token: String,
    /// Fixed amount in cents, if any
    #[serde(
        default,
        serialize_with = "serialize_cents",
        deserialize_with = "deserialize_cents"
    )]
    pub amount_in_cents: Option<u64>,
    /// Currency code
    #[serde(default)]
    pub currency: Option<String>,
    /// Description shown to payers
    #[serde(default)]
    pub description: Option<String>,
    /// Creation instant
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Expiry instant
    #[serde(default)]
    pub expired: Option<DateTime<Utc>>,
    /// Request status
    pub status: PaymentRequestStatus,
    /// Whether the bank account hit its yield limit
    #[serde(default)]
    pub bank_account_yielded_too_fast: bool,
    /// Caller-side reference
    #[serde(default)]
    pub external_id: Option<String>,
    /// Payments made against this request
    #[serde(default)]
    pub payments: Vec<Payment>,
}

/// A payment made against a payment request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Payment {
    /// Token identifying the payment
    pub payment_token: String,
    /// Name of the payer
    #[serde(default)]
    pub counter_party_name: Option<String>,
    /// Paid amount in cents
    #[serde(
        default,
        serialize_with = "serialize_cents",
        deserialize_with = "deserialize_cents"
    )]
    pub amount_in_cents: Option<u64>,
    /// Currency code
    #[serde(default)]
    pub amount_currency: Option<String>,
    /// Description entered by the payer
    #[serde(default)]
    pub description: Option<String>,
    /// Payment instant
    #[serde(default)]
    pub created: Option<DateTime<Utc>>,
    /// Payment status
    pub online_payment_status: OnlinePaymentStatus,
}

// The API sends amounts as strings on requests and as either strings or
// numbers on responses.
#[allow(clippy::ref_option, clippy::trivially_copy_pass_by_ref)]
fn serialize_cents<S: Serializer>(value: &Option<u64>, serializer: S) -> Result<S::Ok, S::Error> {
    match value {
        Some(cents) => serializer.serialize_str(&cents.to_string()),
        None => serializer.serialize_none(),
    }
}

fn deserialize_cents<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<u64>, D::Error> {
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cents {
        Number(u64),
        Text(String),
    }

    match Option::<Cents>::deserialize(deserializer)? {
        None => Ok(None),
        Some(Cents::Number(n)) => Ok(Some(n)),
        Some(Cents::Text(s)) if s.trim().is_empty() => Ok(None),
        Some(Cents::Text(s)) => s
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| serde::de::Error::custom(format!("invalid amount in cents: {s}"))),
    }
}
