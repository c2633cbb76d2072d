//! Status and usage enumerations, serialized as the API's upper-case strings

use serde::{Deserialize, Serialize};

/// What a platform uses payment requests for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformUsage {
    /// Payment requests on behalf of the platform owner
    PaymentRequestForMyself,
    /// Payment requests on behalf of the platform's users
    PaymentRequestForOthers,
}

impl PlatformUsage {
    /// Wire representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::PaymentRequestForMyself => "PAYMENT_REQUEST_FOR_MYSELF",
            Self::PaymentRequestForOthers => "PAYMENT_REQUEST_FOR_OTHERS",
        }
    }
}

/// Lifecycle status of a platform or user
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PlatformStatus {
    /// Active
    Active,
    /// Inactive
    Inactive,
}

impl PlatformStatus {
    /// Wire representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "ACTIVE",
            Self::Inactive => "INACTIVE",
        }
    }
}

/// Status of a payment request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentRequestStatus {
    /// Still accepting payments
    Open,
    /// Closed by the requester
    Closed,
    /// Past its expiry date
    Expired,
    /// The bank account yield limit was reached
    MaxYieldReached,
    /// The maximum number of successful payments was reached
    MaxSuccessfulPaymentsReached,
}

impl PaymentRequestStatus {
    /// Wire representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Open => "OPEN",
            Self::Closed => "CLOSED",
            Self::Expired => "EXPIRED",
            Self::MaxYieldReached => "MAX_YIELD_REACHED",
            Self::MaxSuccessfulPaymentsReached => "MAX_SUCCESSFUL_PAYMENTS_REACHED",
        }
    }
}

/// Status of a single online payment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OnlinePaymentStatus {
    /// Created, not started
    New,
    /// Awaiting confirmation
    Pending,
    /// Paid
    Paid,
    /// Not paid
    NotPaid,
}

impl OnlinePaymentStatus {
    /// Wire representation
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::New => "NEW",
            Self::Pending => "PENDING",
            Self::Paid => "PAID",
            Self::NotPaid => "NOT_PAID",
        }
    }
}
