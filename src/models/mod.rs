//! Request and response models of the Tikkie payment request API
//!
//! Field names follow the API's camelCase wire format. Path tokens that only
//! address a resource (platform, user, bank account) are skipped when a
//! request body is serialized.

mod enums;
mod error;
mod payment;
mod platform;
mod user;

pub use enums::{OnlinePaymentStatus, PaymentRequestStatus, PlatformStatus, PlatformUsage};
pub use error::{ErrorResponse, ErrorResponses};
pub use payment::{
    Payment, PaymentRequest, PaymentResponse, SinglePaymentRequest, SinglePaymentRequestResponse,
    UserPaymentRequest, UserPaymentResponse,
};
pub use platform::{PlatformRequest, PlatformResponse};
pub use user::{BankAccount, UserRequest, UserResponse};
