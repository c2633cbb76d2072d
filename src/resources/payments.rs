use std::sync::Arc;

use tracing::debug;

use super::require_token;
use crate::Result;
use crate::authorized::AuthorizedRequestHandler;
use crate::models::{
    PaymentRequest, PaymentResponse, SinglePaymentRequest, SinglePaymentRequestResponse,
    UserPaymentRequest, UserPaymentResponse,
};
use crate::transport::RequestContent;
use crate::urls::{payment_creation_url_suffix, payment_url_suffix, user_payments_url_suffix};

/// Payment request creation and lookup
pub struct PaymentRequestsHandler {
    requests: Arc<AuthorizedRequestHandler>,
}

impl PaymentRequestsHandler {
    /// Create a handler routing through `requests`
    pub fn new(requests: Arc<AuthorizedRequestHandler>) -> Self {
        Self { requests }
    }

    /// Create a payment request on a user's bank account
    pub async fn create_payment_request(&self, request: &PaymentRequest) -> Result<PaymentResponse> {
        let suffix = payment_creation_url_suffix(
            require_token("platform token", &request.platform_token)?,
            require_token("user token", &request.user_token)?,
            require_token("bank account token", &request.bank_account_token)?,
        );
        debug!(
            amount_in_cents = ?request.amount_in_cents,
            currency = %request.currency,
            "Creating payment request"
        );
        let content = RequestContent::json(request)?;
        self.requests.post(&suffix, content).await
    }

    /// Page through the payment requests of a user
    pub async fn get_user_payment_requests(
        &self,
        request: &UserPaymentRequest,
    ) -> Result<UserPaymentResponse> {
        let suffix = user_payments_url_suffix(
            require_token("platform token", &request.platform_token)?,
            require_token("user token", &request.user_token)?,
        );
        self.requests
            .get(&format!("{suffix}{}", request.query_string()))
            .await
    }

    /// A single payment request with its payments
    pub async fn get_payment_request(
        &self,
        request: &SinglePaymentRequest,
    ) -> Result<SinglePaymentRequestResponse> {
        let suffix = payment_url_suffix(
            require_token("platform token", &request.platform_token)?,
            require_token("user token", &request.user_token)?,
            require_token("payment request token", &request.payment_request_token)?,
        );
        self.requests.get(&suffix).await
    }
}
