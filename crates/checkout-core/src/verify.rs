//! # Verification Types
//!
//! Payment-verification request and result. The browser forwards the
//! identifiers the checkout widget hands it; the verifier recomputes the
//! gateway signature and compares.

use crate::error::{PaymentError, PaymentResult};
use serde::{Deserialize, Serialize};

/// Identifiers and signature returned by the checkout widget
#[derive(Debug, Clone)]
pub struct VerificationRequest {
    /// Gateway order id
    pub order_id: String,

    /// Gateway payment id
    pub payment_id: String,

    /// Hex-encoded HMAC signature supplied by the widget
    pub signature: String,
}

impl VerificationRequest {
    pub fn new(
        order_id: impl Into<String>,
        payment_id: impl Into<String>,
        signature: impl Into<String>,
    ) -> Self {
        Self {
            order_id: order_id.into(),
            payment_id: payment_id.into(),
            signature: signature.into(),
        }
    }

    /// All three fields are required; checked before any HMAC is computed
    pub fn validate(&self) -> PaymentResult<()> {
        if self.order_id.is_empty() || self.payment_id.is_empty() || self.signature.is_empty() {
            return Err(PaymentError::MissingFields);
        }
        Ok(())
    }
}

/// Outcome of a verification. A mismatch is a valid negative result, not
/// an error.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct VerificationResult {
    pub verified: bool,
}
