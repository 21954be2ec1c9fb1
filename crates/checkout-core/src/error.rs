//! # Payment Error Types
//!
//! Typed error handling for the checkout backend.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all checkout operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Gateway credentials are not configured
    #[error("Missing Razorpay credentials. Please set RAZORPAY_KEY_ID and RAZORPAY_KEY_SECRET in environment.")]
    MissingCredentials,

    /// Amount failed to parse, is non-finite, or is not positive
    #[error("Invalid amount")]
    InvalidAmount,

    /// The gateway rejected the order-creation request
    #[error("Failed to create order")]
    UpstreamOrder { status: u16, details: String },

    /// Verification payload is incomplete
    #[error("Missing verification fields")]
    MissingFields,

    /// Network/HTTP error communicating with the gateway
    #[error("Network error: {0}")]
    Network(String),

    /// A successful gateway response could not be parsed
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns the HTTP status code appropriate for this error.
    ///
    /// Transport mapping lives here, in one place; error values carry
    /// only their kind and diagnostic detail.
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::MissingCredentials => 500,
            PaymentError::InvalidAmount => 400,
            PaymentError::UpstreamOrder { status, .. } => *status,
            PaymentError::MissingFields => 400,
            PaymentError::Network(_) => 502,
            PaymentError::Serialization(_) => 500,
        }
    }

    /// Upstream diagnostic detail, if this error carries one
    pub fn details(&self) -> Option<&str> {
        match self {
            PaymentError::UpstreamOrder { details, .. } => Some(details),
            _ => None,
        }
    }
}

/// Result type alias for checkout operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_codes() {
        assert_eq!(PaymentError::MissingCredentials.status_code(), 500);
        assert_eq!(PaymentError::InvalidAmount.status_code(), 400);
        assert_eq!(PaymentError::MissingFields.status_code(), 400);
        assert_eq!(PaymentError::Network("timeout".into()).status_code(), 502);
        assert_eq!(
            PaymentError::Serialization("bad json".into()).status_code(),
            500
        );
    }

    #[test]
    fn test_upstream_status_passthrough() {
        let err = PaymentError::UpstreamOrder {
            status: 401,
            details: "{\"error\":{\"description\":\"bad key\"}}".into(),
        };
        assert_eq!(err.status_code(), 401);
        assert!(err.details().unwrap().contains("bad key"));
    }

    #[test]
    fn test_only_upstream_carries_details() {
        assert!(PaymentError::InvalidAmount.details().is_none());
        assert!(PaymentError::MissingCredentials.details().is_none());
    }
}
