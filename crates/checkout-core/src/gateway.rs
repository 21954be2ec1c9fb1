//! # Payment Gateway Trait
//!
//! Seam between the HTTP handlers and a concrete gateway provider.
//! Handlers receive an injected `BoxedPaymentGateway`, so tests can run the
//! full request pipeline against a gateway built from fake credentials.

use crate::error::PaymentResult;
use crate::order::{OrderDescriptor, OrderRequest};
use crate::verify::{VerificationRequest, VerificationResult};
use async_trait::async_trait;
use std::sync::Arc;

/// A payment gateway that can create orders and verify payment signatures.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order upstream and return its descriptor.
    ///
    /// The one network round trip in the system; everything else is local.
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<OrderDescriptor>;

    /// Recompute the payment signature and compare it to the supplied one.
    ///
    /// Pure local computation; deterministic for a given request and secret.
    fn verify_payment(&self, request: &VerificationRequest) -> VerificationResult;

    /// Public key id (safe to expose to the browser).
    fn key_id(&self) -> &str;

    /// Provider name (for logging).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
