//! # checkout-core
//!
//! Core types and traits for the NovaPay checkout backend.
//!
//! This crate provides:
//! - `PaymentGateway` trait for implementing gateway providers
//! - `OrderRequest` and `OrderDescriptor` for the order-creation flow
//! - `VerificationRequest` and `VerificationResult` for payment verification
//! - `money` for amount parsing and minor-unit conversion
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use checkout_core::{money, OrderRequest, PaymentGateway};
//!
//! // Parse and validate the client-supplied amount (major units)
//! let amount = money::parse_amount(&raw_amount)?;
//!
//! // Build the order request
//! let order = OrderRequest::new(amount, None, None);
//!
//! // Create the order upstream via a gateway implementation
//! let descriptor = gateway.create_order(&order).await?;
//!
//! // Hand descriptor.order_id + descriptor.key_id to the checkout widget
//! ```

pub mod error;
pub mod gateway;
pub mod money;
pub mod order;
pub mod verify;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use order::{OrderDescriptor, OrderRequest, DEFAULT_CURRENCY};
pub use verify::{VerificationRequest, VerificationResult};
