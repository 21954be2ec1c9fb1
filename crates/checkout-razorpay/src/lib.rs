//! # checkout-razorpay
//!
//! Razorpay gateway integration for the NovaPay checkout backend.
//!
//! This crate provides:
//!
//! 1. **RazorpayGateway** - the `PaymentGateway` implementation
//!    - Order creation against the Orders API (Basic auth, auto-capture)
//!    - Payment-signature verification (HMAC-SHA256)
//! 2. **RazorpayConfig** - credential/endpoint configuration from the
//!    environment, with builder overrides for tests
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use checkout_core::{OrderRequest, PaymentGateway};
//! use checkout_razorpay::RazorpayGateway;
//!
//! // Create gateway from environment
//! let gateway = RazorpayGateway::from_env()?;
//!
//! // Create an order
//! let descriptor = gateway.create_order(&order).await?;
//!
//! // Hand descriptor.order_id + descriptor.key_id to the checkout widget;
//! // later, verify the identifiers the widget returns:
//! let result = gateway.verify_payment(&verification);
//! ```

pub mod config;
pub mod orders;
pub mod signature;

// Re-exports
pub use config::RazorpayConfig;
pub use orders::RazorpayGateway;
