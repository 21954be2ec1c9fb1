//! # checkout-api
//!
//! HTTP API layer for the NovaPay checkout backend.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - REST endpoints for the checkout order/verify flow
//! - SPA static serving for every non-API path
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/api/health` | Health check |
//! | GET | `/api/payments/config` | Credential probe (public key id only) |
//! | POST | `/api/payments/order` | Create a gateway order |
//! | POST | `/api/payments/verify` | Verify a payment signature |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
