//! # Request Handlers
//!
//! Axum request handlers for the checkout API. Every failure is converted
//! locally into a JSON `{message}` response; nothing crashes the process
//! per request.

use crate::state::AppState;
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use checkout_core::{
    money, OrderDescriptor, OrderRequest, PaymentError, VerificationRequest, VerificationResult,
};
use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Create order request
#[derive(Debug, Deserialize)]
pub struct CreateOrderRequest {
    /// Amount in major units; number or numeric string. Left as raw JSON
    /// so anything unparseable maps to the invalid-amount error rather
    /// than a deserialization rejection.
    #[serde(default)]
    pub amount: serde_json::Value,

    /// Currency code (optional, defaults to INR)
    #[serde(default)]
    pub currency: Option<String>,

    /// Receipt reference (optional, defaults to a timestamped one)
    #[serde(default)]
    pub receipt: Option<String>,
}

/// Verify payment request, field names as the checkout widget emits them
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    pub razorpay_order_id: String,
    #[serde(default)]
    pub razorpay_payment_id: String,
    #[serde(default)]
    pub razorpay_signature: String,
}

/// Config probe response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigResponse {
    pub key_id: String,
    pub has_secret: bool,
}

/// Error response
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<String>,
}

fn payment_error_to_response(err: PaymentError) -> (StatusCode, Json<ErrorResponse>) {
    let status = StatusCode::from_u16(err.status_code())
        .unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let response = ErrorResponse {
        message: err.to_string(),
        details: err.details().map(String::from),
    };
    (status, Json(response))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "OK",
        "timestamp": Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true)
    }))
}

/// Credential probe: public key id and secret presence, never the secret
pub async fn get_config(State(state): State<AppState>) -> Json<ConfigResponse> {
    Json(ConfigResponse {
        key_id: state.key_id.clone(),
        has_secret: state.has_secret,
    })
}

/// Create a gateway order for the requested amount
#[instrument(skip(state, request))]
pub async fn create_order(
    State(state): State<AppState>,
    Json(request): Json<CreateOrderRequest>,
) -> Result<Json<OrderDescriptor>, (StatusCode, Json<ErrorResponse>)> {
    // Credentials first, then amount, matching the documented check order
    let gateway = state.gateway().map_err(payment_error_to_response)?;

    let amount = money::parse_amount(&request.amount).map_err(payment_error_to_response)?;
    let order = OrderRequest::new(amount, request.currency, request.receipt);

    info!(
        "Creating order: amount={} {}, provider={}",
        order.amount,
        order.currency,
        gateway.provider_name()
    );

    let descriptor = gateway.create_order(&order).await.map_err(|e| {
        error!("Failed to create order: {}", e);
        payment_error_to_response(e)
    })?;

    info!("Created order: {}", descriptor.order_id);

    Ok(Json(descriptor))
}

/// Verify a completed payment's signature.
///
/// A mismatch is a successful verification with a negative result, so the
/// response is 200 either way; only absent fields are a client error.
#[instrument(skip(state, request))]
pub async fn verify_payment(
    State(state): State<AppState>,
    Json(request): Json<VerifyPaymentRequest>,
) -> Result<Json<VerificationResult>, (StatusCode, Json<ErrorResponse>)> {
    let gateway = state.gateway().map_err(payment_error_to_response)?;

    let verification = VerificationRequest::new(
        request.razorpay_order_id,
        request.razorpay_payment_id,
        request.razorpay_signature,
    );
    verification.validate().map_err(payment_error_to_response)?;

    let result = gateway.verify_payment(&verification);

    info!(
        "Payment verification: order_id={}, verified={}",
        verification.order_id, result.verified
    );

    Ok(Json(result))
}

/// JSON 404 for unmatched API paths
pub async fn api_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(serde_json::json!({ "error": "API endpoint not found" })),
    )
}
