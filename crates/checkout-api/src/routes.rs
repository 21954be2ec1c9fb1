//! # Routes
//!
//! Axum router configuration for the checkout API.
//!
//! - `/api/health`, `/api/payments/*` - JSON API
//! - unmatched `/api/*` - JSON 404
//! - everything else - SPA bundle, falling back to the app shell so
//!   client-side routes deep-link correctly

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
    trace::TraceLayer,
};

/// Create the main application router
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let payment_routes = Router::new()
        .route("/config", get(handlers::get_config))
        .route("/order", post(handlers::create_order))
        .route("/verify", post(handlers::verify_payment));

    let api_routes = Router::new()
        .route("/health", get(handlers::health))
        .nest("/payments", payment_routes)
        .fallback(handlers::api_not_found);

    // Static assets with correct MIME types; unknown paths get the shell
    let spa = ServeDir::new(&state.config.static_dir)
        .fallback(ServeFile::new(state.config.index_path()));

    Router::new()
        .nest("/api", api_routes)
        .fallback_service(spa)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}
