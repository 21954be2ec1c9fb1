//! # NovaPay Checkout
//!
//! Payment-checkout backend: order brokering and payment verification
//! against the Razorpay gateway, plus the SPA that drives the hosted
//! checkout widget.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export RAZORPAY_KEY_ID=rzp_test_...
//! export RAZORPAY_KEY_SECRET=...
//!
//! # Run the server
//! novapay
//! ```

use checkout_api::{routes, state::AppState};
use tracing::{info, warn, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Print banner
    print_banner();

    // Initialize application state
    let state = AppState::from_env();

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    if state.gateway.is_some() {
        info!("Razorpay configured: key_id={}", state.key_id);
    } else {
        warn!("Razorpay credentials not set; order/verify endpoints will report the missing configuration");
    }
    info!("Serving SPA from {}", state.config.static_dir.display());

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("🚀 NovaPay starting on http://{}", addr);

    if !is_prod {
        info!("📱 Frontend: http://{}/", addr);
        info!("🔧 API: http://{}/api", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("Shut down cleanly");

    Ok(())
}

/// Resolve on SIGINT or SIGTERM so in-flight requests can drain
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install SIGTERM handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("🛑 Shutdown signal received");
}

fn print_banner() {
    println!(
        r#"
  💳 NovaPay Checkout 💳
  ━━━━━━━━━━━━━━━━━━━━━━━
  Razorpay order broker & verifier
  Version: {}

"#,
        env!("CARGO_PKG_VERSION")
    );
}
