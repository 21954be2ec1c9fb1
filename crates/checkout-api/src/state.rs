//! # Application State
//!
//! Shared state for the Axum application. Credentials are read from the
//! environment once at startup; handlers only ever see what is injected
//! here, which is what makes the whole pipeline testable with fake keys.

use checkout_core::{BoxedPaymentGateway, PaymentError, PaymentResult};
use checkout_razorpay::RazorpayGateway;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
    /// Directory holding the SPA bundle
    pub static_dir: PathBuf,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT")
                .unwrap_or_else(|_| "development".to_string()),
            static_dir: std::env::var("STATIC_DIR")
                .unwrap_or_else(|_| "static".to_string())
                .into(),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// SPA shell served for any unmatched non-API path
    pub fn index_path(&self) -> PathBuf {
        self.static_dir.join("index.html")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Application config
    pub config: AppConfig,
    /// Public key id; empty when unconfigured. Safe to expose.
    pub key_id: String,
    /// Whether a key secret is present (the secret itself stays out of
    /// this struct's public surface entirely)
    pub has_secret: bool,
    /// Gateway, present only when both credentials are configured
    pub gateway: Option<BoxedPaymentGateway>,
}

impl AppState {
    /// Build state from the environment.
    ///
    /// Missing credentials are not fatal: the server still boots, serves
    /// the SPA and the config probe, and the order/verify endpoints fail
    /// per request until credentials are provided.
    pub fn from_env() -> Self {
        let config = AppConfig::from_env();

        let key_id = std::env::var("RAZORPAY_KEY_ID").unwrap_or_default();
        let has_secret = std::env::var("RAZORPAY_KEY_SECRET")
            .map(|s| !s.is_empty())
            .unwrap_or(false);

        let gateway = match RazorpayGateway::from_env() {
            Ok(gateway) => Some(Arc::new(gateway) as BoxedPaymentGateway),
            Err(e) => {
                warn!("Razorpay gateway not initialized: {}", e);
                None
            }
        };

        Self {
            config,
            key_id,
            has_secret,
            gateway,
        }
    }

    /// State with an injected gateway (tests, alternate providers)
    pub fn with_gateway(config: AppConfig, gateway: BoxedPaymentGateway) -> Self {
        let key_id = gateway.key_id().to_string();
        Self {
            config,
            key_id,
            has_secret: true,
            gateway: Some(gateway),
        }
    }

    /// State with no gateway configured
    pub fn without_gateway(config: AppConfig) -> Self {
        Self {
            config,
            key_id: String::new(),
            has_secret: false,
            gateway: None,
        }
    }

    /// The configured gateway, or the error every payment operation
    /// reports when credentials are absent
    pub fn gateway(&self) -> PaymentResult<&BoxedPaymentGateway> {
        self.gateway.as_ref().ok_or(PaymentError::MissingCredentials)
    }
}
