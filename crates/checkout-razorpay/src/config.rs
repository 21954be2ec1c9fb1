//! # Razorpay Configuration
//!
//! Configuration management for the Razorpay integration.
//! Credentials are loaded from environment variables once at startup and
//! injected; handlers never read process state ad hoc.

use checkout_core::{PaymentError, PaymentResult};
use std::env;
use std::time::Duration;

/// Default Orders API endpoint
pub const DEFAULT_API_BASE_URL: &str = "https://api.razorpay.com";

/// Default upstream request timeout in seconds
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Razorpay API configuration
#[derive(Debug, Clone)]
pub struct RazorpayConfig {
    /// Public key id (rzp_test_... or rzp_live_...); exposed to the browser
    pub key_id: String,

    /// Key secret: Basic-auth password and HMAC key. Never serialized,
    /// never returned to a client.
    pub key_secret: String,

    /// API base URL (overridable for testing/mocking)
    pub api_base_url: String,

    /// Upstream request timeout
    pub timeout: Duration,
}

impl RazorpayConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `RAZORPAY_KEY_ID`
    /// - `RAZORPAY_KEY_SECRET`
    ///
    /// Optional:
    /// - `RAZORPAY_API_BASE` (defaults to the live endpoint)
    /// - `RAZORPAY_TIMEOUT_SECS` (defaults to 30)
    pub fn from_env() -> PaymentResult<Self> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let key_id = env::var("RAZORPAY_KEY_ID").unwrap_or_default();
        let key_secret = env::var("RAZORPAY_KEY_SECRET").unwrap_or_default();

        if key_id.is_empty() || key_secret.is_empty() {
            return Err(PaymentError::MissingCredentials);
        }

        let api_base_url =
            env::var("RAZORPAY_API_BASE").unwrap_or_else(|_| DEFAULT_API_BASE_URL.to_string());

        let timeout = env::var("RAZORPAY_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .map(Duration::from_secs)
            .unwrap_or(Duration::from_secs(DEFAULT_TIMEOUT_SECS));

        Ok(Self {
            key_id,
            key_secret,
            api_base_url,
            timeout,
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(key_id: impl Into<String>, key_secret: impl Into<String>) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        }
    }

    /// Check if using test-mode keys
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set the upstream request timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_config() {
        let config = RazorpayConfig::new("rzp_test_abc123", "seekrit");
        assert!(config.is_test_mode());
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        assert_eq!(config.timeout, Duration::from_secs(30));

        let config = RazorpayConfig::new("rzp_live_abc123", "seekrit");
        assert!(!config.is_test_mode());
    }

    #[test]
    fn test_builders() {
        let config = RazorpayConfig::new("rzp_test_abc123", "seekrit")
            .with_api_base_url("http://127.0.0.1:9999")
            .with_timeout(Duration::from_secs(5));

        assert_eq!(config.api_base_url, "http://127.0.0.1:9999");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_from_env_missing_credentials() {
        // Clear any existing env vars
        env::remove_var("RAZORPAY_KEY_ID");
        env::remove_var("RAZORPAY_KEY_SECRET");

        let result = RazorpayConfig::from_env();
        assert!(matches!(result, Err(PaymentError::MissingCredentials)));
    }
}
