//! # Stripe Configuration
//!
//! Configuration for the Stripe integration. All secrets come from
//! environment variables, validated once at startup; nothing here is
//! mutable afterwards.

use connect_core::{ConnectError, ConnectResult};
use std::env;

/// Stripe API configuration
#[derive(Debug, Clone)]
pub struct StripeConfig {
    /// Secret API key (sk_test_... or sk_live_...)
    pub secret_key: String,

    /// Publishable key (pk_test_... or pk_live_...), returned by `/config`
    pub publishable_key: String,

    /// Webhook signing secret (whsec_...)
    pub webhook_secret: String,

    /// API base URL (overridable for testing)
    pub api_base_url: String,

    /// Pinned API version sent with every request
    pub api_version: String,
}

fn required_env(name: &str) -> ConnectResult<String> {
    env::var(name).map_err(|_| ConnectError::Configuration(format!("{} not set", name)))
}

fn check_prefix(name: &str, value: &str, prefixes: &[&str]) -> ConnectResult<()> {
    if prefixes.iter().any(|p| value.starts_with(p)) {
        return Ok(());
    }
    Err(ConnectError::Configuration(format!(
        "{} must start with one of {:?}",
        name, prefixes
    )))
}

impl StripeConfig {
    /// Load configuration from the environment.
    ///
    /// Required: `STRIPE_SECRET_KEY`, `STRIPE_PUBLISHABLE_KEY`,
    /// `STRIPE_WEBHOOK_SECRET`. Key prefixes are checked so a swapped
    /// secret/publishable pair fails at startup instead of at first charge.
    pub fn from_env() -> ConnectResult<Self> {
        dotenvy::dotenv().ok();

        let secret_key = required_env("STRIPE_SECRET_KEY")?;
        let publishable_key = required_env("STRIPE_PUBLISHABLE_KEY")?;
        let webhook_secret = required_env("STRIPE_WEBHOOK_SECRET")?;

        check_prefix("STRIPE_SECRET_KEY", &secret_key, &["sk_test_", "sk_live_"])?;
        check_prefix(
            "STRIPE_PUBLISHABLE_KEY",
            &publishable_key,
            &["pk_test_", "pk_live_"],
        )?;
        check_prefix("STRIPE_WEBHOOK_SECRET", &webhook_secret, &["whsec_"])?;

        Ok(Self::new(secret_key, publishable_key, webhook_secret))
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        secret_key: impl Into<String>,
        publishable_key: impl Into<String>,
        webhook_secret: impl Into<String>,
    ) -> Self {
        Self {
            secret_key: secret_key.into(),
            publishable_key: publishable_key.into(),
            webhook_secret: webhook_secret.into(),
            api_base_url: "https://api.stripe.com".to_string(),
            api_version: "2024-12-18.acacia".to_string(),
        }
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.secret_key.starts_with("sk_test_")
    }

    /// Authorization header value for API requests
    pub fn auth_header(&self) -> String {
        format!("Bearer {}", self.secret_key)
    }
}
