//! # Application State
//!
//! Immutable configuration and shared state for the Axum application.
//! Everything is constructed once at startup and handed to handlers by
//! value; there is no ambient global state.

use connect_core::{ConnectError, ConnectResult, Fulfillment, LogFulfillment, Product};
use connect_stripe::StripeClient;
use std::path::PathBuf;
use std::sync::Arc;

/// Server configuration, read from the environment once at startup
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Public origin used for success/cancel/redirect URLs
    pub domain: String,
    /// Unit price of the catalog item, in the smallest currency unit
    pub base_price: i64,
    /// ISO 4217 currency code, lowercase
    pub currency: String,
    /// Optional directory of static assets served as the router fallback
    pub static_dir: Option<PathBuf>,
}

impl AppConfig {
    /// Load from environment variables.
    ///
    /// Required: `DOMAIN`, `BASE_PRICE`. The base price stays server-side
    /// so customers cannot manipulate it from the client.
    pub fn from_env() -> ConnectResult<Self> {
        dotenvy::dotenv().ok();

        let domain = std::env::var("DOMAIN")
            .map_err(|_| ConnectError::Configuration("DOMAIN not set".to_string()))?;

        let base_price = std::env::var("BASE_PRICE")
            .map_err(|_| ConnectError::Configuration("BASE_PRICE not set".to_string()))?
            .parse::<i64>()
            .map_err(|_| {
                ConnectError::Configuration("BASE_PRICE must be an integer amount".to_string())
            })?;

        if base_price <= 0 {
            return Err(ConnectError::Configuration(
                "BASE_PRICE must be positive".to_string(),
            ));
        }

        Ok(Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(4242),
            domain,
            base_price,
            currency: std::env::var("CURRENCY")
                .map(|c| c.to_lowercase())
                .unwrap_or_else(|_| "usd".to_string()),
            static_dir: std::env::var("STATIC_DIR").ok().map(PathBuf::from),
        })
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Success redirect; Stripe substitutes the session-id placeholder
    pub fn success_url(&self) -> String {
        format!(
            "{}/success.html?session_id={{CHECKOUT_SESSION_ID}}",
            self.domain
        )
    }

    /// Cancel redirect
    pub fn cancel_url(&self) -> String {
        format!("{}/canceled.html", self.domain)
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Stripe API client
    pub stripe: Arc<StripeClient>,
    /// The catalog item sold at checkout
    pub product: Arc<Product>,
    /// Side effect run when a checkout completes
    pub fulfillment: Arc<dyn Fulfillment>,
    /// Server configuration
    pub config: Arc<AppConfig>,
}

impl AppState {
    /// Build state from the environment, with log-only fulfillment.
    pub fn new() -> anyhow::Result<Self> {
        let config = AppConfig::from_env()?;
        let stripe = StripeClient::from_env()?;
        let product = load_product();

        Ok(Self::with_parts(
            config,
            stripe,
            product,
            Arc::new(LogFulfillment),
        ))
    }

    /// Build state from explicit parts (used by tests)
    pub fn with_parts(
        config: AppConfig,
        stripe: StripeClient,
        product: Product,
        fulfillment: Arc<dyn Fulfillment>,
    ) -> Self {
        Self {
            stripe: Arc::new(stripe),
            product: Arc::new(product),
            fulfillment,
            config: Arc::new(config),
        }
    }
}

/// Load the catalog item from `config/product.toml`, falling back to the
/// built-in default when no file is found.
fn load_product() -> Product {
    let config_paths = [
        "config/product.toml",
        "../config/product.toml",
        "../../config/product.toml",
    ];

    for path in config_paths {
        if let Ok(content) = std::fs::read_to_string(path) {
            match Product::from_toml(&content) {
                Ok(product) => {
                    tracing::info!("Loaded product '{}' from {}", product.name, path);
                    return product;
                }
                Err(e) => {
                    tracing::warn!("Ignoring malformed {}: {}", path, e);
                }
            }
        }
    }

    tracing::info!("No product config found, using default catalog item");
    Product::default()
}
