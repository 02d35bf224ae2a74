//! # Error Types
//!
//! Typed error handling for the connect-checkout server.
//! All provider-facing operations return `Result<T, ConnectError>`.

use thiserror::Error;

/// Error type for all checkout and webhook operations
#[derive(Debug, Error)]
pub enum ConnectError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data (bad quantity, missing account)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Payment provider rejected the request
    #[error("Provider error [{provider}]: {message}")]
    Provider { provider: String, message: String },

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Webhook signature verification failed
    #[error("Webhook signature verification failed: {0}")]
    SignatureVerification(String),

    /// Webhook envelope could not be parsed
    #[error("Webhook parse error: {0}")]
    WebhookParse(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ConnectError {
    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            ConnectError::Configuration(_) => 500,
            ConnectError::InvalidRequest(_) => 400,
            ConnectError::Provider { .. } => 502,
            ConnectError::Network(_) => 503,
            // Bad signatures and unparseable payloads are both the caller's
            // problem; neither leaks provider detail in the response.
            ConnectError::SignatureVerification(_) => 400,
            ConnectError::WebhookParse(_) => 400,
            ConnectError::Serialization(_) => 500,
        }
    }

    /// Returns true if the error originated on the provider side
    pub fn is_provider_failure(&self) -> bool {
        matches!(
            self,
            ConnectError::Provider { .. } | ConnectError::Network(_)
        )
    }
}

/// Result type alias for checkout operations
pub type ConnectResult<T> = Result<T, ConnectError>;
