//! # Stripe HTTP Client
//!
//! Thin client over the Stripe REST API. Requests are form-encoded, carry
//! the pinned API version, and optionally run in the context of a connected
//! account via the `Stripe-Account` header (Connect direct charges).

use crate::config::StripeConfig;
use connect_core::{ConnectError, ConnectResult};
use reqwest::{Client, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Deserialize;
use tracing::error;

/// Client for the Stripe API endpoints this server uses
pub struct StripeClient {
    pub(crate) config: StripeConfig,
    pub(crate) http: Client,
}

impl StripeClient {
    /// Create a client with the given configuration
    pub fn new(config: StripeConfig) -> ConnectResult<Self> {
        let http = Client::builder()
            .timeout(std::time::Duration::from_secs(30))
            .build()
            .map_err(|e| ConnectError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self { config, http })
    }

    /// Create a client from environment variables
    pub fn from_env() -> ConnectResult<Self> {
        Self::new(StripeConfig::from_env()?)
    }

    /// The publishable key, exposed to browser clients via `/config`
    pub fn publishable_key(&self) -> &str {
        &self.config.publishable_key
    }

    pub(crate) fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.config.api_base_url, path)
    }

    /// Attach the headers every Stripe request carries
    pub(crate) fn authorize(&self, request: RequestBuilder) -> RequestBuilder {
        request
            .header("Authorization", self.config.auth_header())
            .header("Stripe-Version", &self.config.api_version)
    }

    /// Send a request and decode the response, mapping Stripe error bodies
    /// to `ConnectError::Provider`.
    pub(crate) async fn dispatch<T: DeserializeOwned>(
        &self,
        request: RequestBuilder,
    ) -> ConnectResult<T> {
        let response = request
            .send()
            .await
            .map_err(|e| ConnectError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| ConnectError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Stripe API error: status={}, body={}", status, body);

            if let Ok(envelope) = serde_json::from_str::<ApiErrorEnvelope>(&body) {
                return Err(ConnectError::Provider {
                    provider: "stripe".to_string(),
                    message: envelope.error.message,
                });
            }

            return Err(ConnectError::Provider {
                provider: "stripe".to_string(),
                message: format!("HTTP {}: {}", status, body),
            });
        }

        serde_json::from_str(&body).map_err(|e| {
            ConnectError::Serialization(format!("failed to parse Stripe response: {}", e))
        })
    }
}

#[derive(Debug, Deserialize)]
struct ApiErrorEnvelope {
    error: ApiError,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_joins_base_url() {
        let config = StripeConfig::new("sk_test_a", "pk_test_b", "whsec_c");
        let client = StripeClient::new(config).unwrap();
        assert_eq!(
            client.endpoint("/v1/checkout/sessions"),
            "https://api.stripe.com/v1/checkout/sessions"
        );
    }

    #[test]
    fn test_error_envelope_parses() {
        let envelope: ApiErrorEnvelope = serde_json::from_str(
            r#"{"error": {"message": "No such account: acct_bad", "type": "invalid_request_error"}}"#,
        )
        .unwrap();
        assert_eq!(envelope.error.message, "No such account: acct_bad");
    }
}
