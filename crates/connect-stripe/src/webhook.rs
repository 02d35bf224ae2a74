//! # Webhook Verification
//!
//! Signature verification for inbound Stripe webhooks. Verification runs
//! over the exact raw body bytes; re-serializing the parsed payload would
//! break the signature. Only after the signature checks out is the payload
//! parsed into a `ConnectEvent`.

use crate::client::StripeClient;
use connect_core::{ConnectError, ConnectEvent, ConnectResult, EventKind};
use hmac::{Hmac, Mac};
use serde::Deserialize;
use sha2::Sha256;
use tracing::debug;

type HmacSha256 = Hmac<Sha256>;

/// Maximum allowed skew between the signature timestamp and now, in seconds
pub const SIGNATURE_TOLERANCE_SECS: i64 = 300;

#[derive(Debug, Deserialize)]
struct EventEnvelope {
    id: String,
    #[serde(rename = "type")]
    event_type: String,
    #[serde(default)]
    account: Option<String>,
    created: i64,
    data: EventData,
}

#[derive(Debug, Deserialize)]
struct EventData {
    object: serde_json::Value,
}

struct SignatureHeader {
    timestamp: i64,
    signatures: Vec<String>,
}

/// Parse a `Stripe-Signature` header: `t=<unix>,v1=<hex>[,v1=<hex>...]`
fn parse_signature_header(header: &str) -> ConnectResult<SignatureHeader> {
    let mut timestamp = None;
    let mut signatures = Vec::new();

    for part in header.split(',') {
        match part.trim().split_once('=') {
            Some(("t", value)) => timestamp = value.parse().ok(),
            Some(("v1", value)) => signatures.push(value.to_string()),
            _ => {}
        }
    }

    let timestamp = timestamp.ok_or_else(|| {
        ConnectError::SignatureVerification("missing timestamp in signature header".to_string())
    })?;

    if signatures.is_empty() {
        return Err(ConnectError::SignatureVerification(
            "no v1 signature in header".to_string(),
        ));
    }

    Ok(SignatureHeader {
        timestamp,
        signatures,
    })
}

/// HMAC-SHA256 over `"{timestamp}.{payload}"`, hex-encoded
fn expected_signature(secret: &str, timestamp: i64, payload: &[u8]) -> String {
    let mut mac =
        HmacSha256::new_from_slice(secret.as_bytes()).expect("HMAC accepts any key size");
    mac.update(timestamp.to_string().as_bytes());
    mac.update(b".");
    mac.update(payload);
    hex::encode(mac.finalize().into_bytes())
}

fn constant_time_eq(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes().zip(b.bytes()).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}

/// Verify a signed payload against the shared secret.
///
/// `now` is passed in rather than read from the clock so the tolerance
/// window is testable.
fn verify_signature(
    secret: &str,
    payload: &[u8],
    header: &str,
    now: i64,
) -> ConnectResult<()> {
    let parsed = parse_signature_header(header)?;

    if (now - parsed.timestamp).abs() > SIGNATURE_TOLERANCE_SECS {
        return Err(ConnectError::SignatureVerification(
            "timestamp outside tolerance".to_string(),
        ));
    }

    let expected = expected_signature(secret, parsed.timestamp, payload);
    if !parsed
        .signatures
        .iter()
        .any(|candidate| constant_time_eq(candidate, &expected))
    {
        return Err(ConnectError::SignatureVerification(
            "signature mismatch".to_string(),
        ));
    }

    Ok(())
}

impl StripeClient {
    /// Verify an inbound webhook and parse it into a `ConnectEvent`.
    ///
    /// `payload` must be the raw request body bytes exactly as received.
    pub fn verify_event(&self, payload: &[u8], signature_header: &str) -> ConnectResult<ConnectEvent> {
        verify_signature(
            &self.config.webhook_secret,
            payload,
            signature_header,
            chrono::Utc::now().timestamp(),
        )?;

        let envelope: EventEnvelope = serde_json::from_slice(payload)
            .map_err(|e| ConnectError::WebhookParse(format!("invalid event payload: {}", e)))?;

        debug!(
            "Verified webhook: id={}, type={}",
            envelope.id, envelope.event_type
        );

        Ok(ConnectEvent {
            id: envelope.id,
            kind: EventKind::from_type(&envelope.event_type),
            account: envelope.account,
            created: envelope.created,
            object: envelope.data.object,
        })
    }
}
