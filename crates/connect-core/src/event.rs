//! # Webhook Events
//!
//! Domain model for verified payment-platform events. Authenticity is
//! established by signature verification over the raw body bytes (see
//! `connect-stripe`); nothing in the payload is trusted before that.

use crate::error::{ConnectError, ConnectResult};
use serde::Deserialize;
use serde_json::Value;

/// Event types this server acts on
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    /// `checkout.session.completed`
    CheckoutCompleted,
    /// `checkout.session.async_payment_succeeded`
    AsyncPaymentSucceeded,
    /// Any other event type; accepted and ignored
    Other(String),
}

impl EventKind {
    /// Map the provider's `type` string to an event kind
    pub fn from_type(event_type: &str) -> Self {
        match event_type {
            "checkout.session.completed" => EventKind::CheckoutCompleted,
            "checkout.session.async_payment_succeeded" => EventKind::AsyncPaymentSucceeded,
            other => EventKind::Other(other.to_string()),
        }
    }

    /// Whether this event kind triggers purchase fulfillment
    pub fn triggers_fulfillment(&self) -> bool {
        matches!(
            self,
            EventKind::CheckoutCompleted | EventKind::AsyncPaymentSucceeded
        )
    }

    /// The provider's `type` string for this kind
    pub fn as_type(&self) -> &str {
        match self {
            EventKind::CheckoutCompleted => "checkout.session.completed",
            EventKind::AsyncPaymentSucceeded => "checkout.session.async_payment_succeeded",
            EventKind::Other(other) => other.as_str(),
        }
    }
}

/// A signature-verified webhook event
#[derive(Debug, Clone)]
pub struct ConnectEvent {
    /// Event ID from the provider (evt_...)
    pub id: String,

    /// Parsed event kind
    pub kind: EventKind,

    /// Connected account the event originated from, when scoped to one
    pub account: Option<String>,

    /// Event creation time (unix seconds)
    pub created: i64,

    /// The nested `data.object` payload, opaque until deserialized
    pub object: Value,
}

/// The checkout-session object nested in completion events.
///
/// The payload shape depends on the provider's API version, so extraction
/// is an explicit `Result`; a mismatch is reported, never papered over
/// with nulls.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionDetails {
    /// Session ID (cs_...)
    pub id: String,

    /// "paid", "unpaid", or "no_payment_required"
    #[serde(default)]
    pub payment_status: Option<String>,

    /// Total charged, in the smallest currency unit
    #[serde(default)]
    pub amount_total: Option<i64>,

    /// ISO 4217 currency code
    #[serde(default)]
    pub currency: Option<String>,
}

impl SessionDetails {
    /// Extract session details from an event's nested object.
    pub fn from_object(object: &Value) -> ConnectResult<Self> {
        serde_json::from_value(object.clone()).map_err(|e| {
            ConnectError::Serialization(format!("checkout session shape mismatch: {}", e))
        })
    }
}
