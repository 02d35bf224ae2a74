//! # Checkout Types
//!
//! Request/response types for the direct-charge checkout flow, plus the
//! application-fee computation. The platform takes a 10% cut of every
//! charge, collected through the payment intent's application fee.

use crate::error::{ConnectError, ConnectResult};
use serde::{Deserialize, Serialize};

/// Platform cut, in percent, applied to every direct charge
pub const APPLICATION_FEE_PERCENT: i64 = 10;

/// Compute the platform's application fee for an order.
///
/// `unit_amount` is in the smallest currency unit (cents for USD). The fee
/// is 10% of the order total, truncated toward zero; integer arithmetic only,
/// so the result is exact for any non-negative total.
pub fn application_fee_amount(unit_amount: i64, quantity: u32) -> i64 {
    unit_amount * i64::from(quantity) * APPLICATION_FEE_PERCENT / 100
}

/// Body of `POST /create-checkout-session`
#[derive(Debug, Clone, Deserialize)]
pub struct CheckoutRequest {
    /// Number of units to purchase; must be positive
    pub quantity: u32,

    /// Connected account the charge is made on behalf of (acct_...)
    pub account: String,
}

impl CheckoutRequest {
    /// Validate the request before anything is sent to the provider.
    pub fn validate(&self) -> ConnectResult<()> {
        if self.quantity == 0 {
            return Err(ConnectError::InvalidRequest(
                "quantity must be a positive integer".to_string(),
            ));
        }
        if self.account.is_empty() {
            return Err(ConnectError::InvalidRequest(
                "account is required".to_string(),
            ));
        }
        Ok(())
    }
}

/// A checkout session issued by the provider.
///
/// Opaque to this server: we only ever redirect the customer to `url`.
/// Sessions are never persisted here.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CheckoutSession {
    /// Provider session ID (cs_...)
    pub id: String,

    /// Hosted checkout page to redirect the customer to
    pub url: String,
}
