//! # Connected Accounts
//!
//! Read-only views of the merchant sub-accounts managed by the payment
//! platform. This server lists accounts and requests dashboard login links;
//! it never creates or mutates them.

use serde::{Deserialize, Serialize};

/// A connected merchant account, as returned by the provider
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectedAccount {
    /// Account identifier (acct_...)
    pub id: String,

    /// Account email, when shared by the merchant
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,

    /// Two-letter country code
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,

    /// Settlement currency for the account
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_currency: Option<String>,

    /// Account type ("express", "standard", "custom")
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub account_type: Option<String>,

    /// Whether the account can accept charges
    #[serde(default)]
    pub charges_enabled: bool,

    /// Whether the account can receive payouts
    #[serde(default)]
    pub payouts_enabled: bool,
}

/// One page of the provider's account listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AccountPage {
    /// Accounts on this page
    pub data: Vec<ConnectedAccount>,

    /// Whether more pages exist beyond this one
    #[serde(default)]
    pub has_more: bool,
}

/// A one-time Express dashboard login link for a connected account
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginLink {
    /// Single-use URL to redirect the merchant to
    pub url: String,
}
