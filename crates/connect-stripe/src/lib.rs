//! # connect-stripe
//!
//! Stripe Connect integration for connect-checkout-rs.
//!
//! The [`StripeClient`] wraps the handful of REST endpoints this server
//! needs:
//!
//! - `POST /v1/checkout/sessions`: direct-charge checkout on a connected
//!   account (`Stripe-Account` header), with the platform's application fee
//! - `GET /v1/accounts`: first page of connected accounts
//! - `POST /v1/accounts/{id}/login_links`: one-time Express dashboard links
//!
//! plus webhook signature verification over raw body bytes.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use connect_stripe::{CheckoutSessionParams, StripeClient};
//!
//! let stripe = StripeClient::from_env()?;
//!
//! let session = stripe.create_checkout_session(&CheckoutSessionParams {
//!     product_name: "Guitar lesson".into(),
//!     product_image_url: None,
//!     unit_amount: 1000,
//!     currency: "usd".into(),
//!     quantity: 2,
//!     application_fee_amount: 200,
//!     success_url: "https://example.com/success.html?session_id={CHECKOUT_SESSION_ID}".into(),
//!     cancel_url: "https://example.com/canceled.html".into(),
//!     connected_account: "acct_123".into(),
//! }).await?;
//!
//! // Redirect the customer to session.url
//! ```

pub mod accounts;
pub mod checkout;
pub mod client;
pub mod config;
pub mod webhook;

// Re-exports
pub use checkout::CheckoutSessionParams;
pub use client::StripeClient;
pub use config::StripeConfig;
pub use webhook::SIGNATURE_TOLERANCE_SECS;
