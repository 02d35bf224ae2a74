//! # connect-core
//!
//! Core types for the connect-checkout-rs direct-charge server.
//!
//! This crate provides:
//! - `CheckoutRequest` / `CheckoutSession` for the checkout flow
//! - `application_fee_amount` for the platform's 10% cut
//! - `ConnectedAccount` and `LoginLink` read models
//! - `ConnectEvent`, `EventKind`, and `SessionDetails` for webhooks
//! - `Fulfillment` trait and event dispatch
//! - `ConnectError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use connect_core::{application_fee_amount, CheckoutRequest};
//!
//! let request = CheckoutRequest { quantity: 2, account: "acct_123".into() };
//! request.validate()?;
//!
//! // Base price 1000 (cents), quantity 2 -> the platform keeps 200.
//! let fee = application_fee_amount(1000, request.quantity);
//! ```

pub mod account;
pub mod checkout;
pub mod error;
pub mod event;
pub mod fulfill;
pub mod product;

// Re-exports for convenience
pub use account::{AccountPage, ConnectedAccount, LoginLink};
pub use checkout::{
    application_fee_amount, CheckoutRequest, CheckoutSession, APPLICATION_FEE_PERCENT,
};
pub use error::{ConnectError, ConnectResult};
pub use event::{ConnectEvent, EventKind, SessionDetails};
pub use fulfill::{dispatch_event, Fulfillment, LogFulfillment};
pub use product::Product;
