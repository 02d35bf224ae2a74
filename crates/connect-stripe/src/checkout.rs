//! # Checkout Session Creation
//!
//! Creates Stripe Checkout sessions scoped to a connected account. The
//! charge lands directly on the connected account, with the platform's
//! application fee deducted through the payment intent.

use crate::client::StripeClient;
use connect_core::{CheckoutSession, ConnectError, ConnectResult};
use tracing::{debug, info, instrument};
use uuid::Uuid;

/// Parameters for a direct-charge checkout session.
///
/// Every field is named and validated before anything hits the wire; there
/// is exactly one line item because this server sells a single catalog item.
#[derive(Debug, Clone)]
pub struct CheckoutSessionParams {
    /// Product display name on the hosted page
    pub product_name: String,

    /// Optional product image URL
    pub product_image_url: Option<String>,

    /// Unit amount, in the smallest currency unit
    pub unit_amount: i64,

    /// ISO 4217 currency code, lowercase
    pub currency: String,

    /// Units purchased
    pub quantity: u32,

    /// Platform application fee, in the smallest currency unit
    pub application_fee_amount: i64,

    /// Redirect after successful payment; may carry the
    /// `{CHECKOUT_SESSION_ID}` placeholder Stripe substitutes
    pub success_url: String,

    /// Redirect when the customer backs out
    pub cancel_url: String,

    /// Connected account the charge is made on behalf of
    pub connected_account: String,
}

impl CheckoutSessionParams {
    /// Validate field invariants before the request is sent.
    pub fn validate(&self) -> ConnectResult<()> {
        if self.quantity == 0 {
            return Err(ConnectError::InvalidRequest(
                "quantity must be positive".to_string(),
            ));
        }
        if self.unit_amount <= 0 {
            return Err(ConnectError::InvalidRequest(
                "unit_amount must be positive".to_string(),
            ));
        }
        if self.application_fee_amount < 0 {
            return Err(ConnectError::InvalidRequest(
                "application_fee_amount must not be negative".to_string(),
            ));
        }
        if self.connected_account.is_empty() {
            return Err(ConnectError::InvalidRequest(
                "connected_account is required".to_string(),
            ));
        }
        Ok(())
    }

    /// Encode into Stripe's bracketed form parameters.
    fn to_form(&self) -> Vec<(String, String)> {
        let mut form: Vec<(String, String)> = vec![
            ("mode".to_string(), "payment".to_string()),
            (
                "payment_method_types[0]".to_string(),
                "card".to_string(),
            ),
            ("success_url".to_string(), self.success_url.clone()),
            ("cancel_url".to_string(), self.cancel_url.clone()),
            (
                "line_items[0][price_data][currency]".to_string(),
                self.currency.clone(),
            ),
            (
                "line_items[0][price_data][unit_amount]".to_string(),
                self.unit_amount.to_string(),
            ),
            (
                "line_items[0][price_data][product_data][name]".to_string(),
                self.product_name.clone(),
            ),
            (
                "line_items[0][quantity]".to_string(),
                self.quantity.to_string(),
            ),
            (
                "payment_intent_data[application_fee_amount]".to_string(),
                self.application_fee_amount.to_string(),
            ),
        ];

        if let Some(ref image) = self.product_image_url {
            form.push((
                "line_items[0][price_data][product_data][images][0]".to_string(),
                image.clone(),
            ));
        }

        form
    }
}

impl StripeClient {
    /// Create a checkout session as a direct charge on the connected account.
    #[instrument(skip(self, params), fields(account = %params.connected_account))]
    pub async fn create_checkout_session(
        &self,
        params: &CheckoutSessionParams,
    ) -> ConnectResult<CheckoutSession> {
        params.validate()?;

        let form = params.to_form();
        debug!(
            "Creating checkout session: quantity={}, fee={}",
            params.quantity, params.application_fee_amount
        );

        let request = self
            .authorize(self.http.post(self.endpoint("/v1/checkout/sessions")))
            .header("Stripe-Account", &params.connected_account)
            .header("Idempotency-Key", Uuid::new_v4().to_string())
            .form(&form);

        let session: CheckoutSession = self.dispatch(request).await?;

        info!(
            "Created checkout session: id={}, account={}",
            session.id, params.connected_account
        );

        Ok(session)
    }
}
