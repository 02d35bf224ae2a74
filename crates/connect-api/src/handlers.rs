//! # Request Handlers
//!
//! Axum handlers for the five routes. Each handler marshals request data
//! and configuration into a Stripe API call; provider failures are
//! recovered locally and surfaced as a generic JSON error so no vendor
//! detail leaks to the client.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Query, State},
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Redirect},
    Json,
};
use connect_core::{application_fee_amount, dispatch_event, CheckoutRequest, ConnectError};
use connect_stripe::CheckoutSessionParams;
use serde::{Deserialize, Serialize};
use tracing::{error, info, instrument, warn};

/// First-page size for the connected-account listing
const ACCOUNT_PAGE_LIMIT: u8 = 10;

/// Error body returned to clients; intentionally generic
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

/// Map an error to its HTTP status with the generic body, logging the
/// detailed cause server-side only.
fn error_response(err: ConnectError) -> (StatusCode, Json<ErrorResponse>) {
    error!("request failed: {}", err);
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    (
        status,
        Json(ErrorResponse {
            error: "Request failed".to_string(),
        }),
    )
}

/// `GET /`
pub async fn index() -> impl IntoResponse {
    Json(serde_json::json!({"some_key": "some_value"}))
}

/// `GET /config`
///
/// Publishable key, pricing, and the first page of connected accounts.
pub async fn get_config(
    State(state): State<AppState>,
) -> Result<Json<serde_json::Value>, (StatusCode, Json<ErrorResponse>)> {
    let page = state
        .stripe
        .list_accounts(ACCOUNT_PAGE_LIMIT)
        .await
        .map_err(error_response)?;

    Ok(Json(serde_json::json!({
        "publicKey": state.stripe.publishable_key(),
        "basePrice": state.config.base_price,
        "currency": state.config.currency,
        "accounts": page.data,
    })))
}

/// `POST /create-checkout-session`
///
/// Creates a direct-charge checkout session on the requested connected
/// account and redirects the customer to the hosted checkout page.
#[instrument(skip(state, request), fields(account = %request.account, quantity = request.quantity))]
pub async fn create_checkout_session(
    State(state): State<AppState>,
    Json(request): Json<CheckoutRequest>,
) -> Result<Redirect, (StatusCode, Json<ErrorResponse>)> {
    request.validate().map_err(error_response)?;

    let params = CheckoutSessionParams {
        product_name: state.product.name.clone(),
        product_image_url: state.product.image_url.clone(),
        unit_amount: state.config.base_price,
        currency: state.config.currency.clone(),
        quantity: request.quantity,
        application_fee_amount: application_fee_amount(state.config.base_price, request.quantity),
        success_url: state.config.success_url(),
        cancel_url: state.config.cancel_url(),
        connected_account: request.account,
    };

    let session = state
        .stripe
        .create_checkout_session(&params)
        .await
        .map_err(error_response)?;

    Ok(Redirect::to(&session.url))
}

/// Query parameters for the dashboard-link route
#[derive(Debug, Deserialize)]
pub struct DashboardLinkQuery {
    pub account_id: String,
}

/// `GET /express-dashboard-link?account_id=<id>`
///
/// Mints a one-time Express dashboard login link and redirects to it,
/// returning the merchant to this server's origin afterwards.
pub async fn express_dashboard_link(
    State(state): State<AppState>,
    Query(query): Query<DashboardLinkQuery>,
) -> Result<Redirect, (StatusCode, Json<ErrorResponse>)> {
    let link = state
        .stripe
        .create_login_link(&query.account_id, &state.config.domain)
        .await
        .map_err(error_response)?;

    Ok(Redirect::to(&link.url))
}

/// `POST /webhook`
///
/// Verifies the event signature against the raw body bytes, then runs
/// fulfillment for checkout-completion events. Responses carry no body in
/// either direction: 400 for anything unverifiable, 200 once the signature
/// checks out, whatever the event type.
pub async fn webhook(State(state): State<AppState>, headers: HeaderMap, body: Bytes) -> StatusCode {
    let Some(signature) = headers
        .get("stripe-signature")
        .and_then(|v| v.to_str().ok())
    else {
        return StatusCode::BAD_REQUEST;
    };

    let event = match state.stripe.verify_event(&body, signature) {
        Ok(event) => event,
        Err(e) => {
            warn!("webhook rejected: {}", e);
            return StatusCode::BAD_REQUEST;
        }
    };

    info!(
        "Received webhook: id={}, type={}, account={:?}",
        event.id,
        event.kind.as_type(),
        event.account
    );

    dispatch_event(state.fulfillment.as_ref(), &event);

    StatusCode::OK
}
