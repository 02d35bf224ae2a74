//! Integration tests for the Stripe client against a mock API server.

use connect_stripe::{CheckoutSessionParams, StripeClient, StripeConfig};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn test_client(base_url: &str) -> StripeClient {
    let config = StripeConfig::new("sk_test_abc", "pk_test_xyz", "whsec_secret")
        .with_api_base_url(base_url);
    StripeClient::new(config).expect("client")
}

fn session_params() -> CheckoutSessionParams {
    CheckoutSessionParams {
        product_name: "Guitar lesson".to_string(),
        product_image_url: Some("https://i.ibb.co/2PNy7yB/guitar.png".to_string()),
        unit_amount: 1000,
        currency: "usd".to_string(),
        quantity: 2,
        application_fee_amount: 200,
        success_url: "https://example.com/success.html?session_id={CHECKOUT_SESSION_ID}"
            .to_string(),
        cancel_url: "https://example.com/canceled.html".to_string(),
        connected_account: "acct_123".to_string(),
    }
}

#[tokio::test]
async fn create_checkout_session_scopes_to_connected_account() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .and(header("Stripe-Account", "acct_123"))
        .and(header("Authorization", "Bearer sk_test_abc"))
        // Bracketed form keys are percent-encoded on the wire.
        .and(body_string_contains("application_fee_amount%5D=200"))
        .and(body_string_contains("unit_amount%5D=1000"))
        .and(body_string_contains("mode=payment"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "id": "cs_test_123",
            "object": "checkout.session",
            "url": "https://checkout.stripe.com/c/pay/cs_test_123"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let session = client
        .create_checkout_session(&session_params())
        .await
        .expect("session created");

    assert_eq!(session.id, "cs_test_123");
    assert_eq!(session.url, "https://checkout.stripe.com/c/pay/cs_test_123");
}

#[tokio::test]
async fn create_checkout_session_surfaces_provider_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/checkout/sessions"))
        .respond_with(ResponseTemplate::new(400).set_body_json(json!({
            "error": {
                "message": "No such account: acct_bad",
                "type": "invalid_request_error"
            }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let mut params = session_params();
    params.connected_account = "acct_bad".to_string();

    let err = client
        .create_checkout_session(&params)
        .await
        .expect_err("provider error");

    assert_eq!(err.status_code(), 502);
    assert!(err.to_string().contains("No such account"));
}

#[tokio::test]
async fn list_accounts_requests_first_page() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/v1/accounts"))
        .and(query_param("limit", "10"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "list",
            "data": [
                {"id": "acct_a", "type": "express", "charges_enabled": true},
                {"id": "acct_b", "type": "express", "charges_enabled": false}
            ],
            "has_more": false
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let page = client.list_accounts(10).await.expect("accounts listed");

    assert_eq!(page.data.len(), 2);
    assert_eq!(page.data[0].id, "acct_a");
    assert!(page.data[0].charges_enabled);
    assert!(!page.has_more);
}

#[tokio::test]
async fn create_login_link_posts_redirect_url() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1/accounts/acct_123/login_links"))
        .and(body_string_contains("redirect_url="))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "object": "login_link",
            "url": "https://connect.stripe.com/express/acct_123/xyz"
        })))
        .expect(1)
        .mount(&server)
        .await;

    let client = test_client(&server.uri());
    let link = client
        .create_login_link("acct_123", "http://localhost:4242")
        .await
        .expect("login link");

    assert_eq!(link.url, "https://connect.stripe.com/express/acct_123/xyz");
}
