//! # Connected Account Operations
//!
//! Read-side account operations: listing the platform's connected accounts
//! and minting one-time Express dashboard login links.

use crate::client::StripeClient;
use connect_core::{AccountPage, ConnectResult, LoginLink};
use tracing::{info, instrument};

impl StripeClient {
    /// List connected accounts, first page only.
    pub async fn list_accounts(&self, limit: u8) -> ConnectResult<AccountPage> {
        let request = self
            .authorize(self.http.get(self.endpoint("/v1/accounts")))
            .query(&[("limit", limit.to_string())]);

        self.dispatch(request).await
    }

    /// Create a one-time Express dashboard login link for a connected
    /// account. The link is single-use and expires quickly; it is meant to
    /// be redirected to immediately.
    #[instrument(skip(self, redirect_url))]
    pub async fn create_login_link(
        &self,
        account_id: &str,
        redirect_url: &str,
    ) -> ConnectResult<LoginLink> {
        let path = format!("/v1/accounts/{}/login_links", account_id);
        let request = self
            .authorize(self.http.post(self.endpoint(&path)))
            .form(&[("redirect_url", redirect_url)]);

        let link: LoginLink = self.dispatch(request).await?;
        info!("Created dashboard login link for {}", account_id);

        Ok(link)
    }
}
