//! # Connect-Checkout RS
//!
//! Direct-charge checkout server for connected merchant accounts.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export STRIPE_SECRET_KEY=sk_test_...
//! export STRIPE_PUBLISHABLE_KEY=pk_test_...
//! export STRIPE_WEBHOOK_SECRET=whsec_...
//! export BASE_PRICE=1000
//! export DOMAIN=http://localhost:4242
//!
//! # Run the server
//! connect-checkout
//! ```

use connect_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state
    let state = AppState::new()?;

    let addr = state.config.socket_addr();

    info!("Domain: {}", state.config.domain);
    info!(
        "Catalog item: '{}' at {} {} per unit",
        state.product.name, state.config.base_price, state.config.currency
    );

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Connect-checkout listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
