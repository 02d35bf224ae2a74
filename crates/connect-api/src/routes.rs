//! # Routes
//!
//! Router assembly. The webhook route reads the raw request body, so no
//! body-rewriting middleware may sit in front of it.

use crate::handlers;
use crate::state::AppState;
use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};

/// Create the application router.
///
/// Routes:
/// - GET  `/` - fixed JSON placeholder
/// - GET  `/config` - publishable key, pricing, connected accounts
/// - POST `/create-checkout-session` - redirect to hosted checkout
/// - GET  `/express-dashboard-link` - redirect to one-time dashboard link
/// - POST `/webhook` - signed payment events
///
/// When a static asset directory is configured it is served as the
/// fallback, so the JSON routes always win.
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let mut router = Router::new()
        .route("/", get(handlers::index))
        .route("/config", get(handlers::get_config))
        .route(
            "/create-checkout-session",
            post(handlers::create_checkout_session),
        )
        .route(
            "/express-dashboard-link",
            get(handlers::express_dashboard_link),
        )
        .route("/webhook", post(handlers::webhook));

    if let Some(ref dir) = state.config.static_dir {
        router = router.fallback_service(ServeDir::new(dir));
    }

    router
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
