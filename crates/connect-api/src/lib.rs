//! # connect-api
//!
//! HTTP layer for connect-checkout-rs.
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Fixed JSON placeholder |
//! | GET | `/config` | Publishable key, price, connected accounts |
//! | POST | `/create-checkout-session` | 303 to hosted checkout |
//! | GET | `/express-dashboard-link` | 303 to one-time dashboard link |
//! | POST | `/webhook` | Signed payment events |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
