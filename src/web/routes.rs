//! Web page route configuration.

use crate::state::AppState;
use crate::web::handlers::{dashboard_page_handler, login_page_handler};
use axum::{Router, routing::get};

/// Protected page routes requiring a valid auth cookie.
///
/// Guarded via [`crate::web::middleware::web_auth`].
///
/// # Endpoints
///
/// - `GET /dashboard` - Dashboard page
pub fn protected_routes() -> Router<AppState> {
    Router::new().route("/dashboard", get(dashboard_page_handler))
}

/// Public page routes without authentication.
///
/// # Endpoints
///
/// - `GET /` - Login page
pub fn public_routes() -> Router<AppState> {
    Router::new().route("/", get(login_page_handler))
}
