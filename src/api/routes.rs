//! API route configuration.

use crate::api::handlers::{login_handler, logout_handler, verify_handler};
use crate::state::AppState;
use axum::{
    Router,
    routing::{get, post},
};

/// Authentication routes, nested under `/api/auth`.
///
/// # Endpoints
///
/// - `POST /login`  - Authenticate and start a session
/// - `POST /logout` - Clear the auth cookie
/// - `GET  /verify` - Check the current token and return its user
///
/// None of these require prior authentication; `verify` performs its own
/// token check so it can return the API error shape instead of a redirect.
pub fn auth_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(login_handler))
        .route("/logout", post(logout_handler))
        .route("/verify", get(verify_handler))
}
