//! Handler for the logout endpoint.

use axum::{
    Json,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};

use crate::api::dto::auth::MessageResponse;
use crate::state::AppState;
use crate::utils::cookie::clear_auth_cookie;

/// Ends the client session by clearing the auth cookie.
///
/// # Endpoint
///
/// `POST /api/auth/logout`
///
/// The service holds no session state, so this is purely a client-side
/// effect: the cookie is expired and page scripts drop their local cache.
/// A token captured before logout remains valid until its expiry.
pub async fn logout_handler(State(state): State<AppState>) -> Response {
    let cookie = clear_auth_cookie(state.cookie_secure);

    let body = MessageResponse {
        success: true,
        message: "Logout successful".to_string(),
    };

    ([(SET_COOKIE, cookie)], Json(body)).into_response()
}
