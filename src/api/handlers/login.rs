//! Handler for the login endpoint.

use axum::{
    Json,
    extract::State,
    http::header::SET_COOKIE,
    response::{IntoResponse, Response},
};
use validator::Validate;

use crate::api::dto::auth::{LoginRequest, LoginResponse};
use crate::error::AppError;
use crate::state::AppState;
use crate::utils::cookie::auth_cookie;

/// Authenticates an email/password pair and starts a session.
///
/// # Endpoint
///
/// `POST /api/auth/login`
///
/// # Request Body
///
/// ```json
/// { "email": "demo@teken.app", "password": "demo123" }
/// ```
///
/// # Response
///
/// On success, `200` with the public user projection and the raw token, plus
/// a `Set-Cookie` header carrying the same token as an httpOnly cookie:
///
/// ```json
/// {
///   "success": true,
///   "message": "Login successful",
///   "user": { "id": 1, "email": "demo@teken.app", "name": "Demo User" },
///   "token": "<jwt>"
/// }
/// ```
///
/// # Errors
///
/// - `400` when the payload fails validation
/// - `401 {"success":false,"message":"Invalid credentials"}` for unknown
///   email or wrong password; both cases return the identical body
pub async fn login_handler(
    State(state): State<AppState>,
    Json(payload): Json<LoginRequest>,
) -> Result<Response, AppError> {
    payload.validate()?;

    let (user, token) = state
        .auth_service
        .login(&payload.email, &payload.password)
        .await?;

    let cookie = auth_cookie(&token, state.token_ttl_seconds, state.cookie_secure);

    let body = LoginResponse {
        success: true,
        message: "Login successful".to_string(),
        user,
        token,
    };

    Ok(([(SET_COOKIE, cookie)], Json(body)).into_response())
}
