//! Handler for the token verification endpoint.

use axum::{Json, extract::State};

use crate::api::dto::auth::VerifyResponse;
use crate::api::middleware::auth::SessionToken;
use crate::error::AppError;
use crate::state::AppState;

/// Verifies the caller's session token and returns the user it belongs to.
///
/// # Endpoint
///
/// `GET /api/auth/verify`
///
/// The token is read from the `token` cookie or, failing that, from an
/// `Authorization: Bearer` header (see [`SessionToken`]).
///
/// # Response
///
/// ```json
/// { "success": true, "user": { "id": 1, "email": "demo@teken.app", "name": "Demo User" } }
/// ```
///
/// # Errors
///
/// `401` when no token is supplied, the signature/expiry check fails, or the
/// encoded identifier no longer resolves. All three cases return the same
/// body.
pub async fn verify_handler(
    State(state): State<AppState>,
    SessionToken(token): SessionToken,
) -> Result<Json<VerifyResponse>, AppError> {
    let token = token.ok_or(AppError::Unauthenticated)?;

    let user = state.auth_service.verify(&token).await?;

    Ok(Json(VerifyResponse {
        success: true,
        user,
    }))
}
