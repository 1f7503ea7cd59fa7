//! Cookie-based authentication middleware for the dashboard page.

use axum::{
    extract::{Request, State},
    http::header::COOKIE,
    middleware::Next,
    response::{Redirect, Response},
};

use crate::state::AppState;
use crate::utils::cookie::token_from_cookie_header;

/// Guards dashboard requests using the `token` cookie.
///
/// # Authentication Flow
///
/// 1. Extract the `token` cookie from the request
/// 2. Verify it via [`crate::application::services::AuthService`]
/// 3. On success, continue to the handler
/// 4. On failure or missing token, redirect to `/`
///
/// # Differences from the API surface
///
/// The verify endpoint returns `401` JSON; this middleware redirects to the
/// login page instead, which is the useful behavior in a browser context.
/// The page scripts apply the same guard client-side with the cached token,
/// so a stale browser tab also bounces back to the login page.
pub async fn layer(
    State(st): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, Redirect> {
    let token = req
        .headers()
        .get(COOKIE)
        .and_then(|cookie_header| cookie_header.to_str().ok())
        .and_then(token_from_cookie_header);

    match token {
        Some(token) => match st.auth_service.verify(&token).await {
            Ok(_) => Ok(next.run(req).await),
            Err(_) => Err(Redirect::to("/")),
        },
        None => Err(Redirect::to("/")),
    }
}
