//! Session token extraction from cookie or Authorization header.

use axum::{
    extract::FromRequestParts,
    http::{header::COOKIE, request::Parts},
};
use axum_auth::AuthBearer;
use std::convert::Infallible;

use crate::utils::cookie::token_from_cookie_header;

/// Extractor for the session token of an incoming request.
///
/// # Token Sources
///
/// 1. `token` cookie (set by the login handler)
/// 2. `Authorization: Bearer <token>` header (set by page scripts re-attaching
///    a cached token)
///
/// The cookie wins when both are present. Extraction never rejects; handlers
/// decide how to treat a missing token, which keeps the 401 body shape under
/// their control.
pub struct SessionToken(pub Option<String>);

impl<S> FromRequestParts<S> for SessionToken
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Infallible> {
        let from_cookie = parts
            .headers
            .get(COOKIE)
            .and_then(|header| header.to_str().ok())
            .and_then(token_from_cookie_header);

        let token = match from_cookie {
            Some(token) => Some(token),
            None => AuthBearer::from_request_parts(parts, &())
                .await
                .ok()
                .map(|AuthBearer(token)| token),
        };

        Ok(Self(token))
    }
}
