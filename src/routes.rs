//! Top-level router configuration combining API and web routes.
//!
//! # Route Structure
//!
//! - `GET  /`            - Login page (public)
//! - `GET  /dashboard`   - Dashboard page (cookie-guarded)
//! - `GET  /health`      - Health check (public)
//! - `/api/auth/*`       - Authentication API (JSON)
//! - `/static/*`         - Page scripts and stylesheet
//!
//! # Middleware
//!
//! - **Tracing** - Structured request/response logging
//! - **Rate limiting** - Per-IP token bucket, stricter on the auth API
//! - **Cookie guard** - Redirects unauthenticated dashboard requests to `/`
//! - **Path normalization** - Trailing slash handling

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::{rate_limit, tracing};
use crate::state::AppState;
use crate::web;
use crate::web::middleware::web_auth;
use axum::routing::get;
use axum::{Router, middleware};
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::services::ServeDir;

/// Constructs the application router with all routes and middleware.
///
/// # Arguments
///
/// - `state` - shared application state injected into all handlers
/// - `behind_proxy` - when `true`, rate limiting reads client IP from
///   `X-Forwarded-For` / `X-Real-IP` headers instead of the peer socket
///   address; enable only behind a trusted reverse proxy
pub fn app_router(state: AppState, behind_proxy: bool) -> NormalizePath<Router> {
    let api_router = rate_limit::apply_secure(api::routes::auth_routes(), behind_proxy);

    let web_protected = rate_limit::apply(
        web::routes::protected_routes().route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        )),
        behind_proxy,
    );

    let web_public = rate_limit::apply(web::routes::public_routes(), behind_proxy);

    let router = Router::new()
        .merge(web_protected)
        .merge(web_public)
        .route("/health", get(health_handler))
        .nest("/api/auth", api_router)
        .nest_service("/static", ServeDir::new("static"))
        .with_state(state)
        .layer(tracing::layer());

    NormalizePathLayer::trim_trailing_slash().layer(router)
}
