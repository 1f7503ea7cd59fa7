#![allow(dead_code)]

use std::sync::Arc;

use axum::{
    Router, middleware,
    routing::{get, post},
};
use teken_auth::api::handlers::{health_handler, login_handler, logout_handler, verify_handler};
use teken_auth::application::services::TokenService;
use teken_auth::infrastructure::persistence::InMemoryUserRepository;
use teken_auth::state::AppState;
use teken_auth::web::handlers::{dashboard_page_handler, login_page_handler};
use teken_auth::web::middleware::web_auth;

pub const TEST_SECRET: &str = "test-signing-secret";
pub const TEST_TTL: u64 = 86_400;

/// Builds state with the seeded demo account, matching the default config.
pub fn create_test_state() -> AppState {
    let repository = Arc::new(
        InMemoryUserRepository::with_seed_user("demo@teken.app", "demo123", "Demo User")
            .expect("seed user"),
    );
    let tokens = Arc::new(TokenService::new(TEST_SECRET, TEST_TTL));

    AppState::new(repository, tokens, false, TEST_TTL)
}

/// Auth API routes plus health, without rate limiting.
pub fn api_router(state: AppState) -> Router {
    Router::new()
        .route("/api/auth/login", post(login_handler))
        .route("/api/auth/logout", post(logout_handler))
        .route("/api/auth/verify", get(verify_handler))
        .route("/health", get(health_handler))
        .with_state(state)
}

/// Page routes with the cookie guard on the dashboard.
pub fn web_router(state: AppState) -> Router {
    let protected = Router::new()
        .route("/dashboard", get(dashboard_page_handler))
        .route_layer(middleware::from_fn_with_state(
            state.clone(),
            web_auth::layer,
        ));

    Router::new()
        .merge(protected)
        .route("/", get(login_page_handler))
        .with_state(state)
}

/// A token signed with the test secret for the given user id.
pub fn token_for(id: i64, email: &str) -> String {
    let user = teken_auth::domain::entities::User::new(
        id,
        email.to_string(),
        String::new(),
        "Test".to_string(),
    );
    TokenService::new(TEST_SECRET, TEST_TTL)
        .issue(&user)
        .expect("token issuance")
}

/// Extracts the `token` cookie value from a `Set-Cookie` header string.
pub fn cookie_value(set_cookie: &str) -> Option<String> {
    let pair = set_cookie.split(';').next()?;
    let mut parts = pair.splitn(2, '=');
    match (parts.next(), parts.next()) {
        (Some("token"), Some(value)) => Some(value.to_string()),
        _ => None,
    }
}
