//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AuthService, TokenService};
use crate::infrastructure::persistence::InMemoryUserRepository;

/// Shared state for all routes.
///
/// Everything here is read-only after startup; cloning the state clones
/// `Arc` handles only.
#[derive(Clone)]
pub struct AppState {
    pub auth_service: Arc<AuthService<InMemoryUserRepository>>,
    pub user_repository: Arc<InMemoryUserRepository>,
    pub token_service: Arc<TokenService>,
    /// `Secure` attribute for the auth cookie.
    pub cookie_secure: bool,
    /// `Max-Age` for the auth cookie, matching the token TTL.
    pub token_ttl_seconds: u64,
}

impl AppState {
    pub fn new(
        user_repository: Arc<InMemoryUserRepository>,
        token_service: Arc<TokenService>,
        cookie_secure: bool,
        token_ttl_seconds: u64,
    ) -> Self {
        let auth_service = Arc::new(AuthService::new(
            user_repository.clone(),
            token_service.clone(),
        ));

        Self {
            auth_service,
            user_repository,
            token_service,
            cookie_secure,
            token_ttl_seconds,
        }
    }
}
