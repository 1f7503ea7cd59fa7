//! Authentication service: credential checks and the session token lifecycle.

use std::sync::Arc;

use argon2::{
    Argon2,
    password_hash::{PasswordHash, PasswordVerifier},
};

use crate::application::services::token_service::TokenService;
use crate::domain::entities::PublicUser;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// Service implementing login and token verification.
///
/// Password checks use argon2 verification against the stored PHC hash.
/// Unknown email and wrong password both surface as
/// [`AppError::InvalidCredentials`], so callers cannot probe which accounts
/// exist.
///
/// Logout has no server-side counterpart here: tokens are never stored, so
/// invalidation is purely the client dropping its cookie and cache. True
/// revocation would need a denylist or a short-lived-token + refresh design,
/// which this demo deliberately omits.
pub struct AuthService<R: UserRepository> {
    repository: Arc<R>,
    tokens: Arc<TokenService>,
}

impl<R: UserRepository> AuthService<R> {
    /// Creates a new authentication service.
    ///
    /// # Arguments
    ///
    /// - `repository` - user store, seeded at startup and read-only after
    /// - `tokens` - token service keyed with the configured signing secret
    pub fn new(repository: Arc<R>, tokens: Arc<TokenService>) -> Self {
        Self { repository, tokens }
    }

    /// Authenticates an email/password pair and issues a session token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidCredentials`] when the email is unknown or
    /// the password does not match the stored hash. Both failures produce the
    /// same error.
    pub async fn login(
        &self,
        email: &str,
        password: &str,
    ) -> Result<(PublicUser, String), AppError> {
        let user = self
            .repository
            .find_by_email(email)
            .await?
            .ok_or(AppError::InvalidCredentials)?;

        let parsed_hash = PasswordHash::new(&user.password_hash)
            .map_err(|e| AppError::internal(format!("stored password hash is invalid: {e}")))?;

        Argon2::default()
            .verify_password(password.as_bytes(), &parsed_hash)
            .map_err(|_| AppError::InvalidCredentials)?;

        let token = self.tokens.issue(&user)?;

        tracing::info!(user_id = user.id, "login successful");

        Ok((PublicUser::from(&user), token))
    }

    /// Verifies a session token and resolves its subject.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidToken`] when the signature or expiry check
    /// fails, and [`AppError::UserNotFound`] when the encoded identifier no
    /// longer resolves against the user store.
    pub async fn verify(&self, token: &str) -> Result<PublicUser, AppError> {
        let claims = self.tokens.verify(token)?;

        let user = self
            .repository
            .find_by_id(claims.sub)
            .await?
            .ok_or(AppError::UserNotFound {
                user_id: claims.sub,
            })?;

        Ok(PublicUser::from(&user))
    }
}
