//! Session token issuance and verification.
//!
//! Tokens are HS256 JWTs carrying the user identifier, email, and expiry.
//! Validity is determined purely by signature and expiry; the service keeps
//! no record of issued tokens.

use chrono::{Duration, Utc};
use jsonwebtoken::{DecodingKey, EncodingKey, Header, Validation, decode, encode};
use serde::{Deserialize, Serialize};

use crate::domain::entities::User;
use crate::error::AppError;

/// Claims encoded into a session token.
#[derive(Debug, Serialize, Deserialize)]
pub struct Claims {
    /// Subject (user id).
    pub sub: i64,
    /// Email at issuance time.
    pub email: String,
    /// Issued at (Unix timestamp).
    pub iat: usize,
    /// Expiry (Unix timestamp).
    pub exp: usize,
}

/// Issues and verifies signed session tokens.
pub struct TokenService {
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    ttl_seconds: u64,
}

impl TokenService {
    /// Creates a token service signing with `secret` and issuing tokens valid
    /// for `ttl_seconds`.
    pub fn new(secret: &str, ttl_seconds: u64) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(secret.as_bytes()),
            decoding_key: DecodingKey::from_secret(secret.as_bytes()),
            ttl_seconds,
        }
    }

    /// Issues a signed token for the given user.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if claim serialization or signing fails.
    pub fn issue(&self, user: &User) -> Result<String, AppError> {
        let now = Utc::now();
        let expires = now + Duration::seconds(self.ttl_seconds as i64);

        let claims = Claims {
            sub: user.id,
            email: user.email.clone(),
            iat: now.timestamp() as usize,
            exp: expires.timestamp() as usize,
        };

        encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("token encoding failed: {e}")))
    }

    /// Decodes a token and checks its signature and expiry.
    ///
    /// Expiry is checked with zero leeway: a token is rejected from the exact
    /// moment its `exp` timestamp elapses.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::InvalidToken`] when the token is malformed, the
    /// signature does not verify, or the expiry has elapsed.
    pub fn verify(&self, token: &str) -> Result<Claims, AppError> {
        let mut validation = Validation::default();
        validation.leeway = 0;

        decode::<Claims>(token, &self.decoding_key, &validation)
            .map(|data| data.claims)
            .map_err(|e| AppError::invalid_token(e.to_string()))
    }
}
