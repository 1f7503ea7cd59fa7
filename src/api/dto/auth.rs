//! DTOs for the authentication endpoints.

use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::domain::entities::PublicUser;

/// Request body for `POST /api/auth/login`.
///
/// The same rules are enforced client-side before submission; this is the
/// authoritative check.
#[derive(Debug, Deserialize, Validate)]
pub struct LoginRequest {
    #[validate(email(message = "Please enter a valid email"))]
    pub email: String,

    #[validate(length(min = 6, message = "Password must be at least 6 characters"))]
    pub password: String,
}

/// Successful login response: user projection plus the raw token for
/// client-side caching and header-based reuse. The same token is also set as
/// an httpOnly cookie.
#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub success: bool,
    pub message: String,
    pub user: PublicUser,
    pub token: String,
}

/// Successful verification response.
#[derive(Debug, Serialize)]
pub struct VerifyResponse {
    pub success: bool,
    pub user: PublicUser,
}

/// Generic `{success, message}` response (logout).
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub success: bool,
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_login_request_validation() {
        let valid = LoginRequest {
            email: "demo@teken.app".to_string(),
            password: "demo123".to_string(),
        };
        assert!(valid.validate().is_ok());

        let bad_email = LoginRequest {
            email: "not-an-email".to_string(),
            password: "demo123".to_string(),
        };
        assert!(bad_email.validate().is_err());

        let short_password = LoginRequest {
            email: "demo@teken.app".to_string(),
            password: "short".to_string(),
        };
        assert!(short_password.validate().is_err());

        let empty = LoginRequest {
            email: String::new(),
            password: String::new(),
        };
        assert!(empty.validate().is_err());
    }
}
