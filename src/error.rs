//! Application error type and HTTP response mapping.
//!
//! Authentication failures carry a precise variant internally but collapse to
//! a generic message on the wire, so a caller cannot distinguish which check
//! failed (user enumeration resistance). The precise reason is logged
//! server-side only.

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;

/// JSON body for error responses: `{"success": false, "message": "..."}`.
#[derive(Serialize)]
struct ErrorBody {
    success: bool,
    message: String,
}

#[derive(Debug)]
pub enum AppError {
    /// Unknown email or wrong password during login.
    InvalidCredentials,
    /// No token supplied on a request that requires one.
    Unauthenticated,
    /// Token signature or expiry check failed.
    InvalidToken { reason: String },
    /// Token decoded, but its subject no longer resolves to a user.
    UserNotFound { user_id: i64 },
    /// Request payload failed validation.
    Validation { message: String },
    /// Unexpected failure; details are logged, not returned.
    Internal { message: String },
}

impl AppError {
    pub fn invalid_token(reason: impl Into<String>) -> Self {
        Self::InvalidToken {
            reason: reason.into(),
        }
    }

    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal {
            message: message.into(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            AppError::InvalidCredentials => {
                tracing::debug!("login rejected: invalid credentials");
                (StatusCode::UNAUTHORIZED, "Invalid credentials".to_string())
            }
            AppError::Unauthenticated => {
                tracing::debug!("request rejected: no token supplied");
                (StatusCode::UNAUTHORIZED, "Not authenticated".to_string())
            }
            AppError::InvalidToken { reason } => {
                tracing::debug!(%reason, "request rejected: invalid token");
                (StatusCode::UNAUTHORIZED, "Not authenticated".to_string())
            }
            AppError::UserNotFound { user_id } => {
                tracing::debug!(user_id, "request rejected: token subject not found");
                (StatusCode::UNAUTHORIZED, "Not authenticated".to_string())
            }
            AppError::Validation { message } => (StatusCode::BAD_REQUEST, message),
            AppError::Internal { message } => {
                tracing::error!(%message, "internal error");
                (StatusCode::INTERNAL_SERVER_ERROR, "Server error".to_string())
            }
        };

        let body = ErrorBody {
            success: false,
            message,
        };

        (status, Json(body)).into_response()
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(errors: validator::ValidationErrors) -> Self {
        // Surface the first field message; the client validates the same
        // rules before submitting, so this is a fallback path.
        let message = errors
            .field_errors()
            .iter()
            .flat_map(|(_, errs)| errs.iter())
            .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
            .unwrap_or_else(|| "Invalid request".to_string());

        Self::Validation { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status_of(err: AppError) -> StatusCode {
        err.into_response().status()
    }

    #[test]
    fn test_auth_failures_map_to_401() {
        assert_eq!(
            status_of(AppError::InvalidCredentials),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::Unauthenticated),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::invalid_token("expired")),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(
            status_of(AppError::UserNotFound { user_id: 42 }),
            StatusCode::UNAUTHORIZED
        );
    }

    #[test]
    fn test_validation_maps_to_400() {
        assert_eq!(
            status_of(AppError::validation("Password too short")),
            StatusCode::BAD_REQUEST
        );
    }

    #[test]
    fn test_internal_maps_to_500() {
        assert_eq!(
            status_of(AppError::internal("boom")),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }
}
