//! Repository trait for user account lookup.

use crate::domain::entities::User;
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for user account access.
///
/// The user store is seeded once at startup and read-only at runtime, so the
/// interface exposes lookups only.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryUserRepository`] - seeded in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Finds a user by email address.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError>;

    /// Finds a user by identifier.
    ///
    /// Used when resolving the subject of a decoded token.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unavailable.
    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError>;
}
