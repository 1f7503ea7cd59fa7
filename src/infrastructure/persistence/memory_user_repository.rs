//! In-memory user store seeded at startup.

use anyhow::{Context, Result};
use argon2::{
    Argon2,
    password_hash::{PasswordHasher, SaltString, rand_core::OsRng},
};
use async_trait::async_trait;

use crate::domain::entities::User;
use crate::domain::repositories::UserRepository;
use crate::error::AppError;

/// User repository backed by a fixed in-memory list.
///
/// The list is built once at construction and never mutated; no locking is
/// required. A real deployment would replace this with a persistent
/// credential store.
pub struct InMemoryUserRepository {
    users: Vec<User>,
}

impl InMemoryUserRepository {
    /// Creates a repository over an explicit user list.
    pub fn new(users: Vec<User>) -> Self {
        Self { users }
    }

    /// Creates a repository seeded with a single account.
    ///
    /// The plaintext `password` from configuration is hashed with argon2
    /// here, at startup; only the hash is retained.
    ///
    /// # Errors
    ///
    /// Returns an error if password hashing fails.
    pub fn with_seed_user(email: &str, password: &str, name: &str) -> Result<Self> {
        let salt = SaltString::generate(&mut OsRng);
        let password_hash = Argon2::default()
            .hash_password(password.as_bytes(), &salt)
            .map_err(|e| anyhow::anyhow!(e))
            .context("Failed to hash seed user password")?
            .to_string();

        let user = User::new(1, email.to_string(), password_hash, name.to_string());

        Ok(Self::new(vec![user]))
    }

    /// Number of seeded accounts.
    pub fn len(&self) -> usize {
        self.users.len()
    }

    pub fn is_empty(&self) -> bool {
        self.users.is_empty()
    }
}

#[async_trait]
impl UserRepository for InMemoryUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(self.users.iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_id(&self, id: i64) -> Result<Option<User>, AppError> {
        Ok(self.users.iter().find(|u| u.id == id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argon2::password_hash::{PasswordHash, PasswordVerifier};

    #[tokio::test]
    async fn test_seeded_repository_lookups() {
        let repo =
            InMemoryUserRepository::with_seed_user("demo@teken.app", "demo123", "Demo User")
                .unwrap();

        assert_eq!(repo.len(), 1);

        let by_email = repo.find_by_email("demo@teken.app").await.unwrap().unwrap();
        assert_eq!(by_email.id, 1);
        assert_eq!(by_email.name, "Demo User");

        let by_id = repo.find_by_id(1).await.unwrap().unwrap();
        assert_eq!(by_id.email, "demo@teken.app");

        assert!(repo.find_by_email("other@teken.app").await.unwrap().is_none());
        assert!(repo.find_by_id(2).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_seed_password_is_hashed() {
        let repo =
            InMemoryUserRepository::with_seed_user("demo@teken.app", "demo123", "Demo User")
                .unwrap();

        let user = repo.find_by_id(1).await.unwrap().unwrap();

        assert_ne!(user.password_hash, "demo123");

        let parsed = PasswordHash::new(&user.password_hash).unwrap();
        assert!(
            Argon2::default()
                .verify_password(b"demo123", &parsed)
                .is_ok()
        );
        assert!(
            Argon2::default()
                .verify_password(b"wrong", &parsed)
                .is_err()
        );
    }
}
