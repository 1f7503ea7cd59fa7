//! User entity and its public projection.

use serde::Serialize;

/// A user account record.
///
/// The credential is stored as an argon2 PHC-format hash; the plaintext
/// password never leaves the login request handler.
#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub password_hash: String,
    pub name: String,
}

impl User {
    /// Creates a new User instance.
    pub fn new(id: i64, email: String, password_hash: String, name: String) -> Self {
        Self {
            id,
            email,
            password_hash,
            name,
        }
    }
}

/// The subset of a user record safe to return to a client.
///
/// Excludes credential material. This is the only user shape that crosses
/// the API boundary.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct PublicUser {
    pub id: i64,
    pub email: String,
    pub name: String,
}

impl From<&User> for PublicUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id,
            email: user.email.clone(),
            name: user.name.clone(),
        }
    }
}
