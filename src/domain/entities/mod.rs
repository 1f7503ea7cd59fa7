//! Core domain entities.

mod user;

pub use user::{PublicUser, User};
