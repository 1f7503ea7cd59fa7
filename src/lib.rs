//! # Teken Auth
//!
//! A minimal demonstration login service built with Axum and JWT sessions.
//!
//! ## Architecture
//!
//! This crate follows Clean Architecture principles with clear layer separation:
//!
//! - **Domain Layer** ([`domain`]) - User entity and repository trait
//! - **Application Layer** ([`application`]) - Credential checks and the token lifecycle
//! - **Infrastructure Layer** ([`infrastructure`]) - Seeded in-memory user store
//! - **API Layer** ([`api`]) - JSON auth endpoints, DTOs, and middleware
//! - **Web Layer** ([`web`]) - Login and dashboard pages
//!
//! ## Features
//!
//! - Email/password login against a single seeded account
//! - Signed, time-limited session tokens (24h by default)
//! - Token delivery via httpOnly cookie and response body
//! - Stateless verification: signature and expiry only, no session store
//! - Rate limiting and structured request logging
//!
//! ## Quick Start
//!
//! ```bash
//! # Optional; a development default is used when unset
//! export JWT_SECRET="some-long-random-value"
//!
//! # Start the service
//! cargo run
//! ```
//!
//! Then open <http://localhost:3000/> and log in with `demo@teken.app` /
//! `demo123`.
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via
//! [`config::Config`]. See the [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;
pub mod utils;

pub mod config;
pub mod server;

pub mod routes;
pub mod web;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::{AuthService, TokenService};
    pub use crate::domain::entities::{PublicUser, User};
    pub use crate::error::AppError;
    pub use crate::infrastructure::persistence::InMemoryUserRepository;
    pub use crate::state::AppState;
}
