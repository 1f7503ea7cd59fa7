//! HTTP server initialization and runtime setup.
//!
//! Builds the seeded user store, wires services into shared state, and runs
//! the Axum server until shutdown.

use crate::application::services::TokenService;
use crate::config::Config;
use crate::infrastructure::persistence::InMemoryUserRepository;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::Result;
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - In-memory user store, seeded with the configured demo account
/// - Token service keyed with the configured signing secret
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - Seed user construction fails
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let user_repository = Arc::new(InMemoryUserRepository::with_seed_user(
        &config.demo_user_email,
        &config.demo_user_password,
        &config.demo_user_name,
    )?);
    tracing::info!("User store seeded with {}", config.demo_user_email);

    let token_service = Arc::new(TokenService::new(
        &config.jwt_secret,
        config.token_ttl_seconds,
    ));

    let state = AppState::new(
        user_repository,
        token_service,
        config.cookie_secure,
        config.token_ttl_seconds,
    );

    let app = app_router(state, config.behind_proxy);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(
        listener,
        ServiceExt::<Request>::into_make_service_with_connect_info::<SocketAddr>(app),
    )
    .with_graceful_shutdown(shutdown_signal())
    .await?;

    Ok(())
}

/// Resolves when the process receives Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {e}");
    }
    tracing::info!("Shutdown signal received");
}
