//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::domain::entities::User;
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: One or more components degraded
///
/// # Components Checked
///
/// 1. **User store**: the seeded account list is present and non-empty
/// 2. **Token signing**: a probe token round-trips through issue and verify
pub async fn health_handler(
    State(state): State<AppState>,
) -> Result<Json<HealthResponse>, (StatusCode, Json<HealthResponse>)> {
    let store_check = check_user_store(&state);
    let signing_check = check_token_signing(&state);

    let all_healthy = store_check.status == "ok" && signing_check.status == "ok";

    let response = HealthResponse {
        status: if all_healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            user_store: store_check,
            token_signing: signing_check,
        },
    };

    if all_healthy {
        Ok(Json(response))
    } else {
        Err((StatusCode::SERVICE_UNAVAILABLE, Json(response)))
    }
}

/// Checks that the seeded user store is populated.
fn check_user_store(state: &AppState) -> CheckStatus {
    let count = state.user_repository.len();

    if count > 0 {
        CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("Seeded users: {count}")),
        }
    } else {
        CheckStatus {
            status: "error".to_string(),
            message: Some("User store is empty".to_string()),
        }
    }
}

/// Checks token signing by round-tripping a probe token.
fn check_token_signing(state: &AppState) -> CheckStatus {
    let probe = User::new(
        0,
        "health-probe@localhost".to_string(),
        String::new(),
        "probe".to_string(),
    );

    let result = state
        .token_service
        .issue(&probe)
        .and_then(|token| state.token_service.verify(&token));

    match result {
        Ok(_) => CheckStatus {
            status: "ok".to_string(),
            message: Some("Issue/verify round-trip succeeded".to_string()),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Token round-trip failed: {e:?}")),
        },
    }
}
