//! Dashboard page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the dashboard page.
///
/// Renders `templates/dashboard.html`. The greeting, the verify-on-load
/// guard, and the logout action live in `static/js/dashboard.js`.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard.html")]
struct DashboardTemplate {}

/// Renders the dashboard page.
///
/// # Endpoint
///
/// `GET /dashboard`
///
/// Guarded by [`crate::web::middleware::web_auth`]; unauthenticated requests
/// are redirected to `/` before this handler runs.
pub async fn dashboard_page_handler() -> impl IntoResponse {
    DashboardTemplate {}
}
