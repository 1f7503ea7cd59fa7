//! Login page handler.

use askama::Template;
use askama_web::WebTemplate;
use axum::response::IntoResponse;

/// Template for the login page.
///
/// Renders `templates/login.html`: the credential form shell. All behavior
/// (validation, submission, redirect-forward when already authenticated)
/// lives in `static/js/app.js`.
#[derive(Template, WebTemplate)]
#[template(path = "login.html")]
struct LoginTemplate {}

/// Renders the login page.
///
/// # Endpoint
///
/// `GET /`
pub async fn login_page_handler() -> impl IntoResponse {
    LoginTemplate {}
}
