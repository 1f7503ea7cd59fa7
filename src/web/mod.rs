//! Web layer for the browser-facing pages.
//!
//! Serves the login and dashboard shells via Askama templates; the page
//! behavior lives in the scripts under `static/js/`.
//!
//! # Modules
//!
//! - [`handlers`] - Template rendering handlers
//! - [`middleware`] - Cookie guard for the dashboard
//! - [`routes`] - Page route configuration

pub mod handlers;
pub mod middleware;
pub mod routes;
