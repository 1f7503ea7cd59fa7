//! HTML page rendering handlers.

mod dashboard;
mod login;

pub use dashboard::dashboard_page_handler;
pub use login::login_page_handler;
