//! HTTP request handlers for the REST API.

mod health;
mod login;
mod logout;
mod verify;

pub use health::health_handler;
pub use login::login_handler;
pub use logout::logout_handler;
pub use verify::verify_handler;
