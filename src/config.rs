//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `JWT_SECRET` - Token signing secret. Falls back to a hardcoded
//!   development default; a warning is logged when the fallback is used.
//!   Never deploy with the default.
//! - `TOKEN_TTL_SECONDS` - Token lifetime (default: 86400, i.e. 24h)
//! - `COOKIE_SECURE` - Adds `Secure` to the auth cookie (default: false)
//! - `BEHIND_PROXY` - Rate limiting reads client IP from `X-Forwarded-For` /
//!   `X-Real-IP` headers. Enable only behind a trusted reverse proxy.
//! - `DEMO_USER_EMAIL` / `DEMO_USER_PASSWORD` / `DEMO_USER_NAME` - The single
//!   seeded account (defaults: `demo@teken.app` / `demo123` / `Demo User`)

use anyhow::Result;
use std::env;

/// Development-only fallback signing secret.
pub const DEFAULT_JWT_SECRET: &str = "your-secret-key-change-this";

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
    /// HMAC signing secret for session tokens.
    pub jwt_secret: String,
    /// Token (and auth cookie) lifetime in seconds.
    pub token_ttl_seconds: u64,
    /// When true, the auth cookie is marked `Secure` (HTTPS only).
    pub cookie_secure: bool,
    /// When true, rate limiting reads client IP from X-Forwarded-For / X-Real-IP headers.
    /// Enable only when the service is behind a trusted reverse proxy.
    pub behind_proxy: bool,
    pub demo_user_email: String,
    pub demo_user_password: String,
    pub demo_user_name: String,
}

impl Config {
    /// Loads configuration from environment variables.
    pub fn from_env() -> Self {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let jwt_secret =
            env::var("JWT_SECRET").unwrap_or_else(|_| DEFAULT_JWT_SECRET.to_string());

        let token_ttl_seconds = env::var("TOKEN_TTL_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(86_400);

        let cookie_secure = env::var("COOKIE_SECURE")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let behind_proxy = env::var("BEHIND_PROXY")
            .map(|v| v.eq_ignore_ascii_case("true") || v == "1")
            .unwrap_or(false);

        let demo_user_email =
            env::var("DEMO_USER_EMAIL").unwrap_or_else(|_| "demo@teken.app".to_string());
        let demo_user_password =
            env::var("DEMO_USER_PASSWORD").unwrap_or_else(|_| "demo123".to_string());
        let demo_user_name =
            env::var("DEMO_USER_NAME").unwrap_or_else(|_| "Demo User".to_string());

        Self {
            listen_addr,
            log_level,
            log_format,
            jwt_secret,
            token_ttl_seconds,
            cookie_secure,
            behind_proxy,
            demo_user_email,
            demo_user_password,
            demo_user_name,
        }
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `jwt_secret` is empty
    /// - `token_ttl_seconds` is zero
    /// - the seed account is malformed
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if self.jwt_secret.is_empty() {
            anyhow::bail!("JWT_SECRET must not be empty");
        }

        if self.token_ttl_seconds == 0 {
            anyhow::bail!("TOKEN_TTL_SECONDS must be greater than 0");
        }

        if !self.demo_user_email.contains('@') {
            anyhow::bail!(
                "DEMO_USER_EMAIL must be an email address, got '{}'",
                self.demo_user_email
            );
        }

        if self.demo_user_password.len() < 6 {
            anyhow::bail!("DEMO_USER_PASSWORD must be at least 6 characters");
        }

        Ok(())
    }

    /// Returns whether the insecure development signing secret is in use.
    pub fn uses_default_secret(&self) -> bool {
        self.jwt_secret == DEFAULT_JWT_SECRET
    }

    /// Prints configuration summary (without sensitive data).
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!("  Token TTL: {}s", self.token_ttl_seconds);
        tracing::info!("  Cookie secure: {}", self.cookie_secure);
        tracing::info!("  Seed user: {}", self.demo_user_email);

        if self.uses_default_secret() {
            tracing::warn!(
                "JWT_SECRET not set; using the built-in development secret. \
                 Do not run this configuration outside local development."
            );
        }
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env();
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn base_config() -> Config {
        Config {
            listen_addr: "0.0.0.0:3000".to_string(),
            log_level: "info".to_string(),
            log_format: "text".to_string(),
            jwt_secret: "test-secret".to_string(),
            token_ttl_seconds: 86_400,
            cookie_secure: false,
            behind_proxy: false,
            demo_user_email: "demo@teken.app".to_string(),
            demo_user_password: "demo123".to_string(),
            demo_user_name: "Demo User".to_string(),
        }
    }

    #[test]
    fn test_config_validation() {
        let mut config = base_config();
        assert!(config.validate().is_ok());

        config.log_format = "invalid".to_string();
        assert!(config.validate().is_err());

        config.log_format = "json".to_string();
        assert!(config.validate().is_ok());

        config.listen_addr = "3000".to_string();
        assert!(config.validate().is_err());
        config.listen_addr = "0.0.0.0:3000".to_string();

        config.jwt_secret = String::new();
        assert!(config.validate().is_err());
        config.jwt_secret = "test-secret".to_string();

        config.token_ttl_seconds = 0;
        assert!(config.validate().is_err());
        config.token_ttl_seconds = 60;

        config.demo_user_email = "not-an-email".to_string();
        assert!(config.validate().is_err());
        config.demo_user_email = "demo@teken.app".to_string();

        config.demo_user_password = "short".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_default_secret_detection() {
        let mut config = base_config();
        assert!(!config.uses_default_secret());

        config.jwt_secret = DEFAULT_JWT_SECRET.to_string();
        assert!(config.uses_default_secret());
    }

    #[test]
    #[serial]
    fn test_from_env_defaults() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("JWT_SECRET");
            env::remove_var("TOKEN_TTL_SECONDS");
            env::remove_var("DEMO_USER_EMAIL");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "0.0.0.0:3000");
        assert_eq!(config.token_ttl_seconds, 86_400);
        assert_eq!(config.demo_user_email, "demo@teken.app");
        assert!(config.uses_default_secret());
    }

    #[test]
    #[serial]
    fn test_from_env_overrides() {
        // SAFETY: Tests are run serially due to #[serial], so no concurrent access
        unsafe {
            env::set_var("LISTEN", "127.0.0.1:8080");
            env::set_var("JWT_SECRET", "from-env");
            env::set_var("TOKEN_TTL_SECONDS", "3600");
            env::set_var("COOKIE_SECURE", "true");
        }

        let config = Config::from_env();

        assert_eq!(config.listen_addr, "127.0.0.1:8080");
        assert_eq!(config.jwt_secret, "from-env");
        assert_eq!(config.token_ttl_seconds, 3600);
        assert!(config.cookie_secure);
        assert!(!config.uses_default_secret());

        // Cleanup
        unsafe {
            env::remove_var("LISTEN");
            env::remove_var("JWT_SECRET");
            env::remove_var("TOKEN_TTL_SECONDS");
            env::remove_var("COOKIE_SECURE");
        }
    }
}
