//! Auth cookie construction and parsing.
//!
//! The session token travels in an `httpOnly` cookie named `token`. Handlers
//! build `Set-Cookie` values with these helpers; middleware and the verify
//! endpoint parse the incoming `Cookie` header with [`token_from_cookie_header`].

/// Name of the session token cookie.
pub const AUTH_COOKIE: &str = "token";

/// Builds a `Set-Cookie` value carrying the session token.
///
/// Attributes: `HttpOnly` (not readable from page scripts), `Path=/`,
/// `SameSite=Lax`, `Max-Age` matching the token lifetime, and `Secure` when
/// the service is configured for HTTPS.
pub fn auth_cookie(token: &str, max_age_seconds: u64, secure: bool) -> String {
    let mut cookie = format!(
        "{AUTH_COOKIE}={token}; HttpOnly; Path=/; Max-Age={max_age_seconds}; SameSite=Lax"
    );
    if secure {
        cookie.push_str("; Secure");
    }
    cookie
}

/// Builds a `Set-Cookie` value that clears the session token.
///
/// `Max-Age=0` instructs the browser to drop the cookie immediately.
pub fn clear_auth_cookie(secure: bool) -> String {
    auth_cookie("", 0, secure)
}

/// Extracts the session token from a `Cookie` header value.
///
/// Handles multiple cookies by splitting on semicolons and matching the
/// `token` key; other cookies are ignored. Returns `None` when the token
/// cookie is absent or empty.
pub fn token_from_cookie_header(header: &str) -> Option<String> {
    header.split(';').find_map(|cookie| {
        let mut parts = cookie.trim().splitn(2, '=');
        match (parts.next(), parts.next()) {
            (Some(AUTH_COOKIE), Some(value)) if !value.is_empty() => Some(value.to_string()),
            _ => None,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_auth_cookie_attributes() {
        let cookie = auth_cookie("abc.def.ghi", 86_400, false);

        assert!(cookie.starts_with("token=abc.def.ghi;"));
        assert!(cookie.contains("HttpOnly"));
        assert!(cookie.contains("Path=/"));
        assert!(cookie.contains("Max-Age=86400"));
        assert!(cookie.contains("SameSite=Lax"));
        assert!(!cookie.contains("Secure"));
    }

    #[test]
    fn test_auth_cookie_secure_flag() {
        let cookie = auth_cookie("t", 60, true);
        assert!(cookie.ends_with("; Secure"));
    }

    #[test]
    fn test_clear_auth_cookie() {
        let cookie = clear_auth_cookie(false);
        assert!(cookie.starts_with("token=;"));
        assert!(cookie.contains("Max-Age=0"));
    }

    #[test]
    fn test_parse_single_cookie() {
        assert_eq!(
            token_from_cookie_header("token=abc123"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_parse_among_multiple_cookies() {
        assert_eq!(
            token_from_cookie_header("theme=dark; token=abc123; lang=en"),
            Some("abc123".to_string())
        );
    }

    #[test]
    fn test_parse_missing_or_empty() {
        assert_eq!(token_from_cookie_header("theme=dark; lang=en"), None);
        assert_eq!(token_from_cookie_header("token="), None);
        assert_eq!(token_from_cookie_header(""), None);
    }

    #[test]
    fn test_parse_preserves_equals_in_value() {
        // JWT padding or other values may contain '='
        assert_eq!(
            token_from_cookie_header("token=a=b"),
            Some("a=b".to_string())
        );
    }
}
