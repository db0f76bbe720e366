//! Session cookie handling.
//!
//! The gateway holds the backend's bearer token in an HTTP-only cookie so
//! browser script never needs to see it. The cookie is set on successful
//! login, cleared on logout, and never refreshed in between.

use axum::http::{HeaderMap, HeaderValue, header};
use cookie::time::Duration;
use cookie::{Cookie, SameSite};

/// Cookie holding the backend bearer token.
pub const SESSION_COOKIE: &str = "ges_token";

/// Cookie lifetime: 7 days.
const SESSION_MAX_AGE_SECS: i64 = 60 * 60 * 24 * 7;

/// Extract the session token from a request's `Cookie` header, if any.
pub fn token_from_headers(headers: &HeaderMap) -> Option<String> {
    let raw = headers.get(header::COOKIE)?.to_str().ok()?;
    Cookie::split_parse(raw.to_owned())
        .filter_map(Result::ok)
        .find(|c| c.name() == SESSION_COOKIE)
        .map(|c| c.value().to_owned())
}

/// Build the `Set-Cookie` value that installs `token` as the session.
pub fn session_cookie(token: &str, secure: bool) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, token.to_owned()))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .path("/")
        .max_age(Duration::seconds(SESSION_MAX_AGE_SECS))
        .build()
}

/// Build the `Set-Cookie` value that clears the session (`Max-Age=0`).
pub fn removal_cookie() -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, ""))
        .path("/")
        .max_age(Duration::ZERO)
        .build()
}

/// Encode a cookie as a `Set-Cookie` header value.
///
/// Tokens are header-safe in practice; a token that is not (embedded
/// control characters) is dropped rather than corrupting the response.
pub fn to_header_value(cookie: &Cookie<'_>) -> Option<HeaderValue> {
    match HeaderValue::from_str(&cookie.to_string()) {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!(cookie = cookie.name(), "cookie value not header-safe; skipping");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn headers_with_cookie(value: &str) -> HeaderMap {
        let mut headers = HeaderMap::new();
        headers.insert(header::COOKIE, HeaderValue::from_str(value).unwrap());
        headers
    }

    #[test]
    fn reads_token_from_cookie_header() {
        let headers = headers_with_cookie("ges_token=abc.def.ghi");
        assert_eq!(token_from_headers(&headers).as_deref(), Some("abc.def.ghi"));
    }

    #[test]
    fn finds_token_among_other_cookies() {
        let headers = headers_with_cookie("theme=dark; ges_token=tok; lang=en");
        assert_eq!(token_from_headers(&headers).as_deref(), Some("tok"));
    }

    #[test]
    fn missing_cookie_yields_none() {
        assert_eq!(token_from_headers(&HeaderMap::new()), None);
        let headers = headers_with_cookie("theme=dark");
        assert_eq!(token_from_headers(&headers), None);
    }

    #[test]
    fn session_cookie_carries_spec_flags() {
        let cookie = session_cookie("tok", true);
        assert_eq!(cookie.name(), SESSION_COOKIE);
        assert_eq!(cookie.value(), "tok");
        assert_eq!(cookie.http_only(), Some(true));
        assert_eq!(cookie.secure(), Some(true));
        assert_eq!(cookie.same_site(), Some(SameSite::Lax));
        assert_eq!(cookie.path(), Some("/"));
        assert_eq!(cookie.max_age(), Some(Duration::seconds(604_800)));
    }

    #[test]
    fn secure_flag_follows_environment() {
        assert_eq!(session_cookie("tok", false).secure(), Some(false));
    }

    #[test]
    fn removal_cookie_expires_immediately() {
        let cookie = removal_cookie();
        assert_eq!(cookie.value(), "");
        assert_eq!(cookie.max_age(), Some(Duration::ZERO));
        assert_eq!(cookie.path(), Some("/"));
    }
}
