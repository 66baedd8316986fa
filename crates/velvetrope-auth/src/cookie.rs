//! Auth-cookie builders.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use time::Duration;

/// Cookie name for the session token.
pub const AUTH_TOKEN: &str = "auth_token";

/// Session lifetime in seconds (7 days): JWT expiry, session-row expiry,
/// and cookie Max-Age all use this value.
pub const SESSION_TTL_SECS: u64 = 604800;

/// Set the session cookie on the jar.
///
/// `secure` should be true everywhere except local development over plain
/// HTTP.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use velvetrope_auth::cookie::{set_auth_cookie, AUTH_TOKEN};
///
/// let jar = CookieJar::new();
/// let jar = set_auth_cookie(jar, "token_value".to_string(), "example.com".to_string(), true);
/// let cookie = jar.get(AUTH_TOKEN).unwrap();
/// assert_eq!(cookie.path(), Some("/"));
/// assert_eq!(cookie.domain(), Some("example.com"));
/// assert_eq!(cookie.max_age(), Some(time::Duration::seconds(604800)));
/// assert!(cookie.http_only().unwrap_or(false));
/// assert!(cookie.secure().unwrap_or(false));
/// ```
pub fn set_auth_cookie(jar: CookieJar, value: String, domain: String, secure: bool) -> CookieJar {
    let cookie = Cookie::build((AUTH_TOKEN, value))
        .path("/")
        .domain(domain)
        .max_age(Duration::seconds(SESSION_TTL_SECS as i64))
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}

/// Clear the session cookie by setting Max-Age to 0.
///
/// ```
/// use axum_extra::extract::cookie::CookieJar;
/// use velvetrope_auth::cookie::{clear_auth_cookie, set_auth_cookie, AUTH_TOKEN};
///
/// let jar = CookieJar::new();
/// let jar = set_auth_cookie(jar, "a".to_string(), "example.com".to_string(), true);
/// let jar = clear_auth_cookie(jar, "example.com".to_string(), true);
/// let cookie = jar.get(AUTH_TOKEN).unwrap();
/// assert_eq!(cookie.max_age(), Some(time::Duration::ZERO));
/// ```
pub fn clear_auth_cookie(jar: CookieJar, domain: String, secure: bool) -> CookieJar {
    let cookie = Cookie::build((AUTH_TOKEN, ""))
        .path("/")
        .domain(domain)
        .max_age(Duration::ZERO)
        .http_only(true)
        .secure(secure)
        .same_site(SameSite::Lax)
        .build();
    jar.add(cookie)
}
