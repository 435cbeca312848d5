//! The `username` cookie: the only session state this application has.
//!
//! A registered user is whoever carries a `username` cookie whose value is a
//! token minted by [`inkpot_core::make_token`]. There is no server-side
//! session store, no expiry, and no logout.
//!
//! The token digest is unkeyed, so any party that knows the algorithm can
//! mint a cookie for an arbitrary name. This mirrors the cookie format the
//! application is compatible with and is not suitable for real
//! authentication.

use axum::http::{HeaderMap, HeaderValue, header};
use inkpot_core::{check_token, make_token};

/// Name of the session cookie.
pub const USERNAME_COOKIE: &str = "username";

/// Read and verify the `username` cookie from request headers.
///
/// A missing header, missing cookie, or tampered token all read as
/// "no session".
pub fn read_username(headers: &HeaderMap) -> Option<String> {
    let raw = cookie_value(headers, USERNAME_COOKIE)?;
    check_token(&raw).map(str::to_string)
}

/// Build a `Set-Cookie` value carrying the signed username, `Path=/`.
///
/// Returns `None` only if the username cannot appear in a header value;
/// validated usernames (`[a-zA-Z0-9_-]`) always can.
pub fn username_cookie(username: &str) -> Option<HeaderValue> {
    let cookie = format!("{USERNAME_COOKIE}={}; Path=/", make_token(username));
    HeaderValue::from_str(&cookie).ok()
}

/// Find a cookie by name in the request's `Cookie` header(s).
fn cookie_value(headers: &HeaderMap, name: &str) -> Option<String> {
    for header in headers.get_all(header::COOKIE) {
        let Ok(raw) = header.to_str() else { continue };
        for pair in raw.split(';') {
            if let Some((key, value)) = pair.trim().split_once('=') {
                if key == name {
                    return Some(value.to_string());
                }
            }
        }
    }
    None
}
