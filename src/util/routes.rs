//! Route classification and `redirect` parameter handling.
//!
//! SYSTEM CONTEXT
//! ==============
//! Unauthenticated visitors are bounced to sign-in with their original path in
//! `?redirect=`, and sign-in sends them back. Public/auth routes are exempt
//! from the bounce so the redirect can never loop.

#[cfg(test)]
#[path = "routes_test.rs"]
mod routes_test;

use url::form_urlencoded;

pub const HOME_PATH: &str = "/";
pub const SIGN_IN_PATH: &str = "/sign-in";

/// Path fragments that mark a route as reachable without a session.
pub const PUBLIC_ROUTE_MARKERS: [&str; 4] = ["sign-in", "sign-up", "forgot-password", "otp"];

/// Whether `path` is a public/auth route (substring match).
pub fn is_public_route(path: &str) -> bool {
    PUBLIC_ROUTE_MARKERS.iter().any(|marker| path.contains(marker))
}

/// Sign-in URL that returns the user to `current_path` afterwards.
pub fn sign_in_redirect(current_path: &str) -> String {
    let encoded: String = form_urlencoded::byte_serialize(current_path.as_bytes()).collect();
    format!("{SIGN_IN_PATH}?redirect={encoded}")
}

/// Post-sign-in destination taken from a `?redirect=` query string.
///
/// Only same-origin absolute paths are honored; anything else (missing value,
/// `//host`, `https://...`, backslash tricks) falls back to the home page.
pub fn redirect_target(search: &str) -> String {
    let query = search.trim_start_matches('?');
    form_urlencoded::parse(query.as_bytes())
        .find(|(key, _)| key == "redirect")
        .map(|(_, value)| value.into_owned())
        .filter(|value| is_local_path(value))
        .unwrap_or_else(|| HOME_PATH.to_owned())
}

fn is_local_path(value: &str) -> bool {
    value.starts_with('/')
        && !value.starts_with("//")
        && !value.contains('\\')
        && !value.chars().any(char::is_control)
}
