//! Admin session flag kept in a client-side cookie.
//!
//! The flag only gates which page sections are shown; it is a boolean with no
//! expiry and no server-side record.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use super::auth::AuthProvider;

pub const SESSION_COOKIE: &str = "isAdminLoggedIn";
const LOGGED_IN: &str = "true";

pub const LOGIN_FAILED: &str = "Username atau password salah!";

/// Whether the flag is set; any value other than `"true"` is logged out.
pub fn check_login(jar: &CookieJar) -> bool {
    jar.get(SESSION_COOKIE)
        .map(|cookie| cookie.value() == LOGGED_IN)
        .unwrap_or(false)
}

/// Set the flag when the credential pair matches.
pub fn login(
    auth: &dyn AuthProvider,
    jar: CookieJar,
    username: &str,
    password: &str,
) -> Result<CookieJar, &'static str> {
    if !auth.verify(username, password) {
        tracing::warn!("Rejected admin login for {:?}", username);
        return Err(LOGIN_FAILED);
    }
    tracing::info!("Admin session opened");
    Ok(jar.add(flag_cookie(LOGGED_IN)))
}

/// Clear the flag once the user confirmed; `None` means not confirmed.
pub fn logout(jar: CookieJar, confirmed: bool) -> Option<CookieJar> {
    if !confirmed {
        return None;
    }
    tracing::info!("Admin session closed");
    Some(jar.remove(flag_cookie("")))
}

fn flag_cookie(value: &str) -> Cookie<'static> {
    Cookie::build((SESSION_COOKIE, value.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .build()
}
