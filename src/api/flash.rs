//! One-shot notices carried across a redirect in a cookie.
//!
//! The cookie holds a rejection code, never free text, and is cleared by
//! the first page that reads it.

use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};

use crate::config::{FLASH_COOKIE_NAME, SITE_PREFIX};
use crate::domain::SignupRejection;

/// Queue a notice for the next page load.
pub fn push(jar: CookieJar, reason: SignupRejection) -> CookieJar {
    jar.add(
        Cookie::build((FLASH_COOKIE_NAME, reason.code()))
            .path(SITE_PREFIX)
            .http_only(true)
            .same_site(SameSite::Lax),
    )
}

/// Read and clear the pending notice, if any.
///
/// An unrecognised code is dropped.
pub fn take(jar: CookieJar) -> (CookieJar, Option<SignupRejection>) {
    let Some(code) = jar.get(FLASH_COOKIE_NAME).map(|c| c.value().to_string()) else {
        return (jar, None);
    };

    let reason = match code.parse::<SignupRejection>() {
        Ok(reason) => Some(reason),
        Err(unknown) => {
            tracing::debug!("Discarding unknown flash code {:?}", unknown.0);
            None
        }
    };

    let jar = jar.remove(Cookie::build(FLASH_COOKIE_NAME).path(SITE_PREFIX));
    (jar, reason)
}
