//! Carries a contact notice across the post/redirect/get hop in a signed
//! cookie. The cookie is removed as soon as a page reads it.

use std::str::FromStr;

use axum_extra::extract::cookie::{Cookie, SameSite, SignedCookieJar};
use getdev_contact::{Notice, Severity};

pub const NOTICE_COOKIE: &str = "getdev_notice";

pub fn put(jar: SignedCookieJar, notice: &Notice) -> SignedCookieJar {
    let cookie = Cookie::build((NOTICE_COOKIE, notice.severity.to_string()))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax);

    jar.add(cookie)
}

pub fn take(jar: SignedCookieJar) -> (SignedCookieJar, Option<Notice>) {
    let Some(cookie) = jar.get(NOTICE_COOKIE) else {
        return (jar, None);
    };

    let notice = match Severity::from_str(cookie.value()) {
        Ok(severity) => Some(Notice::from(severity)),
        Err(_) => {
            tracing::debug!(value = cookie.value(), "Ignoring unknown notice cookie");
            None
        }
    };

    let jar = jar.remove(Cookie::build(NOTICE_COOKIE).path("/"));

    (jar, notice)
}
