use std::sync::Arc;

use reqwest::cookie::{CookieStore, Jar};
use reqwest::Url;

use crate::gateway::application::ports::outgoing::CredentialProvider;

/// Cookie the backend sets for anti-forgery protection.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Reads the CSRF token out of the same jar the HTTP client sends cookies
/// from, so the header value always matches what rides along on the request.
pub struct CookieJarCredentials {
    jar: Arc<Jar>,
    origin: Url,
}

impl CookieJarCredentials {
    pub fn new(jar: Arc<Jar>, origin: Url) -> Self {
        Self { jar, origin }
    }
}

impl CredentialProvider for CookieJarCredentials {
    fn csrf_token(&self) -> Option<String> {
        let header = self.jar.cookies(&self.origin)?;
        let raw = header.to_str().ok()?;
        cookie_value(raw, CSRF_COOKIE)
    }
}

/// Extract one cookie's value from a `name=value; other=value` header string.
/// Empty values count as absent.
pub(crate) fn cookie_value(header: &str, name: &str) -> Option<String> {
    header
        .split(';')
        .filter_map(|pair| {
            let (key, value) = pair.trim().split_once('=')?;
            (key == name).then(|| value.to_string())
        })
        .find(|value| !value.is_empty())
}
