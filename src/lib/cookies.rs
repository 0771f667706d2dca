//! Cookie helpers used by logout and by the CSRF token fallback.
//!
//! Clearing works the way a page script can: every visible cookie is rewritten
//! with an expiry in the past and `path=/`. `HttpOnly` cookies and cookies
//! scoped to another path or domain are not visible or not matched, so they
//! survive; the server-side logout is what invalidates the session.

use super::errors::AppError;

/// Expiry date written to delete a cookie.
pub const EXPIRED: &str = "Thu, 01 Jan 1970 00:00:00 GMT";

/// Read and write access to `document.cookie`.
pub trait CookieJar {
    /// Returns the raw `name=value; name2=value2` string.
    fn cookie_string(&self) -> Result<String, AppError>;
    /// Writes a single `Set-Cookie` style directive.
    fn set_cookie(&self, directive: &str) -> Result<(), AppError>;
}

/// Names of all cookies in a `document.cookie` string, in order.
pub fn cookie_names(raw: &str) -> Vec<String> {
    raw.split(';')
        .map(|entry| entry.split_once('=').map_or(entry, |(name, _)| name).trim())
        .filter(|name| !name.is_empty())
        .map(str::to_string)
        .collect()
}

/// Value of the first cookie called `name`.
pub fn find_cookie(raw: &str, name: &str) -> Option<String> {
    raw.split(';')
        .filter_map(|entry| entry.split_once('='))
        .find(|(key, _)| key.trim() == name)
        .map(|(_, value)| value.trim().to_string())
}

/// Directive that deletes `name` at the root path.
pub fn expire_directive(name: &str) -> String {
    format!("{name}=;expires={EXPIRED};path=/")
}

/// Expires every cookie visible to the page and returns how many were rewritten.
/// Never fails: unreadable jars and rejected writes are logged and skipped.
pub fn clear_all_cookies(jar: &impl CookieJar) -> usize {
    let raw = match jar.cookie_string() {
        Ok(raw) => raw,
        Err(err) => {
            tracing::warn!(error = %err, "unable to read cookies");
            return 0;
        }
    };

    let mut cleared = 0;
    for name in cookie_names(&raw) {
        match jar.set_cookie(&expire_directive(&name)) {
            Ok(()) => cleared += 1,
            Err(err) => tracing::warn!(cookie = %name, error = %err, "unable to expire cookie"),
        }
    }
    tracing::debug!(cleared, "cookies expired");
    cleared
}

/// `document.cookie` of the current page.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct DocumentCookies;

#[cfg(target_arch = "wasm32")]
impl DocumentCookies {
    fn document() -> Result<web_sys::HtmlDocument, AppError> {
        use wasm_bindgen::JsCast;

        web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.dyn_into::<web_sys::HtmlDocument>().ok())
            .ok_or_else(|| AppError::Browser("Document not found".to_string()))
    }
}

#[cfg(target_arch = "wasm32")]
impl CookieJar for DocumentCookies {
    fn cookie_string(&self) -> Result<String, AppError> {
        Self::document()?
            .cookie()
            .map_err(|_| AppError::Browser("Cookies are not readable".to_string()))
    }

    fn set_cookie(&self, directive: &str) -> Result<(), AppError> {
        Self::document()?
            .set_cookie(directive)
            .map_err(|_| AppError::Browser("Cookie write rejected".to_string()))
    }
}
