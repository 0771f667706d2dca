//! Explicit context for auth forms: endpoint configuration plus the
//! anti-forgery token. The token is read once when the app starts and then
//! travels with the context into every fragment and every request body.

use crate::{
    app_lib::{
        BodyEncoding, FormBody, config::AppConfig, cookies::find_cookie,
        http::build_url_with_base,
    },
    features::forms::FormValues,
};
use std::fmt;

/// Form field Django's CSRF middleware reads.
pub const CSRF_FIELD: &str = "csrfmiddlewaretoken";
/// Cookie Django stores the CSRF secret in.
pub const CSRF_COOKIE: &str = "csrftoken";

/// Anti-forgery token. `Debug` never prints the value.
#[derive(Clone, Default, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.trim().is_empty()
    }

    /// Token from a raw `document.cookie` string.
    pub fn from_cookies(raw: &str) -> Option<Self> {
        find_cookie(raw, CSRF_COOKIE)
            .filter(|value| !value.is_empty())
            .map(CsrfToken)
    }
}

impl fmt::Debug for CsrfToken {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            formatter.write_str("CsrfToken(<empty>)")
        } else {
            formatter.write_str("CsrfToken(<redacted>)")
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AuthFormContext {
    pub config: AppConfig,
    pub csrf: CsrfToken,
}

impl AuthFormContext {
    pub fn new(config: AppConfig, csrf: CsrfToken) -> Self {
        Self { config, csrf }
    }

    /// Absolute or same-origin URL for an endpoint path.
    pub fn url(&self, path: &str) -> String {
        build_url_with_base(&self.config.api_base_url, path)
    }

    /// Request body holding the token followed by the submitted values.
    pub fn form_body(&self, encoding: BodyEncoding, values: &FormValues) -> FormBody {
        let mut body = self.token_body(encoding);
        for (name, value) in values.iter().filter(|(name, _)| *name != CSRF_FIELD) {
            body.push(name, value);
        }
        body
    }

    /// Request body holding only the token.
    pub fn token_body(&self, encoding: BodyEncoding) -> FormBody {
        let mut body = FormBody::new(encoding);
        body.push(CSRF_FIELD, self.csrf.as_str());
        body
    }
}

/// Reads the token from the server-rendered hidden input, falling back to the
/// CSRF cookie.
#[cfg(target_arch = "wasm32")]
pub fn read_csrf_token() -> CsrfToken {
    use crate::app_lib::cookies::{CookieJar, DocumentCookies};
    use wasm_bindgen::JsCast;

    let from_input = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.get_elements_by_name(CSRF_FIELD).item(0))
        .and_then(|node| node.dyn_into::<web_sys::HtmlInputElement>().ok())
        .map(|input| CsrfToken::new(input.value()))
        .filter(|token| !token.is_empty());

    if let Some(token) = from_input {
        return token;
    }

    match DocumentCookies
        .cookie_string()
        .ok()
        .and_then(|raw| CsrfToken::from_cookies(&raw))
    {
        Some(token) => token,
        None => {
            tracing::warn!("no CSRF token found; form posts will be rejected");
            CsrfToken::default()
        }
    }
}
