//! Transport-neutral request and response types. Flows build a [`FormBody`],
//! hand it to a [`Transport`] and classify the [`RawResponse`] they get back,
//! which keeps every decision testable without a browser.

use super::errors::AppError;
use url::form_urlencoded;

/// Maximum number of error body characters surfaced to the UI.
const MAX_ERROR_CHARS: usize = 200;

/// Wire encoding of a form post.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BodyEncoding {
    /// `multipart/form-data`, the browser's `FormData` encoding.
    Multipart,
    /// `application/x-www-form-urlencoded`.
    UrlEncoded,
}

/// Ordered form fields plus the encoding they are sent with.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FormBody {
    encoding: BodyEncoding,
    fields: Vec<(String, String)>,
}

impl FormBody {
    pub fn new(encoding: BodyEncoding) -> Self {
        Self {
            encoding,
            fields: Vec::new(),
        }
    }

    /// Appends a field; duplicate names are kept, as with `FormData.append`.
    pub fn push(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.fields.push((name.into(), value.into()));
    }

    pub fn encoding(&self) -> BodyEncoding {
        self.encoding
    }

    pub fn fields(&self) -> &[(String, String)] {
        &self.fields
    }

    /// Returns the first value sent under `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.fields
            .iter()
            .find(|(field, _)| field == name)
            .map(|(_, value)| value.as_str())
    }

    /// Serializes the fields as `application/x-www-form-urlencoded`.
    pub fn to_urlencoded(&self) -> String {
        let mut serializer = form_urlencoded::Serializer::new(String::new());
        for (name, value) in &self.fields {
            serializer.append_pair(name, value);
        }
        serializer.finish()
    }
}

/// Status and text body of a completed HTTP exchange.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RawResponse {
    pub status: u16,
    pub body: String,
}

impl RawResponse {
    pub fn new(status: u16, body: impl Into<String>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// `true` for 2xx statuses.
    pub fn ok(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Sends form posts. The browser implementation lives in `api`; tests use fakes.
///
/// Implementations return `Ok` for every response that arrived, whatever its
/// status, and `Err` only when no response was received.
#[allow(async_fn_in_trait)]
pub trait Transport {
    async fn post_form(&self, url: &str, body: &FormBody) -> Result<RawResponse, AppError>;
}

/// Builds a URL from an explicit base URL and the provided path.
pub fn build_url_with_base(base_url: &str, path: &str) -> String {
    let base = base_url.trim().trim_end_matches('/');
    let path = path.trim();

    if base.is_empty() {
        path.to_string()
    } else {
        format!("{}/{}", base, path.trim_start_matches('/'))
    }
}

/// Sanitizes HTTP error bodies for user-facing messages by trimming and truncating.
pub fn sanitize_body(body: &str) -> String {
    let trimmed = body.trim();
    if trimmed.is_empty() {
        "Request failed.".to_string()
    } else {
        trimmed.chars().take(MAX_ERROR_CHARS).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::{BodyEncoding, FormBody, RawResponse, build_url_with_base, sanitize_body};

    #[test]
    fn build_url_keeps_relative_paths_without_base() {
        assert_eq!(build_url_with_base("", "/xloginapi/"), "/xloginapi/");
        assert_eq!(
            build_url_with_base("https://portal.example.org/", "/create_ticket/"),
            "https://portal.example.org/create_ticket/"
        );
    }

    #[test]
    fn urlencoded_body_escapes_newlines_and_spaces() {
        let mut body = FormBody::new(BodyEncoding::UrlEncoded);
        body.push("ticket_type", "incident");
        body.push("description", "Name: Ann\nQuery information: vpn down");

        assert_eq!(
            body.to_urlencoded(),
            "ticket_type=incident&description=Name%3A+Ann%0AQuery+information%3A+vpn+down"
        );
        assert_eq!(body.get("ticket_type"), Some("incident"));
        assert_eq!(body.get("missing"), None);
    }

    #[test]
    fn sanitize_body_truncates_and_defaults() {
        assert_eq!(sanitize_body("   "), "Request failed.");
        assert_eq!(sanitize_body("  Forbidden \n"), "Forbidden");
        assert_eq!(sanitize_body(&"x".repeat(500)).len(), 200);
    }

    #[test]
    fn ok_covers_only_success_statuses() {
        assert!(RawResponse::new(200, "").ok());
        assert!(RawResponse::new(204, "").ok());
        assert!(!RawResponse::new(302, "").ok());
        assert!(!RawResponse::new(403, "").ok());
    }
}
