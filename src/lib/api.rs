//! Browser [`Transport`] for SecureGate form posts with a consistent timeout and
//! error mapping. Requests always include same-origin cookies so the Django
//! session and CSRF cookies travel with them. Nothing here inspects or logs
//! field values.

use super::{
    errors::AppError,
    http::{BodyEncoding, FormBody, RawResponse, Transport},
};
use gloo_net::http::Request;
use gloo_timers::callback::Timeout;
use web_sys::{AbortController, FormData, RequestCredentials};

/// Default request timeout (milliseconds) applied to all form posts.
const DEFAULT_TIMEOUT_MS: u32 = 10_000;

/// Sends form posts through `fetch`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTransport;

impl Transport for BrowserTransport {
    async fn post_form(&self, url: &str, body: &FormBody) -> Result<RawResponse, AppError> {
        tracing::debug!(url, encoding = ?body.encoding(), "posting form");
        let response = send_with_timeout(|signal| {
            let builder = Request::post(url)
                .credentials(RequestCredentials::SameOrigin)
                .abort_signal(Some(signal));

            match body.encoding() {
                BodyEncoding::Multipart => builder.body(to_form_data(body)?),
                BodyEncoding::UrlEncoded => builder
                    .header(
                        "Content-Type",
                        "application/x-www-form-urlencoded; charset=UTF-8",
                    )
                    .body(body.to_urlencoded()),
            }
            .map_err(|err| AppError::Serialization(format!("Failed to build request: {err}")))
        })
        .await?;

        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        Ok(RawResponse::new(status, text))
    }
}

/// Copies the fields into a `FormData`, letting the browser pick the multipart boundary.
fn to_form_data(body: &FormBody) -> Result<FormData, AppError> {
    let form_data = FormData::new()
        .map_err(|_| AppError::Browser("Failed to create form data.".to_string()))?;
    for (name, value) in body.fields() {
        form_data
            .append_with_str(name, value)
            .map_err(|_| AppError::Browser(format!("Failed to append field {name}.")))?;
    }
    Ok(form_data)
}

/// Maps network errors into user-facing `AppError` variants with timeout detection.
fn map_request_error(err: gloo_net::Error) -> AppError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("timeout") || lowered.contains("abort") {
        AppError::Timeout("Request timed out. Please try again.".to_string())
    } else {
        AppError::Network(format!("Unable to reach the server: {message}"))
    }
}

/// Sends a request with an abort timeout to avoid hanging UI state.
async fn send_with_timeout(
    build_request: impl FnOnce(&web_sys::AbortSignal) -> Result<Request, AppError>,
) -> Result<gloo_net::http::Response, AppError> {
    let controller = AbortController::new()
        .map_err(|_| AppError::Config("Failed to initialize request timeout.".to_string()))?;
    let signal = controller.signal();
    let timeout_controller = controller.clone();
    let _timeout = Timeout::new(DEFAULT_TIMEOUT_MS, move || timeout_controller.abort());

    let request = build_request(&signal)?;
    request.send().await.map_err(|err| {
        let mapped = map_request_error(err);
        tracing::warn!(error = %mapped, "form post failed");
        mapped
    })
}
