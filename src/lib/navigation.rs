//! Full-page navigation. Login and logout leave the single-page app for
//! server-rendered pages, so they go through `window.location` rather than
//! the client-side router.

use super::errors::AppError;

pub trait Navigator {
    fn navigate(&self, url: &str) -> Result<(), AppError>;
}

/// Navigates the current browser window.
#[cfg(target_arch = "wasm32")]
#[derive(Clone, Copy, Debug, Default)]
pub struct WindowNavigator;

#[cfg(target_arch = "wasm32")]
impl Navigator for WindowNavigator {
    fn navigate(&self, url: &str) -> Result<(), AppError> {
        let window =
            web_sys::window().ok_or_else(|| AppError::Browser("Window not found".to_string()))?;
        window
            .location()
            .set_href(url)
            .map_err(|_| AppError::Browser(format!("Unable to open {url}")))
    }
}
