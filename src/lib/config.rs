//! Portal configuration. Values are baked in at build time from
//! `SECUREGATE_*` environment variables, then a page can override any of them
//! by defining `window.SECUREGATE_CONFIG` before the bundle loads, so one build
//! serves several deployments. Configuration values are public; do not store
//! secrets here.

use serde::Deserialize;

/// Runtime override object looked up on `window`.
pub const RUNTIME_CONFIG_GLOBAL: &str = "SECUREGATE_CONFIG";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL prepended to every endpoint path; empty means same origin.
    pub api_base_url: String,
    /// Page opened after a successful login.
    pub app_root: String,
    /// Page opened after logout.
    pub auth_entry: String,
    /// `tracing` filter directive, e.g. `info` or `securegate_web=debug`.
    pub log_level: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: String::new(),
            app_root: "/".to_string(),
            auth_entry: "/auth".to_string(),
            log_level: "info".to_string(),
        }
    }
}

impl AppConfig {
    /// Defaults, then build-time values, then the page override.
    pub fn load() -> Self {
        let mut config = Self::default();
        config.merge(ConfigOverrides::from_build_env());
        if let Some(overrides) = ConfigOverrides::from_window() {
            config.merge(overrides);
        }
        config
    }

    /// Replaces every field the overrides set to a non-blank value.
    pub fn merge(&mut self, overrides: ConfigOverrides) {
        let slots = [
            (&mut self.api_base_url, overrides.api_base_url),
            (&mut self.app_root, overrides.app_root),
            (&mut self.auth_entry, overrides.auth_entry),
            (&mut self.log_level, overrides.log_level),
        ];
        for (slot, value) in slots {
            if let Some(value) = value.as_deref().and_then(non_blank) {
                *slot = value;
            }
        }
    }
}

/// Partial configuration; unset or blank entries keep the current value.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ConfigOverrides {
    pub api_base_url: Option<String>,
    pub app_root: Option<String>,
    pub auth_entry: Option<String>,
    pub log_level: Option<String>,
}

impl ConfigOverrides {
    fn from_build_env() -> Self {
        Self {
            api_base_url: option_env!("SECUREGATE_API_BASE_URL").map(str::to_string),
            app_root: option_env!("SECUREGATE_APP_ROOT").map(str::to_string),
            auth_entry: option_env!("SECUREGATE_AUTH_ENTRY").map(str::to_string),
            log_level: option_env!("SECUREGATE_LOG_LEVEL").map(str::to_string),
        }
    }

    /// Parses the JSON form of the runtime override object. Unknown keys are
    /// ignored; a malformed document yields no overrides.
    pub fn from_json(raw: &str) -> Option<Self> {
        match serde_json::from_str(raw) {
            Ok(overrides) => Some(overrides),
            Err(err) => {
                tracing::warn!(error = %err, "ignoring malformed runtime config");
                None
            }
        }
    }

    #[cfg(target_arch = "wasm32")]
    fn from_window() -> Option<Self> {
        use wasm_bindgen::JsValue;

        let window = web_sys::window()?;
        let value = js_sys::Reflect::get(&window, &JsValue::from_str(RUNTIME_CONFIG_GLOBAL)).ok()?;
        if value.is_null() || value.is_undefined() {
            return None;
        }
        let raw = js_sys::JSON::stringify(&value).ok()?.as_string()?;
        Self::from_json(&raw)
    }

    #[cfg(not(target_arch = "wasm32"))]
    fn from_window() -> Option<Self> {
        None
    }
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigOverrides};

    #[test]
    fn defaults_point_at_same_origin_portal() {
        let config = AppConfig::default();
        assert_eq!(config.api_base_url, "");
        assert_eq!(config.app_root, "/");
        assert_eq!(config.auth_entry, "/auth");
        assert_eq!(config.log_level, "info");
    }

    #[test]
    fn blank_overrides_keep_current_values() {
        let mut config = AppConfig::default();
        config.merge(ConfigOverrides {
            api_base_url: Some(String::new()),
            app_root: Some("  ".to_string()),
            auth_entry: None,
            log_level: Some("\t".to_string()),
        });
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn set_overrides_are_trimmed_and_applied() {
        let mut config = AppConfig::default();
        config.merge(ConfigOverrides {
            api_base_url: Some(" https://portal.example.org ".to_string()),
            app_root: Some("/apps/".to_string()),
            auth_entry: Some("/portal/auth".to_string()),
            log_level: Some("debug".to_string()),
        });

        assert_eq!(config.api_base_url, "https://portal.example.org");
        assert_eq!(config.app_root, "/apps/");
        assert_eq!(config.auth_entry, "/portal/auth");
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn runtime_json_accepts_partial_objects() {
        let overrides =
            ConfigOverrides::from_json(r#"{"app_root": "/home/", "theme": "dark"}"#).unwrap();
        assert_eq!(overrides.app_root.as_deref(), Some("/home/"));
        assert_eq!(overrides.auth_entry, None);

        assert_eq!(ConfigOverrides::from_json("not json"), None);
    }
}
