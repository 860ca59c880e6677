//! Build-time configuration for the API endpoint with an optional runtime
//! override. The runtime config is read from `window.VITRINA_CONFIG` (if
//! present) so static deployments can point at another API without
//! rebuilding. Configuration values are public; do not store secrets here.

/// API base URL used when the build does not set `VITRINA_API_BASE_URL`.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000/api";
/// Request timeout (milliseconds) used when none is configured.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Frontend configuration derived from build-time environment variables.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub api_base_url: String,
    pub request_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::default();

        if let Some(value) = option_env!("VITRINA_API_BASE_URL").and_then(non_blank) {
            config.api_base_url = value;
        }
        if let Some(value) = option_env!("VITRINA_REQUEST_TIMEOUT_MS").and_then(parse_timeout) {
            config.request_timeout_ms = value;
        }

        if let Some(runtime) = runtime_config() {
            runtime.apply_to(&mut config);
        }

        config
    }

    /// Builds a config pointing at an explicit API base, keeping the default timeout.
    pub fn with_api_base_url(api_base_url: impl Into<String>) -> Self {
        Self {
            api_base_url: api_base_url.into(),
            ..Self::default()
        }
    }
}

/// Values read from `window.VITRINA_CONFIG`, already validated.
#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
struct RuntimeConfig {
    api_base_url: Option<String>,
    request_timeout_ms: Option<u32>,
}

#[cfg_attr(not(target_arch = "wasm32"), allow(dead_code))]
impl RuntimeConfig {
    /// Overwrites only the values the page actually set.
    fn apply_to(self, config: &mut AppConfig) {
        if let Some(url) = self.api_base_url {
            config.api_base_url = url;
        }
        config.request_timeout_ms = self.request_timeout_ms.unwrap_or(config.request_timeout_ms);
    }
}

#[cfg(target_arch = "wasm32")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("VITRINA_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        api_base_url: read_runtime_value(&object, "api_base_url")
            .as_deref()
            .and_then(non_blank),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms")
            .as_deref()
            .and_then(parse_timeout),
    })
}

#[cfg(not(target_arch = "wasm32"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

#[cfg(target_arch = "wasm32")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    // Timeouts may be written as numbers in the page config.
    value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))
}

fn non_blank(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_timeout(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}

#[cfg(test)]
mod tests {
    use super::{
        AppConfig, DEFAULT_API_BASE_URL, DEFAULT_REQUEST_TIMEOUT_MS, RuntimeConfig,
        non_blank, parse_timeout,
    };

    #[test]
    fn blank_values_are_ignored() {
        assert_eq!(non_blank(""), None);
        assert_eq!(non_blank("   "), None);
        assert_eq!(
            non_blank("  https://api.vitrina.dev "),
            Some("https://api.vitrina.dev".to_string())
        );
    }

    #[test]
    fn parse_timeout_rejects_garbage_and_zero() {
        assert_eq!(parse_timeout("2500"), Some(2500));
        assert_eq!(parse_timeout(" 750 "), Some(750));
        assert_eq!(parse_timeout("0"), None);
        assert_eq!(parse_timeout("soon"), None);
        assert_eq!(parse_timeout("-5"), None);
    }

    #[test]
    fn load_without_overrides_uses_defaults() {
        let config = AppConfig::load();
        if option_env!("VITRINA_API_BASE_URL").is_none() {
            assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
        }
        if option_env!("VITRINA_REQUEST_TIMEOUT_MS").is_none() {
            assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
        }
    }

    #[test]
    fn runtime_config_ignores_missing_values() {
        let mut config = AppConfig::with_api_base_url("https://api.default");
        let runtime = RuntimeConfig {
            api_base_url: non_blank("  "),
            request_timeout_ms: parse_timeout(""),
        };

        runtime.apply_to(&mut config);

        assert_eq!(config.api_base_url, "https://api.default");
        assert_eq!(config.request_timeout_ms, DEFAULT_REQUEST_TIMEOUT_MS);
    }

    #[test]
    fn runtime_config_overwrites_when_present() {
        let mut config = AppConfig::with_api_base_url("https://api.default");
        let runtime = RuntimeConfig {
            api_base_url: non_blank("https://api.override"),
            request_timeout_ms: parse_timeout("3000"),
        };

        runtime.apply_to(&mut config);

        assert_eq!(config.api_base_url, "https://api.override");
        assert_eq!(config.request_timeout_ms, 3000);
    }
}
