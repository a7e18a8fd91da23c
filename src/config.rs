//! Build-time configuration for the GraphQL endpoint and request timeout, with
//! an optional runtime override read from `window.DASHBOARD_CONFIG` so static
//! deployments can point at another API without rebuilding.
//!
//! Configuration values are public; do not store secrets here.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Endpoint used when neither the build nor the page provides one.
pub const DEFAULT_GRAPHQL_ENDPOINT: &str = "/graphql";
/// Request timeout (milliseconds) applied to every GraphQL call.
pub const DEFAULT_REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Frontend configuration shared through Leptos context.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AppConfig {
    pub graphql_endpoint: String,
    pub request_timeout_ms: u32,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            graphql_endpoint: DEFAULT_GRAPHQL_ENDPOINT.to_owned(),
            request_timeout_ms: DEFAULT_REQUEST_TIMEOUT_MS,
        }
    }
}

impl AppConfig {
    /// Loads config from build-time environment variables and applies runtime overrides.
    pub fn load() -> Self {
        let mut config = Self::from_build_env(
            option_env!("DASHBOARD_GRAPHQL_ENDPOINT"),
            option_env!("DASHBOARD_REQUEST_TIMEOUT_MS"),
        );
        if let Some(runtime) = runtime_config() {
            apply_runtime_overrides(&mut config, runtime);
        }
        log::debug!(
            "config loaded: endpoint={} timeout_ms={}",
            config.graphql_endpoint,
            config.request_timeout_ms
        );
        config
    }

    fn from_build_env(endpoint: Option<&str>, timeout_ms: Option<&str>) -> Self {
        let defaults = Self::default();
        Self {
            graphql_endpoint: endpoint
                .and_then(normalize_runtime_value)
                .unwrap_or(defaults.graphql_endpoint),
            request_timeout_ms: timeout_ms
                .and_then(parse_timeout_ms)
                .unwrap_or(defaults.request_timeout_ms),
        }
    }
}

#[derive(Default)]
struct RuntimeConfig {
    graphql_endpoint: Option<String>,
    request_timeout_ms: Option<u32>,
}

fn apply_runtime_overrides(config: &mut AppConfig, runtime: RuntimeConfig) {
    if let Some(value) = runtime.graphql_endpoint {
        config.graphql_endpoint = value;
    }
    if let Some(value) = runtime.request_timeout_ms {
        config.request_timeout_ms = value;
    }
}

#[cfg(feature = "csr")]
fn runtime_config() -> Option<RuntimeConfig> {
    use js_sys::{Object, Reflect};
    use wasm_bindgen::JsValue;

    let window = web_sys::window()?;
    let config = Reflect::get(&window, &JsValue::from_str("DASHBOARD_CONFIG")).ok()?;
    if config.is_null() || config.is_undefined() {
        return None;
    }
    let object = Object::from(config);

    Some(RuntimeConfig {
        graphql_endpoint: read_runtime_value(&object, "graphql_endpoint")
            .as_deref()
            .and_then(normalize_runtime_value),
        request_timeout_ms: read_runtime_value(&object, "request_timeout_ms")
            .as_deref()
            .and_then(parse_timeout_ms),
    })
}

#[cfg(not(feature = "csr"))]
fn runtime_config() -> Option<RuntimeConfig> {
    None
}

/// Numeric values are stringified so the timeout may be given as `5000` or `"5000"`.
#[cfg(feature = "csr")]
fn read_runtime_value(object: &js_sys::Object, key: &str) -> Option<String> {
    let value = js_sys::Reflect::get(object, &wasm_bindgen::JsValue::from_str(key)).ok()?;
    value
        .as_string()
        .or_else(|| value.as_f64().map(|number| number.to_string()))
}

fn normalize_runtime_value(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_owned())
    }
}

fn parse_timeout_ms(value: &str) -> Option<u32> {
    value.trim().parse::<u32>().ok().filter(|ms| *ms > 0)
}
