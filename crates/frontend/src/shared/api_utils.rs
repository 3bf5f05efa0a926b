//! API utilities for frontend-backend communication
//!
//! Builds the runtime `AppConfig` and the browser-side navigation hook the
//! request layer uses on 401.

use client::services::Navigator;
use client::AppConfig;

/// Get the base URL for API requests
///
/// Constructs the API base URL from the current window location,
/// using port 3000 for the backend server.
///
/// # Returns
/// - API base URL like "http://localhost:3000" or "https://example.com:3000"
/// - Empty string if window is not available
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

/// Runtime configuration: compiled-in defaults, the backend on port 3000
/// of the serving host, then any build-time overrides.
pub fn app_config() -> AppConfig {
    let mut config = AppConfig::default();
    let base = api_base();
    if !base.is_empty() {
        config = config.with_api_base(base);
    }
    config.with_build_overrides()
}

/// Current `window.location.pathname`
pub fn current_path() -> String {
    web_sys::window()
        .and_then(|w| w.location().pathname().ok())
        .unwrap_or_default()
}

/// Value of a query parameter of the current URL
pub fn query_param(name: &str) -> Option<String> {
    let search = web_sys::window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// Replace the URL without reloading (after login, leave `/login`)
pub fn replace_url(url: &str) {
    if let Some(w) = web_sys::window() {
        if let Ok(history) = w.history() {
            let _ = history.replace_state_with_url(&wasm_bindgen::JsValue::NULL, "", Some(url));
        }
    }
}

/// Full page loads through `window.location`
pub struct BrowserNavigator;

impl Navigator for BrowserNavigator {
    fn hard_redirect(&self, path: &str) {
        match web_sys::window() {
            Some(w) => {
                if let Err(e) = w.location().set_href(path) {
                    log::error!("navigation to {} failed: {:?}", path, e);
                }
            }
            None => log::error!("no window to navigate to {}", path),
        }
    }
}
