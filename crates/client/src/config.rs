//! Application configuration.
//!
//! There are no config files: defaults are compiled in and a few values can
//! be overridden at build time through environment variables.

/// Path the app hard-navigates to when the session is missing or rejected
pub const LOGIN_PATH: &str = "/login";

/// Endpoints called without a bearer token
pub const PUBLIC_PATHS: &[&str] = &["auth/login", "health", "status", "auth/activate"];

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Scheme, host and port of the backend, e.g. "http://localhost:3000"
    pub api_base: String,
    /// Versioned prefix every backend path lives under
    pub api_prefix: String,
    /// Third-party image host endpoint for profile pictures
    pub upload_url: String,
    pub upload_preset: String,
    pub max_upload_bytes: usize,
    pub items_per_page: usize,
    pub page_size_options: Vec<usize>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            api_base: "http://localhost:3000".to_string(),
            api_prefix: "/api/v1".to_string(),
            upload_url: "https://api.cloudinary.com/v1_1/fleet-admin/image/upload".to_string(),
            upload_preset: "fleet_admin_profiles".to_string(),
            max_upload_bytes: 5 * 1024 * 1024,
            items_per_page: 10,
            page_size_options: vec![10, 25, 50, 100],
        }
    }
}

impl AppConfig {
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Apply `FLEET_API_BASE`, `FLEET_UPLOAD_URL` and `FLEET_UPLOAD_PRESET`
    /// when they were set at compile time.
    pub fn with_build_overrides(mut self) -> Self {
        if let Some(base) = option_env!("FLEET_API_BASE") {
            self.api_base = base.to_string();
        }
        if let Some(url) = option_env!("FLEET_UPLOAD_URL") {
            self.upload_url = url.to_string();
        }
        if let Some(preset) = option_env!("FLEET_UPLOAD_PRESET") {
            self.upload_preset = preset.to_string();
        }
        self
    }

    /// Absolute URL of a backend path ("drivers/4" -> ".../api/v1/drivers/4")
    pub fn api_url(&self, path: &str) -> String {
        format!(
            "{}/{}/{}",
            self.api_base.trim_end_matches('/'),
            self.api_prefix.trim_matches('/'),
            path.trim_start_matches('/')
        )
    }

    /// Whether requests to `path` carry the bearer token
    pub fn requires_auth(path: &str) -> bool {
        let path = path.trim_matches('/');
        let path = path.split('?').next().unwrap_or(path);
        !PUBLIC_PATHS
            .iter()
            .any(|public| path == *public || path.starts_with(&format!("{}/", public)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_url_joins_segments() {
        let config = AppConfig::default().with_api_base("https://fleet.example.com/");
        assert_eq!(
            config.api_url("/drivers/4"),
            "https://fleet.example.com/api/v1/drivers/4"
        );
        assert_eq!(config.api_url("health"), "https://fleet.example.com/api/v1/health");
    }

    #[test]
    fn test_public_paths_skip_auth() {
        assert!(!AppConfig::requires_auth("auth/login"));
        assert!(!AppConfig::requires_auth("/health"));
        assert!(!AppConfig::requires_auth("auth/activate/abc123"));
        assert!(AppConfig::requires_auth("drivers"));
        assert!(AppConfig::requires_auth("auth/logout"));
        assert!(AppConfig::requires_auth("healthcheck-report"));
    }
}
