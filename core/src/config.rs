//! Remote service configuration
//!
//! The original deployment hardwired the service address; here it is read
//! from the environment with that address as the fallback.

/// Environment variable overriding the remote service address.
pub const SERVICE_URL_ENV: &str = "TODO_SERVICE_URL";

const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// Where the remote task service lives.
#[derive(Debug, Clone)]
pub struct RemoteConfig {
    /// Base URL of the service, without a trailing slash.
    pub base_url: String,
}

impl Default for RemoteConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

impl RemoteConfig {
    /// Read the service address from `TODO_SERVICE_URL`, falling back to
    /// the default local address.
    pub fn from_env() -> Self {
        match std::env::var(SERVICE_URL_ENV) {
            Ok(url) if !url.trim().is_empty() => Self::with_base_url(url),
            _ => Self::default(),
        }
    }

    /// Build a config for an explicit address.
    pub fn with_base_url(url: impl Into<String>) -> Self {
        let url = url.into();
        Self {
            base_url: url.trim().trim_end_matches('/').to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_matches_original_address() {
        let config = RemoteConfig::default();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
    }

    #[test]
    fn test_with_base_url_strips_trailing_slash() {
        let config = RemoteConfig::with_base_url("http://10.0.0.2:8000/");
        assert_eq!(config.base_url, "http://10.0.0.2:8000");
    }

    #[test]
    fn test_from_env_override() {
        std::env::set_var(SERVICE_URL_ENV, "http://todo.internal:9000/");
        let config = RemoteConfig::from_env();
        assert_eq!(config.base_url, "http://todo.internal:9000");

        std::env::remove_var(SERVICE_URL_ENV);
        let config = RemoteConfig::from_env();
        assert_eq!(config.base_url, "http://127.0.0.1:5000");
    }
}
