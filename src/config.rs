//! Configuration handling for the registration client

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Environment variable overriding `register_endpoint`
pub const ENDPOINT_ENV: &str = "OFFICER_SIGNUP_ENDPOINT";

const DEFAULT_SIMULATED_LATENCY_MS: u64 = 1500;
const DEFAULT_REDIRECT_DELAY_MS: u64 = 1000;
const DEFAULT_SIGN_IN_ROUTE: &str = "/sign-in/government";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 10;

/// User configuration
///
/// Every key is optional; accessors fill in the defaults.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct PortalConfig {
    /// Registration endpoint; submissions are simulated when unset
    pub register_endpoint: Option<String>,
    /// Delay of a simulated submission
    pub simulated_latency_ms: Option<u64>,
    /// Delay between a successful submission and the sign-in redirect
    pub redirect_delay_ms: Option<u64>,
    /// Route shown on the sign-in page
    pub sign_in_route: Option<String>,
    /// HTTP client timeout
    pub request_timeout_secs: Option<u64>,
}

impl PortalConfig {
    /// Get the config file path
    fn config_path() -> Option<PathBuf> {
        ProjectDirs::from("org", "secureportal", "officer-signup")
            .map(|dirs| dirs.config_dir().join("config.json"))
    }

    /// Load configuration from the user config dir, then apply env overrides
    pub fn load() -> Result<Self> {
        let mut config = match Self::config_path() {
            Some(path) => Self::load_from(&path)?,
            None => Self::default(),
        };
        config.apply_env_override(std::env::var(ENDPOINT_ENV).ok());
        Ok(config)
    }

    /// Load configuration from a file; a missing file yields defaults
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read config {}", path.display()))?;
        let config = serde_json::from_str(&content)
            .with_context(|| format!("invalid config {}", path.display()))?;
        tracing::info!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    fn apply_env_override(&mut self, endpoint: Option<String>) {
        if let Some(endpoint) = endpoint.filter(|e| !e.trim().is_empty()) {
            self.register_endpoint = Some(endpoint);
        }
    }

    pub fn simulated_latency(&self) -> Duration {
        Duration::from_millis(
            self.simulated_latency_ms
                .unwrap_or(DEFAULT_SIMULATED_LATENCY_MS),
        )
    }

    pub fn redirect_delay(&self) -> Duration {
        Duration::from_millis(self.redirect_delay_ms.unwrap_or(DEFAULT_REDIRECT_DELAY_MS))
    }

    pub fn sign_in_route(&self) -> &str {
        self.sign_in_route.as_deref().unwrap_or(DEFAULT_SIGN_IN_ROUTE)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(
            self.request_timeout_secs
                .unwrap_or(DEFAULT_REQUEST_TIMEOUT_SECS),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_config_path(name: &str) -> PathBuf {
        std::env::temp_dir().join(format!(
            "officer-signup-{}-{}.json",
            name,
            std::process::id()
        ))
    }

    #[test]
    fn test_default_config() {
        let config = PortalConfig::default();
        assert!(config.register_endpoint.is_none());
        assert_eq!(config.simulated_latency(), Duration::from_millis(1500));
        assert_eq!(config.redirect_delay(), Duration::from_millis(1000));
        assert_eq!(config.sign_in_route(), "/sign-in/government");
        assert_eq!(config.request_timeout(), Duration::from_secs(10));
    }

    #[test]
    fn test_deserialize_from_empty_json() {
        let parsed: PortalConfig = serde_json::from_str("{}").unwrap();
        assert!(parsed.register_endpoint.is_none());
        assert!(parsed.sign_in_route.is_none());
    }

    #[test]
    fn test_deserialize_with_extra_fields() {
        // Should ignore unknown fields
        let json = r#"{"redirect_delay_ms": 250, "unknown_field": "value"}"#;
        let parsed: PortalConfig = serde_json::from_str(json).unwrap();
        assert_eq!(parsed.redirect_delay(), Duration::from_millis(250));
    }

    #[test]
    fn test_load_from_missing_file_returns_default() {
        let path = temp_config_path("missing");
        let config = PortalConfig::load_from(&path).unwrap();
        assert!(config.register_endpoint.is_none());
    }

    #[test]
    fn test_load_from_file() {
        let path = temp_config_path("present");
        fs::write(
            &path,
            r#"{"register_endpoint": "http://localhost:8080/auth/register/govt", "simulated_latency_ms": 5}"#,
        )
        .unwrap();
        let config = PortalConfig::load_from(&path).unwrap();
        fs::remove_file(&path).unwrap();

        assert_eq!(
            config.register_endpoint.as_deref(),
            Some("http://localhost:8080/auth/register/govt")
        );
        assert_eq!(config.simulated_latency(), Duration::from_millis(5));
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let path = temp_config_path("malformed");
        fs::write(&path, "{ not json").unwrap();
        let result = PortalConfig::load_from(&path);
        fs::remove_file(&path).unwrap();
        assert!(result.is_err());
    }

    #[test]
    fn test_env_override_sets_endpoint() {
        let mut config = PortalConfig::default();
        config.apply_env_override(Some("http://gov.example/register".to_string()));
        assert_eq!(
            config.register_endpoint.as_deref(),
            Some("http://gov.example/register")
        );
    }

    #[test]
    fn test_blank_env_override_is_ignored() {
        let mut config = PortalConfig {
            register_endpoint: Some("http://from-file".to_string()),
            ..Default::default()
        };
        config.apply_env_override(Some("   ".to_string()));
        config.apply_env_override(None);
        assert_eq!(config.register_endpoint.as_deref(), Some("http://from-file"));
    }

    #[test]
    fn test_config_path_returns_option() {
        // Just test that the function doesn't panic
        let _path = PortalConfig::config_path();
    }
}
