//! Client configuration
//!
//! Settings can be built in code, read from a TOML file, or taken from
//! `BUNNY_*` environment variables. Defaults are applied once, when a client
//! is constructed, and the settings are read-only afterwards.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Default Bunny Stream API endpoint
pub const DEFAULT_BASE_URL: &str = "https://video.bunnycdn.com";

/// Default number of retries (stored, not acted on)
pub const DEFAULT_MAX_RETRIES: u32 = 3;

/// Default per-request timeout
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(60);

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    crate::utils::user_agent()
}

fn default_timeout() -> Duration {
    DEFAULT_TIMEOUT
}

fn default_max_retries() -> u32 {
    DEFAULT_MAX_RETRIES
}

// Duration serialization module
mod duration_secs {
    use serde::{Deserialize, Deserializer, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_u64(duration.as_secs())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

/// Main configuration settings for the client
#[derive(Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct Settings {
    /// API credentials and endpoint
    #[serde(default)]
    pub api: ApiSettings,
    /// Pull zone used for HLS, thumbnail, preview and MP4 URLs
    #[serde(default)]
    pub cdn: CdnSettings,
    /// Embed View Token Authentication
    #[serde(default)]
    pub embed: EmbedSettings,
    /// HTTP client behaviour
    #[serde(default)]
    pub network: NetworkSettings,
}

/// API credentials and endpoint
#[derive(Clone, Serialize, Deserialize, PartialEq)]
pub struct ApiSettings {
    /// Library API key, sent as the `AccessKey` header. Server-side only.
    #[serde(default)]
    pub api_key: String,
    /// Video library ID
    #[serde(default)]
    pub library_id: String,
    /// API base URL
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

/// CDN pull zone configuration
#[derive(Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct CdnSettings {
    /// Pull zone hostname, e.g. `vz-abc123.b-cdn.net`
    #[serde(default)]
    pub hostname: Option<String>,
    /// Pull zone Token Authentication key
    #[serde(default)]
    pub token_key: Option<String>,
}

/// Embed player configuration
#[derive(Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct EmbedSettings {
    /// Embed View Token Authentication key
    #[serde(default)]
    pub token_key: Option<String>,
}

/// Network configuration
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct NetworkSettings {
    /// User agent string
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Request timeout in seconds
    #[serde(with = "duration_secs", default = "default_timeout")]
    pub timeout: Duration,
    /// Number of retry attempts. Accepted for forward compatibility; the
    /// client never retries.
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,
}

impl Default for ApiSettings {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            library_id: String::new(),
            base_url: default_base_url(),
        }
    }
}

impl Default for NetworkSettings {
    fn default() -> Self {
        Self {
            user_agent: default_user_agent(),
            timeout: default_timeout(),
            max_retries: default_max_retries(),
        }
    }
}

fn redact(secret: &str) -> &'static str {
    if secret.is_empty() { "" } else { "[redacted]" }
}

fn redact_opt(secret: &Option<String>) -> Option<&'static str> {
    secret.as_deref().map(redact)
}

impl std::fmt::Debug for Settings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Settings")
            .field("api", &self.api)
            .field("cdn", &self.cdn)
            .field("embed", &self.embed)
            .field("network", &self.network)
            .finish()
    }
}

impl std::fmt::Debug for ApiSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ApiSettings")
            .field("api_key", &redact(&self.api_key))
            .field("library_id", &self.library_id)
            .field("base_url", &self.base_url)
            .finish()
    }
}

impl std::fmt::Debug for CdnSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CdnSettings")
            .field("hostname", &self.hostname)
            .field("token_key", &redact_opt(&self.token_key))
            .finish()
    }
}

impl std::fmt::Debug for EmbedSettings {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EmbedSettings")
            .field("token_key", &redact_opt(&self.token_key))
            .finish()
    }
}

/// Blank strings count as unset
fn normalize(value: &mut Option<String>) {
    if value.as_deref().is_some_and(|v| v.trim().is_empty()) {
        *value = None;
    }
}

fn env_string(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

impl Settings {
    /// Create new settings with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Create settings for the given API key and library ID, everything else default
    pub fn with_credentials(api_key: impl Into<String>, library_id: impl Into<String>) -> Self {
        let mut settings = Self::default();
        settings.api.api_key = api_key.into();
        settings.api.library_id = library_id.into();
        settings
    }

    /// Set the CDN pull zone hostname
    pub fn with_cdn_hostname(mut self, hostname: impl Into<String>) -> Self {
        self.cdn.hostname = Some(hostname.into());
        self
    }

    /// Set the CDN Token Authentication key
    pub fn with_cdn_token_key(mut self, key: impl Into<String>) -> Self {
        self.cdn.token_key = Some(key.into());
        self
    }

    /// Set the Embed View Token Authentication key
    pub fn with_embed_token_key(mut self, key: impl Into<String>) -> Self {
        self.embed.token_key = Some(key.into());
        self
    }

    /// Set the API base URL
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api.base_url = base_url.into();
        self
    }

    /// Load settings from environment variables on top of the defaults
    pub fn from_env() -> crate::Result<Self> {
        Self::default().merge_with_env()
    }

    /// Load settings from configuration file
    pub fn from_file<P: AsRef<std::path::Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| {
            crate::Error::invalid_config("file", format!("Failed to read config file: {}", e))
        })?;

        Ok(toml::from_str(&content)?)
    }

    /// Override fields with any `BUNNY_*` environment variables that are set
    pub fn merge_with_env(mut self) -> crate::Result<Self> {
        if let Some(api_key) = env_string("BUNNY_API_KEY") {
            self.api.api_key = api_key;
        }
        if let Some(library_id) = env_string("BUNNY_LIBRARY_ID") {
            self.api.library_id = library_id;
        }
        if let Some(base_url) = env_string("BUNNY_BASE_URL") {
            self.api.base_url = base_url;
        }

        if let Some(hostname) = env_string("BUNNY_CDN_HOSTNAME") {
            self.cdn.hostname = Some(hostname);
        }
        if let Some(key) = env_string("BUNNY_CDN_TOKEN_KEY") {
            self.cdn.token_key = Some(key);
        }
        if let Some(key) = env_string("BUNNY_EMBED_TOKEN_KEY") {
            self.embed.token_key = Some(key);
        }

        if let Some(user_agent) = env_string("BUNNY_USER_AGENT") {
            self.network.user_agent = user_agent;
        }
        if let Some(timeout) = env_string("BUNNY_TIMEOUT") {
            let secs: u64 = timeout.trim().parse().map_err(|e| {
                crate::Error::invalid_config("timeout", format!("Invalid timeout: {}", e))
            })?;
            self.network.timeout = Duration::from_secs(secs);
        }
        if let Some(retries) = env_string("BUNNY_MAX_RETRIES") {
            self.network.max_retries = retries.trim().parse().map_err(|e| {
                crate::Error::invalid_config("max_retries", format!("Invalid max retries: {}", e))
            })?;
        }

        Ok(self)
    }

    /// Fill unset fields with their defaults.
    ///
    /// Only empty or zero values are replaced, so applying this more than once
    /// never changes an explicit setting.
    pub fn apply_defaults(&mut self) {
        if self.api.base_url.trim().is_empty() {
            self.api.base_url = default_base_url();
        }
        if self.network.user_agent.trim().is_empty() {
            self.network.user_agent = default_user_agent();
        }
        if self.network.max_retries == 0 {
            self.network.max_retries = DEFAULT_MAX_RETRIES;
        }
        if self.network.timeout.is_zero() {
            self.network.timeout = DEFAULT_TIMEOUT;
        }

        normalize(&mut self.cdn.hostname);
        normalize(&mut self.cdn.token_key);
        normalize(&mut self.embed.token_key);
    }

    /// Validate configuration settings
    pub fn validate(&self) -> crate::Result<()> {
        if self.api.api_key.trim().is_empty() {
            return Err(crate::Error::invalid_config("api_key", "api key required"));
        }

        if self.api.library_id.trim().is_empty() {
            return Err(crate::Error::invalid_config(
                "library_id",
                "library id required",
            ));
        }

        if !self.api.base_url.trim().is_empty()
            && let Err(e) = url::Url::parse(&self.api.base_url)
        {
            return Err(crate::Error::invalid_config(
                "base_url",
                format!("Invalid base URL '{}': {}", self.api.base_url, e),
            ));
        }

        Ok(())
    }

    /// Pull zone hostname without trailing slashes
    pub fn cdn_host(&self) -> Option<&str> {
        self.cdn
            .hostname
            .as_deref()
            .map(|h| h.trim().trim_end_matches('/'))
            .filter(|h| !h.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ENV_TEST_MUTEX;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_default_settings() {
        let settings = Settings::default();
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert!(settings.api.api_key.is_empty());
        assert!(settings.cdn.hostname.is_none());
        assert_eq!(settings.network.max_retries, 3);
        assert_eq!(settings.network.timeout, Duration::from_secs(60));
        assert!(settings.network.user_agent.starts_with("bunnystream-rs/"));
    }

    #[test]
    fn test_validate_missing_api_key() {
        let settings = Settings::with_credentials("", "123");
        let err = settings.validate().unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfig { ref field, .. } if field == "api_key"));
    }

    #[test]
    fn test_validate_missing_library_id() {
        let settings = Settings::with_credentials("test-key", "  ");
        let err = settings.validate().unwrap_err();
        assert!(
            matches!(err, crate::Error::InvalidConfig { ref field, .. } if field == "library_id")
        );
    }

    #[test]
    fn test_validate_both_missing_reports_api_key_first() {
        let err = Settings::default().validate().unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfig { ref field, .. } if field == "api_key"));
    }

    #[test]
    fn test_validate_invalid_base_url() {
        let settings = Settings::with_credentials("test-key", "123").with_base_url("not a url");
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_validation_success() {
        let settings = Settings::with_credentials("test-key", "123");
        assert!(settings.validate().is_ok());
    }

    #[test]
    fn test_apply_defaults_fills_empty_fields() {
        let mut settings = Settings::with_credentials("test-key", "123");
        settings.api.base_url = String::new();
        settings.network.user_agent = String::new();
        settings.network.max_retries = 0;
        settings.network.timeout = Duration::ZERO;

        settings.apply_defaults();

        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.network.user_agent, default_user_agent());
        assert_eq!(settings.network.max_retries, DEFAULT_MAX_RETRIES);
        assert_eq!(settings.network.timeout, DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_apply_defaults_keeps_explicit_values() {
        let mut settings = Settings::with_credentials("test-key", "123")
            .with_base_url("http://localhost:8080");
        settings.network.user_agent = "my-app/1.0".to_string();
        settings.network.max_retries = 7;
        settings.network.timeout = Duration::from_secs(5);

        settings.apply_defaults();

        assert_eq!(settings.api.base_url, "http://localhost:8080");
        assert_eq!(settings.network.user_agent, "my-app/1.0");
        assert_eq!(settings.network.max_retries, 7);
        assert_eq!(settings.network.timeout, Duration::from_secs(5));
    }

    #[test]
    fn test_apply_defaults_is_idempotent() {
        let mut settings = Settings::with_credentials("test-key", "123")
            .with_cdn_hostname("   ")
            .with_cdn_token_key("cdn-secret");
        settings.network.max_retries = 0;

        settings.apply_defaults();
        let once = settings.clone();
        settings.apply_defaults();

        assert_eq!(settings, once);
        assert!(settings.cdn.hostname.is_none());
        assert_eq!(settings.cdn.token_key.as_deref(), Some("cdn-secret"));
    }

    #[test]
    fn test_cdn_host_strips_trailing_slash() {
        let settings =
            Settings::with_credentials("test-key", "123").with_cdn_hostname("vz-abc.b-cdn.net//");
        assert_eq!(settings.cdn_host(), Some("vz-abc.b-cdn.net"));

        let unset = Settings::with_credentials("test-key", "123");
        assert_eq!(unset.cdn_host(), None);
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let settings = Settings::with_credentials("super-secret-api-key", "123")
            .with_cdn_token_key("cdn-secret-value")
            .with_embed_token_key("embed-secret-value");

        let debug = format!("{:?}", settings);
        assert!(!debug.contains("super-secret-api-key"));
        assert!(!debug.contains("cdn-secret-value"));
        assert!(!debug.contains("embed-secret-value"));
        assert!(debug.contains("[redacted]"));
        assert!(debug.contains("123"));
    }

    #[test]
    fn test_load_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(
            temp_file,
            r#"
[api]
api_key = "file-key"
library_id = "456"

[cdn]
hostname = "vz-file.b-cdn.net"

[network]
timeout = 15
        "#
        )
        .unwrap();

        let settings = Settings::from_file(temp_file.path()).unwrap();
        assert_eq!(settings.api.api_key, "file-key");
        assert_eq!(settings.api.library_id, "456");
        assert_eq!(settings.api.base_url, DEFAULT_BASE_URL);
        assert_eq!(settings.cdn.hostname.as_deref(), Some("vz-file.b-cdn.net"));
        assert_eq!(settings.network.timeout, Duration::from_secs(15));
        assert_eq!(settings.network.max_retries, DEFAULT_MAX_RETRIES);
    }

    #[test]
    fn test_load_from_invalid_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        writeln!(temp_file, "[api\napi_key = ").unwrap();

        let err = Settings::from_file(temp_file.path()).unwrap_err();
        assert!(matches!(err, crate::Error::Toml(_)));
        assert_eq!(err.category(), "toml");
    }

    #[test]
    fn test_load_from_missing_file() {
        let err = Settings::from_file("/nonexistent/bunnystream/config.toml").unwrap_err();
        assert!(matches!(err, crate::Error::InvalidConfig { ref field, .. } if field == "file"));
    }

    #[test]
    fn test_env_var_override() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        unsafe {
            std::env::set_var("BUNNY_API_KEY", "env-key");
            std::env::set_var("BUNNY_LIBRARY_ID", "789");
            std::env::set_var("BUNNY_TIMEOUT", "20");
        }

        let settings = Settings::from_env().unwrap();
        assert_eq!(settings.api.api_key, "env-key");
        assert_eq!(settings.api.library_id, "789");
        assert_eq!(settings.network.timeout, Duration::from_secs(20));

        unsafe {
            std::env::remove_var("BUNNY_API_KEY");
            std::env::remove_var("BUNNY_LIBRARY_ID");
            std::env::remove_var("BUNNY_TIMEOUT");
        }
    }

    #[test]
    fn test_env_var_invalid_number() {
        let _lock = ENV_TEST_MUTEX.lock().unwrap();

        unsafe {
            std::env::set_var("BUNNY_MAX_RETRIES", "many");
        }

        let result = Settings::from_env();

        unsafe {
            std::env::remove_var("BUNNY_MAX_RETRIES");
        }

        let err = result.unwrap_err();
        assert!(
            matches!(err, crate::Error::InvalidConfig { ref field, .. } if field == "max_retries")
        );
    }
}
