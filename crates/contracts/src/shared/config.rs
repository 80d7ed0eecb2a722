use serde::Deserialize;
use thiserror::Error;

/// Client configuration
///
/// Loaded from one of the TOML profiles embedded at build time.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ClientConfig {
    /// Base URL of the REST API, e.g. "http://localhost:8080/api".
    /// A value starting with "/" is resolved against the page origin.
    pub api_url: String,

    #[serde(default = "default_timeout_ms")]
    pub api_timeout_ms: u32,

    #[serde(default = "default_log_level")]
    pub log_level: String,

    #[serde(default)]
    pub features: Features,
}

/// Switches for the optional parts of the UI
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct Features {
    #[serde(default = "enabled")]
    pub admin_panel: bool,
    #[serde(default = "enabled")]
    pub contact_form: bool,
    #[serde(default = "enabled")]
    pub product_catalog: bool,
}

impl Default for Features {
    fn default() -> Self {
        Self {
            admin_panel: true,
            contact_form: true,
            product_catalog: true,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("api_url must not be empty")]
    EmptyApiUrl,
    #[error("api_timeout_ms must be greater than zero")]
    ZeroTimeout,
}

fn default_timeout_ms() -> u32 {
    30_000
}

fn default_log_level() -> String {
    "info".to_string()
}

fn enabled() -> bool {
    true
}

/// Development profile (local API, debug logging)
pub const DEVELOPMENT_CONFIG: &str = include_str!("../../config/development.toml");

/// Production profile (remote API, error logging only)
pub const PRODUCTION_CONFIG: &str = include_str!("../../config/production.toml");

impl ClientConfig {
    /// Parse and check a TOML document
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: ClientConfig = toml::from_str(contents)?;
        if config.api_url.trim().is_empty() {
            return Err(ConfigError::EmptyApiUrl);
        }
        if config.api_timeout_ms == 0 {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(config)
    }

    /// Embedded profile for the current build
    pub fn embedded(production: bool) -> Result<Self, ConfigError> {
        if production {
            Self::from_toml(PRODUCTION_CONFIG)
        } else {
            Self::from_toml(DEVELOPMENT_CONFIG)
        }
    }

    /// Configured level; unknown names fall back to `Info`
    pub fn log_level(&self) -> log::Level {
        match self.log_level.trim().to_ascii_lowercase().as_str() {
            "trace" => log::Level::Trace,
            "debug" => log::Level::Debug,
            "warn" | "warning" => log::Level::Warn,
            "error" => log::Level::Error,
            _ => log::Level::Info,
        }
    }
}

/// Join an API base and a path with exactly one slash
///
/// Absolute `path` URLs are returned untouched.
pub fn join_endpoint(base: &str, path: &str) -> String {
    if path.starts_with("http://") || path.starts_with("https://") {
        return path.to_string();
    }
    format!("{}/{}", base.trim_end_matches('/'), path.trim_start_matches('/'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_profiles_load() {
        let dev = ClientConfig::embedded(false).unwrap();
        assert_eq!(dev.api_url, "http://localhost:8080/api");
        assert_eq!(dev.log_level(), log::Level::Debug);
        assert_eq!(dev.api_timeout_ms, 30000);

        let prod = ClientConfig::embedded(true).unwrap();
        assert_eq!(prod.log_level(), log::Level::Error);
        assert!(prod.features.admin_panel);
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::from_toml(r#"api_url = "/api""#).unwrap();
        assert_eq!(config.api_timeout_ms, 30_000);
        assert_eq!(config.log_level(), log::Level::Info);
        assert_eq!(config.features, Features::default());
    }

    #[test]
    fn test_unknown_log_level_falls_back_to_info() {
        let config = ClientConfig::from_toml(
            r#"
            api_url = "/api"
            log_level = "verbose"
            "#,
        )
        .unwrap();
        assert_eq!(config.log_level(), log::Level::Info);
    }

    #[test]
    fn test_rejects_invalid() {
        assert!(matches!(
            ClientConfig::from_toml(r#"api_url = "  ""#),
            Err(ConfigError::EmptyApiUrl)
        ));
        assert!(matches!(
            ClientConfig::from_toml("api_url = \"/api\"\napi_timeout_ms = 0"),
            Err(ConfigError::ZeroTimeout)
        ));
        assert!(matches!(
            ClientConfig::from_toml("api_timeout_ms = 5"),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn test_endpoint_join() {
        let base = "http://localhost:8080/api/";
        assert_eq!(join_endpoint(base, "/products"), "http://localhost:8080/api/products");
        assert_eq!(join_endpoint(base, "categories/3"), "http://localhost:8080/api/categories/3");
        assert_eq!(join_endpoint("/api", "/contact"), "/api/contact");
        assert_eq!(
            join_endpoint(base, "https://cdn.example.com/x"),
            "https://cdn.example.com/x"
        );
    }

    #[test]
    fn test_partial_features_table() {
        let config = ClientConfig::from_toml(
            r#"
            api_url = "/api"

            [features]
            admin_panel = false
            "#,
        )
        .unwrap();
        assert!(!config.features.admin_panel);
        assert!(config.features.contact_form);
    }
}
