//! Configuration loading: TOML file with environment variable overrides.
//!
//! Looks for `itech.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables
//! (`ITECH_HOST`, `ITECH_PORT`, `ITECH_DATABASE_URL`, `ITECH_CORS`, `RUST_LOG`)
//! take precedence over file values; a value that does not parse is an error.

use serde::Deserialize;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP listener settings.
    pub server: ServerConfig,
    /// Database settings.
    pub database: DatabaseConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// HTTP policy settings.
    pub http: HttpConfig,
}

/// HTTP listener configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to bind to (e.g. `0.0.0.0`).
    pub host: String,
    /// TCP port.
    pub port: u16,
}

/// `SQLite` database configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct DatabaseConfig {
    /// `SQLite` connection URL or file path.
    pub url: String,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// HTTP policy configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Accept cross-origin requests from any origin.
    pub cors_enabled: bool,
}

impl Config {
    /// Load configuration from `itech.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("itech.toml")?;
        config.apply_overrides(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    fn from_file(path: &str) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(content) => toml::from_str(&content).map_err(ConfigError::Parse),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(Self::default()),
            Err(err) => Err(ConfigError::Io(err)),
        }
    }

    fn apply_overrides(
        &mut self,
        var: impl Fn(&str) -> Option<String>,
    ) -> Result<(), ConfigError> {
        if let Some(val) = var("ITECH_HOST") {
            self.server.host = val;
        }
        if let Some(val) = var("ITECH_PORT") {
            self.server.port = val.parse().map_err(|_| {
                ConfigError::Validation(format!("ITECH_PORT `{val}` is not a port number"))
            })?;
        }
        if let Some(val) = var("ITECH_DATABASE_URL") {
            self.database.url = val;
        }
        if let Some(val) = var("RUST_LOG") {
            self.logging.filter = val;
        }
        if let Some(val) = var("ITECH_CORS") {
            self.http.cors_enabled = parse_flag("ITECH_CORS", &val)?;
        }
        Ok(())
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.server.port == 0 {
            return Err(ConfigError::Validation("port must be non-zero".to_string()));
        }
        Ok(())
    }

    /// Return the `host:port` bind address.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn parse_flag(key: &str, val: &str) -> Result<bool, ConfigError> {
    match val.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "on" => Ok(true),
        "0" | "false" | "off" => Ok(false),
        _ => Err(ConfigError::Validation(format!(
            "{key} must be one of 1/true/on or 0/false/off, got `{val}`"
        ))),
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8000,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            url: "sqlite:itech.db?mode=rwc".to_string(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "itechd=info,itech=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self { cors_enabled: true }
    }
}

/// Configuration errors.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// TOML parse failure.
    #[error("failed to parse config file")]
    Parse(#[from] toml::de::Error),
    /// File I/O failure.
    #[error("failed to read config file")]
    Io(#[from] std::io::Error),
    /// Semantic validation failure.
    #[error("invalid configuration: {0}")]
    Validation(String),
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        move |key: &str| map.get(key).cloned()
    }

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 8000);
        assert_eq!(config.database.url, "sqlite:itech.db?mode=rwc");
        assert!(config.http.cors_enabled);
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [database]
            url = 'sqlite:test.db'

            [logging]
            filter = 'debug'

            [http]
            cors_enabled = false
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.database.url, "sqlite:test.db");
        assert_eq!(config.logging.filter, "debug");
        assert!(!config.http.cors_enabled);
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_format_bind_addr() {
        let config = Config::default();
        assert_eq!(config.bind_addr(), "0.0.0.0:8000");
    }

    #[test]
    fn should_override_host_and_port_from_env() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("ITECH_HOST", "127.0.0.1"), ("ITECH_PORT", "9000")]))
            .unwrap();
        assert_eq!(config.bind_addr(), "127.0.0.1:9000");
    }

    #[test]
    fn should_take_log_filter_from_rust_log() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("RUST_LOG", "trace")])).unwrap();
        assert_eq!(config.logging.filter, "trace");
    }

    #[test]
    fn should_disable_cors_from_env() {
        let mut config = Config::default();
        config.apply_overrides(env(&[("ITECH_CORS", "false")])).unwrap();
        assert!(!config.http.cors_enabled);
    }

    #[test]
    fn should_accept_cors_flag_in_any_case() {
        let mut config = Config::default();
        config.http.cors_enabled = false;
        config.apply_overrides(env(&[("ITECH_CORS", "ON")])).unwrap();
        assert!(config.http.cors_enabled);
    }

    #[test]
    fn should_reject_unrecognised_cors_value() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(env(&[("ITECH_CORS", "flase")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(ref msg) if msg.contains("`flase`")));
        assert!(config.http.cors_enabled);
    }

    #[test]
    fn should_reject_unparsable_port_override() {
        let mut config = Config::default();
        let err = config
            .apply_overrides(env(&[("ITECH_PORT", "eighty")]))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Validation(_)));
        assert_eq!(config.server.port, 8000);
    }

    #[test]
    fn should_override_database_url_from_env() {
        let mut config = Config::default();
        config
            .apply_overrides(env(&[("ITECH_DATABASE_URL", "sqlite::memory:")]))
            .unwrap();
        assert_eq!(config.database.url, "sqlite::memory:");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
