//! Configuration loading — TOML file with environment variable overrides.
//!
//! Looks for `flowboard.toml` in the working directory. Every field has a
//! sensible default so the file is optional. Environment variables take
//! precedence over file values.

use std::path::PathBuf;

use serde::Deserialize;

use flowboard_domain::automation::Labels;

/// Top-level configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct Config {
    /// HTTP server settings.
    pub server: ServerConfig,
    /// Fixture file settings.
    pub fixtures: FixturesConfig,
    /// Logging settings.
    pub logging: LoggingConfig,
    /// Posture and status wording used in trigger sentences.
    pub labels: LabelsConfig,
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

/// Fixture file configuration.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct FixturesConfig {
    /// JSON file with work pools, work queues and concurrency limits.
    /// Nothing is loaded when unset.
    pub path: Option<PathBuf>,
}

/// Logging configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    /// Filter directive (`RUST_LOG` syntax).
    pub filter: String,
}

/// Sentence labels.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct LabelsConfig {
    pub reactive: String,
    pub proactive: String,
    pub ready: String,
    pub not_ready: String,
    pub paused: String,
}

impl Config {
    /// Load configuration from `flowboard.toml` (if present) then apply
    /// environment-variable overrides.
    ///
    /// # Errors
    ///
    /// Returns an error if the TOML file exists but is malformed, or if the
    /// resulting configuration is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        let mut config = Self::from_file("flowboard.toml")?;
        config.apply_env_overrides();
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

    fn apply_env_overrides(&mut self) {
        if let Ok(val) = std::env::var("FLOWBOARD_HOST") {
            self.server.host = val;
        }
        if let Ok(val) = std::env::var("FLOWBOARD_PORT") {
            if let Ok(port) = val.parse() {
                self.server.port = port;
            }
        }
        if let Ok(val) = std::env::var("FLOWBOARD_BIND") {
            if let Some((host, port)) = val.rsplit_once(':') {
                self.server.host = host.to_string();
                if let Ok(port) = port.parse() {
                    self.server.port = port;
                }
            }
        }
        if let Ok(val) = std::env::var("FLOWBOARD_FIXTURES") {
            self.fixtures.path = Some(PathBuf::from(val));
        }
        if let Ok(val) = std::env::var("FLOWBOARD_LOG") {
            self.logging.filter = val;
        }
        if let Ok(val) = std::env::var("RUST_LOG") {
            self.logging.filter = val;
        }
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

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 4200,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "flowboardd=info,flowboard=info,tower_http=debug".to_string(),
        }
    }
}

impl Default for LabelsConfig {
    fn default() -> Self {
        let labels = Labels::default();
        Self {
            reactive: labels.reactive,
            proactive: labels.proactive,
            ready: labels.ready,
            not_ready: labels.not_ready,
            paused: labels.paused,
        }
    }
}

impl From<LabelsConfig> for Labels {
    fn from(config: LabelsConfig) -> Self {
        Self {
            reactive: config.reactive,
            proactive: config.proactive,
            ready: config.ready,
            not_ready: config.not_ready,
            paused: config.paused,
        }
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

    #[test]
    fn should_produce_sensible_defaults() {
        let config = Config::default();
        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 4200);
        assert!(config.fixtures.path.is_none());
        assert_eq!(config.labels.reactive, "enters");
    }

    #[test]
    fn should_parse_minimal_toml() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.server.port, 4200);
    }

    #[test]
    fn should_parse_full_toml() {
        let toml = "
            [server]
            host = '127.0.0.1'
            port = 9090

            [fixtures]
            path = 'fixtures/demo.json'

            [logging]
            filter = 'debug'

            [labels]
            reactive = 'becomes'
            proactive = 'remains'
            ready = 'ready'
            not_ready = 'not ready'
            paused = 'paused'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 9090);
        assert_eq!(
            config.fixtures.path,
            Some(PathBuf::from("fixtures/demo.json"))
        );
        assert_eq!(config.logging.filter, "debug");
        assert_eq!(config.labels.proactive, "remains");
    }

    #[test]
    fn should_keep_default_labels_not_overridden() {
        let toml = "
            [labels]
            reactive = 'becomes'
        ";
        let config: Config = toml::from_str(toml).unwrap();
        let labels = Labels::from(config.labels);
        assert_eq!(labels.reactive, "becomes");
        assert_eq!(labels.not_ready, "Not Ready");
    }

    #[test]
    fn should_return_default_when_file_not_found() {
        let config = Config::from_file("nonexistent.toml").unwrap();
        assert_eq!(config.server.port, 4200);
    }

    #[test]
    fn should_reject_zero_port() {
        let mut config = Config::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn should_accept_valid_port() {
        let config = Config::default();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn should_format_bind_addr() {
        let mut config = Config::default();
        config.server.host = "127.0.0.1".to_string();
        config.server.port = 9090;
        assert_eq!(config.bind_addr(), "127.0.0.1:9090");
    }

    #[test]
    fn should_report_parse_error_for_invalid_toml() {
        let result: Result<Config, _> = toml::from_str("invalid {{{");
        assert!(result.is_err());
    }
}
