//! Application configuration schemas.
//!
//! Configuration is deserialized via the `config` crate from an optional
//! TOML file overlaid with `GUARDRAIL_`-prefixed environment variables.
//! Every field has a default, so the guardrail starts without any file.

pub mod iam;
pub mod logging;
pub mod server;

use config::builder::{ConfigBuilder, DefaultState};
use serde::{Deserialize, Serialize};

use self::iam::IamConfig;
use self::logging::LoggingConfig;
use self::server::ServerConfig;

use crate::error::AppError;

const LOG_FORMATS: &[&str] = &["json", "pretty"];
const LOG_LEVELS: &[&str] = &["trace", "debug", "info", "warn", "error"];

/// Root application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP ingress settings.
    #[serde(default)]
    pub server: ServerConfig,
    /// Identity-service client settings.
    #[serde(default)]
    pub iam: IamConfig,
    /// Logging settings.
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file (if present) and the environment.
    ///
    /// Environment variables use the `GUARDRAIL_` prefix and `__` as the
    /// section separator, e.g. `GUARDRAIL_SERVER__PORT=9000`.
    pub fn load(path: &str) -> Result<Self, AppError> {
        Self::from_builder(
            config::Config::builder().add_source(config::File::with_name(path).required(false)),
        )
    }

    /// Load configuration from an in-memory TOML document and the environment.
    pub fn from_toml_str(contents: &str) -> Result<Self, AppError> {
        Self::from_builder(
            config::Config::builder()
                .add_source(config::File::from_str(contents, config::FileFormat::Toml)),
        )
    }

    fn from_builder(builder: ConfigBuilder<DefaultState>) -> Result<Self, AppError> {
        let config = builder
            .add_source(
                config::Environment::with_prefix("GUARDRAIL")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to build config: {e}")))?;

        config
            .try_deserialize()
            .map_err(|e| AppError::configuration(format!("Failed to deserialize config: {e}")))
    }

    /// Check values that deserialize fine but cannot be used.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.server.port == 0 {
            return Err(AppError::configuration("server.port must be non-zero"));
        }
        if self.server.body_limit_bytes == 0 {
            return Err(AppError::configuration(
                "server.body_limit_bytes must be non-zero",
            ));
        }
        if self.iam.region.trim().is_empty() {
            return Err(AppError::configuration("iam.region must not be empty"));
        }
        if !LOG_FORMATS.contains(&self.logging.format.as_str()) {
            return Err(AppError::configuration(format!(
                "logging.format must be one of {LOG_FORMATS:?}, got '{}'",
                self.logging.format
            )));
        }
        // Full filter directives (`guardrail_service=debug,warn`) are left to EnvFilter.
        let level = self.logging.level.to_ascii_lowercase();
        if !level.contains('=') && !LOG_LEVELS.contains(&level.as_str()) {
            return Err(AppError::configuration(format!(
                "logging.level must be one of {LOG_LEVELS:?}, got '{}'",
                self.logging.level
            )));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = AppConfig::load("config/does-not-exist.toml").expect("defaults load");
        assert_eq!(config.iam.region, "us-east-1");
        assert!(config.iam.endpoint_url.is_none());
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_toml_keeps_other_defaults() {
        let config = AppConfig::from_toml_str(
            r#"
            [iam]
            endpoint_url = "http://localhost:4566"

            [logging]
            format = "pretty"
            "#,
        )
        .expect("parse");

        assert_eq!(
            config.iam.endpoint_url.as_deref(),
            Some("http://localhost:4566")
        );
        assert_eq!(config.logging.format, "pretty");
        assert_eq!(config.logging.level, "info");
        assert_eq!(config.server.body_limit_bytes, 256 * 1024);
    }

    #[test]
    fn test_single_underscore_prefix_overrides_section_key() {
        // No other test in this crate asserts server.port.
        unsafe { std::env::set_var("GUARDRAIL_SERVER__PORT", "9000") };
        let loaded = AppConfig::from_toml_str("[server]\nport = 8080\n");
        unsafe { std::env::remove_var("GUARDRAIL_SERVER__PORT") };

        assert_eq!(loaded.expect("parse").server.port, 9000);
    }

    #[test]
    fn test_validate_rejects_unknown_format() {
        let mut config = AppConfig::default();
        config.logging.format = "xml".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_validate_rejects_zero_port() {
        let mut config = AppConfig::default();
        config.server.port = 0;
        assert!(config.validate().is_err());
    }
}
