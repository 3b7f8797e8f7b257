//! Configuration loading and validation.
//!
//! Uses serde_yaml to load YAML configuration files, with an environment
//! variable override for the log level.

mod app;
mod codec;
mod error;

pub use app::{AppConfig, ENVIRONMENTS};
pub use codec::{CodecConfig, UnknownFields};
pub use error::ConfigError;

use serde::Deserialize;
use std::{env, fs};

/// Environment variable overriding `app.log_level`.
pub const LOG_LEVEL_ENV: &str = "PIX_MODELS_LOG_LEVEL";

/// Root configuration structure.
///
/// Required sections: app.
/// Optional sections: codec.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Application-level settings like name and environment.
    pub app: AppConfig,
    /// Payload encoding/decoding settings (optional).
    pub codec: Option<CodecConfig>,
}

impl Config {
    /// Load configuration from a YAML file at the given path.
    ///
    /// Loads environment variables from a `.env` file (if one exists) first,
    /// then the YAML file, then applies `PIX_MODELS_LOG_LEVEL`.
    pub fn load(path: &str) -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        let content = fs::read_to_string(path).map_err(|source| ConfigError::ReadFile {
            path: path.to_string(),
            source,
        })?;
        let mut config = Self::from_yaml(&content)?;

        if let Ok(level) = env::var(LOG_LEVEL_ENV) {
            config.override_log_level(level);
        }
        config.validate()?;

        Ok(config)
    }

    /// Parse configuration from a YAML string without validating it.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Returns the codec section, or its defaults when absent.
    pub fn codec_config(&self) -> CodecConfig {
        self.codec.clone().unwrap_or_default()
    }

    fn override_log_level(&mut self, level: String) {
        if !level.trim().is_empty() {
            self.app.log_level = Some(level.trim().to_lowercase());
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.app.name.trim().is_empty() {
            return Err(ConfigError::Validation("app.name is required".into()));
        }

        if !ENVIRONMENTS.contains(&self.app.env.as_str()) {
            return Err(ConfigError::Validation(format!(
                "app.env must be one of {}, got {:?}",
                ENVIRONMENTS.join(", "),
                self.app.env
            )));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests;
