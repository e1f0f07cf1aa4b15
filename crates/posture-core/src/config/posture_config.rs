//! Top-level Posture configuration with layered resolution.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{defaults, ObservabilityConfig, RecommendationConfig, SessionConfig};
use crate::errors::ConfigError;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`POSTURE_*`)
/// 2. Project config (`posture.toml` in the given root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct PostureConfig {
    pub recommendation: RecommendationConfig,
    pub session: SessionConfig,
    pub observability: ObservabilityConfig,
}

impl PostureConfig {
    /// Load configuration for a project root, reading the process environment.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        Self::load_with_env(root, |key| std::env::var(key).ok())
    }

    /// Load configuration with an explicit environment lookup.
    pub fn load_with_env<F>(root: &Path, env: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let path = root.join(defaults::PROJECT_CONFIG_FILENAME);
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };

        Self::apply_env_overrides(&mut config, env)?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Load configuration from a TOML file. Missing keys fall back to defaults.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;
        toml::from_str(&content).map_err(|e| ConfigError::ParseError {
            path: path.display().to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &PostureConfig) -> Result<(), ConfigError> {
        let limit = config.recommendation.preview_limit;
        if limit == 0 || limit > defaults::MAX_PREVIEW_LIMIT {
            return Err(ConfigError::ValidationFailed {
                field: "recommendation.preview_limit".to_string(),
                message: format!("must be between 1 and {}", defaults::MAX_PREVIEW_LIMIT),
            });
        }
        if config.session.idle_timeout_secs == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "session.idle_timeout_secs".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        if config.session.max_sessions == 0 {
            return Err(ConfigError::ValidationFailed {
                field: "session.max_sessions".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        const LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];
        if !LEVELS.contains(&config.observability.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::ValidationFailed {
                field: "observability.log_level".to_string(),
                message: format!("must be one of {}", LEVELS.join(", ")),
            });
        }
        Ok(())
    }

    fn apply_env_overrides<F>(config: &mut PostureConfig, env: F) -> Result<(), ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(raw) = env(defaults::ENV_PREVIEW_LIMIT) {
            config.recommendation.preview_limit = parse_env(defaults::ENV_PREVIEW_LIMIT, &raw)?;
        }
        if let Some(raw) = env(defaults::ENV_SESSION_IDLE_TIMEOUT_SECS) {
            config.session.idle_timeout_secs =
                parse_env(defaults::ENV_SESSION_IDLE_TIMEOUT_SECS, &raw)?;
        }
        if let Some(level) = env(defaults::ENV_LOG_LEVEL) {
            config.observability.log_level = level.trim().to_string();
        }
        Ok(())
    }
}

fn parse_env<T: std::str::FromStr>(key: &str, raw: &str) -> Result<T, ConfigError> {
    raw.trim().parse().map_err(|_| ConfigError::ValidationFailed {
        field: key.to_string(),
        message: format!("not a valid number: {raw}"),
    })
}
