// ABOUTME: Environment configuration management for deployment-specific settings
// ABOUTME: Handles environment variables, deployment modes, and runtime configuration parsing
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! Environment-based configuration management

use crate::constants::{defaults, env_config, limits};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::env;
use tracing::warn;

/// Strongly typed log level configuration
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Errors only
    Error,
    /// Warnings and errors
    Warn,
    /// Standard operational logging
    #[default]
    Info,
    /// Verbose debugging output
    Debug,
    /// Maximum verbosity
    Trace,
}

impl LogLevel {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "error" => Self::Error,
            "warn" => Self::Warn,
            "debug" => Self::Debug,
            "trace" => Self::Trace,
            _ => Self::Info,
        }
    }
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Error => write!(f, "error"),
            Self::Warn => write!(f, "warn"),
            Self::Info => write!(f, "info"),
            Self::Debug => write!(f, "debug"),
            Self::Trace => write!(f, "trace"),
        }
    }
}

/// Environment type for logging and format defaults
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    /// Local development
    #[default]
    Development,
    /// Production deployment
    Production,
    /// Test runs
    Testing,
}

impl Environment {
    /// Parse from string with fallback
    #[must_use]
    pub fn from_str_or_default(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "production" | "prod" => Self::Production,
            "testing" | "test" => Self::Testing,
            _ => Self::Development,
        }
    }

    /// Check if this is a production environment
    #[must_use]
    pub const fn is_production(self) -> bool {
        matches!(self, Self::Production)
    }
}

/// History service configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HistoryConfig {
    /// Upper bound on sessions carried in the published history snapshot.
    /// The backing store is unbounded; this only caps the in-process view.
    pub max_cached_sessions: usize,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            max_cached_sessions: limits::DEFAULT_HISTORY_CACHE_LIMIT,
        }
    }
}

impl HistoryConfig {
    /// Load history configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if `SQUATFORM_HISTORY_CACHE_LIMIT` is set but not a
    /// positive integer.
    pub fn from_env() -> Result<Self> {
        let max_cached_sessions = match env::var(env_config::HISTORY_CACHE_LIMIT) {
            Ok(raw) => {
                let parsed: usize = raw.parse().with_context(|| {
                    format!(
                        "{} must be a positive integer, got {raw:?}",
                        env_config::HISTORY_CACHE_LIMIT
                    )
                })?;
                if parsed == 0 {
                    anyhow::bail!(
                        "{} must be greater than zero",
                        env_config::HISTORY_CACHE_LIMIT
                    );
                }
                parsed
            }
            Err(_) => limits::DEFAULT_HISTORY_CACHE_LIMIT,
        };

        Ok(Self {
            max_cached_sessions,
        })
    }
}

/// Top-level runtime configuration for the core crate
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CoreConfig {
    /// Deployment environment
    pub environment: Environment,
    /// Log level
    pub log_level: LogLevel,
    /// History service settings
    pub history: HistoryConfig,
}

impl CoreConfig {
    /// Load configuration from environment variables
    ///
    /// # Errors
    ///
    /// Returns an error if any recognized variable is present but malformed.
    pub fn from_env() -> Result<Self> {
        let environment = match env::var(env_config::ENVIRONMENT) {
            Ok(raw) => {
                let recognized = matches!(
                    raw.to_lowercase().as_str(),
                    "production" | "prod" | "testing" | "test" | "development" | "dev"
                );
                let parsed = Environment::from_str_or_default(&raw);
                if !recognized {
                    warn!(
                        raw = %raw,
                        fallback = parsed.to_label(),
                        "unrecognized ENVIRONMENT value, using fallback"
                    );
                }
                parsed
            }
            Err(_) => Environment::default(),
        };

        let log_level = env::var(env_config::LOG_LEVEL)
            .map(|raw| LogLevel::from_str_or_default(&raw))
            .unwrap_or_else(|_| LogLevel::from_str_or_default(defaults::DEFAULT_LOG_LEVEL));

        Ok(Self {
            environment,
            log_level,
            history: HistoryConfig::from_env()?,
        })
    }
}

impl Environment {
    /// Canonical lowercase label for this environment
    #[must_use]
    pub const fn to_label(self) -> &'static str {
        match self {
            Self::Development => "development",
            Self::Production => "production",
            Self::Testing => "testing",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level_parsing() {
        assert_eq!(LogLevel::from_str_or_default("DEBUG"), LogLevel::Debug);
        assert_eq!(LogLevel::from_str_or_default("nonsense"), LogLevel::Info);
    }

    #[test]
    fn test_environment_parsing_accepts_short_forms() {
        assert_eq!(
            Environment::from_str_or_default("prod"),
            Environment::Production
        );
        assert_eq!(
            Environment::from_str_or_default("test"),
            Environment::Testing
        );
        assert_eq!(
            Environment::from_str_or_default("anything-else"),
            Environment::Development
        );
    }

    #[test]
    fn test_history_config_default() {
        let config = HistoryConfig::default();
        assert_eq!(
            config.max_cached_sessions,
            limits::DEFAULT_HISTORY_CACHE_LIMIT
        );
    }
}
