// SPDX-License-Identifier: Apache-2.0 OR MIT
// Copyright (c) 2025-2026 naskel.com

//! Runtime configuration.
//!
//! Supports both programmatic and file-based configuration. Generated
//! programs pick up a TOML file named by `HPI_RUNTIME_CONFIG`:
//!
//! ```toml
//! cast_policy = "structural"
//! log_level = "debug"
//! fatal_exit_code = 70
//! ```

use crate::{CastPolicy, CastValidator};
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Environment variable holding the path of the configuration file.
pub const CONFIG_ENV_VAR: &str = "HPI_RUNTIME_CONFIG";

const LOG_LEVELS: [&str; 6] = ["off", "error", "warn", "info", "debug", "trace"];

/// Configuration errors.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Runtime configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RuntimeConfig {
    /// Decision procedure for runtime casts.
    #[serde(default)]
    pub cast_policy: CastPolicy,

    /// Default log level when `RUST_LOG` is not set.
    #[serde(default = "default_log_level")]
    pub log_level: String,

    /// Process exit status used after a fatal diagnostic.
    #[serde(default = "default_fatal_exit_code")]
    pub fatal_exit_code: i32,
}

fn default_log_level() -> String {
    "warn".to_string()
}

fn default_fatal_exit_code() -> i32 {
    -1
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            cast_policy: CastPolicy::default(),
            log_level: default_log_level(),
            fatal_exit_code: default_fatal_exit_code(),
        }
    }
}

impl RuntimeConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    /// Parse configuration from TOML text.
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file named by `HPI_RUNTIME_CONFIG`, or defaults if unset.
    pub fn from_env() -> Result<Self, ConfigError> {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                log::debug!("[config] loading {}", Path::new(&path).display());
                Self::from_file(path)
            }
            None => Ok(Self::default()),
        }
    }

    /// Validate the configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !LOG_LEVELS.contains(&self.log_level.to_ascii_lowercase().as_str()) {
            return Err(ConfigError::Invalid(format!(
                "Unknown log level '{}' (expected one of {})",
                self.log_level,
                LOG_LEVELS.join(", ")
            )));
        }
        if self.fatal_exit_code == 0 {
            return Err(ConfigError::Invalid(
                "fatal_exit_code must be non-zero".into(),
            ));
        }
        Ok(())
    }

    /// Cast validator for the configured policy.
    pub fn cast_validator(&self) -> CastValidator {
        CastValidator::new(self.cast_policy)
    }
}
