//! Dispatch configuration

use crate::error::ConfigError;
use serde::{Deserialize, Serialize};
use std::env;

/// Environment variable selecting per-listener task dispatch.
pub const ENV_PER_LISTENER_TASKS: &str = "HERALD_PER_LISTENER_TASKS";

/// Environment variable toggling per-emission logging.
pub const ENV_LOG_DISPATCH: &str = "HERALD_LOG_DISPATCH";

/// Dispatcher configuration
///
/// Fixed once the dispatcher is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DispatchConfig {
    /// Run every listener invocation as its own task instead of inline
    pub per_listener_tasks: bool,

    /// Emit `tracing` records for registrations and emissions
    pub enable_logging: bool,
}

impl Default for DispatchConfig {
    fn default() -> Self {
        Self {
            per_listener_tasks: false,
            enable_logging: true,
        }
    }
}

impl DispatchConfig {
    /// Load configuration from `HERALD_*` environment variables.
    ///
    /// Unset variables keep their default value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through a custom variable lookup.
    pub fn from_lookup<L>(lookup: L) -> Result<Self, ConfigError>
    where
        L: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(value) = lookup(ENV_PER_LISTENER_TASKS) {
            config.per_listener_tasks = parse_flag(ENV_PER_LISTENER_TASKS, &value)?;
        }

        if let Some(value) = lookup(ENV_LOG_DISPATCH) {
            config.enable_logging = parse_flag(ENV_LOG_DISPATCH, &value)?;
        }

        Ok(config)
    }
}

fn parse_flag(key: &str, value: &str) -> Result<bool, ConfigError> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            key: key.to_string(),
            value: value.to_string(),
        }),
    }
}
