// Error types for dispatch configuration and task spawning

use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value:?} (expected a boolean)")]
    InvalidValue { key: String, value: String },
}

/// Errors raised when a listener task cannot be launched
#[derive(Error, Debug)]
pub enum SpawnError {
    #[error("Failed to spawn listener thread: {0}")]
    Thread(#[from] std::io::Error),

    #[error("No async runtime available to run listener task")]
    RuntimeUnavailable,
}
