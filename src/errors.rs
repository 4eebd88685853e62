//! Centralized error handling.
//!
//! Loading the environment file is the only fallible operation in this
//! crate; its failure is reported and assembly proceeds with whatever
//! values are already present.

use thiserror::Error;

/// Errors produced while assembling the settings record.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// The selected environment file could not be read or parsed.
    #[error("Failed to load {file}: {source}")]
    EnvFile {
        file: String,
        #[source]
        source: dotenvy::Error,
    },
}

/// Result type alias
pub type ConfigResult<T> = Result<T, ConfigError>;
