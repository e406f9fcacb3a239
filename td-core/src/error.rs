//! Error types for todo list operations.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TdError.
pub type Result<T> = std::result::Result<T, TdError>;

/// Errors that can occur during todo list operations.
///
/// All variants are terminal for the current CLI invocation: the dispatcher
/// prints the message to stderr and exits non-zero. A missing config file on
/// load is the one expected-absence case and is not an error.
#[derive(Error, Debug)]
pub enum TdError {
    /// Cannot determine the user's home directory.
    #[error("unable to locate home directory")]
    UnableToLocateHomeDir,

    /// The config file exists but could not be read or parsed.
    #[error("unable to load config from '{path}': {source}")]
    UnableToLoadConfig {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The todo list could not be serialized or written to the config file.
    #[error("unable to save config to '{path}': {source}")]
    UnableToSaveConfig {
        path: PathBuf,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// An invalid argument was passed to an operation.
    #[error("argument is invalid: {0}")]
    InvalidArgument(String),
}

impl TdError {
    /// Create an UnableToLoadConfig error.
    pub fn load(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::UnableToLoadConfig {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create an UnableToSaveConfig error.
    pub fn save(
        path: impl Into<PathBuf>,
        source: impl Into<Box<dyn std::error::Error + Send + Sync>>,
    ) -> Self {
        Self::UnableToSaveConfig {
            path: path.into(),
            source: source.into(),
        }
    }

    /// Create an InvalidArgument error.
    pub fn invalid_argument(msg: impl Into<String>) -> Self {
        Self::InvalidArgument(msg.into())
    }
}
