//! Error types for the topic-dedup application.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the application.
#[derive(Error, Debug)]
pub enum Error {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Invalid configuration value for '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    // Input discovery errors
    #[error("Base file not found: {}", .0.display())]
    MissingBaseFile(PathBuf),

    #[error("No *TopicLookup.json files found in {}", .0.display())]
    NoLookupFiles(PathBuf),

    // Document errors
    #[error("Failed to parse {}: {}", .path.display(), .source)]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Serialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("TOML parse error: {0}")]
    TomlParse(#[from] toml::de::Error),
}

impl Error {
    /// Whether this error stops the run before any input is read.
    ///
    /// These are reported and the process exits normally.
    pub fn is_input_missing(&self) -> bool {
        matches!(self, Error::MissingBaseFile(_) | Error::NoLookupFiles(_))
    }

    /// Whether this error comes from loading or validating configuration.
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            Error::Config(_) | Error::ConfigValidation { .. } | Error::TomlParse(_)
        )
    }
}

/// Result type alias using our Error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Process exit codes.
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UNEXPECTED_ERROR: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}
