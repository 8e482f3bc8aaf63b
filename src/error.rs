//! Error types for the agenda.
//!
//! Directory operations never fail; these errors cover the edges of the system
//! (rendering to JSON, writing the exported document, loading configuration).

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while rendering or exporting a listing.
#[derive(Error, Debug)]
pub enum AgendaError {
    /// Writing the exported document failed
    #[error("Failed to export listing to {}: {source}", .path.display())]
    Export {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize contacts as JSON
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with AgendaError
pub type AgendaResult<T> = Result<T, AgendaError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
