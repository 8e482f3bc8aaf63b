//! Configuration management for the agenda binary.
//!
//! Values come from environment variables, optionally seeded from a `.env` file.

use crate::error::{ConfigError, ConfigResult};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

/// Output format used when exporting the listing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Html,
    Json,
}

impl FromStr for ExportFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "html" => Ok(Self::Html),
            "json" => Ok(Self::Json),
            other => Err(format!("Must be html or json, got: {}", other)),
        }
    }
}

impl fmt::Display for ExportFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Html => write!(f, "html"),
            Self::Json => write!(f, "json"),
        }
    }
}

/// Configuration for the agenda binary.
#[derive(Debug, Clone)]
pub struct Config {
    /// File the listing is exported to (default: "listado_agenda.html")
    pub export_path: PathBuf,

    /// Format of the exported listing (default: html)
    pub export_format: ExportFormat,

    /// Log level used when RUST_LOG is not set (default: "info")
    pub log_level: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Optional environment variables:
    /// - `AGENDA_EXPORT_PATH`: target file of the export (default: "listado_agenda.html")
    /// - `AGENDA_EXPORT_FORMAT`: `html` or `json` (default: "html")
    /// - `LOG_LEVEL`: logging level (default: "info")
    pub fn from_env() -> ConfigResult<Self> {
        // A missing .env file is not an error
        let _ = dotenvy::dotenv();

        let defaults = Self::default();

        let export_path = match env::var("AGENDA_EXPORT_PATH") {
            Ok(val) if val.trim().is_empty() => {
                return Err(ConfigError::InvalidValue {
                    var: "AGENDA_EXPORT_PATH".to_string(),
                    reason: "Cannot be empty".to_string(),
                });
            }
            Ok(val) => PathBuf::from(val),
            Err(_) => defaults.export_path,
        };

        let export_format = match env::var("AGENDA_EXPORT_FORMAT") {
            Ok(val) => val
                .parse::<ExportFormat>()
                .map_err(|reason| ConfigError::InvalidValue {
                    var: "AGENDA_EXPORT_FORMAT".to_string(),
                    reason,
                })?,
            Err(_) => defaults.export_format,
        };

        let log_level = env::var("LOG_LEVEL").unwrap_or(defaults.log_level);

        Ok(Config {
            export_path,
            export_format,
            log_level,
        })
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            export_path: PathBuf::from("listado_agenda.html"),
            export_format: ExportFormat::Html,
            log_level: "info".to_string(),
        }
    }
}
