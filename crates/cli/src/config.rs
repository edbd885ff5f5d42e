//! Runtime configuration, read from the environment.

use std::path::PathBuf;

use bouquet_observability::LogFormat;
use thiserror::Error;

pub const INPUT_VAR: &str = "BOUQUET_INPUT";
pub const OUTPUT_FORMAT_VAR: &str = "BOUQUET_OUTPUT_FORMAT";
pub const LOG_FORMAT_VAR: &str = "BOUQUET_LOG_FORMAT";
pub const LOG_LEVEL_VAR: &str = "BOUQUET_LOG_LEVEL";

const DEFAULT_LOG_LEVEL: &str = "warn";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputSource {
    Stdin,
    File(PathBuf),
}

/// How composed bouquets are written to stdout.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum OutputFormat {
    /// `LS3a2b`
    #[default]
    Text,
    /// `{"design":"LS","stems":[{"species":"a","count":3},...]}`
    Json,
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid value for {var}: {value:?} (expected one of: {expected})")]
    InvalidValue {
        var: &'static str,
        value: String,
        expected: &'static str,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub input: InputSource,
    pub output_format: OutputFormat,
    pub log_format: LogFormat,
    /// Default filter when `RUST_LOG` is not set.
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            input: InputSource::Stdin,
            output_format: OutputFormat::default(),
            log_format: LogFormat::default(),
            log_level: DEFAULT_LOG_LEVEL.to_string(),
        }
    }
}

impl Config {
    /// Process environment; the first command-line argument overrides `BOUQUET_INPUT`.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok(), std::env::args().nth(1))
    }

    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
        input_arg: Option<String>,
    ) -> Result<Self, ConfigError> {
        let input = match input_arg.or_else(|| lookup(INPUT_VAR)) {
            None => InputSource::Stdin,
            Some(path) if path.is_empty() || path == "-" => InputSource::Stdin,
            Some(path) => InputSource::File(PathBuf::from(path)),
        };

        let output_format = match lookup(OUTPUT_FORMAT_VAR).as_deref() {
            None | Some("text") => OutputFormat::Text,
            Some("json") => OutputFormat::Json,
            Some(other) => return Err(invalid(OUTPUT_FORMAT_VAR, other, "text, json")),
        };

        let log_format = match lookup(LOG_FORMAT_VAR).as_deref() {
            None | Some("pretty") => LogFormat::Pretty,
            Some("json") => LogFormat::Json,
            Some(other) => return Err(invalid(LOG_FORMAT_VAR, other, "pretty, json")),
        };

        let log_level = lookup(LOG_LEVEL_VAR)
            .filter(|level| !level.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string());

        Ok(Self {
            input,
            output_format,
            log_format,
            log_level,
        })
    }
}

fn invalid(var: &'static str, value: &str, expected: &'static str) -> ConfigError {
    ConfigError::InvalidValue {
        var,
        value: value.to_string(),
        expected,
    }
}
