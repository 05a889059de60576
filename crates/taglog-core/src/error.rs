//! Error types for taglog

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using TaglogError
pub type Result<T> = std::result::Result<T, TaglogError>;

/// Main error type for taglog operations
#[derive(Debug, Error)]
pub enum TaglogError {
    /// Configuration-related errors
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Git-related errors
    #[error(transparent)]
    Git(#[from] GitError),

    /// Changelog-related errors
    #[error(transparent)]
    Changelog(#[from] ChangelogError),
}

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Invalid configuration value
    #[error("Invalid configuration: {field} - {message}")]
    InvalidValue { field: String, message: String },

    /// Release tag pattern does not compile
    #[error("Error compiling release tags regexp '{pattern}': {source}")]
    InvalidTagPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    /// YAML parsing error
    #[error("YAML parsing error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// TOML parsing error
    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// IO error
    #[error("IO error reading config: {0}")]
    Io(#[from] std::io::Error),
}

/// Git-related errors
#[derive(Debug, Error)]
pub enum GitError {
    /// The git executable could not be started
    #[error("Failed to run git: {0}")]
    CommandFailed(#[source] std::io::Error),

    /// `git log` exited unsuccessfully; carries its combined output
    #[error("{output}")]
    LogFailed { output: String },

    /// Reading a captured log failed
    #[error("Failed to read log from {path}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Changelog-related errors
#[derive(Debug, Error)]
pub enum ChangelogError {
    /// A commit block carried a date in an unexpected layout
    #[error("Error parsing date '{date}': {source}")]
    MalformedDate {
        date: String,
        #[source]
        source: chrono::ParseError,
    },

    /// Failed to write changelog
    #[error("Failed to write changelog to {path}: {source}")]
    WriteFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Failed to print the changelog
    #[error("Failed to write changelog to stdout: {0}")]
    StdoutFailed(#[source] std::io::Error),
}
