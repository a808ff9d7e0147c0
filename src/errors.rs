//! Error types for Manifest Union
//!
//! Every pipeline stage reports a [`ManifestError`]; the orchestrator wraps it
//! in [`AppError::Pipeline`] together with the stage and the entry point that
//! was running, so a failure message always says where the run stopped.

use std::path::PathBuf;
use thiserror::Error;

use crate::app::pipeline::Stage;

/// Errors raised while reading, transforming, or writing manifest files
#[derive(Error, Debug)]
pub enum ManifestError {
    /// Source directory could not be listed
    #[error("Failed to list directory {path}: {source}")]
    ListDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be opened or read
    #[error("Failed to read {path}: {source}")]
    ReadFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Results directory could not be created
    #[error("Failed to create directory {path}: {source}")]
    CreateDirectory {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// File could not be created or written
    #[error("Failed to write {path}: {source}")]
    WriteFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Line does not contain exactly one `=` separator
    #[error("invalid line: {line}")]
    MalformedEntry { line: String },

    /// CSV encoder failure
    #[error("CSV encoding failed for {path}: {source}")]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },
}

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Configuration file not found
    #[error("Configuration file not found: {path}")]
    NotFound { path: PathBuf },

    /// Configuration file could not be read
    #[error("Failed to read config file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Invalid configuration format
    #[error("Failed to parse config file {path}: {source}")]
    InvalidFormat {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// Invalid configuration value
    #[error("Invalid configuration value for {field}: {value}. {reason}")]
    InvalidValue {
        field: String,
        value: String,
        reason: String,
    },
}

/// Top-level application error
#[derive(Error, Debug)]
pub enum AppError {
    /// A pipeline stage failed; carries the invoking command and the stage
    #[error("{command}: {stage} stage failed: {source}")]
    Pipeline {
        command: &'static str,
        stage: Stage,
        #[source]
        source: ManifestError,
    },

    /// Configuration error
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Invalid command-line input
    #[error("Invalid arguments: {message}")]
    InvalidArguments { message: String },
}

impl AppError {
    /// Create an invalid-arguments error with a message
    pub fn invalid_arguments(message: impl Into<String>) -> Self {
        Self::InvalidArguments {
            message: message.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            AppError::Pipeline { source, .. } => match source {
                ManifestError::ListDirectory { .. } => "list",
                ManifestError::ReadFile { .. } => "read",
                ManifestError::CreateDirectory { .. }
                | ManifestError::WriteFile { .. }
                | ManifestError::Csv { .. } => "write",
                ManifestError::MalformedEntry { .. } => "format",
            },
            AppError::Config(_) => "config",
            AppError::InvalidArguments { .. } => "arguments",
        }
    }

    /// Stage that failed, if the error came from the pipeline
    pub fn stage(&self) -> Option<Stage> {
        match self {
            AppError::Pipeline { stage, .. } => Some(*stage),
            _ => None,
        }
    }
}

/// Result type alias for convenience
pub type Result<T> = std::result::Result<T, AppError>;

/// Manifest result type alias
pub type ManifestResult<T> = std::result::Result<T, ManifestError>;

/// Config result type alias
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
