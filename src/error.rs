//! Error types for the pagination unifier and its CLI.

use crate::model::ParamType;
use std::path::PathBuf;
use thiserror::Error;

/// Setup-time errors caused by a malformed operation definition.
///
/// These are raised while the argument table is being built, before any user
/// argument is parsed, and are never retried.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigurationError {
    #[error(
        "Unsupported pagination type {type_name} for operation {operation} and parameter {parameter}"
    )]
    UnsupportedPaginationType {
        type_name: ParamType,
        operation: String,
        parameter: String,
    },

    #[error("Unsupported type {type_name} for page argument --{name}")]
    UnsupportedPageArgumentType { type_name: ParamType, name: String },

    #[error("Conflicting option string --{argument} for operation {operation}: {reason}")]
    ConflictingArgument {
        operation: String,
        argument: String,
        reason: String,
    },
}

/// Service model loading and lookup errors
#[derive(Debug, Error)]
pub enum ModelError {
    #[error("Failed to read model file {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse model file {path:?}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Unsupported model file extension: {0:?} (expected .json or .toml)")]
    UnsupportedFormat(PathBuf),

    #[error("Operation not found: {0}")]
    OperationNotFound(String),

    #[error("Invalid paginator for operation {operation}: {reason}")]
    InvalidPaginator { operation: String, reason: String },
}

/// Top-level errors surfaced by the CLI.
#[derive(Debug, Error)]
pub enum CliError {
    #[error("Configuration error: {0}")]
    Configuration(#[from] ConfigurationError),

    #[error("Model error: {0}")]
    Model(#[from] ModelError),

    #[error("{0}")]
    Arguments(#[from] clap::Error),

    #[error("Config error: {0}")]
    ConfigError(String),

    #[error("Output error: {0}")]
    Output(#[from] serde_json::Error),
}

impl From<config::ConfigError> for CliError {
    fn from(err: config::ConfigError) -> Self {
        CliError::ConfigError(err.to_string())
    }
}
