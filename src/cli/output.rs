//! CLI output: error mapping from domain errors to stable CLI surface.

use crate::error::CliError;

/// Map domain/service errors to a string for CLI output.
pub fn map_error(e: &CliError) -> String {
    match e {
        CliError::Configuration(inner) => format!("Invalid operation definition: {}", inner),
        CliError::Arguments(inner) => inner.render().to_string(),
        other => other.to_string(),
    }
}
