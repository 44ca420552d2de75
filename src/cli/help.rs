//! CLI command-name contract for logging and routing.

use crate::cli::parse::Commands;

/// Command name string used in log fields (e.g. "describe", "invoke").
pub fn command_name(command: &Commands) -> &'static str {
    match command {
        Commands::Operations { .. } => "operations",
        Commands::Describe { .. } => "describe",
        Commands::Invoke { .. } => "invoke",
    }
}

/// Operation targeted by a command, if any.
pub fn target_operation(command: &Commands) -> Option<&str> {
    match command {
        Commands::Operations { .. } => None,
        Commands::Describe { operation, .. } | Commands::Invoke { operation, .. } => {
            Some(operation.as_str())
        }
    }
}
