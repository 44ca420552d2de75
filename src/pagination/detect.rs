//! Post-parse check: a hand-supplied pagination argument turns auto-pagination off.

use super::{PaginationConfig, PaginationDecision};
use crate::argument::{dest_for, ParsedArgs};
use crate::hooks::PostParseHook;
use crate::model::Operation;
use tracing::debug;

/// A hidden pagination argument and the key its parsed value is stored under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HiddenArgument {
    pub cli_name: String,
    pub key: String,
}

impl HiddenArgument {
    pub fn new(cli_name: impl Into<String>) -> Self {
        let cli_name = cli_name.into();
        let key = dest_for(&cli_name);
        Self { cli_name, key }
    }

    pub fn with_key(cli_name: impl Into<String>, key: impl Into<String>) -> Self {
        Self {
            cli_name: cli_name.into(),
            key: key.into(),
        }
    }
}

/// `Disable` as soon as the user supplied one of the hidden arguments.
fn decide(hidden: &[HiddenArgument], parsed: &ParsedArgs) -> PaginationDecision {
    match hidden.iter().find(|arg| parsed.is_present(&arg.key)) {
        Some(arg) => {
            debug!(
                argument = %arg.cli_name,
                "Manual pagination argument supplied, disabling automatic pagination"
            );
            PaginationDecision::Disable
        }
        None => PaginationDecision::Unchanged,
    }
}

/// Disable pagination if any hidden pagination argument was supplied.
pub fn detect_override(
    hidden: &[HiddenArgument],
    parsed: &ParsedArgs,
    config: PaginationConfig,
) -> PaginationConfig {
    config.apply(decide(hidden, parsed))
}

/// Post-parse hook bound to the arguments hidden for one operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideCheck {
    hidden: Vec<HiddenArgument>,
}

impl OverrideCheck {
    pub fn new(hidden: Vec<HiddenArgument>) -> Self {
        Self { hidden }
    }

    pub fn hidden(&self) -> &[HiddenArgument] {
        &self.hidden
    }

    pub fn check(&self, parsed: &ParsedArgs, config: PaginationConfig) -> PaginationConfig {
        detect_override(&self.hidden, parsed, config)
    }
}

impl PostParseHook for OverrideCheck {
    fn after_parse(&self, _operation: &Operation, parsed: &ParsedArgs) -> PaginationDecision {
        decide(&self.hidden, parsed)
    }
}
