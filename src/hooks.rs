//! Two-phase command hooks.
//!
//! A [`PreParseHook`] runs while an operation's argument table is being built
//! and returns the edits to make. Edits may carry a [`PostParseHook`], which
//! runs once the user's arguments are parsed and decides whether automatic
//! pagination stays on.

use crate::argument::{ArgumentTable, CliArgument, ParsedArgs};
use crate::error::ConfigurationError;
use crate::model::Operation;
use crate::pagination::PaginationDecision;
use std::fmt;

/// Runs before argument parsing.
pub trait PreParseHook: fmt::Debug {
    /// Compute the edits for `operation`'s argument table. Must not fail after
    /// returning edits: all validation happens here.
    fn before_parse(
        &self,
        table: &ArgumentTable,
        operation: &Operation,
    ) -> Result<ArgumentTableEdits, ConfigurationError>;
}

/// Runs after argument parsing.
pub trait PostParseHook: fmt::Debug {
    fn after_parse(&self, operation: &Operation, parsed: &ParsedArgs) -> PaginationDecision;
}

/// Validated changes to an argument table.
#[derive(Debug, Default)]
pub struct ArgumentTableEdits {
    /// Existing arguments to hide, by CLI name
    pub hide: Vec<String>,

    /// New arguments, stored under their own CLI name
    pub insert: Vec<Box<dyn CliArgument>>,

    pub post_parse: Option<Box<dyn PostParseHook>>,
}

impl ArgumentTableEdits {
    pub fn none() -> Self {
        Self::default()
    }

    pub fn is_empty(&self) -> bool {
        self.hide.is_empty() && self.insert.is_empty() && self.post_parse.is_none()
    }

    /// Apply the edits and hand back the post-parse hook, if any.
    pub fn apply(self, table: &mut ArgumentTable) -> Option<Box<dyn PostParseHook>> {
        for name in &self.hide {
            table.hide(name);
        }
        for argument in self.insert {
            let name = argument.name().to_string();
            table.insert(name, argument);
        }
        self.post_parse
    }
}
