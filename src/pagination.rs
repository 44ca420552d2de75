//! Pagination unification
//!
//! For every operation that can paginate:
//!
//! * the service-specific token and limit arguments are hidden. They still
//!   parse, so callers that paginate by hand keep working, but they no longer
//!   show up in help output.
//! * `--starting-token` and `--max-items` are added in their place.
//!
//! After parsing, supplying any hidden pagination argument directly turns
//! automatic pagination off for that invocation.

mod detect;
mod names;
mod page_argument;
mod unify;

pub use detect::{detect_override, HiddenArgument, OverrideCheck};
pub use names::{all_paginated_cli_names, cli_name_for, input_tokens};
pub use page_argument::{PageArgument, MAX_ITEMS, MAX_ITEMS_HELP, STARTING_TOKEN, STARTING_TOKEN_HELP};
pub use unify::{max_items_type, unify, UnifyPagination};

use serde::{Deserialize, Serialize};

/// Pagination settings for one command invocation.
///
/// Built before parsing and threaded through the post-parse hooks; inside this
/// crate it only ever moves from enabled to disabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfig {
    pub enabled: bool,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self { enabled: true }
    }
}

impl PaginationConfig {
    pub fn enabled() -> Self {
        Self { enabled: true }
    }

    pub fn disabled() -> Self {
        Self { enabled: false }
    }

    /// Fold a post-parse decision into this config.
    pub fn apply(self, decision: PaginationDecision) -> Self {
        match decision {
            PaginationDecision::Unchanged => self,
            PaginationDecision::Disable => Self::disabled(),
        }
    }
}

/// Outcome of a post-parse check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaginationDecision {
    Unchanged,
    Disable,
}
