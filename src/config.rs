//! Configuration System
//!
//! Layered configuration: built-in defaults, the user's global config file,
//! workspace config files, then `UNIPAGE_*` environment variables.

use crate::logging::LoggingConfig;
use crate::pagination::PaginationConfig;
use serde::{Deserialize, Serialize};

mod facade;
mod merge;
mod sources;

pub use facade::ConfigLoader;

/// Root configuration structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UnipageConfig {
    /// Pagination defaults
    #[serde(default)]
    pub pagination: PaginationSettings,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Pagination defaults applied before any argument is parsed
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaginationSettings {
    /// Start every invocation with automatic pagination on
    #[serde(default = "default_true")]
    pub enabled: bool,
}

fn default_true() -> bool {
    true
}

impl Default for PaginationSettings {
    fn default() -> Self {
        Self {
            enabled: default_true(),
        }
    }
}

impl PaginationSettings {
    /// Pagination config an invocation starts from.
    pub fn initial(&self) -> PaginationConfig {
        if self.enabled {
            PaginationConfig::enabled()
        } else {
            PaginationConfig::disabled()
        }
    }
}
