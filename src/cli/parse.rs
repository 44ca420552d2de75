//! CLI parse: clap types for unipage. No behavior; definitions only.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Unipage CLI - unified pagination arguments for model-driven operations
#[derive(Parser, Debug)]
#[command(name = "unipage")]
#[command(about = "Inspect and invoke service operations with unified pagination arguments")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Service model file (.json or .toml)
    #[arg(long)]
    pub model: PathBuf,

    /// Workspace root directory (workspace config is read from <workspace>/config)
    #[arg(long, default_value = ".")]
    pub workspace: PathBuf,

    /// Configuration file path (overrides default config loading)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Enable verbose logging (default: off)
    #[arg(long, default_value = "false")]
    pub verbose: bool,

    /// Disable logging entirely
    #[arg(long)]
    pub quiet: bool,

    /// Log level (trace, debug, info, warn, error, off)
    #[arg(long)]
    pub log_level: Option<String>,

    /// Log format (json, text)
    #[arg(long)]
    pub log_format: Option<String>,

    /// Log output (stdout, stderr, file)
    #[arg(long)]
    pub log_output: Option<String>,

    /// Log file path (if output is "file")
    #[arg(long)]
    pub log_file: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the model's operations and whether they paginate
    Operations {
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
    },
    /// Show an operation's argument table after pagination unification
    Describe {
        /// Operation name (ListThings) or command name (list-things)
        operation: String,
        /// Output format (text or json)
        #[arg(long, default_value = "text")]
        format: String,
        /// Include hidden arguments
        #[arg(long)]
        all: bool,
    },
    /// Parse operation arguments and print the resolved request as JSON
    Invoke {
        /// Operation name (ListThings) or command name (list-things)
        operation: String,
        /// Start with automatic pagination disabled
        #[arg(long)]
        no_paginate: bool,
        /// Operation arguments, e.g. --max-items 10
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,
    },
}
