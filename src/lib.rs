//! Unipage: unified pagination arguments for model-driven CLI operations
//!
//! Every paginating operation gets the same `--starting-token` and
//! `--max-items` options in place of its service-specific token and limit
//! arguments, which stay accepted but hidden. Supplying one of the hidden
//! arguments directly turns automatic pagination off for that invocation.

pub mod argument;
pub mod cli;
pub mod config;
pub mod error;
pub mod hooks;
pub mod logging;
pub mod model;
pub mod pagination;
pub mod pipeline;
