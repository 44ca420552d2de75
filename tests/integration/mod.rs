//! Integration tests for unipage

mod cli_route;
mod config_integration;
mod test_utils;
