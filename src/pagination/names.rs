//! Mapping from paginator token names to CLI-facing argument names.

use crate::model::{Operation, PaginatorConfig, Parameter};

/// Input token names of a paginator, normalized to a sequence.
pub fn input_tokens(config: &PaginatorConfig) -> &[String] {
    config.input_token.names()
}

/// CLI name (dashes stripped) of the parameter whose internal name is `token_name`.
///
/// `None` means the token has no CLI argument at all.
pub fn cli_name_for<'a>(params: &'a [Parameter], token_name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|p| p.name == token_name)
        .map(Parameter::bare_cli_name)
}

/// CLI names for every input token, followed by the limit key when one is configured.
///
/// Tokens with no matching parameter yield `None`. The iterator borrows the
/// operation and is rebuilt on every call.
pub fn all_paginated_cli_names(
    operation: &Operation,
) -> impl Iterator<Item = Option<&str>> + '_ {
    let (tokens, limit_key): (&[String], Option<&str>) = match &operation.pagination {
        Some(config) => (input_tokens(config), config.limit_key.as_deref()),
        None => (&[], None),
    };

    tokens
        .iter()
        .map(String::as_str)
        .chain(limit_key)
        .map(move |token| cli_name_for(&operation.params, token))
}
