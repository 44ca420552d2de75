//! Argument table rewrite for paginating operations.

use super::detect::{HiddenArgument, OverrideCheck};
use super::names::all_paginated_cli_names;
use super::page_argument::{PageArgument, MAX_ITEMS, STARTING_TOKEN};
use crate::argument::ArgumentTable;
use crate::error::ConfigurationError;
use crate::hooks::{ArgumentTableEdits, PreParseHook};
use crate::model::{Operation, ParamType};
use tracing::debug;

/// Declared type for `--max-items`.
///
/// Follows the limit-key parameter; integer when there is no limit key or it
/// matches no declared parameter.
pub fn max_items_type(operation: &Operation) -> Result<ParamType, ConfigurationError> {
    let limit_param = operation
        .pagination
        .as_ref()
        .and_then(|config| config.limit_key.as_deref())
        .and_then(|limit_key| operation.param(limit_key));

    match limit_param {
        None => Ok(ParamType::Integer),
        Some(param) if PageArgument::supports(param.param_type) => Ok(param.param_type),
        Some(param) => Err(ConfigurationError::UnsupportedPaginationType {
            type_name: param.param_type,
            operation: operation.name.clone(),
            parameter: param.name.clone(),
        }),
    }
}

/// Validated rewrite for one operation, not yet applied.
struct Plan {
    hidden: Vec<HiddenArgument>,
    starting_token: PageArgument,
    max_items: PageArgument,
}

fn plan(table: &ArgumentTable, operation: &Operation) -> Result<Option<Plan>, ConfigurationError> {
    if !operation.can_paginate() {
        return Ok(None);
    }
    debug!(operation = %operation.name, "Modifying paging parameters");

    let mut hidden = Vec::new();
    for cli_name in all_paginated_cli_names(operation) {
        let Some(cli_name) = cli_name else {
            debug!(operation = %operation.name, "Pagination token has no CLI argument, skipping");
            continue;
        };
        if cli_name == STARTING_TOKEN || cli_name == MAX_ITEMS {
            debug!(
                operation = %operation.name,
                argument = cli_name,
                "Pagination argument shares its name with a unified argument; supplying it disables automatic pagination"
            );
        }
        match table.get(cli_name) {
            Some(argument) => hidden.push(HiddenArgument::with_key(cli_name, argument.dest())),
            None => debug!(
                operation = %operation.name,
                argument = cli_name,
                "Pagination argument not in argument table, skipping"
            ),
        }
    }

    let max_items = PageArgument::max_items(max_items_type(operation)?)?;

    Ok(Some(Plan {
        hidden,
        starting_token: PageArgument::starting_token(),
        max_items,
    }))
}

impl Plan {
    fn into_edits(self) -> ArgumentTableEdits {
        ArgumentTableEdits {
            hide: self.hidden.iter().map(|h| h.cli_name.clone()).collect(),
            insert: vec![Box::new(self.starting_token), Box::new(self.max_items)],
            post_parse: Some(Box::new(OverrideCheck::new(self.hidden))),
        }
    }
}

/// Hide the operation's own pagination arguments and add `--starting-token`
/// and `--max-items`.
///
/// Returns the override check bound to the hidden arguments, or `None` for an
/// operation that cannot paginate. On error the table is left untouched.
///
/// A limit key whose CLI name is already `max-items` is replaced by the unified
/// argument but stays in the override check, so passing `--max-items` turns
/// automatic pagination off for such operations.
pub fn unify(
    table: &mut ArgumentTable,
    operation: &Operation,
) -> Result<Option<OverrideCheck>, ConfigurationError> {
    let Some(rewrite) = plan(table, operation)? else {
        return Ok(None);
    };

    for hidden in &rewrite.hidden {
        table.hide(&hidden.cli_name);
    }
    table.insert(STARTING_TOKEN, Box::new(rewrite.starting_token));
    table.insert(MAX_ITEMS, Box::new(rewrite.max_items));

    Ok(Some(OverrideCheck::new(rewrite.hidden)))
}

/// Pre-parse hook that unifies pagination arguments.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnifyPagination;

impl PreParseHook for UnifyPagination {
    fn before_parse(
        &self,
        table: &ArgumentTable,
        operation: &Operation,
    ) -> Result<ArgumentTableEdits, ConfigurationError> {
        Ok(plan(table, operation)?
            .map(Plan::into_edits)
            .unwrap_or_else(ArgumentTableEdits::none))
    }
}
