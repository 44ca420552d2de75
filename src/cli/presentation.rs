//! CLI presentation: text tables and JSON for command results.

use crate::argument::ArgumentSummary;
use crate::model::{Operation, ServiceModel};
use crate::pipeline::{Invocation, PreparedCommand};
use comfy_table::{ContentArrangement, Table};
use serde_json::json;

const TABLE_WIDTH: u16 = 120;

fn pagination_columns(op: &Operation) -> (String, String) {
    match &op.pagination {
        Some(config) => (
            config.input_token.names().join(", "),
            config.limit_key.clone().unwrap_or_else(|| "-".to_string()),
        ),
        None => ("-".to_string(), "-".to_string()),
    }
}

pub fn format_operations_text(model: &ServiceModel) -> String {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH)
        .set_header(vec!["Operation", "Command", "Paginates", "Input tokens", "Limit key"]);

    for op in &model.operations {
        let (tokens, limit_key) = pagination_columns(op);
        table.add_row(vec![
            op.name.clone(),
            op.cli_name(),
            if op.can_paginate() { "yes" } else { "no" }.to_string(),
            tokens,
            limit_key,
        ]);
    }

    format!("Service: {}\n{}", model.service, table)
}

pub fn format_operations_json(model: &ServiceModel) -> Result<String, serde_json::Error> {
    let operations: Vec<_> = model
        .operations
        .iter()
        .map(|op| {
            json!({
                "name": op.name,
                "command": op.cli_name(),
                "can_paginate": op.can_paginate(),
                "pagination": op.pagination,
            })
        })
        .collect();
    serde_json::to_string_pretty(&json!({
        "service": model.service,
        "operations": operations,
    }))
}

fn listed_arguments(prepared: &PreparedCommand<'_>, all: bool) -> Vec<ArgumentSummary> {
    prepared
        .table()
        .summary()
        .into_iter()
        .filter(|arg| all || !arg.hidden)
        .collect()
}

pub fn format_argument_table_text(prepared: &PreparedCommand<'_>, all: bool) -> String {
    let mut table = Table::new();
    table
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(TABLE_WIDTH);
    if all {
        table.set_header(vec!["Flag", "Type", "Required", "Hidden", "Description"]);
    } else {
        table.set_header(vec!["Flag", "Type", "Required", "Description"]);
    }

    for arg in listed_arguments(prepared, all) {
        let required = if arg.required { "yes" } else { "no" }.to_string();
        let mut row = vec![arg.flag, arg.cli_type.to_string(), required];
        if all {
            row.push(if arg.hidden { "yes" } else { "no" }.to_string());
        }
        row.push(arg.documentation);
        table.add_row(row);
    }

    let op = prepared.operation();
    let mut out = format!("{} ({})\n", op.cli_name(), op.name);
    if !op.documentation.is_empty() {
        out.push_str(op.documentation.trim());
        out.push('\n');
    }
    out.push_str(&table.to_string());
    out
}

pub fn format_argument_table_json(
    prepared: &PreparedCommand<'_>,
    all: bool,
) -> Result<String, serde_json::Error> {
    let op = prepared.operation();
    serde_json::to_string_pretty(&json!({
        "operation": op.name,
        "command": op.cli_name(),
        "can_paginate": op.can_paginate(),
        "arguments": listed_arguments(prepared, all),
    }))
}

pub fn format_invocation_json(invocation: &Invocation) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(invocation)
}
