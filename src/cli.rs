//! CLI domain: parse, route, help, output, and presentation only.
//! No domain logic; the route table dispatches to the command pipeline.

mod help;
mod output;
mod parse;
mod presentation;
mod route;

pub use help::command_name;
pub use output::map_error;
pub use parse::{Cli, Commands};
pub use presentation::{
    format_argument_table_json, format_argument_table_text, format_invocation_json,
    format_operations_json, format_operations_text,
};
pub use route::RunContext;
