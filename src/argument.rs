//! Argument table: the CLI-facing arguments accepted by one operation.
//!
//! Arguments are keyed by their bare CLI name (`next-token`). Each argument
//! knows how to register itself with clap, how to read its value back out of
//! the matches, and where to write it in the outgoing request parameters.

mod param;
mod parsed;
mod table;

pub use param::ParamArgument;
pub use parsed::ParsedArgs;
pub use table::{ArgumentSummary, ArgumentTable};

use crate::model::ParamType;
use clap::{Arg, ArgAction, ArgMatches, Command};
use serde_json::Value;
use std::fmt;

/// Outgoing request parameters, keyed by internal name.
pub type Parameters = serde_json::Map<String, Value>;

/// Parsed-argument key for a CLI name (`next-token` -> `next_token`).
pub fn dest_for(cli_name: &str) -> String {
    cli_name.trim_start_matches('-').replace('-', "_")
}

/// A CLI argument descriptor held in an [`ArgumentTable`].
pub trait CliArgument: fmt::Debug {
    /// Bare CLI name, without leading dashes
    fn name(&self) -> &str;

    /// Key under which the parsed value is stored
    fn dest(&self) -> &str;

    fn cli_type(&self) -> ParamType;

    fn documentation(&self) -> &str;

    fn required(&self) -> bool;

    /// Hidden arguments still parse but are left out of help and listings.
    fn hidden(&self) -> bool;

    fn set_hidden(&mut self, hidden: bool);

    /// Flag spelling, `--` + name
    fn cli_flag(&self) -> String {
        format!("--{}", self.name())
    }

    /// Add this argument to a clap command.
    fn register(&self, command: Command) -> Command {
        command.arg(build_arg(
            self.name(),
            self.dest(),
            self.cli_type(),
            self.documentation(),
            self.required(),
            self.hidden(),
        ))
    }

    /// Read this argument's value from clap matches; `None` when not supplied.
    fn extract(&self, matches: &ArgMatches) -> Option<Value> {
        extract_value(matches, self.dest(), self.cli_type())
    }

    /// Write a supplied value into the outgoing parameters.
    fn apply(&self, parameters: &mut Parameters, value: Option<&Value>);
}

/// Build a clap argument for the given type.
pub(crate) fn build_arg(
    name: &str,
    dest: &str,
    cli_type: ParamType,
    documentation: &str,
    required: bool,
    hidden: bool,
) -> Arg {
    let arg = Arg::new(dest.to_string())
        .long(name.to_string())
        .help(documentation.trim().to_string())
        .required(required)
        .hide(hidden);

    match cli_type {
        ParamType::Integer | ParamType::Long => arg
            .value_name(cli_type.as_str())
            .value_parser(clap::value_parser!(i64)),
        ParamType::Float | ParamType::Double => arg
            .value_name(cli_type.as_str())
            .value_parser(clap::value_parser!(f64)),
        ParamType::Boolean => arg
            .value_parser(clap::value_parser!(bool))
            .num_args(0..=1)
            .default_missing_value("true"),
        ParamType::List => arg
            .value_name("value")
            .value_parser(clap::value_parser!(String))
            .num_args(1..)
            .action(ArgAction::Append),
        _ => arg
            .value_name(cli_type.as_str())
            .value_parser(clap::value_parser!(String)),
    }
}

/// Read a typed value back out of clap matches as JSON.
pub(crate) fn extract_value(matches: &ArgMatches, dest: &str, cli_type: ParamType) -> Option<Value> {
    match cli_type {
        ParamType::Integer | ParamType::Long => matches
            .try_get_one::<i64>(dest)
            .ok()
            .flatten()
            .map(|v| Value::from(*v)),
        ParamType::Float | ParamType::Double => matches
            .try_get_one::<f64>(dest)
            .ok()
            .flatten()
            .map(|v| Value::from(*v)),
        ParamType::Boolean => matches
            .try_get_one::<bool>(dest)
            .ok()
            .flatten()
            .map(|v| Value::Bool(*v)),
        ParamType::List => matches
            .try_get_many::<String>(dest)
            .ok()
            .flatten()
            .map(|values| Value::Array(values.map(|v| Value::String(v.clone())).collect())),
        _ => matches
            .try_get_one::<String>(dest)
            .ok()
            .flatten()
            .map(|v| Value::String(v.clone())),
    }
}
