//! Command pipeline: builds an operation's argument table, parses the user's
//! arguments and resolves the outgoing request.

use crate::argument::{ArgumentTable, CliArgument, Parameters, ParsedArgs};
use crate::error::ConfigurationError;
use crate::hooks::{PostParseHook, PreParseHook};
use crate::model::Operation;
use crate::pagination::{PaginationConfig, UnifyPagination};
use clap::Command;
use serde::Serialize;
use std::collections::{BTreeMap, BTreeSet};
use std::ffi::OsString;
use tracing::debug;

/// Flag and id clap reserves for its built-in help.
const HELP: &str = "help";

/// Ordered set of pre-parse hooks applied to every operation.
#[derive(Debug)]
pub struct CommandPipeline {
    pre_parse: Vec<Box<dyn PreParseHook>>,
}

impl Default for CommandPipeline {
    fn default() -> Self {
        Self::new().with_hook(UnifyPagination)
    }
}

impl CommandPipeline {
    /// Pipeline with no hooks: operations keep their declared arguments.
    pub fn new() -> Self {
        Self {
            pre_parse: Vec::new(),
        }
    }

    pub fn with_hook(mut self, hook: impl PreParseHook + 'static) -> Self {
        self.pre_parse.push(Box::new(hook));
        self
    }

    /// Build the argument table for `operation` and run every pre-parse hook.
    pub fn prepare<'a>(
        &self,
        operation: &'a Operation,
    ) -> Result<PreparedCommand<'a>, ConfigurationError> {
        let mut table = ArgumentTable::from_operation(operation);
        let mut post_parse = Vec::new();

        for hook in &self.pre_parse {
            let edits = hook.before_parse(&table, operation)?;
            if let Some(check) = edits.apply(&mut table) {
                post_parse.push(check);
            }
        }

        check_conflicts(operation, &table)?;

        debug!(
            operation = %operation.name,
            arguments = table.len(),
            post_parse_hooks = post_parse.len(),
            "Built argument table"
        );

        Ok(PreparedCommand {
            operation,
            table,
            post_parse,
        })
    }
}

/// Every argument needs its own long flag and parsed-argument key, and neither
/// may shadow `--help`.
fn check_conflicts(operation: &Operation, table: &ArgumentTable) -> Result<(), ConfigurationError> {
    let conflict = |argument: &str, reason: String| ConfigurationError::ConflictingArgument {
        operation: operation.name.clone(),
        argument: argument.to_string(),
        reason,
    };

    let mut longs: BTreeSet<&str> = BTreeSet::new();
    let mut dests: BTreeMap<&str, &str> = BTreeMap::new();
    for (_, argument) in table.iter() {
        let name = argument.name();
        if name == HELP || argument.dest() == HELP {
            return Err(conflict(name, "reserved for help".to_string()));
        }
        if !longs.insert(name) {
            return Err(conflict(name, "flag already in use".to_string()));
        }
        if let Some(existing) = dests.insert(argument.dest(), name) {
            return Err(conflict(
                name,
                format!("key {} already used by --{}", argument.dest(), existing),
            ));
        }
    }
    Ok(())
}

/// An operation with its final argument table and pending post-parse hooks.
#[derive(Debug)]
pub struct PreparedCommand<'a> {
    operation: &'a Operation,
    table: ArgumentTable,
    post_parse: Vec<Box<dyn PostParseHook>>,
}

/// Result of parsing one command line.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Invocation {
    pub operation: String,
    pub pagination: PaginationConfig,
    pub parameters: Parameters,
}

impl<'a> PreparedCommand<'a> {
    pub fn operation(&self) -> &Operation {
        self.operation
    }

    pub fn table(&self) -> &ArgumentTable {
        &self.table
    }

    /// clap command accepting every table argument; hidden ones parse but stay out of help.
    pub fn command(&self) -> Command {
        let mut command = Command::new(self.operation.cli_name()).no_binary_name(true);
        if !self.operation.documentation.is_empty() {
            command = command.about(self.operation.documentation.trim().to_string());
        }
        for (_, argument) in self.table.iter() {
            command = argument.register(command);
        }
        command
    }

    /// Parse operation arguments (without the command name) and resolve the request.
    pub fn parse<I, T>(&self, args: I, config: PaginationConfig) -> Result<Invocation, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = self.command().try_get_matches_from(args)?;
        let parsed = ParsedArgs::from_matches(&self.table, &matches);
        Ok(self.resolve(&parsed, config))
    }

    /// Run post-parse hooks and build the outgoing parameters.
    pub fn resolve(&self, parsed: &ParsedArgs, config: PaginationConfig) -> Invocation {
        let pagination = self.post_parse.iter().fold(config, |config, hook| {
            config.apply(hook.after_parse(self.operation, parsed))
        });

        let mut parameters = Parameters::new();
        for (_, argument) in self.table.iter() {
            argument.apply(&mut parameters, parsed.get(argument.dest()));
        }

        Invocation {
            operation: self.operation.name.clone(),
            pagination,
            parameters,
        }
    }
}
