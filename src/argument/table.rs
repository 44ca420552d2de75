//! Argument table keyed by bare CLI name.

use super::{CliArgument, ParamArgument};
use crate::model::{Operation, ParamType};
use serde::Serialize;
use std::collections::BTreeMap;

/// Mutable map from CLI-facing name to argument descriptor for one operation.
#[derive(Debug, Default)]
pub struct ArgumentTable {
    arguments: BTreeMap<String, Box<dyn CliArgument>>,
}

/// Flat description of one table entry, used for listings and comparisons.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArgumentSummary {
    pub name: String,
    pub flag: String,
    #[serde(rename = "type")]
    pub cli_type: ParamType,
    pub required: bool,
    pub hidden: bool,
    pub documentation: String,
}

impl ArgumentTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// One argument per declared parameter of the operation.
    pub fn from_operation(operation: &Operation) -> Self {
        let mut table = Self::new();
        for param in &operation.params {
            let argument = ParamArgument::new(param.clone());
            table.insert(argument.name().to_string(), Box::new(argument));
        }
        table
    }

    /// Insert or replace the argument stored under `name`.
    pub fn insert(&mut self, name: impl Into<String>, argument: Box<dyn CliArgument>) {
        self.arguments.insert(name.into(), argument);
    }

    pub fn get(&self, name: &str) -> Option<&dyn CliArgument> {
        self.arguments.get(name).map(|a| a.as_ref())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.arguments.contains_key(name)
    }

    /// Mark an argument hidden. Returns false if there is no such argument.
    pub fn hide(&mut self, name: &str) -> bool {
        match self.arguments.get_mut(name) {
            Some(argument) => {
                argument.set_hidden(true);
                true
            }
            None => false,
        }
    }

    pub fn len(&self) -> usize {
        self.arguments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.arguments.is_empty()
    }

    /// All arguments in name order, hidden ones included.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &dyn CliArgument)> {
        self.arguments
            .iter()
            .map(|(name, argument)| (name.as_str(), argument.as_ref()))
    }

    /// Arguments that appear in help and listings.
    pub fn visible(&self) -> impl Iterator<Item = (&str, &dyn CliArgument)> {
        self.iter().filter(|(_, argument)| !argument.hidden())
    }

    pub fn hidden_names(&self) -> Vec<&str> {
        self.iter()
            .filter(|(_, argument)| argument.hidden())
            .map(|(name, _)| name)
            .collect()
    }

    pub fn summary(&self) -> Vec<ArgumentSummary> {
        self.iter()
            .map(|(name, argument)| ArgumentSummary {
                name: name.to_string(),
                flag: argument.cli_flag(),
                cli_type: argument.cli_type(),
                required: argument.required(),
                hidden: argument.hidden(),
                documentation: argument.documentation().trim().to_string(),
            })
            .collect()
    }
}
