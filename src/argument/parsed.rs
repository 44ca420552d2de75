//! Parsed argument values, keyed by parsed-argument key.

use super::ArgumentTable;
use clap::ArgMatches;
use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

/// Values the user supplied on the command line.
///
/// Arguments that were not passed have no entry; a JSON null is treated the same.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParsedArgs {
    values: BTreeMap<String, Value>,
}

impl ParsedArgs {
    pub fn new() -> Self {
        Self::default()
    }

    /// Collect every table argument's value from clap matches.
    pub fn from_matches(table: &ArgumentTable, matches: &ArgMatches) -> Self {
        let mut parsed = Self::new();
        for (_, argument) in table.iter() {
            if let Some(value) = argument.extract(matches) {
                parsed.insert(argument.dest(), value);
            }
        }
        parsed
    }

    pub fn insert(&mut self, key: impl Into<String>, value: Value) {
        self.values.insert(key.into(), value);
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(key, value.into());
        self
    }

    /// Supplied value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.values.get(key).filter(|v| !v.is_null())
    }

    pub fn is_present(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}
