//! The two generic pagination options added to every paginating operation.

use crate::argument::{dest_for, CliArgument, Parameters};
use crate::error::ConfigurationError;
use crate::model::ParamType;
use serde_json::Value;

pub const STARTING_TOKEN: &str = "starting-token";
pub const MAX_ITEMS: &str = "max-items";

pub const STARTING_TOKEN_HELP: &str = "A token to specify where to start paginating. \
This is the NextToken from a previously truncated response.";

pub const MAX_ITEMS_HELP: &str = "The total number of items to return. If the total \
number of items available is more than the value specified in max-items then a \
NextToken will be provided in the output that you can use to resume pagination.";

/// Optional, typed pagination flag (`--starting-token`, `--max-items`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageArgument {
    name: String,
    dest: String,
    documentation: &'static str,
    parse_type: ParamType,
    hidden: bool,
}

impl PageArgument {
    /// Only string and integer page arguments exist.
    pub fn new(
        name: impl Into<String>,
        documentation: &'static str,
        parse_type: ParamType,
    ) -> Result<Self, ConfigurationError> {
        let name = name.into();
        if !Self::supports(parse_type) {
            return Err(ConfigurationError::UnsupportedPageArgumentType {
                type_name: parse_type,
                name,
            });
        }
        let dest = dest_for(&name);
        Ok(Self {
            name,
            dest,
            documentation,
            parse_type,
            hidden: false,
        })
    }

    pub fn starting_token() -> Self {
        Self {
            name: STARTING_TOKEN.to_string(),
            dest: dest_for(STARTING_TOKEN),
            documentation: STARTING_TOKEN_HELP,
            parse_type: ParamType::String,
            hidden: false,
        }
    }

    pub fn max_items(parse_type: ParamType) -> Result<Self, ConfigurationError> {
        Self::new(MAX_ITEMS, MAX_ITEMS_HELP, parse_type)
    }

    pub fn supports(parse_type: ParamType) -> bool {
        matches!(parse_type, ParamType::String | ParamType::Integer)
    }

    pub fn display_flag(&self) -> String {
        self.cli_flag()
    }

    pub fn declared_type(&self) -> ParamType {
        self.parse_type
    }

    pub fn is_required(&self) -> bool {
        false
    }

    pub fn help_text(&self) -> &'static str {
        self.documentation
    }
}

impl CliArgument for PageArgument {
    fn name(&self) -> &str {
        &self.name
    }

    fn dest(&self) -> &str {
        &self.dest
    }

    fn cli_type(&self) -> ParamType {
        self.parse_type
    }

    fn documentation(&self) -> &str {
        self.documentation
    }

    fn required(&self) -> bool {
        false
    }

    fn hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn apply(&self, parameters: &mut Parameters, value: Option<&Value>) {
        if let Some(value) = value {
            parameters.insert(self.dest.clone(), value.clone());
        }
    }
}
