//! Arguments generated from an operation's declared parameters.

use super::{dest_for, CliArgument, Parameters};
use crate::model::{ParamType, Parameter};
use serde_json::Value;

/// CLI argument backed by a model parameter; writes under the parameter's internal name.
#[derive(Debug, Clone)]
pub struct ParamArgument {
    param: Parameter,
    name: String,
    dest: String,
    hidden: bool,
}

impl ParamArgument {
    pub fn new(param: Parameter) -> Self {
        let name = param.bare_cli_name().to_string();
        let dest = dest_for(&name);
        Self {
            param,
            name,
            dest,
            hidden: false,
        }
    }
}

impl CliArgument for ParamArgument {
    fn name(&self) -> &str {
        &self.name
    }

    fn dest(&self) -> &str {
        &self.dest
    }

    fn cli_type(&self) -> ParamType {
        self.param.param_type
    }

    fn documentation(&self) -> &str {
        &self.param.documentation
    }

    fn required(&self) -> bool {
        self.param.required
    }

    fn hidden(&self) -> bool {
        self.hidden
    }

    fn set_hidden(&mut self, hidden: bool) {
        self.hidden = hidden;
    }

    fn apply(&self, parameters: &mut Parameters, value: Option<&Value>) {
        if let Some(value) = value {
            parameters.insert(self.param.name.clone(), value.clone());
        }
    }
}
