//! Operation, parameter and paginator metadata.

use super::naming::to_kebab_case;
use super::ParamType;
use serde::{Deserialize, Serialize};

/// Low-level "resume from here" parameter name(s) of a paginator.
///
/// Models declare either a single name or an ordered list of names.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum InputToken {
    One(String),
    Many(Vec<String>),
}

impl InputToken {
    /// Token names as an ordered sequence.
    pub fn names(&self) -> &[String] {
        match self {
            InputToken::One(name) => std::slice::from_ref(name),
            InputToken::Many(names) => names,
        }
    }
}

impl From<&str> for InputToken {
    fn from(name: &str) -> Self {
        InputToken::One(name.to_string())
    }
}

impl From<Vec<&str>> for InputToken {
    fn from(names: Vec<&str>) -> Self {
        InputToken::Many(names.into_iter().map(str::to_string).collect())
    }
}

/// Pagination configuration of an operation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginatorConfig {
    pub input_token: InputToken,

    /// Low-level "max results per fetch" parameter
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub limit_key: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub output_token: Option<InputToken>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result_key: Option<InputToken>,
}

impl PaginatorConfig {
    pub fn new(input_token: impl Into<InputToken>) -> Self {
        Self {
            input_token: input_token.into(),
            limit_key: None,
            output_token: None,
            result_key: None,
        }
    }

    pub fn with_limit_key(mut self, limit_key: impl Into<String>) -> Self {
        self.limit_key = Some(limit_key.into());
        self
    }

    pub fn with_output_token(mut self, output_token: impl Into<InputToken>) -> Self {
        self.output_token = Some(output_token.into());
        self
    }

    pub fn with_result_key(mut self, result_key: impl Into<InputToken>) -> Self {
        self.result_key = Some(result_key.into());
        self
    }

    /// Check that every declared token name is non-empty.
    pub fn validate(&self) -> Result<(), String> {
        let tokens = self.input_token.names();
        if tokens.is_empty() {
            return Err("input_token must name at least one parameter".to_string());
        }
        if tokens.iter().any(|t| t.trim().is_empty()) {
            return Err("input_token names cannot be empty".to_string());
        }
        if let Some(limit_key) = &self.limit_key {
            if limit_key.trim().is_empty() {
                return Err("limit_key cannot be empty".to_string());
            }
        }
        Ok(())
    }
}

/// Model form of a parameter; `cli_name` is optional here.
#[derive(Deserialize)]
struct ParameterDef {
    name: String,
    #[serde(default)]
    cli_name: Option<String>,
    #[serde(rename = "type")]
    param_type: ParamType,
    #[serde(default)]
    documentation: String,
    #[serde(default)]
    required: bool,
}

impl From<ParameterDef> for Parameter {
    fn from(def: ParameterDef) -> Self {
        let cli_name = def
            .cli_name
            .unwrap_or_else(|| format!("--{}", to_kebab_case(&def.name)));
        Self {
            name: def.name,
            cli_name,
            param_type: def.param_type,
            documentation: def.documentation,
            required: def.required,
        }
    }
}

/// A declared operation parameter
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "ParameterDef")]
pub struct Parameter {
    /// Internal (wire) name, e.g. `NextToken`
    pub name: String,

    /// CLI display name including leading dashes, e.g. `--next-token`
    pub cli_name: String,

    #[serde(rename = "type")]
    pub param_type: ParamType,

    pub documentation: String,

    pub required: bool,
}

impl Parameter {
    /// Create a parameter whose CLI name is derived from its internal name.
    pub fn new(name: impl Into<String>, param_type: ParamType) -> Self {
        let name = name.into();
        let cli_name = format!("--{}", to_kebab_case(&name));
        Self {
            name,
            cli_name,
            param_type,
            documentation: String::new(),
            required: false,
        }
    }

    pub fn with_cli_name(mut self, cli_name: impl Into<String>) -> Self {
        self.cli_name = cli_name.into();
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    pub fn required(mut self) -> Self {
        self.required = true;
        self
    }

    /// CLI name with leading option markers stripped.
    pub fn bare_cli_name(&self) -> &str {
        self.cli_name.trim_start_matches('-')
    }
}

/// A remote operation exposed as a CLI command
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Operation {
    pub name: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<PaginatorConfig>,

    #[serde(default)]
    pub params: Vec<Parameter>,

    #[serde(default)]
    pub documentation: String,
}

impl Operation {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            pagination: None,
            params: Vec::new(),
            documentation: String::new(),
        }
    }

    pub fn with_param(mut self, param: Parameter) -> Self {
        self.params.push(param);
        self
    }

    pub fn with_pagination(mut self, pagination: PaginatorConfig) -> Self {
        self.pagination = Some(pagination);
        self
    }

    pub fn with_documentation(mut self, documentation: impl Into<String>) -> Self {
        self.documentation = documentation.into();
        self
    }

    pub fn can_paginate(&self) -> bool {
        self.pagination.is_some()
    }

    /// Command name as typed on the command line, e.g. `describe-instances`.
    pub fn cli_name(&self) -> String {
        to_kebab_case(&self.name)
    }

    /// Look up a declared parameter by internal name.
    pub fn param(&self, name: &str) -> Option<&Parameter> {
        self.params.iter().find(|p| p.name == name)
    }
}
