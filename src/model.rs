//! Operation metadata: the service model consumed by the argument table builder.
//!
//! An operation declares its parameters and, when it can paginate, a paginator
//! config naming the low-level input token(s) and limit key.

mod naming;
mod operation;
mod service;

pub use naming::to_kebab_case;
pub use operation::{InputToken, Operation, PaginatorConfig, Parameter};
pub use service::ServiceModel;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Declared type of an operation parameter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ParamType {
    String,
    Integer,
    Long,
    Float,
    Double,
    Boolean,
    List,
    Structure,
    Map,
    Blob,
    Timestamp,
}

impl ParamType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ParamType::String => "string",
            ParamType::Integer => "integer",
            ParamType::Long => "long",
            ParamType::Float => "float",
            ParamType::Double => "double",
            ParamType::Boolean => "boolean",
            ParamType::List => "list",
            ParamType::Structure => "structure",
            ParamType::Map => "map",
            ParamType::Blob => "blob",
            ParamType::Timestamp => "timestamp",
        }
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
