//! Service model files: a named set of operations loaded from JSON or TOML.

use super::Operation;
use crate::error::ModelError;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::debug;

/// A service and the operations it exposes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceModel {
    pub service: String,

    #[serde(default)]
    pub operations: Vec<Operation>,
}

impl ServiceModel {
    /// Load a model file; the format is chosen by extension (`.json` or `.toml`).
    pub fn load(path: &Path) -> Result<Self, ModelError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ModelError::Io {
            path: path.to_path_buf(),
            source,
        })?;

        let model: ServiceModel = match path.extension().and_then(|e| e.to_str()) {
            Some("json") => serde_json::from_str(&contents).map_err(|e| ModelError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            Some("toml") => toml::from_str(&contents).map_err(|e| ModelError::Parse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?,
            _ => return Err(ModelError::UnsupportedFormat(path.to_path_buf())),
        };

        model.validate()?;
        debug!(
            service = %model.service,
            operations = model.operations.len(),
            path = %path.display(),
            "Loaded service model"
        );
        Ok(model)
    }

    /// Validate paginator declarations of every operation.
    pub fn validate(&self) -> Result<(), ModelError> {
        for op in &self.operations {
            if let Some(pagination) = &op.pagination {
                pagination
                    .validate()
                    .map_err(|reason| ModelError::InvalidPaginator {
                        operation: op.name.clone(),
                        reason,
                    })?;
            }
        }
        Ok(())
    }

    /// Find an operation by internal name (`ListThings`) or CLI name (`list-things`).
    pub fn operation(&self, name: &str) -> Result<&Operation, ModelError> {
        self.operations
            .iter()
            .find(|op| op.name == name || op.cli_name() == name)
            .ok_or_else(|| ModelError::OperationNotFound(name.to_string()))
    }
}
