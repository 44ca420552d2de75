//! CLI route: single route table and run context. Dispatches to the pipeline and presentation.

use crate::cli::help::{command_name, target_operation};
use crate::cli::parse::Commands;
use crate::cli::presentation::{
    format_argument_table_json, format_argument_table_text, format_invocation_json,
    format_operations_json, format_operations_text,
};
use crate::config::UnipageConfig;
use crate::error::CliError;
use crate::model::ServiceModel;
use crate::pagination::PaginationConfig;
use crate::pipeline::CommandPipeline;
use std::path::Path;
use tracing::{debug, info};

/// Runtime context for CLI execution: loaded model, config and command pipeline.
pub struct RunContext {
    model: ServiceModel,
    config: UnipageConfig,
    pipeline: CommandPipeline,
}

impl RunContext {
    /// Load the service model and pair it with an already-loaded config.
    pub fn new(model_path: &Path, config: UnipageConfig) -> Result<Self, CliError> {
        let model = ServiceModel::load(model_path)?;
        Ok(Self::from_parts(model, config))
    }

    pub fn from_parts(model: ServiceModel, config: UnipageConfig) -> Self {
        Self {
            model,
            config,
            pipeline: CommandPipeline::default(),
        }
    }

    pub fn model(&self) -> &ServiceModel {
        &self.model
    }

    /// Execute a command and return its output text.
    pub fn execute(&self, command: &Commands) -> Result<String, CliError> {
        info!(
            command = command_name(command),
            operation = target_operation(command).unwrap_or("-"),
            service = %self.model.service,
            "Executing command"
        );

        match command {
            Commands::Operations { format } => match format.as_str() {
                "json" => Ok(format_operations_json(&self.model)?),
                _ => Ok(format_operations_text(&self.model)),
            },
            Commands::Describe {
                operation,
                format,
                all,
            } => {
                let op = self.model.operation(operation)?;
                let prepared = self.pipeline.prepare(op)?;
                match format.as_str() {
                    "json" => Ok(format_argument_table_json(&prepared, *all)?),
                    _ => Ok(format_argument_table_text(&prepared, *all)),
                }
            }
            Commands::Invoke {
                operation,
                no_paginate,
                args,
            } => {
                let op = self.model.operation(operation)?;
                let prepared = self.pipeline.prepare(op)?;
                let initial = self.initial_pagination(*no_paginate);
                let invocation = prepared.parse(args, initial)?;
                debug!(
                    operation = %invocation.operation,
                    paginate = invocation.pagination.enabled,
                    parameters = invocation.parameters.len(),
                    "Resolved invocation"
                );
                Ok(format_invocation_json(&invocation)?)
            }
        }
    }

    fn initial_pagination(&self, no_paginate: bool) -> PaginationConfig {
        if no_paginate {
            PaginationConfig::disabled()
        } else {
            self.config.pagination.initial()
        }
    }
}
