//! Config loading entry points.

use super::merge::merge_policy;
use super::sources::{global_file, workspace_file};
use super::UnipageConfig;
use config::{Config, ConfigError, Environment, File};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Loads [`UnipageConfig`] from layered sources.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from defaults, global file, workspace files and environment.
    ///
    /// Later sources override earlier ones.
    pub fn load(workspace_root: &Path) -> Result<UnipageConfig, ConfigError> {
        let builder = merge_policy::builder_with_defaults()?;
        let builder = global_file::add_to_builder(builder)?;
        let builder = workspace_file::add_to_builder(builder, workspace_root)?;
        let builder = builder.add_source(
            Environment::with_prefix("UNIPAGE")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config: UnipageConfig = builder.build()?.try_deserialize()?;
        debug!(workspace = %workspace_root.display(), "Loaded configuration");
        Ok(config)
    }

    /// Load a single config file on top of the defaults.
    pub fn load_from_file(path: &Path) -> Result<UnipageConfig, ConfigError> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }
        let config = merge_policy::builder_with_defaults()?
            .add_source(File::from(path))
            .build()?;
        config.try_deserialize()
    }

    /// Global config file location, if a home directory is known.
    pub fn global_config_path() -> Option<PathBuf> {
        global_file::global_config_path()
    }

    /// Defaults only, no files or environment.
    pub fn defaults() -> Result<UnipageConfig, ConfigError> {
        let config: Config = merge_policy::builder_with_defaults()?.build()?;
        config.try_deserialize()
    }
}
