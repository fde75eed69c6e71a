//! Configuration file loading for the CLI
//!
//! Finds and loads the TOML configuration for `classforge run`.

use std::fs;
use std::path::{Path, PathBuf};

use classforge_io::PipelineConfig;
use serde::Deserialize;
use thiserror::Error;

/// File looked up in the working directory when no path is given
pub const LOCAL_CONFIG_FILE: &str = "classforge.toml";

/// Configuration-related errors for CLI
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to parse TOML configuration {path}: {message}")]
    Parse { path: PathBuf, message: String },

    #[error("Missing configuration file: {0}")]
    MissingFile(PathBuf),

    #[error("Failed to read configuration file {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

/// Contents of `classforge.toml`
///
/// ```toml
/// [pipeline]
/// model_path = "model.xml"
/// output_dir = "build"
/// ```
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CliConfig {
    pub pipeline: PipelineConfig,
}

/// Command-line values that take precedence over the file
#[derive(Debug, Default)]
pub struct PipelineOverrides {
    pub model_path: Option<PathBuf>,
    pub config_path: Option<PathBuf>,
    pub patched_config_path: Option<PathBuf>,
    pub output_dir: Option<PathBuf>,
}

impl PipelineOverrides {
    pub fn apply(self, mut config: PipelineConfig) -> PipelineConfig {
        if let Some(path) = self.model_path {
            config.model_path = path;
        }
        if let Some(path) = self.config_path {
            config.config_path = path;
        }
        if let Some(path) = self.patched_config_path {
            config.patched_config_path = path;
        }
        if let Some(dir) = self.output_dir {
            config.output_dir = dir;
        }
        config
    }
}

/// Find and load configuration
///
/// Search order:
/// 1. Explicit path if provided
/// 2. `classforge.toml` in the working directory
/// 3. Default config if none found
///
/// # Errors
///
/// Returns error if:
/// - Explicit path is provided but file doesn't exist
/// - Config file exists but cannot be read or parsed
pub fn load_config(explicit_path: Option<&Path>) -> Result<CliConfig, ConfigError> {
    if let Some(path) = explicit_path {
        tracing::info!(path = %path.display(), "Loading configuration from explicit path");
        return load_config_file(path);
    }

    let local_config = Path::new(LOCAL_CONFIG_FILE);
    if local_config.exists() {
        tracing::info!(path = %local_config.display(), "Loading configuration from local path");
        return load_config_file(local_config);
    }

    tracing::debug!("No configuration file found, using default configuration");
    Ok(CliConfig::default())
}

fn load_config_file(path: &Path) -> Result<CliConfig, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::MissingFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
        path: path.to_path_buf(),
        source,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        message: e.to_string(),
    })
}
