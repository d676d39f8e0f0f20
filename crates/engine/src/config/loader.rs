use std::path::{Path, PathBuf};

use fra_common::config::AtlasConfig;

use super::validation;

/// Name of the config file inside the config directory.
pub const CONFIG_FILE: &str = "atlas.toml";

/// Load and validate configuration from the given config directory.
///
/// A missing directory or file is an error; the service refuses to start
/// rather than silently running with defaults.
pub fn load_config(config_dir: &Path) -> Result<AtlasConfig, ConfigError> {
    tracing::info!(config_dir = %config_dir.display(), "Loading configuration");

    let path = config_dir.join(CONFIG_FILE);
    let config = load_atlas_config(&path)?;

    validation::validate(&config)?;

    tracing::info!(
        max_pages = ?config.parser.max_pages,
        cluster_radius_m = config.validation.cluster_radius_m,
        duplicate_radius_m = config.validation.duplicate_radius_m,
        "Configuration loaded successfully"
    );

    Ok(config)
}

fn load_atlas_config(path: &Path) -> Result<AtlasConfig, ConfigError> {
    let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
        path: path.to_path_buf(),
        source: e,
    })?;

    toml::from_str(&content).map_err(|e| ConfigError::Parse {
        path: path.to_path_buf(),
        detail: e.to_string(),
    })
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read {path}: {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to parse {path}: {detail}")]
    Parse { path: PathBuf, detail: String },

    #[error("Validation failed: {0}")]
    Validation(String),
}

impl From<ConfigError> for fra_common::AtlasError {
    fn from(e: ConfigError) -> Self {
        fra_common::AtlasError::Config(e.to_string())
    }
}
