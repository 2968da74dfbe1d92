use std::path::{Path, PathBuf};
use anyhow::{Result, Context};
use config::{Config as ConfigLoader, FileFormat};
use tracing::{debug, info};

use super::schema::Config;

/// Prefix for environment overrides, e.g. `PHONERECON__GLOBAL__TIMEOUT_SECONDS`
pub const ENV_PREFIX: &str = "PHONERECON";

/// Load configuration: built-in defaults, then the user file, then environment
pub fn load_config(config_path: Option<&Path>) -> Result<Config> {
    let mut config_builder = ConfigLoader::builder();

    // Default configuration
    config_builder = config_builder.add_source(
        config::File::from_str(
            include_str!("../../config/default.toml"),
            FileFormat::Toml
        )
    );

    // User-provided configuration
    if let Some(path) = config_path {
        info!("Loading user configuration from: {}", path.display());
        config_builder = config_builder.add_source(config::File::from(path).required(true));
    } else {
        let default_path = get_default_config_path();
        if default_path.exists() {
            info!("Loading default configuration from: {}", default_path.display());
            config_builder = config_builder.add_source(config::File::from(default_path.as_path()));
        } else {
            debug!("No configuration file found, using built-in defaults");
        }
    }

    // Environment variables
    config_builder = config_builder.add_source(
        config::Environment::with_prefix(ENV_PREFIX).separator("__")
    );

    let config: Config = config_builder
        .build()
        .context("Failed to build configuration")?
        .try_deserialize()
        .context("Failed to parse configuration")?;

    Ok(config)
}

/// Get the default configuration path
pub fn get_default_config_path() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".phonerecon/config.toml")
}
