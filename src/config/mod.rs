// src/config/mod.rs
mod loader;
mod schema;

use std::path::Path;
use tracing::info;

pub use loader::ENV_PREFIX;
pub use schema::{
    Config, GlobalConfig, PatternConfig, ProvidersConfig,
    NumverifyConfig, HibpConfig, BROWSER_USER_AGENT
};

use crate::error::{ReconResult, ReconError};

/// Centralized configuration handling
impl Config {
    /// Load configuration from a file or create default if not found
    pub fn load(config_path: Option<&Path>) -> ReconResult<Self> {
        loader::load_config(config_path)
            .map_err(|e| ReconError::ConfigError(format!("{:#}", e)))
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> ReconResult<()> {
        let config_str = toml::to_string_pretty(self)
            .map_err(|e| ReconError::SerializationError(format!("Failed to serialize configuration: {}", e)))?;

        std::fs::write(path, config_str)
            .map_err(|e| ReconError::FileError {
                path: path.to_path_buf(),
                message: format!("Failed to write configuration: {}", e),
            })?;

        info!("Configuration saved to {}", path.display());

        Ok(())
    }

    /// Apply command-line overrides on top of the loaded values
    pub fn with_overrides(mut self, api_key: Option<String>, home_code: Option<String>) -> Self {
        if api_key.is_some() {
            self.providers.numverify.api_key = api_key;
        }
        if let Some(code) = home_code {
            self.patterns.home_calling_code = code.trim_start_matches('+').to_string();
        }
        self
    }
}
