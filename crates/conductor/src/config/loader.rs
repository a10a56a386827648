use super::schema::ConductorConfig;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::debug;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse config file: {0}")]
    Parse(#[from] serde_yaml::Error),
}

pub struct ConfigLoader;

impl ConfigLoader {
    /// Load from default locations:
    /// 1. ./conductor.yaml
    /// 2. ~/.conductor/config.yaml
    /// 3. Default configuration
    pub async fn load_default() -> Result<ConductorConfig, ConfigError> {
        let local_config = PathBuf::from("./conductor.yaml");
        if local_config.exists() {
            return Self::load_from(&local_config).await;
        }

        if let Some(home) = dirs::home_dir() {
            let home_config = home.join(".conductor").join("config.yaml");
            if home_config.exists() {
                return Self::load_from(&home_config).await;
            }
        }

        Ok(ConductorConfig::default())
    }

    pub async fn load_from(path: &Path) -> Result<ConductorConfig, ConfigError> {
        debug!("Loading config from {}", path.display());
        let content = tokio::fs::read_to_string(path).await?;
        // An empty file decodes as null.
        if content.trim().is_empty() {
            return Ok(ConductorConfig::default());
        }
        let config: ConductorConfig = serde_yaml::from_str(&content)?;
        Ok(config)
    }
}
