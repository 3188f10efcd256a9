//! Config file persistence

use std::fs;
use std::path::{Path, PathBuf};

use crate::app::AppConfig;
use crate::error::ConfigError;
use crate::Result;

const APP_DIR: &str = "clean-recent";
const FILE_NAME: &str = "clean-recent.toml";

#[derive(Debug, Clone)]
pub struct ConfigStore {
    path: PathBuf,
}

impl ConfigStore {
    pub fn new<P: Into<PathBuf>>(path: P) -> Self {
        Self { path: path.into() }
    }

    /// `<config dir>/clean-recent/clean-recent.toml`, or the working
    /// directory when the platform has no config dir
    pub fn default_location() -> Self {
        let dir = dirs::config_dir()
            .map(|d| d.join(APP_DIR))
            .unwrap_or_else(|| PathBuf::from("."));
        Self::new(dir.join(FILE_NAME))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn load(&self) -> Result<AppConfig> {
        if !self.path.exists() {
            return Err(ConfigError::NotFound(self.path.clone()));
        }

        let stored = fs::read_to_string(&self.path)?;
        let config = toml::from_str(&stored)?;
        Ok(config)
    }

    /// Missing file means first launch; a corrupt file is still an error
    pub fn load_or_default(&self) -> Result<AppConfig> {
        match self.load() {
            Ok(config) => Ok(config),
            Err(ConfigError::NotFound(path)) => {
                tracing::info!(path = %path.display(), "No config file, using defaults");
                Ok(AppConfig::default())
            }
            Err(e) => Err(e),
        }
    }

    pub fn save(&self, config: &AppConfig) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }

        let toml = toml::to_string_pretty(config)?;
        fs::write(&self.path, toml)?;

        tracing::debug!(path = %self.path.display(), "Saved config");

        Ok(())
    }
}
