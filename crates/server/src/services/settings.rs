use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::Config;
use crate::models::Settings;

#[derive(Debug, Error)]
pub enum SettingsError {
    #[error("Failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to parse TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Failed to serialize TOML: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Settings loaded once at startup. The lookup chain is built from them and
/// is immutable afterwards.
pub struct SettingsService {
    settings_path: PathBuf,
    settings: Settings,
}

impl SettingsService {
    /// Initialize the settings service.
    /// Creates default settings file if it doesn't exist.
    pub async fn new(config: &Config) -> Result<Self, SettingsError> {
        let settings_path = config.settings_path();
        let settings = Self::load_or_create(&settings_path).await?;
        tracing::debug!("Loaded settings from {}", settings_path.display());

        Ok(Self {
            settings_path,
            settings,
        })
    }

    /// Load settings from file, or create with defaults if file doesn't exist.
    async fn load_or_create(path: &Path) -> Result<Settings, SettingsError> {
        match tokio::fs::read_to_string(path).await {
            Ok(content) => {
                let settings: Settings = toml::from_str(&content)?;
                Ok(settings)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                // Ensure parent directory exists
                if let Some(parent) = path.parent() {
                    tokio::fs::create_dir_all(parent).await?;
                }

                let default = Settings::default();
                let toml_str = toml::to_string_pretty(&default)?;
                tokio::fs::write(path, toml_str).await?;
                tracing::info!("Created default settings at {}", path.display());
                Ok(default)
            }
            Err(e) => Err(e.into()),
        }
    }

    /// Get current settings (fast, no I/O).
    pub fn get(&self) -> &Settings {
        &self.settings
    }

    pub fn path(&self) -> &Path {
        &self.settings_path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Environment;

    #[tokio::test]
    async fn test_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(Environment::Dev, dir.path().join("nested"), 3000);

        let service = SettingsService::new(&config).await.unwrap();

        assert_eq!(service.get(), &Settings::default());
        let written = std::fs::read_to_string(config.settings_path()).unwrap();
        let reparsed: Settings = toml::from_str(&written).unwrap();
        assert_eq!(reparsed, Settings::default());
    }

    #[tokio::test]
    async fn test_loads_existing_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(Environment::Dev, dir.path(), 3000);
        std::fs::write(
            config.settings_path(),
            "[mock]\nmin_price = 1\nmax_price = 2\n\n[corrections]\npikachoo = \"pikachu\"\n",
        )
        .unwrap();

        let service = SettingsService::new(&config).await.unwrap();

        assert_eq!(service.get().mock.min_price, 1);
        assert_eq!(service.get().mock.max_price, 2);
        assert_eq!(service.get().corrections.len(), 1);
        assert_eq!(service.path(), config.settings_path());
    }

    #[tokio::test]
    async fn test_invalid_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::new(Environment::Dev, dir.path(), 3000);
        std::fs::write(config.settings_path(), "[http]\ntimeout_secs = \"soon\"\n").unwrap();

        let result = SettingsService::new(&config).await;
        assert!(matches!(result, Err(SettingsError::Parse(_))));
    }
}
