use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_PORT: u16 = 3000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "prod" | "production" => Self::Prod,
            _ => Self::Dev,
        }
    }

    pub fn is_dev(&self) -> bool {
        matches!(self, Self::Dev)
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

/// Returns the default data path based on build profile.
/// - Debug builds: `./data` (relative to project directory)
/// - Release builds: `/data` (absolute path for production)
pub fn default_data_path() -> PathBuf {
    #[cfg(debug_assertions)]
    {
        PathBuf::from("./data")
    }

    #[cfg(not(debug_assertions))]
    {
        PathBuf::from("/data")
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub env: Environment,
    pub data_path: PathBuf,
    pub port: u16,
}

impl Config {
    pub fn new(env: Environment, data_path: impl AsRef<Path>, port: u16) -> Self {
        Self {
            env,
            data_path: data_path.as_ref().to_path_buf(),
            port,
        }
    }

    /// Read `CARDEX_ENV`, `DATA_PATH` and `PORT`, falling back to defaults.
    pub fn from_env() -> Result<Self, std::num::ParseIntError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(var: impl Fn(&str) -> Option<String>) -> Result<Self, std::num::ParseIntError> {
        let env = var("CARDEX_ENV")
            .map(|s| Environment::parse(&s))
            .unwrap_or_default();
        let data_path = var("DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(default_data_path);
        let port = match var("PORT") {
            Some(port) => port.parse()?,
            None => DEFAULT_PORT,
        };
        Ok(Self::new(env, data_path, port))
    }

    /// Returns the path to the settings TOML file
    pub fn settings_path(&self) -> PathBuf {
        self.data_path.join("settings.toml")
    }
}
