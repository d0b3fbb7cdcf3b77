use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

/// Default HG Brasil endpoint and the city the reference display shows.
pub const DEFAULT_ENDPOINT: &str = "https://api.hgbrasil.com/weather";
pub const DEFAULT_CITY: &str = "Recife,PE";

/// Configuration stored on disk as TOML.
///
/// Example:
/// ```toml
/// api_key = "..."
/// city = "Recife,PE"
/// endpoint = "https://api.hgbrasil.com/weather"
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub api_key: String,

    #[serde(default = "default_city")]
    pub city: String,

    #[serde(default = "default_endpoint")]
    pub endpoint: String,
}

fn default_city() -> String {
    DEFAULT_CITY.to_string()
}

fn default_endpoint() -> String {
    DEFAULT_ENDPOINT.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            city: default_city(),
            endpoint: default_endpoint(),
        }
    }
}

impl Config {
    /// Load config from disk, or return defaults if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return defaults.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "tempo", "tempo-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn has_api_key(&self) -> bool {
        !self.api_key.is_empty()
    }

    /// Fail with a hint when no API key has been configured yet.
    pub fn require_api_key(&self) -> Result<()> {
        if self.has_api_key() {
            Ok(())
        } else {
            Err(anyhow!(
                "No API key configured.\n\
                 Hint: run `tempo configure` and enter your HG Brasil API key."
            ))
        }
    }
}
