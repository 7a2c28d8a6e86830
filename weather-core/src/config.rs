use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::Deserialize;
use std::{fs, path::Path, path::PathBuf};

pub const DEFAULT_GEOCODE_API_URL: &str = "https://geocode.maps.co/search";
pub const DEFAULT_FORECAST_API_URL: &str = "https://api.open-meteo.com/v1/forecast";

/// Endpoints and credentials, optionally overridden on disk.
///
/// Example TOML:
/// geocode_api_url = "https://geocode.maps.co/search"
/// forecast_api_url = "https://api.open-meteo.com/v1/forecast"
/// geocode_api_key = "..."
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub geocode_api_url: String,
    pub forecast_api_url: String,
    pub geocode_api_key: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            geocode_api_url: DEFAULT_GEOCODE_API_URL.to_string(),
            forecast_api_url: DEFAULT_FORECAST_API_URL.to_string(),
            geocode_api_key: None,
        }
    }
}

impl Config {
    /// Load config from the platform config directory, or defaults if there is no file.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        Self::from_toml_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weather-task", "weather-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    pub fn geocode_api_key(&self) -> Option<&str> {
        self.geocode_api_key.as_deref().filter(|k| !k.trim().is_empty())
    }
}
