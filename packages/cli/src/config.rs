//! CLI Configuration
//!
//! Manages the API base URL stored in ~/.agentdeck/config.toml. Session
//! credentials live next to it in session.toml, owned by [`crate::session`].

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    pub api_url: Option<String>,
}

impl Config {
    /// Directory holding CLI state (~/.agentdeck)
    pub fn dir() -> Result<PathBuf> {
        let home = dirs::home_dir().context("Could not determine home directory")?;
        Ok(home.join(".agentdeck"))
    }

    /// Get the config file path (~/.agentdeck/config.toml)
    pub fn path() -> Result<PathBuf> {
        Ok(Self::dir()?.join("config.toml"))
    }

    /// Load config from disk
    pub fn load() -> Result<Self> {
        let path = Self::path()?;
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = std::fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config at {}", path.display()))?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    /// Save config to disk
    pub fn save(&self) -> Result<()> {
        let path = Self::path()?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = toml::to_string_pretty(self)?;
        std::fs::write(&path, content)?;
        Ok(())
    }

    /// Get API base URL
    pub fn api_url(&self) -> &str {
        self.api_url.as_deref().unwrap_or("https://api.agentdeck.io")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_api_url() {
        let config = Config::default();
        assert_eq!(config.api_url(), "https://api.agentdeck.io");
    }

    #[test]
    fn test_parse_minimal_config() {
        let config: Config = toml::from_str(r#"api_url = "http://localhost:8000""#).unwrap();
        assert_eq!(config.api_url(), "http://localhost:8000");
    }
}
