use crate::Result;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

const DEFAULT_API_BASE: &str = "http://127.0.0.1:5000";

/// Resolve the backend base URL based on priority:
/// 1. Explicit value (CLI flag)
/// 2. TRENDSCOPE_API_BASE environment variable
/// 3. Config file
/// 4. Built-in default (the backend's documented local address)
pub fn resolve_api_base(explicit: Option<&str>) -> Result<String> {
    if let Some(base) = explicit {
        return Ok(base.to_string());
    }

    if let Ok(env_base) = std::env::var("TRENDSCOPE_API_BASE") {
        if !env_base.trim().is_empty() {
            return Ok(env_base);
        }
    }

    Ok(Config::load()?.api_base)
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_api_base")]
    pub api_base: String,
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
        }
    }
}

impl Config {
    pub fn load() -> Result<Self> {
        let config_path = Self::default_path();
        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_path = Self::default_path();
        self.save_to(&config_path)
    }

    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content = toml::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    pub fn default_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("trendscope")
            .join("config.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.api_base, DEFAULT_API_BASE);
    }

    #[test]
    fn test_config_save_and_load() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");

        let config = Config {
            api_base: "http://example.test:8080".to_string(),
        };
        config.save_to(&config_path)?;
        assert!(config_path.exists());

        let loaded = Config::load_from(&config_path)?;
        assert_eq!(loaded.api_base, "http://example.test:8080");

        Ok(())
    }

    #[test]
    fn test_load_nonexistent_returns_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("nonexistent.toml");

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api_base, DEFAULT_API_BASE);

        Ok(())
    }

    #[test]
    fn test_missing_key_falls_back_to_default() -> Result<()> {
        let temp_dir = TempDir::new()?;
        let config_path = temp_dir.path().join("config.toml");
        std::fs::write(&config_path, "")?;

        let config = Config::load_from(&config_path)?;
        assert_eq!(config.api_base, DEFAULT_API_BASE);

        Ok(())
    }

    #[test]
    fn test_explicit_base_wins() {
        let base = resolve_api_base(Some("http://flag.test")).unwrap();
        assert_eq!(base, "http://flag.test");
    }
}
