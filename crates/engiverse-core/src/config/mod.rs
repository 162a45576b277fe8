//! Configuration management with file persistence

use anyhow::{Context, anyhow};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::domain::discovery::SortKey;
use crate::error::Error;

/// EngiVerse configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub catalog: CatalogConfig,
    pub discovery: DiscoveryConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogConfig {
    /// JSON catalog to read instead of the embedded sample data
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Sort applied when a discovery query names none
    pub default_sort: String,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            default_sort: SortKey::Recent.as_str().to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Tech stack entries shown on a project card
    pub max_tech_shown: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self { max_tech_shown: 3 }
    }
}

const KEYS: [&str; 3] = [
    "catalog.path",
    "discovery.default_sort",
    "display.max_tech_shown",
];

impl Config {
    /// Get the config directory path
    pub fn config_dir() -> anyhow::Result<PathBuf> {
        let dir = if let Ok(custom_dir) = env::var("ENGIVERSE_CONFIG_DIR") {
            PathBuf::from(custom_dir)
        } else {
            dirs::config_dir()
                .ok_or_else(|| anyhow!("Could not determine config directory"))?
                .join("engiverse")
        };
        Ok(dir)
    }

    /// Get the config file path
    pub fn config_path() -> anyhow::Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Load configuration from file, or fall back to defaults if it doesn't exist
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    /// Save configuration to file
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path()?)
    }

    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir).with_context(|| {
                format!("Failed to create config directory: {}", dir.display())
            })?;
        }

        let contents = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, contents)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> anyhow::Result<()> {
        self.default_sort_key()?;
        if self.display.max_tech_shown == 0 {
            return Err(
                Error::ConfigError("display.max_tech_shown must be at least 1".to_string()).into(),
            );
        }
        Ok(())
    }

    /// The configured default sort
    pub fn default_sort_key(&self) -> crate::Result<SortKey> {
        SortKey::parse(&self.discovery.default_sort).ok_or_else(|| {
            Error::ConfigError(format!(
                "Invalid discovery.default_sort: {}. Valid options: {}",
                self.discovery.default_sort,
                sort_key_names()
            ))
        })
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> anyhow::Result<String> {
        match key {
            "catalog.path" => Ok(match &self.catalog.path {
                Some(path) => path.display().to_string(),
                None => "(not set - using built-in sample catalog)".to_string(),
            }),
            "discovery.default_sort" => Ok(self.discovery.default_sort.clone()),
            "display.max_tech_shown" => Ok(self.display.max_tech_shown.to_string()),
            _ => Err(unknown_key(key)),
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> anyhow::Result<()> {
        match key {
            "catalog.path" => {
                let value = value.trim();
                self.catalog.path = (!value.is_empty()).then(|| PathBuf::from(value));
            }
            "discovery.default_sort" => {
                if SortKey::parse(value).is_none() {
                    return Err(anyhow!(
                        "Invalid default sort: {}. Valid options: {}",
                        value,
                        sort_key_names()
                    ));
                }
                self.discovery.default_sort = value.to_string();
            }
            "display.max_tech_shown" => {
                let max: usize = value
                    .parse()
                    .with_context(|| format!("Invalid max_tech_shown value: {}", value))?;
                if max == 0 {
                    return Err(anyhow!("max_tech_shown must be at least 1"));
                }
                self.display.max_tech_shown = max;
            }
            _ => return Err(unknown_key(key)),
        }
        Ok(())
    }

    /// List all configuration keys and their values
    pub fn list(&self) -> anyhow::Result<Vec<(String, String)>> {
        KEYS.iter()
            .map(|key| Ok((key.to_string(), self.get(key)?)))
            .collect()
    }

    /// Reset configuration to defaults
    pub fn reset() -> anyhow::Result<()> {
        let path = Self::config_path()?;
        if path.exists() {
            fs::remove_file(&path)
                .with_context(|| format!("Failed to remove config file: {}", path.display()))?;
        }
        Ok(())
    }
}

fn sort_key_names() -> String {
    SortKey::all()
        .iter()
        .map(|k| k.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}

fn unknown_key(key: &str) -> anyhow::Error {
    anyhow!(
        "Unknown configuration key: {}. Use `engiverse config list` to see available keys.",
        key
    )
}
