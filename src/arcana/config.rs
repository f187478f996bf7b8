use crate::compose::DEFAULT_CATEGORY;
use crate::error::{ArcanaError, Result};
use crate::model::LayoutTemplate;
use crate::store::DEFAULT_STORAGE_KEY;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";

/// Configuration for arcana, stored as config.json in the data directory
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ArcanaConfig {
    /// External deck file; the bundled Major Arcana deck is used when unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub deck_path: Option<PathBuf>,

    /// Category used when a reading asks for none, or for one a card lacks
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Key the reading history is persisted under
    #[serde(default = "default_storage_key")]
    pub storage_key: String,

    /// Extra spreads, added after the built-in ones
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub layouts: Vec<LayoutTemplate>,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

fn default_storage_key() -> String {
    DEFAULT_STORAGE_KEY.to_string()
}

impl Default for ArcanaConfig {
    fn default() -> Self {
        Self {
            deck_path: None,
            default_category: default_category(),
            storage_key: default_storage_key(),
            layouts: Vec::new(),
        }
    }
}

impl ArcanaConfig {
    pub const KEYS: [&'static str; 3] = ["deck-path", "default-category", "storage-key"];

    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(ArcanaError::Io)?;
        let config: ArcanaConfig =
            serde_json::from_str(&content).map_err(ArcanaError::Serialization)?;
        Ok(config)
    }

    /// Save config to the given directory
    pub fn save<P: AsRef<Path>>(&self, config_dir: P) -> Result<()> {
        let config_dir = config_dir.as_ref();

        if !config_dir.exists() {
            fs::create_dir_all(config_dir).map_err(ArcanaError::Io)?;
        }

        let config_path = config_dir.join(CONFIG_FILENAME);
        let content = serde_json::to_string_pretty(self).map_err(ArcanaError::Serialization)?;
        fs::write(config_path, content).map_err(ArcanaError::Io)?;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "deck-path" => Some(
                self.deck_path
                    .as_ref()
                    .map(|p| p.display().to_string())
                    .unwrap_or_else(|| "(bundled)".to_string()),
            ),
            "default-category" => Some(self.default_category.clone()),
            "storage-key" => Some(self.storage_key.clone()),
            _ => None,
        }
    }

    pub fn set(&mut self, key: &str, value: &str) -> std::result::Result<(), String> {
        let value = value.trim();
        match key {
            "deck-path" => {
                self.deck_path = if value.is_empty() {
                    None
                } else {
                    Some(PathBuf::from(value))
                };
            }
            "default-category" => {
                if value.is_empty() {
                    return Err("default-category cannot be empty".to_string());
                }
                self.default_category = value.to_string();
            }
            "storage-key" => {
                let valid = !value.is_empty()
                    && value
                        .chars()
                        .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
                if !valid {
                    return Err(format!("Invalid storage key: {}", value));
                }
                self.storage_key = value.to_string();
            }
            other => return Err(format!("Unknown config key: {}", other)),
        }
        Ok(())
    }
}
