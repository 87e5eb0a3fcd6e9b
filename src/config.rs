use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub search: SearchConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Minimum data-row count before a table gets a search box.
    pub row_threshold: usize,

    /// Quiet period before a typed query is applied. 0 disables
    /// debouncing.
    pub debounce_ms: u64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Use Unicode glyphs for the sort indicators
    pub use_glyphs: bool,

    /// Indicator characters (can be overridden)
    pub icons: IconConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct IconConfig {
    pub unsorted: String,
    pub ascending: String,
    pub descending: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            display: DisplayConfig::default(),
        }
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            row_threshold: 10,
            debounce_ms: 200,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            use_glyphs: true,
            icons: IconConfig::default(),
        }
    }
}

impl Default for IconConfig {
    fn default() -> Self {
        Self {
            unsorted: "↕".to_string(),
            ascending: "▲".to_string(),
            descending: "▼".to_string(),
        }
    }
}

impl Config {
    pub fn config_path() -> PathBuf {
        dirs::config_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("table-enhancer")
            .join("config.toml")
    }

    /// Load the config file, writing out the defaults on first run so
    /// users have something to edit.
    pub fn load() -> Result<Self> {
        Self::load_from(Self::config_path())
    }

    pub fn load_from(path: PathBuf) -> Result<Self> {
        if !path.exists() {
            let config = Config::default();
            config.save_to(&path)?;
            return Ok(config);
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config: Config = toml::from_str(&contents)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;
        Ok(config)
    }

    pub fn save_to(&self, path: &PathBuf) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let contents = toml::to_string_pretty(self)?;
        fs::write(path, contents)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    /// ASCII fallbacks when glyphs are off.
    pub fn indicator_icons(&self) -> (String, String, String) {
        if self.display.use_glyphs {
            (
                self.display.icons.unsorted.clone(),
                self.display.icons.ascending.clone(),
                self.display.icons.descending.clone(),
            )
        } else {
            ("-".to_string(), "^".to_string(), "v".to_string())
        }
    }
}
