use crate::model::{SearchEngine, GLOBE_ICON};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;

/// Main configuration structure
///
/// Holds the engine list owned by the host plus defaults for the manager modal.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    #[serde(default = "default_theme_name")]
    pub theme: String,

    #[serde(default = "default_engines")]
    pub engines: Vec<SearchEngine>,

    /// Id of the default engine. Not checked against `engines`.
    #[serde(default = "default_active_engine_id")]
    pub active_engine_id: String,

    #[serde(default)]
    pub manager: ManagerConfig,
}

fn default_theme_name() -> String {
    "dark".to_string()
}

fn default_active_engine_id() -> String {
    "google".to_string()
}

fn default_engines() -> Vec<SearchEngine> {
    vec![
        SearchEngine::new(
            "google",
            "Google",
            "https://www.google.com/search?q=",
            GLOBE_ICON,
        ),
        SearchEngine::new("bing", "Bing", "https://www.bing.com/search?q=", GLOBE_ICON),
        SearchEngine::new(
            "duckduckgo",
            "DuckDuckGo",
            "https://duckduckgo.com/?q=",
            GLOBE_ICON,
        ),
        SearchEngine::new("baidu", "Baidu", "https://www.baidu.com/s?wd=", GLOBE_ICON),
    ]
}

/// Search engine manager modal configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ManagerConfig {
    /// Initial state of the "fetch icon when leaving the URL field" checkbox
    #[serde(default = "default_true")]
    pub auto_fetch_icon: bool,
}

fn default_true() -> bool {
    true
}

impl Default for ManagerConfig {
    fn default() -> Self {
        Self {
            auto_fetch_icon: true,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            theme: default_theme_name(),
            engines: default_engines(),
            active_engine_id: default_active_engine_id(),
            manager: ManagerConfig::default(),
        }
    }
}

impl Config {
    /// Load configuration from a JSON file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::IoError(e.to_string()))?;

        let config: Config =
            serde_json::from_str(&contents).map_err(|e| ConfigError::ParseError(e.to_string()))?;

        config.validate()?;
        Ok(config)
    }

    /// Save configuration to a JSON file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), ConfigError> {
        let contents = serde_json::to_string_pretty(self)
            .map_err(|e| ConfigError::SerializeError(e.to_string()))?;

        if let Some(parent) = path.as_ref().parent() {
            if !parent.as_os_str().is_empty() {
                std::fs::create_dir_all(parent).map_err(|e| ConfigError::IoError(e.to_string()))?;
            }
        }

        std::fs::write(path.as_ref(), contents).map_err(|e| ConfigError::IoError(e.to_string()))?;

        Ok(())
    }

    /// The active engine, if the active id matches one
    pub fn active_engine(&self) -> Option<&SearchEngine> {
        self.engines.iter().find(|e| e.id == self.active_engine_id)
    }

    /// Validate the configuration
    ///
    /// The list must be non-empty with unique ids and non-empty names.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.engines.is_empty() {
            return Err(ConfigError::ValidationError(
                "at least one search engine is required".to_string(),
            ));
        }

        let mut seen = HashSet::new();
        for engine in &self.engines {
            if engine.name.is_empty() {
                return Err(ConfigError::ValidationError(format!(
                    "search engine '{}' has an empty name",
                    engine.id
                )));
            }
            if !seen.insert(engine.id.as_str()) {
                return Err(ConfigError::ValidationError(format!(
                    "duplicate search engine id '{}'",
                    engine.id
                )));
            }
        }

        Ok(())
    }
}

/// Configuration error types
#[derive(Debug)]
pub enum ConfigError {
    IoError(String),
    ParseError(String),
    SerializeError(String),
    ValidationError(String),
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError(msg) => write!(f, "IO error: {msg}"),
            ConfigError::ParseError(msg) => write!(f, "Parse error: {msg}"),
            ConfigError::SerializeError(msg) => write!(f, "Serialize error: {msg}"),
            ConfigError::ValidationError(msg) => write!(f, "Validation error: {msg}"),
        }
    }
}

impl std::error::Error for ConfigError {}
