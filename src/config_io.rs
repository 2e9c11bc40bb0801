//! Runtime configuration I/O operations.
//!
//! System directory detection and config loading for the host binary.
//! Kept apart from config.rs so the library works without `dirs`.

use crate::config::{Config, ConfigError};
use std::path::{Path, PathBuf};

const APP_DIR: &str = "search-engines";

/// Directories used by the host binary
#[derive(Debug, Clone)]
pub struct DirectoryContext {
    /// Config directory for the engine store
    /// e.g., ~/.config/search-engines on Linux
    pub config_dir: PathBuf,

    /// Directory for the diagnostics log
    pub log_dir: PathBuf,
}

impl DirectoryContext {
    /// Create a DirectoryContext from the system directories
    /// This should ONLY be called from main()
    pub fn from_system() -> std::io::Result<Self> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| {
                std::io::Error::new(
                    std::io::ErrorKind::NotFound,
                    "Could not determine config directory",
                )
            })?
            .join(APP_DIR);

        Ok(Self {
            config_dir,
            log_dir: std::env::temp_dir(),
        })
    }

    /// Create a DirectoryContext for testing with a temp directory
    pub fn for_testing(temp_dir: &Path) -> Self {
        Self {
            config_dir: temp_dir.join("config"),
            log_dir: temp_dir.join("logs"),
        }
    }

    /// Path of the engine store
    pub fn config_path(&self) -> PathBuf {
        self.config_dir.join("config.json")
    }

    /// Path of the diagnostics log
    pub fn log_path(&self) -> PathBuf {
        self.log_dir.join(format!("{}.log", APP_DIR))
    }
}

/// Load the config at `path`, falling back to defaults when the file does not exist.
pub fn load_or_default(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        tracing::info!("No config at {}, using defaults", path.display());
        return Ok(Config::default());
    }

    let config = Config::load_from_file(path)
        .map_err(|e| match e {
            ConfigError::IoError(msg) => ConfigError::IoError(format!("{}: {}", path.display(), msg)),
            ConfigError::ParseError(msg) => {
                ConfigError::ParseError(format!("{}: {}", path.display(), msg))
            }
            other => other,
        })?;
    tracing::debug!(
        "Loaded {} search engines from {}",
        config.engines.len(),
        path.display()
    );
    Ok(config)
}
