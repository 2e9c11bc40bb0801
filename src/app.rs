//! Host-side owner of the engine list
//!
//! The manager modal never holds the list itself. `EngineStore` is the owner
//! used by the binary: it applies manager events to the config and persists
//! every change.

use std::path::PathBuf;

use crate::config::Config;
use crate::model::SearchEngine;
use crate::view::search_engines::{EngineOwner, ManagerProps};

/// Engine list, active id and modal visibility for the host screen
#[derive(Debug)]
pub struct EngineStore {
    pub config: Config,
    /// Where changes are saved; `None` keeps them in memory only
    pub save_path: Option<PathBuf>,
    pub manager_open: bool,
    /// Last failure to persist, shown on the host screen
    pub last_error: Option<String>,
}

impl EngineStore {
    pub fn new(config: Config, save_path: Option<PathBuf>) -> Self {
        if config.active_engine().is_none() {
            tracing::warn!(
                "Active search engine {:?} is not in the engine list",
                config.active_engine_id
            );
        }
        Self {
            config,
            save_path,
            manager_open: false,
            last_error: None,
        }
    }

    /// Props for the manager modal reflecting the current state
    pub fn props(&self) -> ManagerProps<'_> {
        ManagerProps {
            is_open: self.manager_open,
            engines: &self.config.engines,
            active_engine_id: &self.config.active_engine_id,
        }
    }

    pub fn active_engine(&self) -> Option<&SearchEngine> {
        self.config.active_engine()
    }

    fn persist(&mut self) {
        let Some(path) = &self.save_path else {
            return;
        };
        // A file that would fail validation on the next start is never written
        let saved = self
            .config
            .validate()
            .and_then(|()| self.config.save_to_file(path));
        match saved {
            Ok(()) => {
                tracing::debug!("Saved search engines to {}", path.display());
                self.last_error = None;
            }
            Err(e) => {
                tracing::error!("Failed to save search engines to {}: {}", path.display(), e);
                self.last_error = Some(e.to_string());
            }
        }
    }
}

impl EngineOwner for EngineStore {
    fn on_close(&mut self) {
        self.manager_open = false;
    }

    fn on_update_engines(&mut self, engines: Vec<SearchEngine>) {
        self.config.engines = engines;
        self.persist();
    }

    fn on_select_engine(&mut self, id: String) {
        self.config.active_engine_id = id;
        self.persist();
    }
}
