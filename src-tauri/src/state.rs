//! Application state management
use recent_core::{App, ConfigStore, Result};
use std::sync::Arc;
use tauri::AppHandle;

use crate::platform::PluginAutostart;

pub type DesktopApp = App<PluginAutostart>;

/// Thread-safe application state wrapper
pub struct AppState {
    app: Arc<DesktopApp>,
}

impl AppState {
    pub fn new(handle: AppHandle) -> Result<Self> {
        let store = ConfigStore::default_location();
        tracing::info!(path = %store.path().display(), "Loading config");

        let app = App::new(store, PluginAutostart::new(handle))?;

        Ok(Self { app: Arc::new(app) })
    }

    pub fn with_app<F, T>(&self, f: F) -> Result<T>
    where
        F: FnOnce(&DesktopApp) -> Result<T>,
    {
        f(&self.app)
    }

    /// Owned handle for work that outlives the command borrow
    pub fn shared(&self) -> Arc<DesktopApp> {
        Arc::clone(&self.app)
    }
}
