//! Platform autostart capability
//!
//! The real implementation lives in the desktop shell (backed by the Tauri
//! autostart plugin). [`MemoryAutostart`] keeps the flag in process for
//! tests and headless runs.

use parking_lot::Mutex;

use crate::error::{AutostartOperation, PlatformServiceError};
use crate::Result;

pub trait AutostartCapability: Send + Sync {
    /// Whether the application is currently registered to launch at login
    fn is_enabled(&self) -> Result<bool>;

    /// Register the application for launch at login
    fn enable(&self) -> Result<()>;

    /// Remove the login registration
    fn disable(&self) -> Result<()>;
}

impl<T: AutostartCapability + ?Sized> AutostartCapability for std::sync::Arc<T> {
    fn is_enabled(&self) -> Result<bool> {
        (**self).is_enabled()
    }

    fn enable(&self) -> Result<()> {
        (**self).enable()
    }

    fn disable(&self) -> Result<()> {
        (**self).disable()
    }
}

impl<T: AutostartCapability + ?Sized> AutostartCapability for Box<T> {
    fn is_enabled(&self) -> Result<bool> {
        (**self).is_enabled()
    }

    fn enable(&self) -> Result<()> {
        (**self).enable()
    }

    fn disable(&self) -> Result<()> {
        (**self).disable()
    }
}

#[derive(Debug, Default)]
struct MemoryState {
    enabled: bool,
    fail_queries: bool,
    fail_mutations: bool,
    mutations: usize,
}

/// In-process autostart flag with failure injection
#[derive(Debug, Default)]
pub struct MemoryAutostart {
    state: Mutex<MemoryState>,
}

impl MemoryAutostart {
    pub fn new(enabled: bool) -> Self {
        Self {
            state: Mutex::new(MemoryState {
                enabled,
                ..MemoryState::default()
            }),
        }
    }

    /// Current flag, bypassing failure injection
    pub fn current(&self) -> bool {
        self.state.lock().enabled
    }

    /// Number of successful enable/disable calls
    pub fn mutations(&self) -> usize {
        self.state.lock().mutations
    }

    pub fn fail_queries(&self, fail: bool) {
        self.state.lock().fail_queries = fail;
    }

    pub fn fail_mutations(&self, fail: bool) {
        self.state.lock().fail_mutations = fail;
    }

    fn mutate(&self, operation: AutostartOperation, enabled: bool) -> Result<()> {
        let mut state = self.state.lock();
        if state.fail_mutations {
            return Err(PlatformServiceError::PermissionDenied {
                operation,
                message: "login item registration rejected".to_string(),
            });
        }
        state.enabled = enabled;
        state.mutations += 1;
        Ok(())
    }
}

impl AutostartCapability for MemoryAutostart {
    fn is_enabled(&self) -> Result<bool> {
        let state = self.state.lock();
        if state.fail_queries {
            return Err(PlatformServiceError::Unavailable {
                operation: AutostartOperation::Query,
                message: "autostart backend not reachable".to_string(),
            });
        }
        Ok(state.enabled)
    }

    fn enable(&self) -> Result<()> {
        self.mutate(AutostartOperation::Enable, true)
    }

    fn disable(&self) -> Result<()> {
        self.mutate(AutostartOperation::Disable, false)
    }
}
