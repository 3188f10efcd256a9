//! Adapters from Tauri to the core seams

use recent_core::{
    AutostartCapability, AutostartOperation, Notification, NotificationHandler,
    PlatformServiceError,
};
use tauri::{AppHandle, Emitter};
use tauri_plugin_autostart::ManagerExt;

/// Autostart backed by `tauri-plugin-autostart`
pub struct PluginAutostart {
    app: AppHandle,
}

impl PluginAutostart {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

fn platform_error(
    operation: AutostartOperation,
    err: tauri_plugin_autostart::Error,
) -> PlatformServiceError {
    let message = err.to_string();
    let lowered = message.to_lowercase();

    if lowered.contains("permission denied") || lowered.contains("access is denied") {
        PlatformServiceError::PermissionDenied { operation, message }
    } else {
        PlatformServiceError::failed(operation, message)
    }
}

impl AutostartCapability for PluginAutostart {
    fn is_enabled(&self) -> Result<bool, PlatformServiceError> {
        self.app
            .autolaunch()
            .is_enabled()
            .map_err(|e| platform_error(AutostartOperation::Query, e))
    }

    fn enable(&self) -> Result<(), PlatformServiceError> {
        self.app
            .autolaunch()
            .enable()
            .map_err(|e| platform_error(AutostartOperation::Enable, e))
    }

    fn disable(&self) -> Result<(), PlatformServiceError> {
        self.app
            .autolaunch()
            .disable()
            .map_err(|e| platform_error(AutostartOperation::Disable, e))
    }
}

/// Forwards native notifications to the webview under their event name
#[derive(Clone)]
pub struct FrontendNotifier {
    app: AppHandle,
}

impl FrontendNotifier {
    pub fn new(app: AppHandle) -> Self {
        Self { app }
    }
}

impl NotificationHandler for FrontendNotifier {
    fn notify(&self, notification: &Notification) {
        let name = notification.event.name();
        if let Err(e) = self.app.emit(name, notification.event.payload()) {
            tracing::error!(event = name, error = %e, "Failed to emit event to webview");
        }
    }
}
