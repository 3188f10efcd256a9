//! Autostart commands
//!
//! The plugin call blocks on the OS (registry, launch agents, desktop
//! files), so it runs on the blocking pool under a deadline.

use std::time::Duration;
use tauri::{AppHandle, Manager};

use super::CommandResult;
use crate::state::{AppState, DesktopApp};
use recent_core::StatusMessage;

pub const AUTOSTART_TIMEOUT: Duration = Duration::from_secs(5);

/// Run `op` against the shared app on the blocking pool
///
/// A timed-out task keeps running; the core serializes autostart changes,
/// so a retry waits for it instead of racing it.
pub(crate) async fn run_blocking<T, F>(handle: AppHandle, op: F) -> recent_core::Result<T>
where
    T: Send + 'static,
    F: FnOnce(&DesktopApp) -> recent_core::Result<T> + Send + 'static,
{
    let app = handle.state::<AppState>().shared();
    let task = tokio::task::spawn_blocking(move || op(&app));

    match tokio::time::timeout(AUTOSTART_TIMEOUT, task).await {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            tracing::error!(error = %e, "Blocking task panicked");
            Err(recent_core::CoreError::Task(e.to_string()))
        }
        Err(_) => {
            tracing::error!(timeout = ?AUTOSTART_TIMEOUT, "Blocking task timed out");
            Err(recent_core::CoreError::Timeout(AUTOSTART_TIMEOUT))
        }
    }
}

async fn run_autostart<F>(handle: AppHandle, op: F) -> CommandResult<StatusMessage>
where
    F: FnOnce(&DesktopApp) -> recent_core::Result<StatusMessage> + Send + 'static,
{
    let result = run_blocking(handle, op).await;
    if let Err(e) = &result {
        tracing::error!(error = %e, "Autostart request failed");
    }
    result.into()
}

#[tauri::command]
pub async fn toggle_autostart(app: AppHandle) -> CommandResult<StatusMessage> {
    run_autostart(app, |app| app.toggle_autostart()).await
}

#[tauri::command]
pub async fn set_autostart(app: AppHandle, enabled: bool) -> CommandResult<StatusMessage> {
    run_autostart(app, move |app| app.set_autostart(enabled)).await
}

#[tauri::command]
pub async fn get_autostart(app: AppHandle) -> CommandResult<StatusMessage> {
    run_autostart(app, |app| app.autostart_status()).await
}
