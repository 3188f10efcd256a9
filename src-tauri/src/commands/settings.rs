//! Settings commands

use tauri::{AppHandle, State, Theme};

use super::autostart::run_blocking;
use super::CommandResult;
use crate::state::AppState;
use recent_core::AppConfig;

/// Window theme for a config value; `None` follows the OS
pub(crate) fn platform_theme_for(ui_theme: &str) -> Option<Theme> {
    match ui_theme {
        "dark" => Some(Theme::Dark),
        "light" => Some(Theme::Light),
        _ => None,
    }
}

#[tauri::command]
pub fn get_config(state: State<AppState>) -> CommandResult<AppConfig> {
    state.with_app(|app| Ok(app.config())).into()
}

/// A `system` overwrite may toggle autostart, so this runs off the main thread
#[tauri::command]
pub async fn sync_config(
    app: AppHandle,
    group: String,
    config: AppConfig,
    overwrite: bool,
) -> CommandResult<AppConfig> {
    let name = group.clone();
    let result = run_blocking(app.clone(), move |core| {
        core.sync_config(&name, &config, overwrite)
    })
    .await;

    let synced = match result {
        Ok(synced) => synced,
        Err(e) => {
            tracing::error!(group = %group, error = %e, "Failed to sync config");
            return CommandResult::err(e.to_string());
        }
    };

    // Only a user choice pins the window; `system` hands it back to the OS
    if overwrite && group == "system" {
        app.set_theme(platform_theme_for(&synced.system.theme));
    }

    CommandResult::ok(synced)
}
