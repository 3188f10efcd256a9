//! Greeting and web log commands

use tauri::State;

use super::CommandResult;
use crate::state::AppState;

#[tauri::command]
pub fn greet(state: State<AppState>, name: String) -> CommandResult<String> {
    state.with_app(|app| Ok(app.greet(&name))).into()
}

#[tauri::command]
pub fn web_log(state: State<AppState>, level: String, msg: String) -> CommandResult<()> {
    state.with_app(|app| app.web_log(&level, &msg)).into()
}
