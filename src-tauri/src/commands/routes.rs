//! Route table commands

use serde::Serialize;
use tauri::State;

use super::CommandResult;
use crate::state::AppState;
use recent_core::{Route, View};

#[derive(Debug, Serialize)]
pub struct RouteInfo {
    pub path: String,
    pub view: View,
}

impl From<&Route> for RouteInfo {
    fn from(route: &Route) -> Self {
        Self {
            path: route.path.to_string(),
            view: route.view,
        }
    }
}

#[tauri::command]
pub fn list_routes(state: State<AppState>) -> CommandResult<Vec<RouteInfo>> {
    state
        .with_app(|app| Ok(app.routes().routes().iter().map(RouteInfo::from).collect()))
        .into()
}

#[tauri::command]
pub fn resolve_route(state: State<AppState>, path: String) -> CommandResult<View> {
    state.with_app(|app| app.resolve_route(&path)).into()
}

/// Resolve the view for a full webview location, e.g. after a deep link
#[tauri::command]
pub fn resolve_location(state: State<AppState>, location: String) -> CommandResult<View> {
    state.with_app(|app| app.resolve_location(&location)).into()
}
