//! Clean Recent - Tauri Application
//!
//! The webview renders; the Rust core owns config, autostart and events.

mod commands;
mod platform;
mod state;
mod tray;

use platform::FrontendNotifier;
use recent_core::{CloseAction, Event, EventKind, Theme};
use state::AppState;
use tauri::{Manager, WebviewUrl, WebviewWindowBuilder, WindowEvent};
use tauri_plugin_autostart::MacosLauncher;

pub(crate) fn show_main_window(app: &tauri::AppHandle) {
    if let Some(window) = app.get_webview_window("main") {
        let _ = window.show();
        let _ = window.set_focus();
    }
}

fn on_another_instance(app: &tauri::AppHandle, argv: Vec<String>, cwd: String) {
    tracing::info!(cwd = %cwd, "Prevented launching another instance");
    show_main_window(app);

    if let Some(state) = app.try_state::<AppState>() {
        if let Ok(delivered) =
            state.with_app(|core| Ok(core.notify(Event::AnotherInstance { argv, cwd })))
        {
            tracing::debug!(delivered, "Forwarded second launch");
        }
    }
}

fn on_window_event(window: &tauri::Window, event: &WindowEvent) {
    let Some(state) = window.app_handle().try_state::<AppState>() else {
        return;
    };

    match event {
        WindowEvent::CloseRequested { api, .. } => {
            let action = state.with_app(|core| Ok(core.close_requested()));
            if let Ok(CloseAction::HideToTray) = action {
                api.prevent_close();
                let _ = window.hide();
            }
        }
        WindowEvent::ThemeChanged(theme) => {
            // A pinned theme means the change came from the user, not the OS
            let follows_os = state
                .with_app(|core| Ok(core.config().system.follows_system_theme()))
                .unwrap_or(false);
            if !follows_os {
                return;
            }

            let theme = match theme {
                tauri::Theme::Dark => Theme::Dark,
                _ => Theme::Light,
            };
            let delivered = state.with_app(|core| Ok(core.notify(Event::ThemeChanged(theme))));
            if let Ok(delivered) = delivered {
                tracing::debug!(theme = %theme, delivered, "Forwarded OS theme change");
            }
        }
        _ => {}
    }
}

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize logging
    recent_core::init_logging();

    tauri::Builder::default()
        .plugin(tauri_plugin_single_instance::init(on_another_instance))
        .plugin(tauri_plugin_autostart::init(MacosLauncher::LaunchAgent, Some(vec![])))
        .plugin(tauri_plugin_opener::init())
        .setup(|app| {
            let state = AppState::new(app.handle().clone())?;

            // Native events go straight to the webview
            let notifier = FrontendNotifier::new(app.handle().clone());
            state.with_app(|core| {
                core.events()
                    .subscribe(EventKind::AnotherInstance, notifier.clone());
                core.events()
                    .subscribe(EventKind::ThemeChanged, notifier.clone());
                core.events().subscribe(EventKind::HiddenToTray, notifier);
                Ok(())
            })?;

            if let Err(e) = state.with_app(|core| core.reconcile_autostart()) {
                tracing::warn!(error = %e, "Could not apply saved autostart preference");
            }

            let initial_theme = state.with_app(|core| Ok(core.config().system.theme))?;

            app.manage(state);

            let window =
                WebviewWindowBuilder::new(app, "main", WebviewUrl::App("index.html".into()))
                    .title("Clean Recent")
                    .inner_size(1080.0, 720.0)
                    .min_inner_size(800.0, 600.0)
                    .center()
                    .build()?;

            // Leave the window unpinned unless the user chose a theme
            if let Some(theme) = commands::settings::platform_theme_for(&initial_theme) {
                app.handle().set_theme(Some(theme));
                let _ = window.set_theme(Some(theme));
            }

            tray::setup_tray(app.handle())?;

            tracing::info!("Clean Recent started");

            Ok(())
        })
        .on_window_event(on_window_event)
        .invoke_handler(tauri::generate_handler![
            // Diagnostics
            commands::diagnostics::frontend_ready,
            // General commands
            commands::general::greet,
            commands::general::web_log,
            // Autostart commands
            commands::autostart::toggle_autostart,
            commands::autostart::set_autostart,
            commands::autostart::get_autostart,
            // Route commands
            commands::routes::list_routes,
            commands::routes::resolve_route,
            commands::routes::resolve_location,
            // Settings commands
            commands::settings::get_config,
            commands::settings::sync_config,
        ])
        .run(tauri::generate_context!())
        .expect("error while running Clean Recent");
}
