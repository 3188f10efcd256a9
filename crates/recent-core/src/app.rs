//! Application state container
//!
//! Owns the config, the autostart controller, the route table and the
//! event dispatcher. The desktop shell holds one `App` and every command
//! goes through it.

use parking_lot::{Mutex, RwLock};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use recent_autostart::{AutostartCapability, AutostartController, StatusMessage};
use recent_config::{AppConfig, ConfigGroup, ConfigStore};
use recent_events::{Event, EventDispatcher};
use recent_routes::{RouteError, RouteTable, View};

use crate::error::CoreError;
use crate::Result;

/// Levels the webview may log at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Debug,
    Info,
    Warn,
    Error,
}

impl std::str::FromStr for LogLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "debug" => Ok(LogLevel::Debug),
            "info" => Ok(LogLevel::Info),
            "warn" => Ok(LogLevel::Warn),
            "error" => Ok(LogLevel::Error),
            _ => Err(CoreError::InvalidLogLevel(s.to_string())),
        }
    }
}

/// What the shell does with a close request on the main window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CloseAction {
    Exit,
    HideToTray,
}

pub struct App<C> {
    config: Arc<RwLock<AppConfig>>,
    store: ConfigStore,
    autostart: AutostartController<C>,
    /// Serializes OS autostart changes with the config write that records them
    autostart_lock: Mutex<()>,
    routes: RouteTable,
    events: EventDispatcher,
}

impl<C: AutostartCapability> App<C> {
    /// Load config from `store` (defaults on first launch)
    pub fn new(store: ConfigStore, capability: C) -> Result<Self> {
        let config = store.load_or_default()?;
        Ok(Self::with_config(config, store, capability))
    }

    pub fn with_config(config: AppConfig, store: ConfigStore, capability: C) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            store,
            autostart: AutostartController::new(capability),
            autostart_lock: Mutex::new(()),
            routes: RouteTable::default(),
            events: EventDispatcher::new(),
        }
    }

    pub fn greet(&self, name: &str) -> String {
        format!("Hello, {}! You've been greeted from Rust!", name)
    }

    // === Autostart ===

    pub fn autostart(&self) -> &AutostartController<C> {
        &self.autostart
    }

    pub fn autostart_status(&self) -> Result<StatusMessage> {
        Ok(self.autostart.status()?)
    }

    /// Invert the OS registration and remember the confirmed state
    pub fn toggle_autostart(&self) -> Result<StatusMessage> {
        let _guard = self.autostart_lock.lock();
        let status = self.autostart.toggle()?;
        self.record_autostart(status.enabled);
        Ok(status)
    }

    pub fn set_autostart(&self, enabled: bool) -> Result<StatusMessage> {
        let _guard = self.autostart_lock.lock();
        let status = self.autostart.set(enabled)?;
        self.record_autostart(status.enabled);
        Ok(status)
    }

    /// Bring the OS registration in line with the saved preference
    pub fn reconcile_autostart(&self) -> Result<StatusMessage> {
        let _guard = self.autostart_lock.lock();
        let wanted = self.config.read().system.auto_start;
        let status = self.autostart.set(wanted)?;
        if status.enabled != wanted {
            tracing::warn!(wanted, actual = status.enabled, "Autostart preference not applied");
        }
        self.record_autostart(status.enabled);
        Ok(status)
    }

    // The OS change already happened; a failed save only costs the
    // preference on next launch.
    fn record_autostart(&self, enabled: bool) {
        let mut config = self.config.write();
        if config.system.auto_start == enabled {
            return;
        }
        config.system.auto_start = enabled;

        if let Err(e) = self.store.save(&config) {
            tracing::warn!(error = %e, "Failed to persist autostart preference");
        }
    }

    // === Config ===

    pub fn config(&self) -> AppConfig {
        self.config.read().clone()
    }

    pub fn store(&self) -> &ConfigStore {
        &self.store
    }

    /// Read or overwrite one config group, saving on overwrite
    ///
    /// A `system` overwrite that flips `auto_start` is applied to the OS
    /// first; the confirmed state is what gets stored. The shared config
    /// only changes once the save succeeds, except for a confirmed
    /// autostart change, which is kept in memory either way.
    pub fn sync_config(
        &self,
        group: &str,
        incoming: &AppConfig,
        overwrite: bool,
    ) -> Result<AppConfig> {
        let parsed: ConfigGroup = group.parse()?;

        if !overwrite {
            let mut current = self.config();
            return Ok(current.sync_group(group, incoming, false)?);
        }

        let _guard = self.autostart_lock.lock();
        let mut incoming = incoming.clone();
        let mut applied = None;

        if parsed == ConfigGroup::System {
            let current = self.config.read().system.auto_start;
            if incoming.system.auto_start != current {
                let status = self.autostart.set(incoming.system.auto_start)?;
                incoming.system.auto_start = status.enabled;
                applied = Some(status.enabled);
            }
        }

        let mut config = self.config.write();
        let mut staged = config.clone();
        let synced = staged.sync_group(group, &incoming, true)?;

        if let Err(e) = self.store.save(&synced) {
            if let Some(enabled) = applied {
                tracing::warn!(
                    enabled,
                    error = %e,
                    "Config not saved, keeping confirmed autostart state"
                );
                config.system.auto_start = enabled;
            }
            return Err(e.into());
        }

        *config = synced.clone();
        Ok(synced)
    }

    // === Window ===

    /// Decide what closing the main window does
    ///
    /// With `close_option == 1` the window hides to the tray. The first
    /// `close_limit` hides are counted and announced so the webview can
    /// show its hint; after that they are silent.
    pub fn close_requested(&self) -> CloseAction {
        let hidden = {
            let mut config = self.config.write();
            if config.system.close_option != 1 {
                return CloseAction::Exit;
            }

            if config.system.close_cnt < config.system.close_limit {
                config.system.close_cnt += 1;
                if let Err(e) = self.store.save(&config) {
                    tracing::warn!(error = %e, "Failed to persist close count");
                }
                Some(config.system.close_cnt)
            } else {
                None
            }
        };

        if let Some(count) = hidden {
            let delivered = self.notify(Event::HiddenToTray { count });
            tracing::debug!(count, delivered, "Hid main window to tray");
        }

        CloseAction::HideToTray
    }

    // === Routes ===

    pub fn routes(&self) -> &RouteTable {
        &self.routes
    }

    pub fn resolve_route(&self, path: &str) -> Result<View> {
        self.routes
            .resolve(path)
            .ok_or_else(|| RouteError::UnknownPath(path.to_string()).into())
    }

    /// Resolve a full webview location such as `tauri://localhost/#/config`
    pub fn resolve_location(&self, location: &str) -> Result<View> {
        Ok(self.routes.resolve_location(location)?)
    }

    // === Events ===

    pub fn events(&self) -> &EventDispatcher {
        &self.events
    }

    pub fn notify(&self, event: Event) -> usize {
        tracing::info!(event = event.name(), "Native event");
        self.events.dispatch(event)
    }

    // === Web log ===

    pub fn web_log(&self, level: &str, msg: &str) -> Result<()> {
        match level.parse::<LogLevel>()? {
            LogLevel::Debug => tracing::debug!(target: "webview", "{}", msg),
            LogLevel::Info => tracing::info!(target: "webview", "{}", msg),
            LogLevel::Warn => tracing::warn!(target: "webview", "{}", msg),
            LogLevel::Error => tracing::error!(target: "webview", "{}", msg),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use recent_autostart::MemoryAutostart;
    use recent_events::{EventKind, Notification, Theme};
    use recent_config::ConfigError;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::time::Duration;

    fn test_app(dir: &tempfile::TempDir, enabled: bool) -> App<MemoryAutostart> {
        let store = ConfigStore::new(dir.path().join("clean-recent.toml"));
        App::new(store, MemoryAutostart::new(enabled)).unwrap()
    }

    /// Store whose path is a directory, so every save fails
    fn unwritable_app(dir: &tempfile::TempDir, enabled: bool) -> App<MemoryAutostart> {
        let store = ConfigStore::new(dir.path().to_path_buf());
        App::with_config(AppConfig::default(), store, MemoryAutostart::new(enabled))
    }

    /// Stalls after the confirming read of the first toggle
    struct SlowConfirm {
        inner: MemoryAutostart,
        queries: AtomicUsize,
    }

    impl AutostartCapability for SlowConfirm {
        fn is_enabled(&self) -> recent_autostart::Result<bool> {
            let enabled = self.inner.is_enabled()?;
            if self.queries.fetch_add(1, Ordering::SeqCst) == 1 {
                std::thread::sleep(Duration::from_millis(300));
            }
            Ok(enabled)
        }

        fn enable(&self) -> recent_autostart::Result<()> {
            self.inner.enable()
        }

        fn disable(&self) -> recent_autostart::Result<()> {
            self.inner.disable()
        }
    }

    #[test]
    fn test_greet() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);
        assert_eq!(
            app.greet("Ferris"),
            "Hello, Ferris! You've been greeted from Rust!"
        );
    }

    #[test]
    fn test_toggle_persists_confirmed_state() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);

        let status = app.toggle_autostart().unwrap();
        assert!(status.enabled);
        assert!(app.config().system.auto_start);
        assert!(app.store().load().unwrap().system.auto_start);

        let status = app.toggle_autostart().unwrap();
        assert!(!status.enabled);
        assert!(!app.store().load().unwrap().system.auto_start);
    }

    #[test]
    fn test_toggle_failure_keeps_config() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);
        app.autostart().capability().fail_mutations(true);

        let err = app.toggle_autostart().unwrap_err();
        assert!(matches!(err, CoreError::Autostart(_)));
        assert!(!app.config().system.auto_start);
        // Nothing was written
        assert!(app.store().load().is_err());
    }

    #[test]
    fn test_reconcile_applies_saved_preference() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("clean-recent.toml"));
        let mut config = AppConfig::default();
        config.system.auto_start = true;
        store.save(&config).unwrap();

        let app = App::new(store, MemoryAutostart::new(false)).unwrap();
        let status = app.reconcile_autostart().unwrap();

        assert!(status.enabled);
        assert!(app.autostart().capability().current());
    }

    #[test]
    fn test_sync_system_drives_autostart() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);

        let mut incoming = app.config();
        incoming.system.auto_start = true;
        incoming.system.theme = "dark".to_string();

        let synced = app.sync_config("system", &incoming, true).unwrap();
        assert!(synced.system.auto_start);
        assert_eq!(synced.system.theme, "dark");
        assert!(app.autostart().capability().current());
        assert_eq!(app.store().load().unwrap(), synced);
    }

    #[test]
    fn test_overlapping_toggles_persist_os_state() {
        let dir = tempfile::tempdir().unwrap();
        let store = ConfigStore::new(dir.path().join("clean-recent.toml"));
        let capability = SlowConfirm {
            inner: MemoryAutostart::new(false),
            queries: AtomicUsize::new(0),
        };
        let app = App::with_config(AppConfig::default(), store, capability);

        std::thread::scope(|s| {
            let first = s.spawn(|| app.toggle_autostart().unwrap());
            std::thread::sleep(Duration::from_millis(100));
            let second = s.spawn(|| app.toggle_autostart().unwrap());

            assert!(first.join().unwrap().enabled);
            assert!(!second.join().unwrap().enabled);
        });

        let os = app.autostart().capability().inner.current();
        assert!(!os);
        assert_eq!(app.config().system.auto_start, os);
        assert_eq!(app.store().load().unwrap().system.auto_start, os);
    }

    #[test]
    fn test_failed_save_leaves_config_untouched() {
        let dir = tempfile::tempdir().unwrap();
        let app = unwritable_app(&dir, false);

        let mut incoming = app.config();
        incoming.watcher.timeout = 99;

        let err = app.sync_config("watcher", &incoming, true).unwrap_err();
        assert!(matches!(err, CoreError::Config(ConfigError::Io(_))));
        assert_eq!(app.config(), AppConfig::default());
        assert!(!app.autostart().capability().current());
    }

    #[test]
    fn test_failed_save_keeps_confirmed_autostart() {
        let dir = tempfile::tempdir().unwrap();
        let app = unwritable_app(&dir, false);

        let mut incoming = app.config();
        incoming.system.auto_start = true;
        incoming.system.theme = "dark".to_string();

        assert!(app.sync_config("system", &incoming, true).is_err());

        // The OS changed, so memory follows it; the rest of the edit is dropped
        let config = app.config();
        assert!(app.autostart().capability().current());
        assert!(config.system.auto_start);
        assert_eq!(config.system.theme, AppConfig::default().system.theme);
    }

    #[test]
    fn test_sync_read_does_not_save() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);

        let mut incoming = app.config();
        incoming.watcher.timeout = 42;

        let synced = app.sync_config("watcher", &incoming, false).unwrap();
        assert_eq!(synced.watcher.timeout, 3);
        assert!(app.store().load().is_err());
    }

    #[test]
    fn test_close_exits_by_default() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);

        assert_eq!(app.close_requested(), CloseAction::Exit);
        assert_eq!(app.config().system.close_cnt, 0);
    }

    #[test]
    fn test_close_hides_to_tray_and_counts() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);
        let counts = Arc::new(parking_lot::Mutex::new(Vec::new()));

        let seen = Arc::clone(&counts);
        app.events()
            .subscribe(EventKind::HiddenToTray, move |n: &Notification| {
                if let Event::HiddenToTray { count } = &n.event {
                    seen.lock().push(*count);
                }
            });

        let mut incoming = app.config();
        incoming.system.close_option = 1;
        incoming.system.close_limit = 2;
        app.sync_config("system", &incoming, true).unwrap();

        for _ in 0..3 {
            assert_eq!(app.close_requested(), CloseAction::HideToTray);
        }

        // Only the first `close_limit` hides are counted and announced
        assert_eq!(*counts.lock(), vec![1, 2]);
        assert_eq!(app.config().system.close_cnt, 2);
        assert_eq!(app.store().load().unwrap().system.close_cnt, 2);
    }

    #[test]
    fn test_sync_unknown_group() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);

        let err = app
            .sync_config("mission", &AppConfig::default(), true)
            .unwrap_err();
        assert!(matches!(err, CoreError::Config(_)));
    }

    #[test]
    fn test_resolve_route() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);

        assert_eq!(app.resolve_route("/config").unwrap(), View::Config);
        assert!(matches!(
            app.resolve_route("/missing"),
            Err(CoreError::Route(RouteError::UnknownPath(_)))
        ));
    }

    #[test]
    fn test_resolve_location() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);

        assert_eq!(
            app.resolve_location("tauri://localhost/#/statistic").unwrap(),
            View::Statistic
        );
        assert!(matches!(
            app.resolve_location("not a url"),
            Err(CoreError::Route(RouteError::InvalidUrl(_)))
        ));
    }

    #[test]
    fn test_notify_reaches_handler() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);
        let seen = Arc::new(AtomicUsize::new(0));

        let counter = Arc::clone(&seen);
        app.events()
            .subscribe(EventKind::ThemeChanged, move |n: &Notification| {
                assert_eq!(n.event, Event::ThemeChanged(Theme::Dark));
                counter.fetch_add(1, Ordering::SeqCst);
            });

        assert_eq!(app.notify(Event::ThemeChanged(Theme::Dark)), 1);
        assert_eq!(seen.load(Ordering::SeqCst), 1);
    }

    #[test]
    fn test_web_log_levels() {
        let dir = tempfile::tempdir().unwrap();
        let app = test_app(&dir, false);

        assert!(app.web_log("info", "message from web").is_ok());
        assert!(app.web_log("WARN", "message from web").is_ok());
        assert!(matches!(
            app.web_log("trace", "message from web"),
            Err(CoreError::InvalidLogLevel(_))
        ));
    }
}
