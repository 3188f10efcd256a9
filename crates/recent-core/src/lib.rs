//! Clean Recent Core
//!
//! Native state behind the desktop shell. The webview only renders what
//! comes back from here.

mod app;
mod error;

pub use app::{App, CloseAction, LogLevel};
pub use error::CoreError;

pub use recent_autostart::{
    AutostartCapability, AutostartController, AutostartOperation, MemoryAutostart,
    PlatformServiceError, StatusMessage,
};
pub use recent_config::{AppConfig, ConfigError, ConfigGroup, ConfigStore, SYSTEM_THEME};
pub use recent_events::{
    Event, EventDispatcher, EventKind, Notification, NotificationHandler, SubscriptionId, Theme,
};
pub use recent_routes::{Route, RouteError, RouteTable, View};

pub type Result<T> = std::result::Result<T, CoreError>;

/// Initialize logging
pub fn init_logging() {
    use tracing_subscriber::{fmt, EnvFilter};

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    fmt().with_env_filter(filter).with_target(true).init();
}
