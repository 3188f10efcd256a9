//! Clean Recent Configuration
//!
//! Application settings grouped the way the settings view edits them, and
//! persisted as a single TOML file in the platform config directory.

mod app;
mod error;
mod groups;
mod store;

pub use app::{AppConfig, ConfigGroup};
pub use error::ConfigError;
pub use groups::{NotifyConfig, ScreensaverConfig, SystemConfig, WatcherConfig, SYSTEM_THEME};
pub use store::ConfigStore;

pub type Result<T> = std::result::Result<T, ConfigError>;
