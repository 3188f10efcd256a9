//! Top-level application config

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::groups::{NotifyConfig, ScreensaverConfig, SystemConfig, WatcherConfig};
use crate::Result;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub system: SystemConfig,
    pub notify: NotifyConfig,
    pub watcher: WatcherConfig,
    pub screensaver: ScreensaverConfig,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ConfigGroup {
    System,
    Notify,
    Watcher,
    Screensaver,
}

impl ConfigGroup {
    pub fn as_str(&self) -> &'static str {
        match self {
            ConfigGroup::System => "system",
            ConfigGroup::Notify => "notify",
            ConfigGroup::Watcher => "watcher",
            ConfigGroup::Screensaver => "screensaver",
        }
    }
}

impl std::fmt::Display for ConfigGroup {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for ConfigGroup {
    type Err = ConfigError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s {
            "system" => Ok(ConfigGroup::System),
            "notify" => Ok(ConfigGroup::Notify),
            "watcher" => Ok(ConfigGroup::Watcher),
            "screensaver" => Ok(ConfigGroup::Screensaver),
            _ => Err(ConfigError::UnknownGroup(s.to_string())),
        }
    }
}

impl AppConfig {
    /// Take one group from `incoming` when `overwrite` is set
    ///
    /// Without `overwrite` this is a read: the current config comes back
    /// unchanged. The group name is validated either way.
    pub fn sync_group(
        &mut self,
        group: &str,
        incoming: &AppConfig,
        overwrite: bool,
    ) -> Result<AppConfig> {
        let group: ConfigGroup = group.parse()?;

        if overwrite {
            match group {
                ConfigGroup::System => self.system = incoming.system.clone(),
                ConfigGroup::Notify => self.notify = incoming.notify.clone(),
                ConfigGroup::Watcher => self.watcher = incoming.watcher.clone(),
                ConfigGroup::Screensaver => self.screensaver = incoming.screensaver.clone(),
            }
        }

        tracing::debug!(group = %group, overwrite, "Synced config");

        Ok(self.clone())
    }
}
