//! Configuration groups

use serde::{Deserialize, Serialize};

pub const SYSTEM_THEME: &str = "system";

/// App-wide behavior: theme, language, startup and close handling
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SystemConfig {
    /// `light`, `dark`, or `system` to follow the OS
    pub theme: String,

    /// Launch at login
    pub auto_start: bool,

    /// What closing the main window does
    /// `0` -> exit app
    /// `1` -> hide to tray
    pub close_option: u8,

    /// How many times the window has been closed
    pub close_cnt: u8,

    /// Hides to tray that are counted and announced to the webview
    pub close_limit: u8,

    /// `en-US` or `zh-CN`
    pub language: String,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            theme: SYSTEM_THEME.to_string(),
            auto_start: false,
            close_option: 0,
            close_cnt: 0,
            close_limit: 50,
            language: system_language(),
        }
    }
}

impl SystemConfig {
    /// No theme was picked, so the window follows the OS
    pub fn follows_system_theme(&self) -> bool {
        !matches!(self.theme.as_str(), "light" | "dark")
    }
}

fn system_language() -> String {
    let locale = ["LC_ALL", "LC_MESSAGES", "LANG"]
        .iter()
        .find_map(|key| std::env::var(key).ok().filter(|v| !v.is_empty()))
        .unwrap_or_default();

    language_for_locale(&locale).to_string()
}

pub(crate) fn language_for_locale(locale: &str) -> &'static str {
    if locale.to_lowercase().starts_with("zh") {
        "zh-CN"
    } else {
        "en-US"
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NotifyConfig {
    /// OS granted notification permission
    pub is_granted: bool,

    pub enable: bool,

    /// Per-kind switches, one bit each
    pub mask: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct WatcherConfig {
    /// Debounce timeout in seconds
    pub timeout: u64,
}

impl Default for WatcherConfig {
    fn default() -> Self {
        Self { timeout: 3 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreensaverConfig {
    pub enable: bool,
    pub password: String,
    pub is_locked: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_language_detection() {
        assert_eq!(language_for_locale("zh_CN.UTF-8"), "zh-CN");
        assert_eq!(language_for_locale("ZH_tw"), "zh-CN");
        assert_eq!(language_for_locale("en_GB.UTF-8"), "en-US");
        assert_eq!(language_for_locale(""), "en-US");
    }

    #[test]
    fn test_follows_system_theme() {
        let mut system = SystemConfig::default();
        assert!(system.follows_system_theme());

        system.theme = "dark".to_string();
        assert!(!system.follows_system_theme());

        // Values older configs might carry fall back to the OS
        system.theme = "auto".to_string();
        assert!(system.follows_system_theme());
    }

    #[test]
    fn test_defaults() {
        let system = SystemConfig::default();
        assert!(!system.auto_start);
        assert_eq!(system.close_limit, 50);
        assert_eq!(system.theme, SYSTEM_THEME);
        assert_eq!(WatcherConfig::default().timeout, 3);
        assert!(!ScreensaverConfig::default().is_locked);
    }
}
