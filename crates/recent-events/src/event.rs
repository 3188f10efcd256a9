//! Event payloads

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }
}

impl std::fmt::Display for Theme {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Theme {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "light" => Ok(Theme::Light),
            "dark" => Ok(Theme::Dark),
            _ => Err(format!("Unknown theme: {}", s)),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventKind {
    AnotherInstance,
    ThemeChanged,
    HiddenToTray,
}

impl EventKind {
    /// Name the webview listens on
    pub fn name(&self) -> &'static str {
        match self {
            EventKind::AnotherInstance => "instance",
            EventKind::ThemeChanged => "sys_theme",
            EventKind::HiddenToTray => "hide_to_tray",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Event {
    /// A second launch was folded into the running instance
    AnotherInstance { argv: Vec<String>, cwd: String },
    /// The OS switched between light and dark
    ThemeChanged(Theme),
    /// Closing the window hid it to the tray; `count` is the running total
    HiddenToTray { count: u8 },
}

impl Event {
    pub fn kind(&self) -> EventKind {
        match self {
            Event::AnotherInstance { .. } => EventKind::AnotherInstance,
            Event::ThemeChanged(_) => EventKind::ThemeChanged,
            Event::HiddenToTray { .. } => EventKind::HiddenToTray,
        }
    }

    pub fn name(&self) -> &'static str {
        self.kind().name()
    }

    /// Body sent alongside the event name
    pub fn payload(&self) -> serde_json::Value {
        match self {
            Event::AnotherInstance { argv, cwd } => serde_json::json!({
                "argv": argv,
                "cwd": cwd,
            }),
            Event::ThemeChanged(theme) => serde_json::Value::String(theme.as_str().to_string()),
            Event::HiddenToTray { count } => serde_json::json!({ "count": count }),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Notification {
    pub event: Event,
    pub emitted_at: DateTime<Utc>,
}

impl Notification {
    pub fn new(event: Event) -> Self {
        Self {
            event,
            emitted_at: Utc::now(),
        }
    }
}
