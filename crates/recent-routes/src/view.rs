//! Views the webview can display

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum View {
    /// Backup missions, also the landing view
    Mission,
    /// Backup history
    Backup,
    /// Application settings
    Config,
    /// Backup statistics
    Statistic,
    /// Backup procedures
    Procedure,
    /// Lock screen
    Screensaver,
}

impl View {
    pub const ALL: [View; 6] = [
        View::Mission,
        View::Backup,
        View::Config,
        View::Statistic,
        View::Procedure,
        View::Screensaver,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            View::Mission => "mission",
            View::Backup => "backup",
            View::Config => "config",
            View::Statistic => "statistic",
            View::Procedure => "procedure",
            View::Screensaver => "screensaver",
        }
    }
}

impl std::fmt::Display for View {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for View {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "mission" => Ok(View::Mission),
            "backup" => Ok(View::Backup),
            "config" => Ok(View::Config),
            "statistic" => Ok(View::Statistic),
            "procedure" => Ok(View::Procedure),
            "screensaver" => Ok(View::Screensaver),
            _ => Err(format!("Unknown view: {}", s)),
        }
    }
}
