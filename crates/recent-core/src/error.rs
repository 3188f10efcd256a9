//! Core error types

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CoreError {
    #[error("Autostart error: {0}")]
    Autostart(#[from] recent_autostart::PlatformServiceError),

    #[error("Config error: {0}")]
    Config(#[from] recent_config::ConfigError),

    #[error("Route error: {0}")]
    Route(#[from] recent_routes::RouteError),

    #[error("Unknown log level: {0}")]
    InvalidLogLevel(String),

    #[error("Background task failed: {0}")]
    Task(String),

    #[error("Request timed out after {}s", .0.as_secs())]
    Timeout(std::time::Duration),
}
