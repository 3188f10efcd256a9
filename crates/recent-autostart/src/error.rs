//! Autostart error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Which platform call failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AutostartOperation {
    Query,
    Enable,
    Disable,
}

impl AutostartOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            AutostartOperation::Query => "query",
            AutostartOperation::Enable => "enable",
            AutostartOperation::Disable => "disable",
        }
    }
}

impl std::fmt::Display for AutostartOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformServiceError {
    #[error("Autostart service unavailable during {operation}: {message}")]
    Unavailable {
        operation: AutostartOperation,
        message: String,
    },

    #[error("Permission denied during autostart {operation}: {message}")]
    PermissionDenied {
        operation: AutostartOperation,
        message: String,
    },

    #[error("Autostart {operation} failed: {message}")]
    Failed {
        operation: AutostartOperation,
        message: String,
    },
}

impl PlatformServiceError {
    pub fn failed(operation: AutostartOperation, message: impl Into<String>) -> Self {
        Self::Failed {
            operation,
            message: message.into(),
        }
    }

    pub fn operation(&self) -> AutostartOperation {
        match self {
            PlatformServiceError::Unavailable { operation, .. }
            | PlatformServiceError::PermissionDenied { operation, .. }
            | PlatformServiceError::Failed { operation, .. } => *operation,
        }
    }
}
