//! Autostart toggle controller
//!
//! ```text
//! is_enabled ──true──▶ disable ─┐
//!      │                        ├─▶ is_enabled ─▶ StatusMessage
//!      └────false──▶ enable ────┘
//! ```
//!
//! The second query is what gets reported, so a platform that silently
//! ignores the mutation shows up as an unchanged status.

use serde::{Deserialize, Serialize};

use crate::capability::AutostartCapability;
use crate::Result;

/// User-facing autostart status, built from a confirmed platform read
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusMessage {
    pub enabled: bool,
    pub text: String,
}

impl StatusMessage {
    pub fn from_state(enabled: bool) -> Self {
        let word = if enabled { "enabled" } else { "disabled" };
        Self {
            enabled,
            text: format!("auto start is {word}"),
        }
    }
}

impl std::fmt::Display for StatusMessage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

pub struct AutostartController<C> {
    capability: C,
}

impl<C: AutostartCapability> AutostartController<C> {
    pub fn new(capability: C) -> Self {
        Self { capability }
    }

    pub fn capability(&self) -> &C {
        &self.capability
    }

    /// Read the current registration without changing it
    pub fn status(&self) -> Result<StatusMessage> {
        let enabled = self.capability.is_enabled()?;
        Ok(StatusMessage::from_state(enabled))
    }

    /// Invert the registration and report the state read back afterwards
    pub fn toggle(&self) -> Result<StatusMessage> {
        let before = self.capability.is_enabled()?;
        if before {
            self.capability.disable()?;
        } else {
            self.capability.enable()?;
        }

        let after = self.capability.is_enabled()?;
        if after == before {
            tracing::warn!(enabled = after, "Autostart state unchanged after toggle");
        } else {
            tracing::info!(enabled = after, "Toggled autostart");
        }

        Ok(StatusMessage::from_state(after))
    }

    /// Drive the registration to `enabled` and report the state read back
    pub fn set(&self, enabled: bool) -> Result<StatusMessage> {
        let current = self.capability.is_enabled()?;
        if current != enabled {
            if enabled {
                self.capability.enable()?;
            } else {
                self.capability.disable()?;
            }
            tracing::info!(enabled, "Updated autostart");
        }

        self.status()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capability::MemoryAutostart;
    use crate::error::{AutostartOperation, PlatformServiceError};

    #[test]
    fn test_toggle_inverts_both_states() {
        for initial in [false, true] {
            let controller = AutostartController::new(MemoryAutostart::new(initial));
            let status = controller.toggle().unwrap();

            assert_eq!(controller.capability().current(), !initial);
            assert_eq!(status.enabled, !initial);
        }
    }

    #[test]
    fn test_toggle_from_disabled() {
        let controller = AutostartController::new(MemoryAutostart::new(false));
        let status = controller.toggle().unwrap();

        assert!(controller.capability().current());
        assert!(status.enabled);
        assert_eq!(status.text, "auto start is enabled");
    }

    #[test]
    fn test_toggle_from_enabled() {
        let controller = AutostartController::new(MemoryAutostart::new(true));
        let status = controller.toggle().unwrap();

        assert!(!controller.capability().current());
        assert!(!status.enabled);
        assert_eq!(status.to_string(), "auto start is disabled");
    }

    #[test]
    fn test_double_toggle_restores_state() {
        let controller = AutostartController::new(MemoryAutostart::new(true));
        controller.toggle().unwrap();
        let status = controller.toggle().unwrap();

        assert!(controller.capability().current());
        assert!(status.enabled);
        assert_eq!(controller.capability().mutations(), 2);
    }

    #[test]
    fn test_query_failure_propagates() {
        let autostart = MemoryAutostart::new(false);
        autostart.fail_queries(true);
        let controller = AutostartController::new(autostart);

        let err = controller.toggle().unwrap_err();
        assert!(matches!(err, PlatformServiceError::Unavailable { .. }));
        assert_eq!(controller.capability().mutations(), 0);
    }

    #[test]
    fn test_mutation_failure_propagates() {
        let autostart = MemoryAutostart::new(false);
        autostart.fail_mutations(true);
        let controller = AutostartController::new(autostart);

        let err = controller.toggle().unwrap_err();
        assert_eq!(err.operation(), AutostartOperation::Enable);
        assert!(!controller.capability().current());
    }

    /// Platform that accepts mutations but never changes
    struct StuckAutostart;

    impl AutostartCapability for StuckAutostart {
        fn is_enabled(&self) -> crate::Result<bool> {
            Ok(false)
        }

        fn enable(&self) -> crate::Result<()> {
            Ok(())
        }

        fn disable(&self) -> crate::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_reports_confirmed_state() {
        let controller = AutostartController::new(StuckAutostart);
        let status = controller.toggle().unwrap();

        // Enable was requested, but the platform still reads disabled
        assert!(!status.enabled);
    }

    #[test]
    fn test_set_skips_redundant_mutation() {
        let controller = AutostartController::new(MemoryAutostart::new(true));

        let status = controller.set(true).unwrap();
        assert!(status.enabled);
        assert_eq!(controller.capability().mutations(), 0);

        let status = controller.set(false).unwrap();
        assert!(!status.enabled);
        assert_eq!(controller.capability().mutations(), 1);
    }

    #[test]
    fn test_status_is_read_only() {
        let controller = AutostartController::new(MemoryAutostart::new(true));
        let status = controller.status().unwrap();

        assert!(status.enabled);
        assert_eq!(controller.capability().mutations(), 0);
    }
}
