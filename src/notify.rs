//! Notification sink capability
//!
//! Outcomes are surfaced through an injected sink rather than a globally
//! reachable helper, so the controller stays free of any rendering
//! substrate and tests can observe exactly what was shown.

use std::fmt;

/// How prominent/alarming a notification should look
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Success,
    Error,
    Info,
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Severity::Success => write!(f, "success"),
            Severity::Error => write!(f, "error"),
            Severity::Info => write!(f, "info"),
        }
    }
}

/// External capability for surfacing transient messages to the user
#[cfg_attr(test, mockall::automock)]
pub trait NotificationSink: Send + Sync {
    fn notify(&self, message: &str, severity: Severity);
}

/// Sink that prints notifications to stdout, used by the console front end
#[derive(Debug, Default)]
pub struct ConsoleSink;

impl NotificationSink for ConsoleSink {
    fn notify(&self, message: &str, severity: Severity) {
        println!("[{severity}] {message}");
    }
}
