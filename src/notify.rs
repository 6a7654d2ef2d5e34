//! Notification sink: fire-and-forget user-facing messages.
//!
//! The submission workflow never talks to a concrete toast/display layer;
//! it emits `(severity, message)` pairs through the injected [`Notifier`].

use std::sync::Mutex;
use tracing::{info, warn};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Success,
    Error,
}

/// One-way notification channel. No return value, no acknowledgment.
pub trait Notifier {
    fn notify(&self, severity: Severity, message: &str);

    fn info(&self, message: &str) {
        self.notify(Severity::Info, message);
    }

    fn success(&self, message: &str) {
        self.notify(Severity::Success, message);
    }

    fn error(&self, message: &str) {
        self.notify(Severity::Error, message);
    }
}

/// Notifier that routes messages into the tracing log. Used by the CLI
/// binary, where there is no display layer to show a toast.
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        match severity {
            Severity::Error => warn!("{}", message),
            _ => info!("{}", message),
        }
    }
}

/// Recording stub for tests and headless consumers: captures every
/// notification in order.
#[derive(Default)]
pub struct RecordingNotifier {
    messages: Mutex<Vec<(Severity, String)>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn messages(&self) -> Vec<(Severity, String)> {
        self.messages.lock().expect("notifier lock").clone()
    }

    pub fn count_of(&self, severity: Severity) -> usize {
        self.messages()
            .iter()
            .filter(|(s, _)| *s == severity)
            .count()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, severity: Severity, message: &str) {
        self.messages
            .lock()
            .expect("notifier lock")
            .push((severity, message.to_string()));
    }
}
