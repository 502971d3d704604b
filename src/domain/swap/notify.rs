//! Notifications — transient success/error messages for the rendering layer.

use serde::{Deserialize, Serialize};
use std::sync::{Arc, Mutex};
use std::time::Duration;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NotificationKind {
    Success,
    Error,
}

/// A user-visible toast.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    pub title: String,
    pub message: String,
    pub kind: NotificationKind,
    /// How long the UI should keep it on screen.
    pub duration: Duration,
    pub closable: bool,
}

impl Notification {
    pub fn success(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: "Success".to_string(),
            message: message.into(),
            kind: NotificationKind::Success,
            duration,
            closable: true,
        }
    }

    pub fn error(message: impl Into<String>, duration: Duration) -> Self {
        Self {
            title: "Error".to_string(),
            message: message.into(),
            kind: NotificationKind::Error,
            duration,
            closable: true,
        }
    }

    pub fn is_error(&self) -> bool {
        self.kind == NotificationKind::Error
    }
}

/// Receives notifications emitted by the swap form. One-way; no acknowledgment.
pub trait NotificationSink {
    fn notify(&self, notification: Notification);
}

impl<F> NotificationSink for F
where
    F: Fn(Notification),
{
    fn notify(&self, notification: Notification) {
        self(notification)
    }
}

/// Sink that keeps every notification until taken.
///
/// Clones share the same log, so a UI loop can hold one clone and poll it
/// while the form owns the other.
#[derive(Debug, Clone, Default)]
pub struct NotificationLog {
    entries: Arc<Mutex<Vec<Notification>>>,
}

impl NotificationLog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drain all pending notifications, oldest first.
    pub fn take(&self) -> Vec<Notification> {
        std::mem::take(&mut *self.lock())
    }

    pub fn latest(&self) -> Option<Notification> {
        self.lock().last().cloned()
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, Vec<Notification>> {
        self.entries.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl NotificationSink for NotificationLog {
    fn notify(&self, notification: Notification) {
        self.lock().push(notification);
    }
}
