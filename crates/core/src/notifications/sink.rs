//! Notification sink trait and implementations.

use std::sync::{Arc, Mutex};

use super::Notification;

/// Trait for receiving user-facing notifications.
///
/// Core services call `notify()` once an operation has a user-visible
/// outcome. Implementations decide how the message reaches the user.
///
/// # Design Rules
///
/// - `notify()` must be fast and non-blocking (no network calls, no DB writes)
/// - Failure to deliver must not affect the operation that emitted it
pub trait NotificationSink: Send + Sync {
    /// Deliver a single notification.
    fn notify(&self, notification: Notification);
}

/// No-op implementation for contexts that don't surface feedback.
#[derive(Clone, Default)]
pub struct NoOpNotificationSink;

impl NotificationSink for NoOpNotificationSink {
    fn notify(&self, _notification: Notification) {}
}

/// Sink that keeps every notification in memory.
///
/// The HTTP host uses one per request to return feedback alongside the
/// result; tests use it to assert on what was emitted.
#[derive(Clone, Default)]
pub struct BufferedNotificationSink {
    notifications: Arc<Mutex<Vec<Notification>>>,
}

impl BufferedNotificationSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns all collected notifications.
    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|n| n.clone())
            .unwrap_or_default()
    }

    /// Removes and returns all collected notifications.
    pub fn drain(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .map(|mut n| std::mem::take(&mut *n))
            .unwrap_or_default()
    }

    /// Returns the number of collected notifications.
    pub fn len(&self) -> usize {
        self.notifications.lock().map(|n| n.len()).unwrap_or(0)
    }

    /// Returns true if no notifications have been collected.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl NotificationSink for BufferedNotificationSink {
    fn notify(&self, notification: Notification) {
        if let Ok(mut notifications) = self.notifications.lock() {
            notifications.push(notification);
        }
    }
}
