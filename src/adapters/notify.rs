use crate::domain::model::{Notification, NotificationKind};
use crate::domain::ports::Notifier;
use std::sync::Mutex;

/// Prints toasts to the terminal and mirrors them into the log.
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleNotifier;

impl Notifier for ConsoleNotifier {
    fn notify_success(&self, text: &str) {
        tracing::info!("toast(success): {}", text);
        println!("✅ {}", text);
    }

    fn notify_error(&self, text: &str) {
        tracing::warn!("toast(error): {}", text);
        eprintln!("❌ {}", text);
    }
}

/// Keeps every notification in memory, oldest first.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notifications: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    fn push(&self, kind: NotificationKind, text: &str) {
        let mut notifications = self
            .notifications
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner());
        notifications.push(Notification {
            kind,
            text: text.to_string(),
            at: chrono::Utc::now(),
        });
    }

    pub fn notifications(&self) -> Vec<Notification> {
        self.notifications
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    pub fn error_texts(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.kind == NotificationKind::Error)
            .map(|n| n.text)
            .collect()
    }

    pub fn success_texts(&self) -> Vec<String> {
        self.notifications()
            .into_iter()
            .filter(|n| n.kind == NotificationKind::Success)
            .map(|n| n.text)
            .collect()
    }
}

impl Notifier for RecordingNotifier {
    fn notify_success(&self, text: &str) {
        self.push(NotificationKind::Success, text);
    }

    fn notify_error(&self, text: &str) {
        self.push(NotificationKind::Error, text);
    }
}
