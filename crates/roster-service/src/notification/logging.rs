//! Notification channel that only writes a log line.

use super::NotificationChannel;
use tracing::info;

/// Records notifications as tracing events and delivers them nowhere else.
#[derive(Debug, Default, Clone, Copy)]
pub struct LoggingNotificationChannel;

impl NotificationChannel for LoggingNotificationChannel {
    fn send(&self, topic: &str, event_name: &str, payload: &str) {
        info!(topic, event = event_name, "{}", payload);
    }
}
