//! Notification channels announcing user mutations.
//!
//! Sending is fire-and-forget: the caller never waits for delivery and never
//! sees a delivery failure.

mod broadcast;
mod channel;
mod logging;
mod redis;

pub use broadcast::BroadcastNotificationChannel;
pub use channel::{NotificationChannel, NotificationChannelExt, NotificationEvent};
#[cfg(test)]
pub use channel::MockNotificationChannel;
pub use logging::LoggingNotificationChannel;
pub use redis::RedisNotificationChannel;
