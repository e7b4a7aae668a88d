/*!
 * IPC Module
 * In-process notification transport for transaction outcomes
 */

pub mod notify;
pub mod types;

// Re-export for convenience
pub use notify::{notification_channel, ChannelNotifier, LogNotifier, NotificationReceiver, Notifier};
pub use types::Notification;

#[cfg(test)]
pub use notify::MockNotifier;
