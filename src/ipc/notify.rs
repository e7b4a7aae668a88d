/*!
 * Notification Channel
 * Delivery of transaction outcomes to an in-process listener
 */

use super::types::Notification;
use crate::core::errors::{NotifyError, NotifyResult};
use tracing::info;

/// Notification sink
///
/// Delivery failure is reported, never fatal.
#[cfg_attr(test, mockall::automock)]
pub trait Notifier: Send + Sync {
    fn notify(&self, notification: &Notification) -> NotifyResult<()>;
}

/// Bounded flume-backed notifier
///
/// Never blocks: a full or closed channel is a delivery failure.
#[derive(Debug, Clone)]
pub struct ChannelNotifier {
    sender: flume::Sender<Notification>,
}

impl Notifier for ChannelNotifier {
    fn notify(&self, notification: &Notification) -> NotifyResult<()> {
        self.sender
            .try_send(notification.clone())
            .map_err(|e| match e {
                flume::TrySendError::Full(_) => {
                    NotifyError::DeliveryFailed("notification channel full".into())
                }
                flume::TrySendError::Disconnected(_) => {
                    NotifyError::DeliveryFailed("listener disconnected".into())
                }
            })
    }
}

/// Receiving half of a notification channel
#[derive(Debug, Clone)]
pub struct NotificationReceiver {
    receiver: flume::Receiver<Notification>,
}

impl NotificationReceiver {
    pub fn try_recv(&self) -> Option<Notification> {
        self.receiver.try_recv().ok()
    }

    /// Wait for the next notification; None once every sender is gone
    pub async fn recv_async(&self) -> Option<Notification> {
        self.receiver.recv_async().await.ok()
    }

    /// Everything currently buffered
    pub fn drain(&self) -> Vec<Notification> {
        self.receiver.drain().collect()
    }

    pub fn len(&self) -> usize {
        self.receiver.len()
    }

    pub fn is_empty(&self) -> bool {
        self.receiver.is_empty()
    }
}

/// Create a bounded notification channel
pub fn notification_channel(capacity: usize) -> (ChannelNotifier, NotificationReceiver) {
    let (sender, receiver) = flume::bounded(capacity);
    (ChannelNotifier { sender }, NotificationReceiver { receiver })
}

/// Notifier that writes each notification to the log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&self, notification: &Notification) -> NotifyResult<()> {
        info!(
            process_id = ?notification.process_id,
            account_id = notification.account_id,
            success = notification.success,
            "IPC Notification: {}",
            notification.message
        );
        Ok(())
    }
}
