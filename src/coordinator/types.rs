/*!
 * Coordinator Types
 */

use crate::core::errors::{KernelError, KernelResult, NotifyResult};
use crate::core::types::{AccountId, Amount, Pid, Ticks, TransactionKind};
use crate::ipc::Notification;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Result of one submitted transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TransactionOutcome {
    /// None when the process table refused the submission
    pub process_id: Option<Pid>,
    pub account_id: AccountId,
    pub kind: TransactionKind,
    pub amount: Amount,
    pub execution_time: Ticks,
    pub arrival_time: Ticks,
    /// New balance on success
    pub result: KernelResult<Amount>,
    /// Emitted notification
    pub notification: Notification,
    /// Notification delivery status
    pub delivery: NotifyResult<()>,
}

impl TransactionOutcome {
    #[inline]
    #[must_use]
    pub fn is_success(&self) -> bool {
        self.result.is_ok()
    }

    /// Human-readable outcome text
    #[must_use]
    pub fn message(&self) -> &str {
        &self.notification.message
    }

    #[must_use]
    pub fn balance(&self) -> Option<Amount> {
        self.result.as_ref().ok().copied()
    }

    #[must_use]
    pub fn error(&self) -> Option<&KernelError> {
        self.result.as_ref().err()
    }
}

impl fmt::Display for TransactionOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())?;
        if let Some(balance) = self.balance() {
            write!(f, " New Balance={:.2}", balance)?;
        }
        if let Err(e) = &self.delivery {
            write!(f, " [{}]", e)?;
        }
        Ok(())
    }
}
