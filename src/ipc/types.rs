/*!
 * IPC Types
 * Transaction notifications carried over the notification channel
 */

use crate::core::errors::{LedgerError, LedgerResult};
use crate::core::types::{AccountId, Amount, Pid, TransactionKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Outcome notification for one transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Notification {
    /// None when the transaction never got a process id
    pub process_id: Option<Pid>,
    pub account_id: AccountId,
    pub kind: TransactionKind,
    pub amount: Amount,
    pub success: bool,
    pub message: String,
}

impl Notification {
    /// Notification describing a ledger outcome
    pub fn ledger_outcome(
        process_id: Pid,
        account_id: AccountId,
        kind: TransactionKind,
        amount: Amount,
        outcome: &LedgerResult<Amount>,
    ) -> Self {
        let message = match (kind, outcome) {
            (TransactionKind::Deposit, Ok(_)) => format!(
                "Deposit of {:.2} to Account ID={} completed.",
                amount, account_id
            ),
            (TransactionKind::Withdraw, Ok(_)) => format!(
                "Withdrawal of {:.2} from Account ID={} completed.",
                amount, account_id
            ),
            (TransactionKind::Deposit, Err(LedgerError::InvalidAccount(_))) => {
                format!("Deposit failed. Invalid Account ID={}", account_id)
            }
            (TransactionKind::Withdraw, Err(LedgerError::InvalidAccount(_))) => {
                format!("Withdrawal failed. Invalid Account ID={}", account_id)
            }
            (TransactionKind::Withdraw, Err(LedgerError::InsufficientFunds { .. })) => format!(
                "Withdrawal failed. Insufficient funds. Account ID={}",
                account_id
            ),
            (kind, Err(e)) => format!("{} failed. {}", kind, e),
        };

        Self {
            process_id: Some(process_id),
            account_id,
            kind,
            amount,
            success: outcome.is_ok(),
            message,
        }
    }

    /// Notification for a submission refused before reaching the ledger
    pub fn rejected(
        account_id: AccountId,
        kind: TransactionKind,
        amount: Amount,
        reason: impl fmt::Display,
    ) -> Self {
        Self {
            process_id: None,
            account_id,
            kind,
            amount,
            success: false,
            message: format!("{} rejected: {}", kind, reason),
        }
    }
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.message)
    }
}
