/*!
 * Process Types
 * Transaction lifecycle records tracked by the process table
 */

use crate::core::types::{AccountId, Amount, Pid, Ticks, TransactionKind};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Process status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProcessStatus {
    /// Registered, ledger call not started
    Pending,
    /// Ledger call in flight
    Running,
    /// Ledger call succeeded
    Completed,
    /// Ledger call returned an error
    Failed,
}

impl ProcessStatus {
    #[inline(always)]
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, ProcessStatus::Completed | ProcessStatus::Failed)
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            ProcessStatus::Pending => "PENDING",
            ProcessStatus::Running => "RUNNING",
            ProcessStatus::Completed => "COMPLETED",
            ProcessStatus::Failed => "FAILED",
        }
    }
}

impl fmt::Display for ProcessStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Process (transaction) record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ProcessRecord {
    pub process_id: Pid,
    pub account_id: AccountId,
    pub amount: Amount,
    pub kind: TransactionKind,
    pub status: ProcessStatus,
    pub execution_time: Ticks,
}

impl ProcessRecord {
    #[inline]
    #[must_use]
    pub fn new(
        process_id: Pid,
        account_id: AccountId,
        amount: Amount,
        kind: TransactionKind,
        execution_time: Ticks,
    ) -> Self {
        Self {
            process_id,
            account_id,
            amount,
            kind,
            status: ProcessStatus::Pending,
            execution_time,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_deposit(&self) -> bool {
        self.kind.is_deposit()
    }
}
