/*!
 * Error Types
 * Centralized error handling with thiserror, miette, and serde support
 */

use crate::core::types::{AccountId, Amount, Pid};
use miette::Diagnostic;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ledger operation result
pub type LedgerResult<T> = Result<T, LedgerError>;

/// Process table operation result
pub type ProcessResult<T> = Result<T, ProcessError>;

/// Scheduler operation result
pub type SchedulerResult<T> = Result<T, SchedulerError>;

/// Notification delivery result
pub type NotifyResult<T> = Result<T, NotifyError>;

/// Common result type for kernel operations
pub type KernelResult<T> = Result<T, KernelError>;

/// Ledger errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum LedgerError {
    #[error("Invalid or non-existent account ID={0}")]
    #[diagnostic(
        code(ledger::invalid_account),
        help("Account IDs start at 1 and must refer to a created account.")
    )]
    InvalidAccount(AccountId),

    #[error("Insufficient funds in account ID={account_id}: balance {balance:.2}, requested {requested:.2}")]
    #[diagnostic(
        code(ledger::insufficient_funds),
        help("Withdraw at most the current balance.")
    )]
    InsufficientFunds {
        account_id: AccountId,
        balance: Amount,
        requested: Amount,
    },

    #[error("Account slot {slot} out of range (capacity {capacity})")]
    #[diagnostic(
        code(ledger::slot_out_of_range),
        help("Maximum accounts reached. Raise BANK_MAX_ACCOUNTS to allow more.")
    )]
    SlotOutOfRange { slot: usize, capacity: usize },

    #[error("Account slot {0} is already allocated")]
    #[diagnostic(code(ledger::slot_occupied), help("Accounts are never replaced during a session."))]
    SlotOccupied(usize),

    #[error("Invalid amount: {0}")]
    #[diagnostic(code(ledger::invalid_amount), help("Amounts must be zero or positive."))]
    InvalidAmount(String),

    #[error("Balance overflow in account ID={account_id}: deposit of {requested:.2} exceeds the maximum balance")]
    #[diagnostic(
        code(ledger::balance_overflow),
        help("Deposit a smaller amount. The balance was left unchanged.")
    )]
    BalanceOverflow {
        account_id: AccountId,
        requested: Amount,
    },
}

/// Process table errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ProcessError {
    #[error("Process table full (capacity {capacity})")]
    #[diagnostic(
        code(process::table_full),
        help("The process table is append-only. Start a new session to submit more transactions.")
    )]
    TableFull { capacity: usize },

    #[error("Process {0} not found")]
    #[diagnostic(code(process::not_found))]
    NotFound(Pid),
}

/// Scheduler errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum SchedulerError {
    #[error("Run queue full (capacity {capacity})")]
    #[diagnostic(
        code(scheduler::queue_full),
        help("Queue capacity must cover every tracked transaction.")
    )]
    QueueFull { capacity: usize },

    #[error("Transaction #{0} is already queued")]
    #[diagnostic(code(scheduler::already_queued))]
    AlreadyQueued(usize),

    #[error("Unknown transaction #{0}")]
    #[diagnostic(code(scheduler::unknown_transaction))]
    UnknownTransaction(usize),
}

/// Notification errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum NotifyError {
    #[error("Notification delivery failed: {0}")]
    #[diagnostic(
        code(ipc::delivery_failed),
        help("The listener may have exited or fallen behind. The transaction itself is unaffected.")
    )]
    DeliveryFailed(String),
}

/// Configuration errors
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "error_type", content = "details", rename_all = "snake_case")]
pub enum ConfigError {
    #[error("Invalid value {value:?} for {key}: {reason}")]
    #[diagnostic(code(config::invalid))]
    Invalid {
        key: String,
        value: String,
        reason: String,
    },
}

impl ConfigError {
    pub(crate) fn invalid(key: &str, value: impl ToString, reason: impl Into<String>) -> Self {
        ConfigError::Invalid {
            key: key.to_string(),
            value: value.to_string(),
            reason: reason.into(),
        }
    }
}

/// Unified kernel error
#[derive(Error, Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Diagnostic)]
#[serde(tag = "subsystem", content = "error", rename_all = "snake_case")]
pub enum KernelError {
    #[error(transparent)]
    #[diagnostic(transparent)]
    Ledger(#[from] LedgerError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Scheduler(#[from] SchedulerError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Notify(#[from] NotifyError),

    #[error(transparent)]
    #[diagnostic(transparent)]
    Config(#[from] ConfigError),

    #[error("Worker for process {0} panicked")]
    #[diagnostic(code(kernel::worker_panicked))]
    WorkerPanicked(Pid),

    #[error("Failed to spawn worker for process {pid}: {reason}")]
    #[diagnostic(code(kernel::worker_spawn_failed))]
    WorkerSpawnFailed { pid: Pid, reason: String },
}

impl KernelError {
    /// Ledger error behind this kernel error, if any
    #[must_use]
    pub fn as_ledger(&self) -> Option<&LedgerError> {
        match self {
            KernelError::Ledger(e) => Some(e),
            _ => None,
        }
    }
}
