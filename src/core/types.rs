/*!
 * Core Types
 * Common types used across the kernel
 */

use serde::{Deserialize, Serialize};
use std::fmt;

/// Process (transaction) ID type
pub type Pid = u32;

/// Account ID type (slot index + 1, 0 means unallocated)
pub type AccountId = u32;

/// Customer ID type
pub type CustomerId = u32;

/// Simulation time in abstract units
///
/// Signed: provisional turnaround can be negative in the middle of a pass.
pub type Ticks = i64;

/// Monetary amount
pub type Amount = rust_decimal::Decimal;

/// Direction of a balance mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Deposit,
    Withdraw,
}

impl TransactionKind {
    #[inline]
    #[must_use]
    pub const fn is_deposit(self) -> bool {
        matches!(self, TransactionKind::Deposit)
    }

    /// Upper-case label used in tables
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            TransactionKind::Deposit => "DEPOSIT",
            TransactionKind::Withdraw => "WITHDRAW",
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TransactionKind::Deposit => f.write_str("Deposit"),
            TransactionKind::Withdraw => f.write_str("Withdrawal"),
        }
    }
}
