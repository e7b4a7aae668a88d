/*!
 * Coordinator Module
 * End-to-end orchestration of deposits and withdrawals
 */

mod transaction;
mod types;

pub use transaction::TransactionCoordinator;
pub use types::TransactionOutcome;
