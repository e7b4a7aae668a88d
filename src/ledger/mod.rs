/*!
 * Ledger Module
 * In-memory account table and its balance operations
 */

mod manager;
mod types;

pub use manager::Ledger;
pub use types::Account;
