/*!
 * Process Module
 * Transaction lifecycle bookkeeping
 */

pub mod table;
pub mod types;

// Re-export for convenience
pub use table::ProcessTable;
pub use types::{ProcessRecord, ProcessStatus};
