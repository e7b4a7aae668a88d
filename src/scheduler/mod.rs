/*!
 * Scheduler Module
 * Transaction metrics and preemptive round-robin scheduling
 */

pub mod metrics;
pub mod queue;
pub mod round_robin;
pub mod types;

// Re-export public API
pub use metrics::{MetricsTracker, TransactionMetrics};
pub use queue::RunQueue;
pub use round_robin::RoundRobin;
pub use types::{Schedule, ScheduleStats, Slice};
