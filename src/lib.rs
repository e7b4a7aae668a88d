/*!
 * Bank Kernel Library
 * Transactional ledger, process table, and round-robin scheduler exposed as a library
 */

pub mod coordinator;
pub mod core;
pub mod display;
pub mod ipc;
pub mod ledger;
pub mod monitoring;
pub mod process;
pub mod scheduler;
pub mod shell;

// Re-exports
pub use coordinator::{TransactionCoordinator, TransactionOutcome};
pub use crate::core::*;
pub use display::{render_gantt, render_process_table, render_slot_map, schedule_json};
pub use ipc::{
    notification_channel, ChannelNotifier, LogNotifier, Notification, NotificationReceiver,
    Notifier,
};
pub use ledger::{Account, Ledger};
pub use monitoring::{init_tracing, TransactionSpan};
pub use process::{ProcessRecord, ProcessStatus, ProcessTable};
pub use scheduler::{
    MetricsTracker, RoundRobin, RunQueue, Schedule, ScheduleStats, Slice, TransactionMetrics,
};
pub use shell::Shell;
