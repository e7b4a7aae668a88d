/*!
 * Scheduler Types
 * Gantt output of a scheduling pass
 */

use super::metrics::TransactionMetrics;
use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};

/// One contiguous run of a transaction on the simulated CPU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Slice {
    pub transaction_id: Pid,
    pub start: Ticks,
    pub end: Ticks,
    /// Slice was cut short by the quantum
    pub preempted: bool,
}

impl Slice {
    #[inline]
    #[must_use]
    pub const fn duration(&self) -> Ticks {
        self.end - self.start
    }
}

/// Pass statistics
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct ScheduleStats {
    pub slices: usize,
    pub preemptions: usize,
    pub completed: usize,
    pub started_at: Ticks,
    pub finished_at: Ticks,
    pub average_turnaround: f64,
    pub average_waiting: f64,
}

/// Gantt schedule: the per-transaction table plus the executed timeline
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Schedule {
    pub rows: Vec<TransactionMetrics>,
    pub slices: Vec<Slice>,
    pub stats: ScheduleStats,
}

impl Schedule {
    pub fn row(&self, transaction_id: Pid) -> Option<&TransactionMetrics> {
        self.rows.iter().find(|m| m.transaction_id == transaction_id)
    }

    /// Completion time per row, in row order
    pub fn completion_times(&self) -> Vec<Ticks> {
        self.rows.iter().map(|m| m.completion_time).collect()
    }
}
