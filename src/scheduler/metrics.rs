/*!
 * Transaction Metrics
 * Per-transaction timing records, kept in submission order
 */

use super::queue::RunQueue;
use crate::core::errors::SchedulerResult;
use crate::core::types::{Pid, Ticks};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Timing record for one transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct TransactionMetrics {
    pub transaction_id: Pid,
    pub arrival_time: Ticks,
    pub execution_time: Ticks,
    pub remaining_time: Ticks,
    pub completion_time: Ticks,
    pub turnaround_time: Ticks,
    pub waiting_time: Ticks,
}

impl TransactionMetrics {
    #[must_use]
    pub const fn arrived(transaction_id: Pid, arrival_time: Ticks, execution_time: Ticks) -> Self {
        Self {
            transaction_id,
            arrival_time,
            execution_time,
            remaining_time: execution_time,
            completion_time: 0,
            turnaround_time: 0,
            waiting_time: 0,
        }
    }

    /// Derive turnaround and waiting from the current completion time
    ///
    /// Only meaningful once `remaining_time` reaches zero.
    #[inline]
    pub fn recompute(&mut self) {
        self.turnaround_time = self.completion_time - self.arrival_time;
        self.waiting_time = self.turnaround_time - self.execution_time;
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_completed(&self) -> bool {
        self.remaining_time == 0
    }
}

/// Owner of every transaction's metrics
#[derive(Debug, Clone, Default)]
pub struct MetricsTracker {
    records: Vec<TransactionMetrics>,
}

impl MetricsTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            records: Vec::with_capacity(capacity),
        }
    }

    /// Record an arrival; returns the record's index
    pub fn record_arrival(
        &mut self,
        transaction_id: Pid,
        arrival_time: Ticks,
        execution_time: Ticks,
    ) -> usize {
        let index = self.records.len();
        self.records.push(TransactionMetrics::arrived(
            transaction_id,
            arrival_time,
            execution_time,
        ));
        debug!(transaction_id, arrival_time, execution_time, index, "Arrival recorded");
        index
    }

    /// Push every unfinished record onto `queue` in submission order
    ///
    /// Returns the number of records enqueued.
    pub fn enqueue_pending(&self, queue: &mut RunQueue) -> SchedulerResult<usize> {
        let mut enqueued = 0;
        for (index, record) in self.records.iter().enumerate() {
            if record.remaining_time > 0 && !queue.contains(index) {
                queue.enqueue(index)?;
                enqueued += 1;
            }
        }
        Ok(enqueued)
    }

    pub fn get(&self, index: usize) -> Option<&TransactionMetrics> {
        self.records.get(index)
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TransactionMetrics> {
        self.records.get_mut(index)
    }

    pub fn find(&self, transaction_id: Pid) -> Option<&TransactionMetrics> {
        self.records
            .iter()
            .find(|m| m.transaction_id == transaction_id)
    }

    pub fn records(&self) -> &[TransactionMetrics] {
        &self.records
    }

    pub fn pending(&self) -> usize {
        self.records.iter().filter(|m| !m.is_completed()).count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
