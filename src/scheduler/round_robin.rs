/*!
 * Round-Robin Scheduling
 * Preemptive fixed-quantum pass over the run queue
 */

use super::metrics::MetricsTracker;
use super::queue::RunQueue;
use super::types::{Schedule, ScheduleStats, Slice};
use crate::core::clock::SimClock;
use crate::core::errors::{SchedulerError, SchedulerResult};
use crate::core::limits::TIME_QUANTUM;
use crate::core::types::Ticks;
use tracing::{debug, info};

/// Round-robin scheduler
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundRobin {
    quantum: Ticks,
}

impl RoundRobin {
    /// Scheduler with a fixed `quantum`
    ///
    /// A non-positive quantum is raised to 1; `KernelConfig::validate` rejects
    /// one before it gets here.
    pub fn new(quantum: Ticks) -> Self {
        debug_assert!(quantum > 0, "quantum must be positive");
        Self {
            quantum: quantum.max(1),
        }
    }

    #[inline]
    pub fn quantum(&self) -> Ticks {
        self.quantum
    }

    /// Drain `queue`, advancing `clock` for every slice
    ///
    /// Strict FIFO: a preempted transaction goes back to the tail. Turnaround
    /// and waiting are recomputed after every dequeue; only the figures left
    /// by a transaction's final slice are meaningful.
    pub fn run(
        &self,
        tracker: &mut MetricsTracker,
        queue: &mut RunQueue,
        clock: &SimClock,
    ) -> SchedulerResult<Schedule> {
        let started_at = clock.now();
        let mut slices = Vec::new();
        let mut preemptions = 0;
        let mut completed = 0;

        while let Some(index) = queue.dequeue() {
            let metrics = tracker
                .get_mut(index)
                .ok_or(SchedulerError::UnknownTransaction(index))?;
            let start = clock.now();

            let preempted = metrics.remaining_time > self.quantum;
            let end = if preempted {
                metrics.remaining_time -= self.quantum;
                clock.advance(self.quantum)
            } else {
                let end = clock.advance(metrics.remaining_time);
                metrics.completion_time = end;
                metrics.remaining_time = 0;
                end
            };
            metrics.recompute();

            debug!(
                transaction_id = metrics.transaction_id,
                start,
                end,
                remaining = metrics.remaining_time,
                preempted,
                "Slice executed"
            );
            slices.push(Slice {
                transaction_id: metrics.transaction_id,
                start,
                end,
                preempted,
            });

            if preempted {
                preemptions += 1;
                queue.enqueue(index)?;
            } else {
                completed += 1;
            }
        }

        let rows = tracker.records().to_vec();
        let finished: Vec<_> = rows.iter().filter(|m| m.is_completed()).collect();
        let (average_turnaround, average_waiting) = if finished.is_empty() {
            (0.0, 0.0)
        } else {
            let n = finished.len() as f64;
            (
                finished.iter().map(|m| m.turnaround_time as f64).sum::<f64>() / n,
                finished.iter().map(|m| m.waiting_time as f64).sum::<f64>() / n,
            )
        };

        let stats = ScheduleStats {
            slices: slices.len(),
            preemptions,
            completed,
            started_at,
            finished_at: clock.now(),
            average_turnaround,
            average_waiting,
        };

        info!(
            quantum = self.quantum,
            slices = stats.slices,
            preemptions,
            completed,
            started_at,
            finished_at = stats.finished_at,
            "Round-robin pass finished"
        );

        Ok(Schedule {
            rows,
            slices,
            stats,
        })
    }
}

impl Default for RoundRobin {
    fn default() -> Self {
        Self::new(TIME_QUANTUM)
    }
}
