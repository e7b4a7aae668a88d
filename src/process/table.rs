/*!
 * Process Table
 * Append-only, fixed-capacity table of transaction records
 */

use super::types::{ProcessRecord, ProcessStatus};
use crate::core::errors::{ProcessError, ProcessResult};
use crate::core::types::{AccountId, Amount, Pid, Ticks, TransactionKind};
use tracing::{debug, info, warn};

/// Transaction process table
///
/// Not internally synchronized; the owner decides the locking discipline.
#[derive(Debug, Clone)]
pub struct ProcessTable {
    processes: Vec<ProcessRecord>,
    capacity: usize,
}

impl ProcessTable {
    pub fn new(capacity: usize) -> Self {
        Self {
            processes: Vec::with_capacity(capacity),
            capacity,
        }
    }

    /// Append a Pending record; ids start at 1
    pub fn add(
        &mut self,
        account_id: AccountId,
        amount: Amount,
        kind: TransactionKind,
        execution_time: Ticks,
    ) -> ProcessResult<Pid> {
        if self.processes.len() >= self.capacity {
            warn!(capacity = self.capacity, "Process table full. Cannot add more processes");
            return Err(ProcessError::TableFull {
                capacity: self.capacity,
            });
        }

        let pid = (self.processes.len() + 1) as Pid;
        self.processes.push(ProcessRecord::new(
            pid,
            account_id,
            amount,
            kind,
            execution_time,
        ));

        info!(
            pid,
            account_id,
            amount = %amount,
            kind = kind.label(),
            execution_time,
            "Process created (PENDING)"
        );
        Ok(pid)
    }

    /// Set the status of `pid`; returns false when no such process exists
    pub fn update_status(&mut self, pid: Pid, status: ProcessStatus) -> bool {
        match self.processes.iter_mut().find(|p| p.process_id == pid) {
            Some(process) => {
                let from = process.status;
                process.status = status;
                info!(pid, from = from.label(), to = status.label(), "Process status updated");
                true
            }
            None => {
                debug!(pid, status = status.label(), "Status update ignored: process not found");
                false
            }
        }
    }

    pub fn get(&self, pid: Pid) -> Option<&ProcessRecord> {
        self.processes.iter().find(|p| p.process_id == pid)
    }

    /// All records in insertion order
    pub fn list_all(&self) -> &[ProcessRecord] {
        &self.processes
    }

    pub fn count_by_status(&self, status: ProcessStatus) -> usize {
        self.processes.iter().filter(|p| p.status == status).count()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.processes.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.processes.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    #[inline]
    pub fn is_full(&self) -> bool {
        self.processes.len() >= self.capacity
    }
}
