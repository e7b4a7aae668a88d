/*!
 * Run Queue
 * Bounded circular FIFO of metrics indices, backed by ringbuf
 */

use crate::core::errors::{SchedulerError, SchedulerResult};
use ringbuf::{traits::*, HeapRb};
use std::collections::HashSet;

/// Round-robin run queue
///
/// An index is present at most once at a time.
pub struct RunQueue {
    buffer: HeapRb<usize>,
    queued: HashSet<usize>,
    capacity: usize,
}

impl RunQueue {
    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            buffer: HeapRb::<usize>::new(capacity),
            queued: HashSet::with_capacity(capacity),
            capacity,
        }
    }

    /// Push `index` at the tail
    pub fn enqueue(&mut self, index: usize) -> SchedulerResult<()> {
        if self.queued.contains(&index) {
            return Err(SchedulerError::AlreadyQueued(index));
        }
        self.buffer
            .try_push(index)
            .map_err(|_| SchedulerError::QueueFull {
                capacity: self.capacity,
            })?;
        self.queued.insert(index);
        Ok(())
    }

    /// Pop the head
    pub fn dequeue(&mut self) -> Option<usize> {
        let index = self.buffer.try_pop()?;
        self.queued.remove(&index);
        Some(index)
    }

    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.queued.contains(&index)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.buffer.occupied_len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

impl std::fmt::Debug for RunQueue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RunQueue")
            .field("queued", &self.buffer.occupied_len())
            .field("capacity", &self.capacity)
            .finish()
    }
}
