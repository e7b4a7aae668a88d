/*!
 * Simulation Clock
 * Global abstract-time clock shared by the coordinator and the scheduler
 */

use crate::core::types::Ticks;
use parking_lot::Mutex;
use std::sync::Arc;

/// Monotonic simulation clock
///
/// Cloning shares the same underlying time.
#[derive(Debug, Clone, Default)]
pub struct SimClock {
    now: Arc<Mutex<Ticks>>,
}

impl SimClock {
    pub fn new() -> Self {
        Self::default()
    }

    /// Clock starting at `start`
    pub fn starting_at(start: Ticks) -> Self {
        Self {
            now: Arc::new(Mutex::new(start)),
        }
    }

    #[inline]
    pub fn now(&self) -> Ticks {
        *self.now.lock()
    }

    /// Advance by `delta` and return the new time
    ///
    /// Negative deltas are ignored and the clock saturates at `Ticks::MAX`;
    /// it never runs backwards.
    pub fn advance(&self, delta: Ticks) -> Ticks {
        let mut now = self.now.lock();
        *now = now.saturating_add(delta.max(0));
        *now
    }
}
