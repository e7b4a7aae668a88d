/*!
 * System Limits and Constants
 *
 * Centralized location for capacities, time slices, and simulation defaults.
 * Every value here is only a default; `KernelConfig` can override it.
 */

use crate::core::types::Ticks;

// =============================================================================
// LEDGER LIMITS
// =============================================================================

/// Number of account slots in the ledger
pub const MAX_ACCOUNTS: usize = 10;

// =============================================================================
// PROCESS TABLE LIMITS
// =============================================================================

/// Number of transaction records the process table accepts
/// Append-only, there is no eviction
pub const MAX_PROCESSES: usize = 100;

// =============================================================================
// SCHEDULING
// =============================================================================

/// Round-robin time quantum
pub const TIME_QUANTUM: Ticks = 2;

/// Shortest simulated execution time drawn per transaction
pub const MIN_EXECUTION_TIME: Ticks = 1;

/// Longest simulated execution time drawn per transaction
pub const MAX_EXECUTION_TIME: Ticks = 5;

// =============================================================================
// NOTIFICATIONS
// =============================================================================

/// Bounded notification channel depth
/// A full channel is a delivery failure, never a blocking send
pub const NOTIFICATION_CAPACITY: usize = 64;
