/*!
 * Kernel Configuration
 *
 * Capacities, time quantum, and simulation parameters. Defaults come from
 * `core::limits`; `from_env` overlays `BANK_*` environment variables.
 */

use crate::core::errors::ConfigError;
use crate::core::limits::{
    MAX_ACCOUNTS, MAX_EXECUTION_TIME, MAX_PROCESSES, MIN_EXECUTION_TIME, NOTIFICATION_CAPACITY,
    TIME_QUANTUM,
};
use crate::core::types::Ticks;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Runtime configuration for a kernel session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default)]
pub struct KernelConfig {
    /// Account slots in the ledger (default: 10)
    pub max_accounts: usize,

    /// Process table and metrics capacity (default: 100)
    pub max_processes: usize,

    /// Round-robin quantum (default: 2)
    pub quantum: Ticks,

    /// Execution time draw range, inclusive (default: 1..=5)
    pub min_execution_time: Ticks,
    pub max_execution_time: Ticks,

    /// Fixed RNG seed; wall-clock seeded when absent
    pub seed: Option<u64>,

    /// Notification channel depth (default: 64)
    pub notification_capacity: usize,
}

impl KernelConfig {
    /// Create default configuration
    pub fn new() -> Self {
        Self {
            max_accounts: MAX_ACCOUNTS,
            max_processes: MAX_PROCESSES,
            quantum: TIME_QUANTUM,
            min_execution_time: MIN_EXECUTION_TIME,
            max_execution_time: MAX_EXECUTION_TIME,
            seed: None,
            notification_capacity: NOTIFICATION_CAPACITY,
        }
    }

    /// Defaults overlaid with `BANK_*` environment variables
    ///
    /// Environment variables:
    /// - BANK_MAX_ACCOUNTS, BANK_MAX_PROCESSES
    /// - BANK_QUANTUM
    /// - BANK_MIN_EXEC, BANK_MAX_EXEC
    /// - BANK_SEED
    /// - BANK_NOTIFY_CAPACITY
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as `from_env` with an injectable lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::new();

        if let Some(v) = parse_var(&lookup, "BANK_MAX_ACCOUNTS")? {
            config.max_accounts = v;
        }
        if let Some(v) = parse_var(&lookup, "BANK_MAX_PROCESSES")? {
            config.max_processes = v;
        }
        if let Some(v) = parse_var(&lookup, "BANK_QUANTUM")? {
            config.quantum = v;
        }
        if let Some(v) = parse_var(&lookup, "BANK_MIN_EXEC")? {
            config.min_execution_time = v;
        }
        if let Some(v) = parse_var(&lookup, "BANK_MAX_EXEC")? {
            config.max_execution_time = v;
        }
        if let Some(v) = parse_var(&lookup, "BANK_SEED")? {
            config.seed = Some(v);
        }
        if let Some(v) = parse_var(&lookup, "BANK_NOTIFY_CAPACITY")? {
            config.notification_capacity = v;
        }

        config.validate()?;
        Ok(config)
    }

    /// Reject configurations the kernel cannot run with
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.max_accounts == 0 {
            return Err(ConfigError::invalid("max_accounts", self.max_accounts, "must be at least 1"));
        }
        if self.max_processes == 0 {
            return Err(ConfigError::invalid("max_processes", self.max_processes, "must be at least 1"));
        }
        if self.quantum <= 0 {
            return Err(ConfigError::invalid("quantum", self.quantum, "must be positive"));
        }
        if self.min_execution_time < 1 {
            return Err(ConfigError::invalid(
                "min_execution_time",
                self.min_execution_time,
                "must be at least 1",
            ));
        }
        if self.max_execution_time < self.min_execution_time {
            return Err(ConfigError::invalid(
                "max_execution_time",
                self.max_execution_time,
                format!("must not be below min_execution_time ({})", self.min_execution_time),
            ));
        }
        if self.notification_capacity == 0 {
            return Err(ConfigError::invalid(
                "notification_capacity",
                self.notification_capacity,
                "must be at least 1",
            ));
        }
        Ok(())
    }

    #[must_use]
    pub fn execution_range(&self) -> RangeInclusive<Ticks> {
        self.min_execution_time..=self.max_execution_time
    }

    #[must_use]
    pub fn with_max_accounts(mut self, max_accounts: usize) -> Self {
        self.max_accounts = max_accounts;
        self
    }

    #[must_use]
    pub fn with_max_processes(mut self, max_processes: usize) -> Self {
        self.max_processes = max_processes;
        self
    }

    #[must_use]
    pub fn with_quantum(mut self, quantum: Ticks) -> Self {
        self.quantum = quantum;
        self
    }

    #[must_use]
    pub fn with_execution_range(mut self, range: RangeInclusive<Ticks>) -> Self {
        self.min_execution_time = *range.start();
        self.max_execution_time = *range.end();
        self
    }

    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    #[must_use]
    pub fn with_notification_capacity(mut self, capacity: usize) -> Self {
        self.notification_capacity = capacity;
        self
    }
}

impl Default for KernelConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|e: T::Err| ConfigError::invalid(key, &raw, e.to_string())),
    }
}
