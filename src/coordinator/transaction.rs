/*!
 * Transaction Coordinator
 * Drives one transaction end-to-end: process entry, arrival, ledger call on a
 * joined worker, clock advance, final status, and notification
 */

use super::types::TransactionOutcome;
use crate::core::clock::SimClock;
use crate::core::config::KernelConfig;
use crate::core::errors::{KernelError, KernelResult, LedgerResult, NotifyResult, SchedulerResult};
use crate::core::types::{AccountId, Amount, CustomerId, Pid, Ticks, TransactionKind};
use crate::ipc::{Notification, Notifier};
use crate::ledger::{Account, Ledger};
use crate::monitoring::TransactionSpan;
use crate::process::{ProcessRecord, ProcessStatus, ProcessTable};
use crate::scheduler::{MetricsTracker, RoundRobin, RunQueue, Schedule, TransactionMetrics};
use parking_lot::Mutex;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::sync::Arc;
use std::thread;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{info, warn};

/// Transaction coordinator
///
/// Submissions are serialized: each one waits for its worker before the next
/// starts, so transactions complete in submission order.
pub struct TransactionCoordinator {
    config: KernelConfig,
    ledger: Ledger,
    processes: Arc<Mutex<ProcessTable>>,
    metrics: Arc<Mutex<MetricsTracker>>,
    clock: SimClock,
    scheduler: RoundRobin,
    notifier: Arc<dyn Notifier>,
    rng: Mutex<StdRng>,
    submission: Mutex<()>,
}

impl TransactionCoordinator {
    /// Create a coordinator for `config`, reporting outcomes to `notifier`
    pub fn new(config: KernelConfig, notifier: Arc<dyn Notifier>) -> KernelResult<Self> {
        config.validate()?;

        let seed = config.seed.unwrap_or_else(wall_clock_seed);
        info!(
            max_accounts = config.max_accounts,
            max_processes = config.max_processes,
            quantum = config.quantum,
            seed,
            "Transaction coordinator initialized"
        );

        Ok(Self {
            ledger: Ledger::new(config.max_accounts),
            processes: Arc::new(Mutex::new(ProcessTable::new(config.max_processes))),
            metrics: Arc::new(Mutex::new(MetricsTracker::with_capacity(config.max_processes))),
            clock: SimClock::new(),
            scheduler: RoundRobin::new(config.quantum),
            notifier,
            rng: Mutex::new(StdRng::seed_from_u64(seed)),
            submission: Mutex::new(()),
            config,
        })
    }

    /// Create an account in an explicit slot
    pub fn create_account(
        &self,
        customer_id: CustomerId,
        initial_balance: Amount,
        slot: usize,
    ) -> LedgerResult<AccountId> {
        let _guard = self.submission.lock();
        self.ledger.create_account(customer_id, initial_balance, slot)
    }

    /// Create an account in the next free slot
    pub fn open_account(
        &self,
        customer_id: CustomerId,
        initial_balance: Amount,
    ) -> LedgerResult<AccountId> {
        let _guard = self.submission.lock();
        let slot = self
            .ledger
            .next_free_slot()
            .unwrap_or(self.ledger.capacity());
        self.ledger.create_account(customer_id, initial_balance, slot)
    }

    pub fn deposit(&self, account_id: AccountId, amount: Amount) -> TransactionOutcome {
        self.submit(account_id, amount, TransactionKind::Deposit)
    }

    pub fn withdraw(&self, account_id: AccountId, amount: Amount) -> TransactionOutcome {
        self.submit(account_id, amount, TransactionKind::Withdraw)
    }

    /// Run one transaction to completion
    pub fn submit(
        &self,
        account_id: AccountId,
        amount: Amount,
        kind: TransactionKind,
    ) -> TransactionOutcome {
        let _guard = self.submission.lock();
        let span = TransactionSpan::new(kind.label(), account_id);
        let _entered = span.enter();

        let execution_time = self.draw_execution_time();

        let pid = match self
            .processes
            .lock()
            .add(account_id, amount, kind, execution_time)
        {
            Ok(pid) => pid,
            Err(e) => {
                span.record_error(&e.to_string());
                let notification = Notification::rejected(account_id, kind, amount, &e);
                let delivery = self.deliver(&notification);
                return TransactionOutcome {
                    process_id: None,
                    account_id,
                    kind,
                    amount,
                    execution_time,
                    arrival_time: self.clock.now(),
                    result: Err(e.into()),
                    notification,
                    delivery,
                };
            }
        };

        span.record_pid(pid);

        let arrival_time = self.clock.now();
        self.metrics
            .lock()
            .record_arrival(pid, arrival_time, execution_time);

        self.processes
            .lock()
            .update_status(pid, ProcessStatus::Running);
        let worker = self.run_worker(pid, account_id, amount, kind);

        self.clock.advance(execution_time);

        let (result, notification) = match worker {
            Ok(ledger_result) => {
                let notification =
                    Notification::ledger_outcome(pid, account_id, kind, amount, &ledger_result);
                (ledger_result.map_err(KernelError::from), notification)
            }
            Err(e) => {
                let notification = Notification {
                    process_id: Some(pid),
                    ..Notification::rejected(account_id, kind, amount, &e)
                };
                (Err(e), notification)
            }
        };

        let status = if result.is_ok() {
            ProcessStatus::Completed
        } else {
            ProcessStatus::Failed
        };
        self.processes.lock().update_status(pid, status);
        match &result {
            Ok(_) => span.record_result(true),
            Err(e) => span.record_error(&e.to_string()),
        }

        let delivery = self.deliver(&notification);

        TransactionOutcome {
            process_id: Some(pid),
            account_id,
            kind,
            amount,
            execution_time,
            arrival_time,
            result,
            notification,
            delivery,
        }
    }

    /// Current balance (read-only)
    pub fn check_balance(&self, account_id: AccountId) -> LedgerResult<Amount> {
        self.ledger.check_balance(account_id)
    }

    /// Enqueue every unfinished transaction and run a round-robin pass
    pub fn schedule(&self) -> SchedulerResult<Schedule> {
        let _guard = self.submission.lock();
        let mut metrics = self.metrics.lock();

        let mut queue = RunQueue::with_capacity(self.config.max_processes.max(metrics.len()));
        let enqueued = metrics.enqueue_pending(&mut queue)?;
        info!(enqueued, now = self.clock.now(), "Starting round-robin pass");

        self.scheduler.run(&mut metrics, &mut queue, &self.clock)
    }

    /// Process table snapshot in insertion order
    pub fn processes(&self) -> Vec<ProcessRecord> {
        self.processes.lock().list_all().to_vec()
    }

    pub fn process(&self, pid: Pid) -> Option<ProcessRecord> {
        self.processes.lock().get(pid).cloned()
    }

    /// Metrics snapshot in submission order
    pub fn metrics(&self) -> Vec<TransactionMetrics> {
        self.metrics.lock().records().to_vec()
    }

    pub fn accounts(&self) -> Vec<Account> {
        self.ledger.accounts()
    }

    pub fn slots(&self) -> Vec<Account> {
        self.ledger.slots()
    }

    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn now(&self) -> Ticks {
        self.clock.now()
    }

    pub fn config(&self) -> &KernelConfig {
        &self.config
    }

    fn draw_execution_time(&self) -> Ticks {
        self.rng.lock().gen_range(self.config.execution_range())
    }

    /// Run the ledger call on its own thread and wait for it
    fn run_worker(
        &self,
        pid: Pid,
        account_id: AccountId,
        amount: Amount,
        kind: TransactionKind,
    ) -> KernelResult<LedgerResult<Amount>> {
        let ledger = &self.ledger;

        thread::scope(|scope| {
            let handle = thread::Builder::new()
                .name(format!("txn-{}", pid))
                .spawn_scoped(scope, move || match kind {
                    TransactionKind::Deposit => ledger.deposit(account_id, amount),
                    TransactionKind::Withdraw => ledger.withdraw(account_id, amount),
                })
                .map_err(|e| KernelError::WorkerSpawnFailed {
                    pid,
                    reason: e.to_string(),
                })?;

            handle.join().map_err(|_| KernelError::WorkerPanicked(pid))
        })
    }

    fn deliver(&self, notification: &Notification) -> NotifyResult<()> {
        let delivery = self.notifier.notify(notification);
        if let Err(e) = &delivery {
            warn!(
                process_id = ?notification.process_id,
                error = %e,
                "Notification not delivered"
            );
        }
        delivery
    }
}

fn wall_clock_seed() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or_default()
}
