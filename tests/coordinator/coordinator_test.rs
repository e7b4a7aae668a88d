/*!
 * Coordinator Tests
 * End-to-end transactions with notifications and scheduling
 */

use bank_kernel::{
    notification_channel, KernelConfig, KernelError, LedgerError, LogNotifier, ProcessError,
    ProcessStatus, TransactionCoordinator,
};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;
use std::sync::Arc;
use std::thread;

fn coordinator(config: KernelConfig) -> (TransactionCoordinator, bank_kernel::NotificationReceiver) {
    let (notifier, receiver) = notification_channel(256);
    let coordinator = TransactionCoordinator::new(config, Arc::new(notifier)).unwrap();
    (coordinator, receiver)
}

#[test]
fn test_deposit_and_withdraw_flow() {
    let (bank, rx) = coordinator(KernelConfig::new().with_seed(7));
    let id = bank.open_account(100, dec!(500)).unwrap();

    let deposit = bank.deposit(id, dec!(250));
    assert!(deposit.is_success());
    assert_eq!(deposit.balance(), Some(dec!(750)));
    assert_eq!(deposit.to_string(), "Deposit of 250.00 to Account ID=1 completed. New Balance=750.00");

    let withdraw = bank.withdraw(id, dec!(1000));
    assert!(!withdraw.is_success());
    assert_eq!(
        withdraw.message(),
        "Withdrawal failed. Insufficient funds. Account ID=1"
    );
    assert_eq!(bank.check_balance(id), Ok(dec!(750)));

    let statuses: Vec<_> = bank.processes().iter().map(|p| p.status).collect();
    assert_eq!(statuses, vec![ProcessStatus::Completed, ProcessStatus::Failed]);

    let messages: Vec<_> = rx.drain().into_iter().map(|n| n.success).collect();
    assert_eq!(messages, vec![true, false]);
}

#[test]
fn test_invalid_account_is_reported() {
    let (bank, rx) = coordinator(KernelConfig::new().with_seed(1));

    let outcome = bank.deposit(3, dec!(10));
    assert_eq!(
        outcome.error(),
        Some(&KernelError::Ledger(LedgerError::InvalidAccount(3)))
    );
    assert_eq!(outcome.message(), "Deposit failed. Invalid Account ID=3");
    assert_eq!(rx.try_recv().unwrap().account_id, 3);
}

#[test]
fn test_deposit_overflow_fails_cleanly() {
    let (bank, rx) = coordinator(KernelConfig::new().with_seed(6));
    let id = bank.open_account(1, bank_kernel::Amount::MAX).unwrap();

    let outcome = bank.deposit(id, dec!(1));
    assert_eq!(
        outcome.error(),
        Some(&KernelError::Ledger(LedgerError::BalanceOverflow {
            account_id: id,
            requested: dec!(1),
        }))
    );
    assert_eq!(bank.process(1).unwrap().status, ProcessStatus::Failed);
    assert_eq!(bank.check_balance(id), Ok(bank_kernel::Amount::MAX));
    assert!(outcome.message().starts_with("Deposit failed. Balance overflow in account ID=1"));
    assert!(!rx.try_recv().unwrap().success);
}

#[test]
fn test_execution_times_drive_clock() {
    let (bank, _rx) = coordinator(KernelConfig::new().with_seed(99));
    let id = bank.open_account(1, dec!(0)).unwrap();

    let mut expected_arrival = 0;
    for _ in 0..10 {
        let outcome = bank.deposit(id, dec!(1));
        assert_eq!(outcome.arrival_time, expected_arrival);
        assert!((1..=5).contains(&outcome.execution_time));
        expected_arrival += outcome.execution_time;
    }
    assert_eq!(bank.now(), expected_arrival);
}

#[test]
fn test_process_table_limit() {
    let config = KernelConfig::new().with_seed(3).with_max_processes(3);
    let bank = TransactionCoordinator::new(config, Arc::new(LogNotifier)).unwrap();
    let id = bank.open_account(1, dec!(100)).unwrap();

    for _ in 0..3 {
        assert!(bank.deposit(id, dec!(1)).is_success());
    }
    let rejected = bank.deposit(id, dec!(1));
    assert_eq!(rejected.process_id, None);
    assert_eq!(
        rejected.error(),
        Some(&KernelError::Process(ProcessError::TableFull { capacity: 3 }))
    );
    assert_eq!(bank.check_balance(id), Ok(dec!(103)));
}

#[test]
fn test_schedule_covers_submissions() {
    let (bank, _rx) = coordinator(KernelConfig::new().with_seed(11));
    let id = bank.open_account(1, dec!(100)).unwrap();
    bank.deposit(id, dec!(5));
    bank.withdraw(id, dec!(5));
    bank.deposit(id, dec!(5));

    let before = bank.now();
    let schedule = bank.schedule().unwrap();
    let total: i64 = bank.metrics().iter().map(|m| m.execution_time).sum();

    assert_eq!(schedule.rows.len(), 3);
    assert_eq!(schedule.stats.started_at, before);
    assert_eq!(bank.now(), before + total);
    for row in &schedule.rows {
        assert!(row.is_completed());
        assert_eq!(row.waiting_time, row.turnaround_time - row.execution_time);
    }
}

#[test]
fn test_concurrent_submitters_preserve_balance() {
    let (bank, _rx) = coordinator(KernelConfig::new().with_seed(5));
    let bank = Arc::new(bank);
    let id = bank.open_account(1, dec!(0)).unwrap();

    let handles: Vec<_> = (0..4)
        .map(|_| {
            let bank = Arc::clone(&bank);
            thread::spawn(move || {
                for _ in 0..10 {
                    bank.deposit(id, dec!(2.5));
                }
            })
        })
        .collect();
    for handle in handles {
        handle.join().unwrap();
    }

    assert_eq!(bank.check_balance(id), Ok(dec!(100)));
    let pids: Vec<_> = bank.processes().iter().map(|p| p.process_id).collect();
    assert_eq!(pids, (1..=40).collect::<Vec<u32>>());
}

#[test]
fn test_delivery_failure_is_not_fatal() {
    let (notifier, receiver) = notification_channel(1);
    let bank = TransactionCoordinator::new(KernelConfig::new().with_seed(2), Arc::new(notifier)).unwrap();
    let id = bank.open_account(1, dec!(0)).unwrap();

    assert!(bank.deposit(id, dec!(1)).delivery.is_ok());
    let second = bank.deposit(id, dec!(1));
    assert!(second.is_success());
    assert!(second.delivery.is_err());

    drop(receiver);
    let third = bank.deposit(id, dec!(1));
    assert!(third.is_success());
    assert!(third.delivery.is_err());
    assert_eq!(bank.check_balance(id), Ok(dec!(3)));
}
