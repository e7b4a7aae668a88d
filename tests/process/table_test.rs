/*!
 * Process Table Tests
 * Id assignment, capacity, and status transitions
 */

use bank_kernel::{Amount, ProcessError, ProcessStatus, ProcessTable, TransactionKind};
use pretty_assertions::assert_eq;
use rust_decimal_macros::dec;

#[test]
fn test_ids_are_sequential() {
    let mut table = ProcessTable::new(100);

    for expected in 1..=5 {
        let pid = table
            .add(1, dec!(10), TransactionKind::Deposit, 3)
            .unwrap();
        assert_eq!(pid, expected);
    }

    let pids: Vec<_> = table.list_all().iter().map(|p| p.process_id).collect();
    assert_eq!(pids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn test_capacity_is_enforced() {
    let mut table = ProcessTable::new(100);
    for _ in 0..100 {
        table.add(2, Amount::ONE, TransactionKind::Withdraw, 1).unwrap();
    }

    assert!(table.is_full());
    assert_eq!(
        table.add(2, Amount::ONE, TransactionKind::Withdraw, 1),
        Err(ProcessError::TableFull { capacity: 100 })
    );
    assert_eq!(table.len(), 100);
}

#[test]
fn test_new_records_are_pending() {
    let mut table = ProcessTable::new(4);
    let pid = table.add(3, dec!(12.5), TransactionKind::Deposit, 2).unwrap();

    let record = table.get(pid).unwrap();
    assert_eq!(record.status, ProcessStatus::Pending);
    assert_eq!(record.account_id, 3);
    assert_eq!(record.amount, dec!(12.5));
    assert_eq!(record.execution_time, 2);
}

#[test]
fn test_status_updates() {
    let mut table = ProcessTable::new(4);
    let a = table.add(1, dec!(1), TransactionKind::Deposit, 1).unwrap();
    let b = table.add(1, dec!(1), TransactionKind::Withdraw, 1).unwrap();

    assert!(table.update_status(a, ProcessStatus::Running));
    assert!(table.update_status(a, ProcessStatus::Completed));
    assert!(table.update_status(b, ProcessStatus::Failed));
    assert!(!table.update_status(99, ProcessStatus::Completed));

    assert_eq!(table.count_by_status(ProcessStatus::Completed), 1);
    assert_eq!(table.count_by_status(ProcessStatus::Failed), 1);
    assert!(table.get(b).unwrap().status.is_terminal());
}
