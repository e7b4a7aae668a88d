/*!
 * Ledger Invariant Tests
 * Property tests over random operation sequences
 */

use bank_kernel::{Amount, Ledger, LedgerError};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Op {
    Deposit(i64),
    Withdraw(i64),
}

fn op() -> impl Strategy<Value = Op> {
    prop_oneof![
        (0_i64..10_000).prop_map(Op::Deposit),
        (0_i64..10_000).prop_map(Op::Withdraw),
    ]
}

proptest! {
    #[test]
    fn prop_balance_matches_committed_ops(
        initial in 0_i64..10_000,
        ops in prop::collection::vec(op(), 0..64),
    ) {
        let ledger = Ledger::new(1);
        let id = ledger.create_account(1, Amount::new(initial, 2), 0).unwrap();
        let mut expected = Amount::new(initial, 2);

        for op in ops {
            match op {
                Op::Deposit(cents) => {
                    let amount = Amount::new(cents, 2);
                    expected += amount;
                    prop_assert_eq!(ledger.deposit(id, amount), Ok(expected));
                }
                Op::Withdraw(cents) => {
                    let amount = Amount::new(cents, 2);
                    match ledger.withdraw(id, amount) {
                        Ok(balance) => {
                            expected -= amount;
                            prop_assert_eq!(balance, expected);
                        }
                        Err(LedgerError::InsufficientFunds { balance, .. }) => {
                            prop_assert!(amount > expected);
                            prop_assert_eq!(balance, expected);
                        }
                        Err(e) => prop_assert!(false, "unexpected error {:?}", e),
                    }
                }
            }
            prop_assert!(expected >= Amount::ZERO);
        }

        prop_assert_eq!(ledger.check_balance(id), Ok(expected));
    }

    #[test]
    fn prop_unallocated_ids_are_invalid(id in 2_u32..1_000) {
        let ledger = Ledger::new(10);
        ledger.create_account(1, Amount::ONE, 0).unwrap();
        prop_assert_eq!(ledger.check_balance(id), Err(LedgerError::InvalidAccount(id)));
    }
}
