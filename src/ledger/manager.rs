/*!
 * Account Ledger
 * Fixed-capacity account table guarded by a single exclusive lock
 */

use super::types::Account;
use crate::core::errors::{LedgerError, LedgerResult};
use crate::core::types::{AccountId, Amount, CustomerId};
use parking_lot::Mutex;
use std::sync::Arc;
use tracing::{info, warn};

/// Shared account ledger
///
/// Every operation, reads included, takes the same lock so a reported
/// balance always reflects the last committed mutation.
#[derive(Clone)]
pub struct Ledger {
    accounts: Arc<Mutex<Vec<Account>>>,
    capacity: usize,
}

impl Ledger {
    /// Create a ledger with `capacity` unallocated slots
    pub fn new(capacity: usize) -> Self {
        info!(capacity, "Ledger initialized");
        Self {
            accounts: Arc::new(Mutex::new(vec![Account::unallocated(); capacity])),
            capacity,
        }
    }

    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Allocate the account at `slot`; its id is `slot + 1`
    pub fn create_account(
        &self,
        customer_id: CustomerId,
        initial_balance: Amount,
        slot: usize,
    ) -> LedgerResult<AccountId> {
        let mut accounts = self.accounts.lock();

        if slot >= self.capacity {
            warn!(slot, capacity = self.capacity, "Account creation failed: max accounts reached");
            return Err(LedgerError::SlotOutOfRange {
                slot,
                capacity: self.capacity,
            });
        }
        if accounts[slot].is_allocated() {
            warn!(slot, "Account creation failed: slot already allocated");
            return Err(LedgerError::SlotOccupied(slot));
        }
        if initial_balance < Amount::ZERO {
            return Err(LedgerError::InvalidAmount(format!(
                "initial balance {:.2} is negative",
                initial_balance
            )));
        }

        let account_id = (slot + 1) as AccountId;
        accounts[slot] = Account {
            account_id,
            customer_id,
            balance: initial_balance,
        };

        info!(
            account_id,
            customer_id,
            balance = %initial_balance,
            "Account created"
        );
        Ok(account_id)
    }

    /// Credit `amount`; returns the new balance
    pub fn deposit(&self, account_id: AccountId, amount: Amount) -> LedgerResult<Amount> {
        check_amount(amount)?;
        let mut accounts = self.accounts.lock();

        let slot = match self.slot_of(&accounts, account_id) {
            Ok(slot) => slot,
            Err(e) => {
                warn!(account_id, "Deposit failed: invalid or non-existent account");
                return Err(e);
            }
        };

        let account = &mut accounts[slot];
        let Some(balance) = account.balance.checked_add(amount) else {
            warn!(
                account_id,
                amount = %amount,
                balance = %account.balance,
                "Deposit failed: balance overflow"
            );
            return Err(LedgerError::BalanceOverflow {
                account_id,
                requested: amount,
            });
        };
        account.balance = balance;

        info!(
            account_id,
            amount = %amount,
            balance = %account.balance,
            "Deposit committed"
        );
        Ok(account.balance)
    }

    /// Debit `amount`; returns the new balance
    ///
    /// Fails without touching the balance if it would go negative.
    pub fn withdraw(&self, account_id: AccountId, amount: Amount) -> LedgerResult<Amount> {
        check_amount(amount)?;
        let mut accounts = self.accounts.lock();

        let slot = match self.slot_of(&accounts, account_id) {
            Ok(slot) => slot,
            Err(e) => {
                warn!(account_id, "Withdraw failed: invalid or non-existent account");
                return Err(e);
            }
        };

        let account = &mut accounts[slot];
        if account.balance < amount {
            warn!(
                account_id,
                amount = %amount,
                balance = %account.balance,
                "Withdraw failed: insufficient funds"
            );
            return Err(LedgerError::InsufficientFunds {
                account_id,
                balance: account.balance,
                requested: amount,
            });
        }

        account.balance -= amount;

        info!(
            account_id,
            amount = %amount,
            balance = %account.balance,
            "Withdraw committed"
        );
        Ok(account.balance)
    }

    /// Current balance (read-only)
    pub fn check_balance(&self, account_id: AccountId) -> LedgerResult<Amount> {
        let accounts = self.accounts.lock();
        let slot = self.slot_of(&accounts, account_id)?;
        Ok(accounts[slot].balance)
    }

    /// Snapshot of one account
    pub fn get(&self, account_id: AccountId) -> Option<Account> {
        let accounts = self.accounts.lock();
        self.slot_of(&accounts, account_id)
            .ok()
            .map(|slot| accounts[slot])
    }

    /// Allocated accounts in slot order
    pub fn accounts(&self) -> Vec<Account> {
        self.accounts
            .lock()
            .iter()
            .filter(|a| a.is_allocated())
            .copied()
            .collect()
    }

    /// Every slot, unallocated ones included
    pub fn slots(&self) -> Vec<Account> {
        self.accounts.lock().clone()
    }

    /// First unallocated slot
    pub fn next_free_slot(&self) -> Option<usize> {
        self.accounts.lock().iter().position(|a| !a.is_allocated())
    }

    fn slot_of(&self, accounts: &[Account], account_id: AccountId) -> LedgerResult<usize> {
        let in_range = account_id > 0 && (account_id as usize) <= self.capacity;
        if !in_range {
            return Err(LedgerError::InvalidAccount(account_id));
        }

        let slot = account_id as usize - 1;
        if accounts[slot].is_allocated() {
            Ok(slot)
        } else {
            Err(LedgerError::InvalidAccount(account_id))
        }
    }
}

fn check_amount(amount: Amount) -> LedgerResult<()> {
    if amount < Amount::ZERO {
        return Err(LedgerError::InvalidAmount(format!(
            "{:.2} is negative",
            amount
        )));
    }
    Ok(())
}
