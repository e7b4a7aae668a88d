/*!
 * Ledger Types
 */

use crate::core::types::{AccountId, Amount, CustomerId};
use serde::{Deserialize, Serialize};

/// Account slot in the ledger
///
/// `account_id == 0` marks an unallocated slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub struct Account {
    pub account_id: AccountId,
    pub customer_id: CustomerId,
    pub balance: Amount,
}

impl Account {
    #[inline]
    #[must_use]
    pub const fn unallocated() -> Self {
        Self {
            account_id: 0,
            customer_id: 0,
            balance: Amount::ZERO,
        }
    }

    #[inline(always)]
    #[must_use]
    pub const fn is_allocated(&self) -> bool {
        self.account_id != 0
    }
}
