// Balance table - fixed supply minted once, moved only by transfer

use crate::identity::Address;
use crate::ledger::amount::Amount;
use crate::ledger::config::LedgerConfig;
use std::collections::HashMap;
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during ledger operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LedgerError {
    #[error("Insufficient balance: available {available}, required {required}")]
    InsufficientBalance { available: Amount, required: Amount },

    #[error("Balance would overflow for {account}")]
    BalanceOverflow { account: Address },

    #[error("Initial supply must be non-zero")]
    ZeroSupply,

    #[error("Conservation violated: balances sum to {sum}, total supply is {total_supply}")]
    ConservationViolated { sum: String, total_supply: Amount },
}

/// Outcome of a committed transfer
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferReceipt {
    pub from: Address,
    pub to: Address,
    pub amount: Amount,
    /// Sender balance after the transfer
    pub from_balance: Amount,
    /// Recipient balance after the transfer
    pub to_balance: Amount,
}

/// The ledger: sparse account -> balance table plus an immutable total supply.
///
/// Every account not in the table holds zero. The table is only ever
/// mutated by [`Ledger::transfer`], which keeps the sum of all balances
/// equal to [`Ledger::total_supply`].
#[derive(Clone, Debug)]
pub struct Ledger {
    total_supply: Amount,
    owner: Address,
    balances: HashMap<Address, Amount>,
}

impl Ledger {
    /// Mint `initial_supply` to `owner`. Never fails.
    pub fn new(initial_supply: Amount, owner: Address) -> Self {
        let mut balances = HashMap::new();
        balances.insert(owner, initial_supply);

        info!(%owner, supply = %initial_supply, "ledger created");

        Self {
            total_supply: initial_supply,
            owner,
            balances,
        }
    }

    /// Construct under a [`LedgerConfig`] policy
    pub fn with_config(
        config: &LedgerConfig,
        initial_supply: Amount,
        owner: Address,
    ) -> Result<Self, LedgerError> {
        if config.reject_zero_supply && initial_supply.is_zero() {
            return Err(LedgerError::ZeroSupply);
        }
        Ok(Self::new(initial_supply, owner))
    }

    /// The fixed total supply
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    /// The account credited at construction
    pub fn owner(&self) -> &Address {
        &self.owner
    }

    /// Balance of any account; zero if it was never credited
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.balances.get(account).copied().unwrap_or_else(Amount::zero)
    }

    /// Move `amount` from `from` to `to`.
    ///
    /// `from` is trusted as-is: callers authenticate it before getting here.
    /// Fails without touching any balance when the sender is short or the
    /// recipient would overflow.
    pub fn transfer(
        &mut self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<TransferReceipt, LedgerError> {
        let from_before = self.balance_of(from);

        let from_after = match from_before.checked_sub(amount) {
            Some(value) => value,
            None => {
                warn!(%from, %to, %amount, available = %from_before, "transfer rejected: insufficient balance");
                return Err(LedgerError::InsufficientBalance {
                    available: from_before,
                    required: amount,
                });
            }
        };

        // Debit and credit hit the same entry: net zero.
        if from == to {
            debug!(account = %from, %amount, "self transfer");
            return Ok(TransferReceipt {
                from: *from,
                to: *to,
                amount,
                from_balance: from_before,
                to_balance: from_before,
            });
        }

        let to_before = self.balance_of(to);
        let to_after = match to_before.checked_add(amount) {
            Some(value) => value,
            None => {
                warn!(%from, %to, %amount, "transfer rejected: recipient balance overflow");
                return Err(LedgerError::BalanceOverflow { account: *to });
            }
        };

        // Both sides computed; commit together.
        self.balances.insert(*from, from_after);
        self.balances.insert(*to, to_after);

        debug!(%from, %to, %amount, "transfer committed");

        Ok(TransferReceipt {
            from: *from,
            to: *to,
            amount,
            from_balance: from_after,
            to_balance: to_after,
        })
    }

    /// Accounts with an explicit entry, including drained ones
    pub fn holders(&self) -> impl Iterator<Item = (&Address, &Amount)> {
        self.balances.iter()
    }

    /// Number of explicit entries in the table
    pub fn account_count(&self) -> usize {
        self.balances.len()
    }

    /// Re-sum the table and compare against total supply
    pub fn verify_conservation(&self) -> Result<(), LedgerError> {
        let mut sum = Amount::zero();
        for balance in self.balances.values() {
            sum = match sum.checked_add(*balance) {
                Some(next) => next,
                None => {
                    return Err(LedgerError::ConservationViolated {
                        sum: "more than 2^256 - 1".to_string(),
                        total_supply: self.total_supply,
                    })
                }
            };
        }

        if sum != self.total_supply {
            return Err(LedgerError::ConservationViolated {
                sum: sum.to_string(),
                total_supply: self.total_supply,
            });
        }
        Ok(())
    }
}
