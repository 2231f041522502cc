// Shared ledger handle - serializes every transfer behind one lock

use crate::identity::Address;
use crate::ledger::amount::{serde_decimal, Amount};
use crate::ledger::balances::{Ledger, LedgerError, TransferReceipt};
use serde::Serialize;
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

/// One row of a [`LedgerSnapshot`]
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Holding {
    pub address: Address,
    #[serde(with = "serde_decimal")]
    pub balance: Amount,
}

/// Point-in-time copy of the whole table, taken under a single read lock.
///
/// Only [`SharedLedger::snapshot`] builds one, so `holdings` is always
/// sorted by address and [`LedgerSnapshot::balance_of`] can binary search.
#[derive(Clone, Debug, Serialize)]
pub struct LedgerSnapshot {
    #[serde(with = "serde_decimal")]
    total_supply: Amount,
    owner: Address,
    holdings: Vec<Holding>,
}

impl LedgerSnapshot {
    pub fn total_supply(&self) -> Amount {
        self.total_supply
    }

    pub fn owner(&self) -> &Address {
        &self.owner
    }

    /// Explicit entries, sorted by address
    pub fn holdings(&self) -> &[Holding] {
        &self.holdings
    }

    /// Balance of an account in this snapshot (zero if absent)
    pub fn balance_of(&self, account: &Address) -> Amount {
        self.holdings
            .binary_search_by(|h| h.address.cmp(account))
            .map(|idx| self.holdings[idx].balance)
            .unwrap_or_else(|_| Amount::zero())
    }

    /// Sum of all balances in the snapshot, `None` if it exceeds 256 bits
    pub fn circulating(&self) -> Option<Amount> {
        self.holdings
            .iter()
            .try_fold(Amount::zero(), |acc, h| acc.checked_add(h.balance))
    }
}

/// Cloneable, thread-safe handle to a [`Ledger`].
///
/// Transfers hold the write lock for the whole check-and-commit, so readers
/// never see one side of a transfer without the other.
#[derive(Clone, Debug)]
pub struct SharedLedger {
    inner: Arc<RwLock<Ledger>>,
}

impl SharedLedger {
    pub fn new(ledger: Ledger) -> Self {
        Self {
            inner: Arc::new(RwLock::new(ledger)),
        }
    }

    // Poison is ignored: a transfer writes nothing until all its checks pass.
    fn read(&self) -> RwLockReadGuard<'_, Ledger> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Ledger> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn total_supply(&self) -> Amount {
        self.read().total_supply()
    }

    pub fn balance_of(&self, account: &Address) -> Amount {
        self.read().balance_of(account)
    }

    pub fn transfer(
        &self,
        from: &Address,
        to: &Address,
        amount: Amount,
    ) -> Result<TransferReceipt, LedgerError> {
        self.write().transfer(from, to, amount)
    }

    pub fn verify_conservation(&self) -> Result<(), LedgerError> {
        self.read().verify_conservation()
    }

    /// Copy the table under one read lock
    pub fn snapshot(&self) -> LedgerSnapshot {
        let ledger = self.read();
        let mut holdings: Vec<Holding> = ledger
            .holders()
            .map(|(address, balance)| Holding {
                address: *address,
                balance: *balance,
            })
            .collect();
        holdings.sort_by(|a, b| a.address.cmp(&b.address));

        LedgerSnapshot {
            total_supply: ledger.total_supply(),
            owner: *ledger.owner(),
            holdings,
        }
    }

    /// Run `f` against the ledger while holding the read lock
    pub fn with_ledger<R>(&self, f: impl FnOnce(&Ledger) -> R) -> R {
        let ledger = self.read();
        f(&*ledger)
    }
}

impl From<Ledger> for SharedLedger {
    fn from(ledger: Ledger) -> Self {
        Self::new(ledger)
    }
}
