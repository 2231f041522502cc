use serde::{Deserialize, Serialize};

/// Construction policy for a [`Ledger`](crate::ledger::Ledger).
///
/// The default accepts any supply, matching [`Ledger::new`](crate::ledger::Ledger::new).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LedgerConfig {
    /// Refuse to mint a zero total supply
    pub reject_zero_supply: bool,
}

impl LedgerConfig {
    /// Policy that rejects degenerate ledgers
    pub fn strict() -> Self {
        Self {
            reject_zero_supply: true,
        }
    }
}
