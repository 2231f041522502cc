// Ledger module - THE CORE
// Fixed-supply balance table, transfer state transition, shared access

mod amount;
mod balances;
mod config;
mod shared;

pub use amount::{parse_amount, serde_decimal, Amount, AmountParseError};
pub use balances::{Ledger, LedgerError, TransferReceipt};
pub use config::LedgerConfig;
pub use shared::{Holding, LedgerSnapshot, SharedLedger};
