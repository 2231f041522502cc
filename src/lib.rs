//! Fixed-supply fungible-value ledger.
//!
//! A [`Ledger`](ledger::Ledger) mints its whole supply to one owner at
//! construction and afterwards only moves value between accounts. The sum of
//! all balances always equals the total supply.
//!
//! Identity is kept outside the ledger: [`auth`] verifies signed transfer
//! requests and hands the authenticated sender to the ledger.

pub mod auth;
pub mod config;
pub mod identity;
pub mod ledger;

pub use auth::{Authenticator, LedgerGateway, SignatureAuthenticator, SignedTransfer, TransferBuilder};
pub use identity::{Address, Keypair};
pub use ledger::{Amount, Ledger, LedgerError, SharedLedger, TransferReceipt};
