// Gateway - authenticate first, then hand the trusted sender to the ledger

use crate::auth::{AuthError, Authenticator, SignedTransfer};
use crate::ledger::{LedgerError, SharedLedger, TransferReceipt};
use std::sync::{Mutex, PoisonError};
use thiserror::Error;
use tracing::debug;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error("Authentication failed: {0}")]
    Auth(#[from] AuthError),

    #[error("Ledger rejected transfer: {0}")]
    Ledger(#[from] LedgerError),
}

/// Front door for signed transfers against a [`SharedLedger`]
pub struct LedgerGateway<A: Authenticator> {
    ledger: SharedLedger,
    authenticator: Mutex<A>,
}

impl<A: Authenticator> LedgerGateway<A> {
    pub fn new(ledger: SharedLedger, authenticator: A) -> Self {
        Self {
            ledger,
            authenticator: Mutex::new(authenticator),
        }
    }

    /// The ledger behind this gateway
    pub fn ledger(&self) -> &SharedLedger {
        &self.ledger
    }

    /// Authenticate `transfer` and apply it
    pub fn submit(&self, transfer: &SignedTransfer) -> Result<TransferReceipt, GatewayError> {
        let sender = {
            let mut authenticator = self
                .authenticator
                .lock()
                .unwrap_or_else(PoisonError::into_inner);
            authenticator.authenticate(transfer)?
        };

        let request = transfer.request();
        debug!(%sender, to = %request.to(), nonce = request.nonce(), "authenticated transfer");

        let receipt = self.ledger.transfer(&sender, request.to(), request.amount())?;
        Ok(receipt)
    }

    /// Inspect the authenticator under its lock
    pub fn with_authenticator<R>(&self, f: impl FnOnce(&A) -> R) -> R {
        let authenticator = self
            .authenticator
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        f(&*authenticator)
    }
}
