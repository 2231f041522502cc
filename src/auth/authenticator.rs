// Authenticator - establishes which account a transfer may debit

use crate::auth::SignedTransfer;
use crate::identity::Address;
use std::collections::HashMap;
use thiserror::Error;
use tracing::warn;

/// Errors that can occur while authenticating a transfer
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AuthError {
    #[error("Sender mismatch: public key controls {derived}, request debits {claimed}")]
    SenderMismatch { claimed: Address, derived: Address },

    #[error("Invalid signature on transfer request")]
    InvalidSignature,

    #[error("Invalid nonce for {account}: expected {expected}, got {got}")]
    InvalidNonce { account: Address, expected: u64, got: u64 },

    #[error("Nonce space exhausted for {account}")]
    NonceExhausted { account: Address },
}

/// Decides which account identity a signed transfer is allowed to act as.
///
/// The ledger trusts whatever address comes out of this unconditionally.
pub trait Authenticator {
    fn authenticate(&mut self, transfer: &SignedTransfer) -> Result<Address, AuthError>;
}

/// Ed25519 authenticator with per-account sequential nonces.
///
/// A request is accepted only if the key derives the `from` address, the
/// signature is valid, and the nonce is the next one for that account.
/// Accepted nonces are consumed whether or not the ledger then applies the
/// transfer.
#[derive(Debug, Default)]
pub struct SignatureAuthenticator {
    next_nonces: HashMap<Address, u64>,
}

impl SignatureAuthenticator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nonce the next request from `account` must carry
    pub fn next_nonce(&self, account: &Address) -> u64 {
        self.next_nonces.get(account).copied().unwrap_or(0)
    }
}

impl Authenticator for SignatureAuthenticator {
    fn authenticate(&mut self, transfer: &SignedTransfer) -> Result<Address, AuthError> {
        let request = transfer.request();
        let claimed = *request.from();

        let derived = transfer.public_key().address();
        if derived != claimed {
            warn!(%claimed, %derived, "authentication failed: sender mismatch");
            return Err(AuthError::SenderMismatch { claimed, derived });
        }

        if !transfer.verify_signature() {
            warn!(account = %claimed, "authentication failed: bad signature");
            return Err(AuthError::InvalidSignature);
        }

        let expected = self.next_nonce(&claimed);
        if request.nonce() != expected {
            warn!(account = %claimed, expected, got = request.nonce(), "authentication failed: nonce");
            return Err(AuthError::InvalidNonce {
                account: claimed,
                expected,
                got: request.nonce(),
            });
        }

        // The last nonce can never be accepted: there would be no successor.
        let next = match expected.checked_add(1) {
            Some(next) => next,
            None => {
                warn!(account = %claimed, "authentication failed: nonce space exhausted");
                return Err(AuthError::NonceExhausted { account: claimed });
            }
        };

        self.next_nonces.insert(claimed, next);
        Ok(claimed)
    }
}
