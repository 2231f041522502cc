use crate::auth::{SignedTransfer, TransferRequest};
use crate::identity::{Address, Keypair, Signer};
use crate::ledger::Amount;
use thiserror::Error;

/// Errors that can occur when building a transfer
#[derive(Error, Debug, PartialEq, Eq)]
pub enum BuildError {
    #[error("Missing sender: sender keypair is required")]
    MissingSender,

    #[error("Missing recipient: recipient address is required")]
    MissingRecipient,

    #[error("Missing amount: transfer amount is required")]
    MissingAmount,
}

/// Builder for signed transfers.
///
/// Zero amounts and self-transfers are allowed; the ledger accepts both.
pub struct TransferBuilder<'a> {
    sender: Option<&'a Keypair>,
    recipient: Option<Address>,
    amount: Option<Amount>,
    nonce: u64,
}

impl<'a> TransferBuilder<'a> {
    pub fn new() -> Self {
        Self {
            sender: None,
            recipient: None,
            amount: None,
            nonce: 0,
        }
    }

    /// Set the sender (required)
    pub fn sender(mut self, keypair: &'a Keypair) -> Self {
        self.sender = Some(keypair);
        self
    }

    /// Set the recipient (required)
    pub fn recipient(mut self, address: Address) -> Self {
        self.recipient = Some(address);
        self
    }

    /// Set the amount (required)
    pub fn amount(mut self, amount: impl Into<Amount>) -> Self {
        self.amount = Some(amount.into());
        self
    }

    /// Set the nonce (defaults to 0)
    pub fn nonce(mut self, nonce: u64) -> Self {
        self.nonce = nonce;
        self
    }

    /// Build and sign the transfer
    pub fn build(self) -> Result<SignedTransfer, BuildError> {
        let sender = self.sender.ok_or(BuildError::MissingSender)?;
        let recipient = self.recipient.ok_or(BuildError::MissingRecipient)?;
        let amount = self.amount.ok_or(BuildError::MissingAmount)?;

        let public_key = sender.public_key();
        let request = TransferRequest::new(public_key.address(), recipient, amount, self.nonce);
        let signature = Signer::sign(sender, &request.to_signing_bytes());

        Ok(SignedTransfer::from_parts(request, public_key, signature))
    }
}

impl<'a> Default for TransferBuilder<'a> {
    fn default() -> Self {
        Self::new()
    }
}
