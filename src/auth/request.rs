use crate::identity::{Address, PublicKey, Signature, Signer};
use crate::ledger::Amount;

/// Domain tag prefixed to every signed transfer
pub const TRANSFER_DOMAIN: &[u8] = b"supply-ledger:transfer:v1";

/// Unsigned transfer intent: move `amount` from `from` to `to`
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TransferRequest {
    from: Address,
    to: Address,
    amount: Amount,
    nonce: u64,
}

impl TransferRequest {
    pub fn new(from: Address, to: Address, amount: Amount, nonce: u64) -> Self {
        Self {
            from,
            to,
            amount,
            nonce,
        }
    }

    pub fn from(&self) -> &Address {
        &self.from
    }

    pub fn to(&self) -> &Address {
        &self.to
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }

    /// Get the bytes that should be signed
    pub fn to_signing_bytes(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(TRANSFER_DOMAIN.len() + 20 + 20 + 32 + 8);

        bytes.extend_from_slice(TRANSFER_DOMAIN);
        bytes.extend_from_slice(self.from.as_bytes());
        bytes.extend_from_slice(self.to.as_bytes());

        let mut amount = [0u8; 32];
        self.amount.to_big_endian(&mut amount);
        bytes.extend_from_slice(&amount);

        bytes.extend_from_slice(&self.nonce.to_le_bytes());

        bytes
    }
}

/// A transfer request together with the key that signed it
#[derive(Clone, Debug)]
pub struct SignedTransfer {
    request: TransferRequest,
    public_key: PublicKey,
    signature: Signature,
}

impl SignedTransfer {
    /// Create a SignedTransfer from parts
    pub fn from_parts(request: TransferRequest, public_key: PublicKey, signature: Signature) -> Self {
        Self {
            request,
            public_key,
            signature,
        }
    }

    pub fn request(&self) -> &TransferRequest {
        &self.request
    }

    pub fn public_key(&self) -> &PublicKey {
        &self.public_key
    }

    pub fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Check the signature against the embedded public key
    pub fn verify_signature(&self) -> bool {
        Signer::verify(&self.public_key, &self.request.to_signing_bytes(), &self.signature)
    }
}
