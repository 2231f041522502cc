// Auth module - the identity check that sits in front of the ledger
// The ledger itself never verifies who is calling.

mod authenticator;
mod builder;
mod gateway;
mod request;

pub use authenticator::{AuthError, Authenticator, SignatureAuthenticator};
pub use builder::{BuildError, TransferBuilder};
pub use gateway::{GatewayError, LedgerGateway};
pub use request::{SignedTransfer, TransferRequest, TRANSFER_DOMAIN};
