// Identity module - account identifiers and the keys that control them

mod address;
mod keypair;
mod signer;

pub use address::{Address, AddressError, ADDRESS_LEN};
pub use keypair::{Keypair, KeypairError, PublicKey, SecretKey};
pub use signer::{Signature, SignatureError, Signer};
