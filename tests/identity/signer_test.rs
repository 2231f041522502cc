use supply_ledger::identity::{Keypair, Signature, Signer};

/// Test: Can verify a valid signature
#[test]
fn test_verify_valid_signature() {
    let keypair = Keypair::generate();
    let message = b"transfer 1000";

    let signature = Signer::sign(&keypair, message);

    assert_eq!(signature.to_bytes().len(), 64);
    assert!(Signer::verify(&keypair.public_key(), message, &signature));
}

/// Test: Tampered message fails verification
#[test]
fn test_tampered_message_fails() {
    let keypair = Keypair::generate();
    let signature = Signer::sign(&keypair, b"transfer 1000");

    assert!(!Signer::verify(&keypair.public_key(), b"transfer 9000", &signature));
}

/// Test: Corrupted signature fails verification
#[test]
fn test_corrupted_signature_fails() {
    let keypair = Keypair::generate();
    let message = b"transfer 1000";

    let mut bytes = Signer::sign(&keypair, message).to_bytes();
    bytes[0] ^= 0xFF;
    let corrupted = Signature::from_bytes(&bytes).expect("64 bytes always parse");

    assert!(!Signer::verify(&keypair.public_key(), message, &corrupted));
}

/// Test: Signature bytes must be exactly 64 long
#[test]
fn test_signature_length_checked() {
    assert!(Signature::from_bytes(&[0u8; 63]).is_err());
}
