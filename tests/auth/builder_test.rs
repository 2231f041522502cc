use supply_ledger::auth::{BuildError, TransferBuilder};
use supply_ledger::identity::Keypair;
use supply_ledger::ledger::Amount;

#[test]
fn test_build_signed_transfer() {
    let alice = Keypair::generate();
    let bob = Keypair::generate();

    let signed = TransferBuilder::new()
        .sender(&alice)
        .recipient(bob.address())
        .amount(1000u64)
        .nonce(3)
        .build()
        .unwrap();

    let request = signed.request();
    assert_eq!(request.from(), &alice.address());
    assert_eq!(request.to(), &bob.address());
    assert_eq!(request.amount(), Amount::from(1000u64));
    assert_eq!(request.nonce(), 3);
    assert_eq!(signed.public_key(), &alice.public_key());
    assert!(signed.verify_signature());
}

#[test]
fn test_nonce_defaults_to_zero() {
    let alice = Keypair::generate();
    let signed = TransferBuilder::new()
        .sender(&alice)
        .recipient(alice.address())
        .amount(Amount::zero())
        .build()
        .unwrap();

    assert_eq!(signed.request().nonce(), 0);
}

#[test]
fn test_missing_fields_rejected() {
    let alice = Keypair::generate();

    let no_sender = TransferBuilder::new()
        .recipient(alice.address())
        .amount(1u64)
        .build();
    assert_eq!(no_sender.unwrap_err(), BuildError::MissingSender);

    let no_recipient = TransferBuilder::new().sender(&alice).amount(1u64).build();
    assert_eq!(no_recipient.unwrap_err(), BuildError::MissingRecipient);

    let no_amount = TransferBuilder::new()
        .sender(&alice)
        .recipient(alice.address())
        .build();
    assert_eq!(no_amount.unwrap_err(), BuildError::MissingAmount);
}
