use supply_ledger::auth::{AuthError, GatewayError, LedgerGateway, SignatureAuthenticator, TransferBuilder};
use supply_ledger::identity::Keypair;
use supply_ledger::ledger::{Amount, Ledger, LedgerError, SharedLedger};

fn gateway(owner: &Keypair, supply: u64) -> LedgerGateway<SignatureAuthenticator> {
    let ledger = Ledger::new(Amount::from(supply), owner.address());
    LedgerGateway::new(SharedLedger::new(ledger), SignatureAuthenticator::new())
}

#[test]
fn test_signed_transfer_applied() {
    let owner = Keypair::from_seed(b"owner");
    let receiver = Keypair::from_seed(b"receiver");
    let gateway = gateway(&owner, 10_000);

    let transfer = TransferBuilder::new()
        .sender(&owner)
        .recipient(receiver.address())
        .amount(1000u64)
        .build()
        .unwrap();

    let receipt = gateway.submit(&transfer).unwrap();

    assert_eq!(receipt.from_balance, Amount::from(9000u64));
    assert_eq!(gateway.ledger().balance_of(&receiver.address()), Amount::from(1000u64));
}

#[test]
fn test_receivers_send_back_with_their_own_keys() {
    let owner = Keypair::from_seed(b"owner");
    let senders: Vec<Keypair> = ["sender1", "sender2", "sender3"]
        .iter()
        .map(|name| Keypair::from_seed(name.as_bytes()))
        .collect();
    let gateway = gateway(&owner, 9000);

    for (nonce, sender) in senders.iter().enumerate() {
        let out = TransferBuilder::new()
            .sender(&owner)
            .recipient(sender.address())
            .amount(3000u64)
            .nonce(nonce as u64)
            .build()
            .unwrap();
        gateway.submit(&out).unwrap();
    }
    assert_eq!(gateway.ledger().balance_of(&owner.address()), Amount::zero());

    for sender in &senders {
        let back = TransferBuilder::new()
            .sender(sender)
            .recipient(owner.address())
            .amount(3000u64)
            .build()
            .unwrap();
        gateway.submit(&back).unwrap();
    }

    assert_eq!(gateway.ledger().balance_of(&owner.address()), Amount::from(9000u64));
    for sender in &senders {
        assert_eq!(gateway.ledger().balance_of(&sender.address()), Amount::zero());
    }
}

#[test]
fn test_rejected_by_ledger_still_consumes_nonce() {
    let owner = Keypair::from_seed(b"owner");
    let gateway = gateway(&owner, 100);

    let overdraft = TransferBuilder::new()
        .sender(&owner)
        .recipient(Keypair::generate().address())
        .amount(101u64)
        .build()
        .unwrap();

    let err = gateway.submit(&overdraft).unwrap_err();
    assert!(matches!(
        err,
        GatewayError::Ledger(LedgerError::InsufficientBalance { .. })
    ));
    assert_eq!(gateway.with_authenticator(|auth| auth.next_nonce(&owner.address())), 1);
    assert_eq!(gateway.ledger().balance_of(&owner.address()), Amount::from(100u64));
}

#[test]
fn test_auth_failure_never_reaches_ledger() {
    let owner = Keypair::from_seed(b"owner");
    let gateway = gateway(&owner, 100);

    let wrong_nonce = TransferBuilder::new()
        .sender(&owner)
        .recipient(Keypair::generate().address())
        .amount(50u64)
        .nonce(9)
        .build()
        .unwrap();

    assert!(matches!(
        gateway.submit(&wrong_nonce),
        Err(GatewayError::Auth(AuthError::InvalidNonce { .. }))
    ));
    assert_eq!(gateway.ledger().balance_of(&owner.address()), Amount::from(100u64));
}
