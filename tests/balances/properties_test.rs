// Property tests: conservation, sufficiency guard, transfer algebra

use proptest::prelude::*;
use supply_ledger::identity::Address;
use supply_ledger::ledger::{Amount, Ledger, LedgerError};

const ACCOUNTS: u8 = 5;

fn addr(index: u8) -> Address {
    Address::from_bytes([index; 20])
}

fn sum_balances(ledger: &Ledger) -> Amount {
    (0..ACCOUNTS).fold(Amount::zero(), |acc, i| acc + ledger.balance_of(&addr(i)))
}

proptest! {
    #[test]
    fn conservation_holds_over_random_transfers(
        supply in 0u64..1_000_000,
        ops in prop::collection::vec((0..ACCOUNTS, 0..ACCOUNTS, 0u64..400_000), 0..64),
    ) {
        let mut ledger = Ledger::new(Amount::from(supply), addr(0));

        for (from, to, amount) in ops {
            let _ = ledger.transfer(&addr(from), &addr(to), Amount::from(amount));
            prop_assert_eq!(sum_balances(&ledger), ledger.total_supply());
            prop_assert_eq!(ledger.total_supply(), Amount::from(supply));
        }
        prop_assert!(ledger.verify_conservation().is_ok());
    }

    #[test]
    fn transfers_move_exactly_the_amount_or_nothing(
        supply in 1u64..1_000_000,
        ops in prop::collection::vec((0..ACCOUNTS, 0..ACCOUNTS, 0u64..400_000), 1..64),
    ) {
        let mut ledger = Ledger::new(Amount::from(supply), addr(0));

        for (from, to, amount) in ops {
            let (from, to, amount) = (addr(from), addr(to), Amount::from(amount));
            let from_before = ledger.balance_of(&from);
            let to_before = ledger.balance_of(&to);

            match ledger.transfer(&from, &to, amount) {
                Ok(_) if from == to => {
                    prop_assert_eq!(ledger.balance_of(&from), from_before);
                }
                Ok(_) => {
                    prop_assert_eq!(ledger.balance_of(&from) + amount, from_before);
                    prop_assert_eq!(ledger.balance_of(&to) - amount, to_before);
                }
                Err(LedgerError::InsufficientBalance { available, required }) => {
                    prop_assert!(amount > from_before);
                    prop_assert_eq!(available, from_before);
                    prop_assert_eq!(required, amount);
                    prop_assert_eq!(ledger.balance_of(&from), from_before);
                    prop_assert_eq!(ledger.balance_of(&to), to_before);
                }
                Err(other) => prop_assert!(false, "unexpected error: {}", other),
            }
        }
    }

    #[test]
    fn construction_credits_only_the_owner(supply in any::<u64>(), other in 1..ACCOUNTS) {
        let ledger = Ledger::new(Amount::from(supply), addr(0));

        prop_assert_eq!(ledger.total_supply(), Amount::from(supply));
        prop_assert_eq!(ledger.balance_of(&addr(0)), Amount::from(supply));
        prop_assert_eq!(ledger.balance_of(&addr(other)), Amount::zero());
    }
}
