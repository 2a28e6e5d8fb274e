//! Property-based tests for journal entry validation.

use proptest::prelude::*;
use rust_decimal::Decimal;

use ledgerly_shared::types::JournalEntryId;

use super::types::{JournalEntry, Posting};
use super::validation::{JournalValidationError, validate};

/// Amounts from 0.01 to 1,000,000.00.
fn positive_amount() -> impl Strategy<Value = Decimal> {
    (1i64..100_000_000i64).prop_map(|cents| Decimal::new(cents, 2))
}

/// Splits of a total into 1-4 debit legs.
fn legs(total_cents: i64) -> impl Strategy<Value = Vec<Decimal>> {
    (1usize..=4).prop_flat_map(move |n| {
        prop::collection::vec(0i64..=total_cents, n - 1).prop_map(move |mut cuts| {
            cuts.push(0);
            cuts.push(total_cents);
            cuts.sort_unstable();
            cuts.windows(2)
                .map(|w| Decimal::new(w[1] - w[0], 2))
                .collect()
        })
    })
}

fn entry_with(transactions: Vec<Posting>) -> JournalEntry {
    JournalEntry {
        id: JournalEntryId::new("je-prop"),
        date: "2024-06-30".to_string(),
        description: "Generated".to_string(),
        created_at: "2024-06-30T12:00:00Z".to_string(),
        transactions,
    }
}

fn balanced_entry(debits: &[Decimal], credit: Decimal) -> JournalEntry {
    let mut postings: Vec<Posting> = debits
        .iter()
        .enumerate()
        .map(|(i, amount)| Posting::debit(format!("d{i}"), format!("Expense {i}"), "Expense", *amount))
        .collect();
    postings.push(Posting::credit("c0", "Cash", "Current Asset", credit));
    entry_with(postings)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// Any entry whose debit legs sum to its credit is accepted.
    #[test]
    fn prop_balanced_entries_accepted(
        (total, debits) in (1i64..10_000_000i64).prop_flat_map(|cents| (Just(cents), legs(cents))),
    ) {
        prop_assume!(debits.iter().any(|d| !d.is_zero()));
        let entry = balanced_entry(&debits, Decimal::new(total, 2));
        let report = validate(&entry);
        prop_assert!(report.valid, "errors: {:?}", report.errors);
    }

    /// A difference of a cent or more is always reported as unbalanced.
    #[test]
    fn prop_unbalanced_entries_rejected(
        amount in positive_amount(),
        skew_cents in 1i64..100_000i64,
        skew_debit in any::<bool>(),
    ) {
        let skew = Decimal::new(skew_cents, 2);
        let (debit, credit) = if skew_debit { (amount + skew, amount) } else { (amount, amount + skew) };
        let entry = balanced_entry(&[debit], credit);

        let report = validate(&entry);
        prop_assert!(!report.valid);
        prop_assert_eq!(
            report.errors,
            vec![JournalValidationError::Unbalanced { debit, credit }]
        );
    }

    /// A negative amount on any leg is flagged with that leg's position.
    #[test]
    fn prop_negative_amount_flagged(
        amount in positive_amount(),
        position in 0usize..3,
    ) {
        let mut entry = balanced_entry(&[amount, amount], amount + amount);
        entry.transactions[position].debit = -amount;
        entry.transactions[position].credit = Decimal::ZERO;

        let report = validate(&entry);
        prop_assert!(
            report.errors.contains(&JournalValidationError::NegativeAmount(position + 1)),
            "errors: {:?}",
            report.errors
        );
    }

    /// Entries that only record opening balances are accepted whatever the
    /// openings sum to.
    #[test]
    fn prop_opening_balance_only_accepted(
        openings in prop::collection::vec(positive_amount(), 1..5),
    ) {
        let postings = openings
            .iter()
            .enumerate()
            .map(|(i, ob)| {
                Posting::debit(format!("p{i}"), format!("Account {i}"), "Current Asset", Decimal::ZERO)
                    .with_opening_balance(*ob)
            })
            .collect();
        prop_assert!(validate(&entry_with(postings)).valid);
    }

    /// Validation is a pure function of the entry.
    #[test]
    fn prop_validation_deterministic(
        debit in positive_amount(),
        credit in positive_amount(),
    ) {
        let entry = balanced_entry(&[debit], credit);
        prop_assert_eq!(validate(&entry), validate(&entry));
    }
}
