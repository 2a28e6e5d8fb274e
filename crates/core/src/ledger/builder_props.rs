//! Property-based tests for ledger derivation.
//!
//! - Balance identity: balance = opening + signed sum of movements
//! - Running balance chain consistency
//! - Idempotence of repeated derivation
//! - Accounting equation over balanced entries

use proptest::prelude::*;
use rust_decimal::Decimal;

use ledgerly_shared::types::approx_eq;

use super::builder::LedgerBuilder;
use super::types::OpeningBalances;
use crate::accounts::AccountCategory;
use crate::testing::{ACCOUNTS, balanced_entries, entries_with_openings};

fn builder() -> LedgerBuilder {
    LedgerBuilder::new().fiscal_year(2024)
}

/// Declared openings for a subset of the account pool.
fn declared_openings() -> impl Strategy<Value = OpeningBalances> {
    prop::collection::vec((0..ACCOUNTS.len(), -50_000i64..50_000i64), 0..5).prop_map(|items| {
        let mut openings = OpeningBalances::new();
        for (account, cents) in items {
            let (name, account_type) = ACCOUNTS[account];
            openings.insert(name, account_type, Decimal::new(cents, 2));
        }
        openings
    })
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// For every ledger, balance = opening + signed_sum(movements).
    #[test]
    fn prop_balance_identity(
        entries in entries_with_openings(30),
        openings in declared_openings(),
    ) {
        let ledgers = builder().opening_balances(openings).build(&entries).unwrap();
        for ledger in &ledgers {
            let expected = ledger.opening_balance + ledger.signed_sum(ledger.movements());
            prop_assert_eq!(ledger.balance, expected, "ledger {}", ledger.account_name);
        }
    }

    /// Each posting's running balance follows from the previous one.
    #[test]
    fn prop_running_balance_chain(entries in entries_with_openings(30)) {
        let ledgers = builder().build(&entries).unwrap();
        for ledger in &ledgers {
            let mut previous = ledger.opening_balance;
            for posting in &ledger.transactions {
                let change = if posting.synthetic_opening {
                    Decimal::ZERO
                } else {
                    ledger.category.signed_movement(posting.debit, posting.credit)
                };
                prop_assert_eq!(posting.balance, previous + change);
                previous = posting.balance;
            }
            prop_assert_eq!(ledger.balance, previous);
        }
    }

    /// Postings are sorted by date.
    #[test]
    fn prop_postings_sorted(entries in entries_with_openings(30), openings in declared_openings()) {
        let ledgers = builder().opening_balances(openings).build(&entries).unwrap();
        for ledger in &ledgers {
            prop_assert!(ledger.transactions.windows(2).all(|w| w[0].date <= w[1].date));
        }
    }

    /// Deriving twice yields identical ledgers with at most one synthetic
    /// opening each.
    #[test]
    fn prop_derivation_idempotent(
        entries in entries_with_openings(30),
        openings in declared_openings(),
    ) {
        let builder = builder().opening_balances(openings);
        let first = builder.build(&entries).unwrap();
        let second = builder.build(&entries).unwrap();
        prop_assert_eq!(&first, &second);

        for ledger in &first {
            let synthetic = ledger.transactions.iter().filter(|p| p.synthetic_opening).count();
            prop_assert!(synthetic <= 1);
        }
    }

    /// Assets = Liabilities + Capital + (Revenues - Expenses) for balanced
    /// entries without openings.
    #[test]
    fn prop_accounting_equation(entries in balanced_entries(40)) {
        let ledgers = builder().build(&entries).unwrap();
        let total = |category: AccountCategory| -> Decimal {
            ledgers
                .iter()
                .filter(|l| l.category == category)
                .map(|l| l.balance)
                .sum()
        };

        let assets = total(AccountCategory::Assets);
        let liabilities = total(AccountCategory::Liabilities);
        let capital = total(AccountCategory::Capital);
        let net_income = total(AccountCategory::Revenues) - total(AccountCategory::Expenses);

        prop_assert!(
            approx_eq(assets, liabilities + capital + net_income),
            "assets {} vs {}",
            assets,
            liabilities + capital + net_income
        );
    }
}
