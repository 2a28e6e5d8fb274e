//! Proptest strategies shared by the property suites.

use chrono::{Days, NaiveDate};
use proptest::prelude::*;
use rust_decimal::Decimal;

use ledgerly_shared::types::JournalEntryId;

use crate::journal::types::{JournalEntry, Posting};

/// Account pool covering every category, cash-like and non-cash accounts,
/// and the liability prefix family.
pub(crate) const ACCOUNTS: &[(&str, &str)] = &[
    ("Cash", "Current Asset"),
    ("City Bank", "Current Asset"),
    ("bKash Wallet", "Current Asset"),
    ("Inventory", "Current Asset"),
    ("Equipment", "Fixed Asset"),
    ("Accounts Receivable", "Accounts Receivable"),
    ("Rent Expense", "Rent"),
    ("Salary", "Salary"),
    ("Sales", "Sales"),
    ("Service Revenue", "Service Revenue"),
    ("Owner Capital", "Capital"),
    ("Bank Loan", "Long-term Liability: Bank Loan"),
    ("Accounts Payable", "Short-term Liability: Accounts Payable"),
];

const TAGS: &[Option<&str>] = &[None, Some("operating"), Some("investing"), Some("financing")];

/// First day covered by generated entries.
pub(crate) fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()
}

/// A date within the generated year, by day offset.
pub(crate) fn day(offset: u64) -> NaiveDate {
    base_date() + Days::new(offset)
}

/// (debit account, credit account, cents, day offset, tag index)
type Leg = (usize, usize, i64, u64, usize);

fn leg() -> impl Strategy<Value = Leg> {
    (
        0..ACCOUNTS.len(),
        0..ACCOUNTS.len(),
        1i64..1_000_000i64,
        0u64..366,
        0..TAGS.len(),
    )
}

fn make_entry(index: usize, leg: Leg, opening_cents: Option<i64>) -> JournalEntry {
    let (debit_account, credit_account, cents, offset, tag) = leg;
    let amount = Decimal::new(cents, 2);
    let (debit_name, debit_type) = ACCOUNTS[debit_account];
    let (credit_name, credit_type) = ACCOUNTS[credit_account];

    let mut debit = Posting::debit(format!("je-{index}-d"), debit_name, debit_type, amount);
    let mut credit = Posting::credit(format!("je-{index}-c"), credit_name, credit_type, amount);
    if let Some(tag) = TAGS[tag] {
        debit = debit.with_cash_flow_type(tag);
        credit = credit.with_cash_flow_type(tag);
    }
    if let Some(cents) = opening_cents {
        debit = debit.with_opening_balance(Decimal::new(cents, 2));
    }

    JournalEntry {
        id: JournalEntryId::new(format!("je-{index}")),
        date: day(offset).format("%Y-%m-%d").to_string(),
        description: format!("Generated entry {index}"),
        created_at: format!("{}T08:00:00Z", day(offset)),
        transactions: vec![debit, credit],
    }
}

/// Balanced two-posting entries without opening balances.
pub(crate) fn balanced_entries(max: usize) -> impl Strategy<Value = Vec<JournalEntry>> {
    prop::collection::vec(leg(), 0..=max).prop_map(|legs| {
        legs.into_iter()
            .enumerate()
            .map(|(i, leg)| make_entry(i, leg, None))
            .collect()
    })
}

/// Balanced entries whose debit postings sometimes carry an opening balance
/// of either sign.
pub(crate) fn entries_with_openings(max: usize) -> impl Strategy<Value = Vec<JournalEntry>> {
    prop::collection::vec((leg(), prop::option::of(-100_000i64..100_000i64)), 0..=max).prop_map(
        |legs| {
            legs.into_iter()
                .enumerate()
                .map(|(i, (leg, opening))| make_entry(i, leg, opening))
                .collect()
        },
    )
}

/// An ordered pair of dates within the generated year.
pub(crate) fn date_range() -> impl Strategy<Value = (NaiveDate, NaiveDate)> {
    (0u64..366, 0u64..366).prop_map(|(a, b)| (day(a.min(b)), day(a.max(b))))
}
