//! Year-end close.
//!
//! Closing a year carries every ledger's closing balance forward as next
//! year's opening balance. The next year's ledgers start with no postings;
//! the carried balances reach them through
//! [`LedgerBuilder::opening_balances`](super::LedgerBuilder::opening_balances).

use super::types::{Ledger, OpeningBalances};

/// Carries each ledger's closing balance forward as an opening balance.
#[must_use]
pub fn carry_forward(ledgers: &[Ledger]) -> OpeningBalances {
    let mut openings = OpeningBalances::new();
    for ledger in ledgers {
        openings.insert(&ledger.account_name, &ledger.account_type, ledger.balance);
    }
    openings
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::journal::types::{JournalEntry, Posting};
    use crate::ledger::{LedgerBuilder, LedgerKey};
    use ledgerly_shared::types::JournalEntryId;
    use rust_decimal_macros::dec;

    #[test]
    fn test_next_year_opens_at_closing_balances() {
        let entries = vec![JournalEntry {
            id: JournalEntryId::new("A"),
            date: "2024-06-01".to_string(),
            description: "Sale".to_string(),
            created_at: "2024-06-01T00:00:00Z".to_string(),
            transactions: vec![
                Posting::debit("a1", "Cash", "Current Asset", dec!(500)),
                Posting::credit("a2", "Sales", "Revenue", dec!(500)),
            ],
        }];
        let closing = LedgerBuilder::new().fiscal_year(2024).build(&entries).unwrap();

        let openings = carry_forward(&closing);
        assert_eq!(openings.len(), 2);
        assert_eq!(
            openings.get(&LedgerKey::new("Cash", "Current Asset")),
            Some(dec!(500))
        );

        let next = LedgerBuilder::new()
            .fiscal_year(2025)
            .opening_balances(openings)
            .build(&[])
            .unwrap();
        assert_eq!(next.len(), 2);
        for ledger in &next {
            let before = closing
                .iter()
                .find(|l| l.key() == ledger.key())
                .unwrap();
            assert_eq!(ledger.opening_balance, before.balance);
            assert_eq!(ledger.balance, before.balance);
            assert_eq!(ledger.transactions.len(), 1);
            assert!(ledger.transactions[0].synthetic_opening);
            assert_eq!(
                ledger.transactions[0].id.as_str(),
                format!("ob-{}-2025", ledger.account_name)
            );
        }
    }

    #[test]
    fn test_empty_books_carry_nothing() {
        assert!(carry_forward(&[]).is_empty());
    }
}
