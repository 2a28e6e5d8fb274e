//! Ledger derivation from journal entries.
//!
//! One pass groups postings by account, fixes each ledger's opening balance,
//! synthesizes a displayed opening-balance posting where needed, sorts by
//! date, and walks the running balance.

use std::collections::HashMap;

use chrono::{Datelike, Local, NaiveDate};
use rust_decimal::Decimal;
use tracing::debug;

use ledgerly_shared::types::{JournalEntryId, PostingId, is_material};

use super::balance::RunningBalance;
use super::error::LedgerError;
use super::types::{Ledger, LedgerKey, LedgerPosting, OpeningBalances};
use crate::accounts::AccountCategory;
use crate::journal::date::normalize_date;
use crate::journal::types::JournalEntry;

const OPENING_BALANCE_DESCRIPTION: &str = "Opening Balance";

/// Derives ledgers from journal entries.
///
/// ```
/// use ledgerly_core::ledger::LedgerBuilder;
///
/// let ledgers = LedgerBuilder::new().fiscal_year(2024).build(&[]).unwrap();
/// assert!(ledgers.is_empty());
/// ```
#[derive(Debug, Clone)]
pub struct LedgerBuilder {
    fiscal_year: i32,
    opening_balances: OpeningBalances,
}

/// Ledger under construction.
struct Draft {
    key: LedgerKey,
    category: AccountCategory,
    posting_opening: Option<Decimal>,
    marked_opening: bool,
    postings: Vec<LedgerPosting>,
}

impl Draft {
    fn new(key: LedgerKey, category: AccountCategory) -> Self {
        Self {
            key,
            category,
            posting_opening: None,
            marked_opening: false,
            postings: Vec::new(),
        }
    }
}

impl LedgerBuilder {
    /// Creates a builder for the current calendar year with no account-level
    /// opening balances.
    #[must_use]
    pub fn new() -> Self {
        Self {
            fiscal_year: Local::now().year(),
            opening_balances: OpeningBalances::default(),
        }
    }

    /// Sets the year whose January 1 dates synthetic opening postings.
    #[must_use]
    pub fn fiscal_year(mut self, year: i32) -> Self {
        self.fiscal_year = year;
        self
    }

    /// Sets account-level opening balances.
    ///
    /// An account's declared opening is used only when none of its postings
    /// carries an opening balance at all. Declared accounts get a ledger
    /// even if no posting touches them.
    #[must_use]
    pub fn opening_balances(mut self, opening_balances: OpeningBalances) -> Self {
        self.opening_balances = opening_balances;
        self
    }

    /// Derives one ledger per account.
    ///
    /// Ledgers come out in first-seen order, followed by declared accounts
    /// with no postings in key order.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` on an unparseable entry date, an empty account
    /// name, or an account type with no category.
    pub fn build(&self, entries: &[JournalEntry]) -> Result<Vec<Ledger>, LedgerError> {
        let mut drafts: Vec<Draft> = Vec::new();
        let mut index: HashMap<LedgerKey, usize> = HashMap::new();

        for entry in entries {
            let date = normalize_date(&entry.date).ok_or_else(|| LedgerError::InvalidDate {
                entry_id: entry.id.to_string(),
                value: entry.date.clone(),
            })?;
            let describes_opening = entry.describes_opening_balance();

            for posting in &entry.transactions {
                let key = LedgerKey::new(&posting.account_name, &posting.account_type);
                if key.account_name.is_empty() {
                    return Err(LedgerError::EmptyAccountName {
                        entry_id: entry.id.to_string(),
                        posting_id: posting.id.to_string(),
                    });
                }

                let slot = match index.get(&key) {
                    Some(slot) => *slot,
                    None => {
                        let category = AccountCategory::of(&posting.account_type)?;
                        drafts.push(Draft::new(key.clone(), category));
                        index.insert(key, drafts.len() - 1);
                        drafts.len() - 1
                    }
                };
                let draft = &mut drafts[slot];

                // First posting that carries a value fixes the opening, zero included.
                if draft.posting_opening.is_none() {
                    draft.posting_opening = posting.opening_balance;
                }
                let opening = posting.opening_balance_or_zero();
                draft.marked_opening |= describes_opening || is_material(opening);

                draft.postings.push(LedgerPosting {
                    id: posting.id.clone(),
                    entry_id: entry.id.clone(),
                    date,
                    description: entry.description.clone(),
                    debit: posting.debit,
                    credit: posting.credit,
                    opening_balance: opening,
                    cash_flow_type: posting.cash_flow_type.clone(),
                    balance: Decimal::ZERO,
                    synthetic_opening: false,
                });
            }
        }

        for (key, _) in self.opening_balances.iter() {
            if !index.contains_key(key) {
                let category = AccountCategory::of(&key.account_type)?;
                index.insert(key.clone(), drafts.len());
                drafts.push(Draft::new(key.clone(), category));
            }
        }

        let ledgers: Vec<Ledger> = drafts.into_iter().map(|d| self.finish(d)).collect();

        debug!(
            entries = entries.len(),
            ledgers = ledgers.len(),
            fiscal_year = self.fiscal_year,
            "Derived ledgers"
        );

        Ok(ledgers)
    }

    fn finish(&self, draft: Draft) -> Ledger {
        let Draft {
            key,
            category,
            posting_opening,
            marked_opening,
            mut postings,
        } = draft;

        let opening_balance = posting_opening
            .or_else(|| self.opening_balances.get(&key))
            .unwrap_or(Decimal::ZERO);

        if !marked_opening && is_material(opening_balance) {
            postings.insert(0, self.synthetic_opening(&key, category, opening_balance));
            debug!(
                account = %key.account_name,
                opening_balance = %opening_balance,
                fiscal_year = self.fiscal_year,
                "Synthesized opening balance posting"
            );
        }

        postings.sort_by_key(|p| p.date);

        let mut walk = RunningBalance::starting_at(category.normal_side(), opening_balance);
        for posting in &mut postings {
            posting.balance = if posting.synthetic_opening {
                walk.carry()
            } else {
                walk.apply(posting.debit, posting.credit)
            };
        }

        Ledger {
            account_name: key.account_name,
            account_type: key.account_type,
            category,
            opening_balance,
            balance: walk.current(),
            transactions: postings,
        }
    }

    fn synthetic_opening(
        &self,
        key: &LedgerKey,
        category: AccountCategory,
        opening_balance: Decimal,
    ) -> LedgerPosting {
        let id = format!("ob-{}-{}", key.account_name, self.fiscal_year);
        let (debit, credit) = category.split(opening_balance);
        LedgerPosting {
            id: PostingId::new(id.clone()),
            entry_id: JournalEntryId::new(id),
            date: fiscal_year_start(self.fiscal_year),
            description: OPENING_BALANCE_DESCRIPTION.to_string(),
            debit,
            credit,
            opening_balance,
            cash_flow_type: None,
            balance: Decimal::ZERO,
            synthetic_opening: true,
        }
    }
}

impl Default for LedgerBuilder {
    fn default() -> Self {
        Self::new()
    }
}

/// Derives ledgers with default options.
///
/// # Errors
///
/// See [`LedgerBuilder::build`].
pub fn build_ledgers(entries: &[JournalEntry]) -> Result<Vec<Ledger>, LedgerError> {
    LedgerBuilder::new().build(entries)
}

fn fiscal_year_start(year: i32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(NaiveDate::MIN)
}
