//! Ledger domain types.

use std::collections::BTreeMap;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerly_shared::types::{JournalEntryId, PostingId};

use crate::accounts::AccountCategory;

/// Identity of a ledger: trimmed account name plus the account type as given.
///
/// Names are case-sensitive, so "Cash" and "cash" are distinct ledgers.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerKey {
    /// Trimmed account name.
    pub account_name: String,
    /// Account type.
    pub account_type: String,
}

impl LedgerKey {
    /// Creates a key, trimming the name only.
    #[must_use]
    pub fn new(account_name: &str, account_type: &str) -> Self {
        Self {
            account_name: account_name.trim().to_string(),
            account_type: account_type.to_string(),
        }
    }
}

/// A posting as it appears in a ledger's history.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerPosting {
    /// Posting id (for a synthetic opening, derived from account and year).
    pub id: PostingId,
    /// Owning journal entry.
    pub entry_id: JournalEntryId,
    /// Date-only posting date.
    pub date: NaiveDate,
    /// Description of the owning entry.
    pub description: String,
    /// Debit amount.
    pub debit: Decimal,
    /// Credit amount.
    pub credit: Decimal,
    /// Opening balance carried on the source posting.
    pub opening_balance: Decimal,
    /// Cash-flow activity tag.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_flow_type: Option<String>,
    /// Running balance after this posting.
    pub balance: Decimal,
    /// True for the synthesized opening-balance posting.
    ///
    /// It displays the opening in the history but carries no movement; the
    /// walk already starts from the opening balance.
    #[serde(default)]
    pub synthetic_opening: bool,
}

impl LedgerPosting {
    /// Returns true if the posting moves the balance.
    #[must_use]
    pub const fn is_movement(&self) -> bool {
        !self.synthetic_opening
    }
}

/// Complete history and running balance of one account.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Ledger {
    /// Trimmed account name.
    pub account_name: String,
    /// Account type.
    pub account_type: String,
    /// Category derived from the account type.
    pub category: AccountCategory,
    /// Balance before any captured posting.
    pub opening_balance: Decimal,
    /// Closing balance after every posting.
    pub balance: Decimal,
    /// Postings sorted by date (stable).
    pub transactions: Vec<LedgerPosting>,
}

impl Ledger {
    /// The ledger's identity.
    #[must_use]
    pub fn key(&self) -> LedgerKey {
        LedgerKey::new(&self.account_name, &self.account_type)
    }

    /// Postings that move the balance (everything except a synthetic opening).
    pub fn movements(&self) -> impl Iterator<Item = &LedgerPosting> {
        self.transactions.iter().filter(|p| p.is_movement())
    }

    /// Normal-side signed sum of the given postings.
    #[must_use]
    pub fn signed_sum<'a, I>(&self, postings: I) -> Decimal
    where
        I: IntoIterator<Item = &'a LedgerPosting>,
    {
        postings
            .into_iter()
            .map(|p| self.category.signed_movement(p.debit, p.credit))
            .sum()
    }

    /// Net movement over the whole history.
    #[must_use]
    pub fn net_movement(&self) -> Decimal {
        self.balance - self.opening_balance
    }

    /// Balance immediately before `date`: opening plus every movement dated
    /// strictly earlier.
    #[must_use]
    pub fn balance_before(&self, date: NaiveDate) -> Decimal {
        self.opening_balance + self.signed_sum(self.movements().filter(|p| p.date < date))
    }

    /// Balance at the end of `date`: opening plus every movement dated on or
    /// before it.
    #[must_use]
    pub fn balance_through(&self, date: NaiveDate) -> Decimal {
        self.opening_balance + self.signed_sum(self.movements().filter(|p| p.date <= date))
    }
}

/// One account's opening balance outside of any posting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AccountOpening {
    /// Account name.
    pub account_name: String,
    /// Account type.
    pub account_type: String,
    /// Opening balance (normal-side sign).
    pub opening_balance: Decimal,
}

/// Account-level opening balances, keyed by ledger identity.
///
/// Produced by the year-end carry-forward and fed back into the builder.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "Vec<AccountOpening>", into = "Vec<AccountOpening>")]
pub struct OpeningBalances {
    balances: BTreeMap<LedgerKey, Decimal>,
}

impl OpeningBalances {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets an account's opening balance, replacing any previous value.
    pub fn insert(&mut self, account_name: &str, account_type: &str, opening_balance: Decimal) {
        self.balances
            .insert(LedgerKey::new(account_name, account_type), opening_balance);
    }

    /// Builder-style [`insert`](Self::insert).
    #[must_use]
    pub fn with(mut self, account_name: &str, account_type: &str, opening_balance: Decimal) -> Self {
        self.insert(account_name, account_type, opening_balance);
        self
    }

    /// Looks up an account's opening balance.
    #[must_use]
    pub fn get(&self, key: &LedgerKey) -> Option<Decimal> {
        self.balances.get(key).copied()
    }

    /// Iterates over all declared accounts in key order.
    pub fn iter(&self) -> impl Iterator<Item = (&LedgerKey, Decimal)> {
        self.balances.iter().map(|(k, v)| (k, *v))
    }

    /// Number of declared accounts.
    #[must_use]
    pub fn len(&self) -> usize {
        self.balances.len()
    }

    /// Returns true if no account is declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.balances.is_empty()
    }
}

impl From<Vec<AccountOpening>> for OpeningBalances {
    fn from(openings: Vec<AccountOpening>) -> Self {
        let mut balances = Self::new();
        for opening in openings {
            balances.insert(
                &opening.account_name,
                &opening.account_type,
                opening.opening_balance,
            );
        }
        balances
    }
}

impl From<OpeningBalances> for Vec<AccountOpening> {
    fn from(balances: OpeningBalances) -> Self {
        balances
            .balances
            .into_iter()
            .map(|(key, opening_balance)| AccountOpening {
                account_name: key.account_name,
                account_type: key.account_type,
                opening_balance,
            })
            .collect()
    }
}
