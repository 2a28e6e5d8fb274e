//! Journal entry domain types.
//!
//! These mirror the payload exchanged with the persistence layer: camelCase
//! field names, string dates, and the posting's UI `type` field.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerly_shared::types::{JournalEntryId, PostingId, is_material};

/// Which of debit/credit is active on a posting in the entry form.
///
/// Advisory only; computations always read the `debit`/`credit` amounts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostingSide {
    /// Debit column is active.
    Debit,
    /// Credit column is active.
    Credit,
}

/// A single debit-or-credit line within a journal entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Posting {
    /// Identifier, unique within the entry.
    pub id: PostingId,
    /// Account name (free text; trimmed when keyed, case-sensitive).
    pub account_name: String,
    /// Account type from the fixed vocabulary.
    pub account_type: String,
    /// Debit amount (non-negative).
    #[serde(default)]
    pub debit: Decimal,
    /// Credit amount (non-negative).
    #[serde(default)]
    pub credit: Decimal,
    /// Account opening balance carried on the posting.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub opening_balance: Option<Decimal>,
    /// Active side in the entry form.
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    pub side: Option<PostingSide>,
    /// Cash-flow activity tag (`operating`, `investing`, `financing`).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cash_flow_type: Option<String>,
}

impl Posting {
    /// Creates a debit posting.
    #[must_use]
    pub fn debit(
        id: impl Into<PostingId>,
        account_name: impl Into<String>,
        account_type: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            account_name: account_name.into(),
            account_type: account_type.into(),
            debit: amount,
            credit: Decimal::ZERO,
            opening_balance: None,
            side: Some(PostingSide::Debit),
            cash_flow_type: None,
        }
    }

    /// Creates a credit posting.
    #[must_use]
    pub fn credit(
        id: impl Into<PostingId>,
        account_name: impl Into<String>,
        account_type: impl Into<String>,
        amount: Decimal,
    ) -> Self {
        Self {
            id: id.into(),
            account_name: account_name.into(),
            account_type: account_type.into(),
            debit: Decimal::ZERO,
            credit: amount,
            opening_balance: None,
            side: Some(PostingSide::Credit),
            cash_flow_type: None,
        }
    }

    /// Sets the account opening balance carried on this posting.
    #[must_use]
    pub fn with_opening_balance(mut self, opening_balance: Decimal) -> Self {
        self.opening_balance = Some(opening_balance);
        self
    }

    /// Sets the cash-flow activity tag.
    #[must_use]
    pub fn with_cash_flow_type(mut self, tag: impl Into<String>) -> Self {
        self.cash_flow_type = Some(tag.into());
        self
    }

    /// Returns the opening balance, treating a missing value as zero.
    #[must_use]
    pub fn opening_balance_or_zero(&self) -> Decimal {
        self.opening_balance.unwrap_or(Decimal::ZERO)
    }

    /// Returns true if the posting carries a non-zero opening balance.
    #[must_use]
    pub fn has_opening_balance(&self) -> bool {
        is_material(self.opening_balance_or_zero())
    }

    /// Returns true if both debit and credit are zero.
    #[must_use]
    pub fn is_zero_amount(&self) -> bool {
        self.debit.is_zero() && self.credit.is_zero()
    }
}

/// A dated, described set of postings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// Caller-generated unique identifier.
    pub id: JournalEntryId,
    /// Calendar date, `YYYY-MM-DD` (timestamps are tolerated and truncated).
    pub date: String,
    /// Free-text description.
    #[serde(default)]
    pub description: String,
    /// Creation timestamp.
    #[serde(default)]
    pub created_at: String,
    /// The postings; order is not significant.
    #[serde(default)]
    pub transactions: Vec<Posting>,
}

impl JournalEntry {
    /// Total of all posting debits.
    #[must_use]
    pub fn total_debit(&self) -> Decimal {
        self.transactions.iter().map(|p| p.debit).sum()
    }

    /// Total of all posting credits.
    #[must_use]
    pub fn total_credit(&self) -> Decimal {
        self.transactions.iter().map(|p| p.credit).sum()
    }

    /// Returns true if the description marks this as an opening-balance entry.
    #[must_use]
    pub fn describes_opening_balance(&self) -> bool {
        is_opening_balance_description(&self.description)
    }

    /// Returns true if every posting is zero and at least one carries an
    /// opening balance instead.
    ///
    /// Such entries only record account openings and are exempt from the
    /// debit = credit rule.
    #[must_use]
    pub fn is_opening_balance_only(&self) -> bool {
        !self.transactions.is_empty()
            && self.transactions.iter().all(Posting::is_zero_amount)
            && self.transactions.iter().any(Posting::has_opening_balance)
    }
}

/// Returns true if a description contains "opening balance" (any case).
#[must_use]
pub fn is_opening_balance_description(description: &str) -> bool {
    description.to_lowercase().contains("opening balance")
}
