//! Pre-submission validation of candidate journal entries.
//!
//! Validation is advisory: every rule is checked independently, all violations
//! are returned together, and nothing is mutated or persisted. The server side
//! runs the same rules again before accepting an entry.

use rust_decimal::Decimal;
use serde::{Serialize, Serializer};
use thiserror::Error;

use ledgerly_shared::types::approx_eq;

use super::date::is_strict_iso_date;
use super::types::JournalEntry;

/// A single user-correctable problem with a journal entry.
///
/// Posting positions are 1-based, matching what the entry form shows.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum JournalValidationError {
    /// Entry has no id.
    #[error("Journal ID is required")]
    MissingEntryId,

    /// Entry has no date.
    #[error("Journal date is required")]
    MissingDate,

    /// Entry date is not a `YYYY-MM-DD` calendar date.
    #[error("Journal date must be in YYYY-MM-DD format, got '{0}'")]
    InvalidDateFormat(String),

    /// Entry has no creation timestamp.
    #[error("CreatedAt timestamp is required")]
    MissingCreatedAt,

    /// Entry has no postings.
    #[error("At least one transaction is required")]
    NoPostings,

    /// Posting has no id.
    #[error("Transaction {0}: ID is required")]
    MissingPostingId(usize),

    /// Posting has no account name.
    #[error("Transaction {0}: Account name is required")]
    MissingAccountName(usize),

    /// Posting has no account type.
    #[error("Transaction {0}: Account type is required")]
    MissingAccountType(usize),

    /// Posting has a negative debit or credit.
    #[error("Transaction {0}: Debit and credit must be non-negative")]
    NegativeAmount(usize),

    /// Posting has both a debit and a credit.
    #[error("Transaction {0}: Cannot have both debit and credit amounts")]
    BothDebitAndCredit(usize),

    /// Debits and credits differ by a cent or more.
    #[error("Journal is not balanced. Debit = {debit}, Credit = {credit}")]
    Unbalanced {
        /// Total debits.
        debit: Decimal,
        /// Total credits.
        credit: Decimal,
    },

    /// Every amount is zero and no opening balance is given.
    #[error("Journal entry must contain either opening balances or regular amounts")]
    NoAmounts,

    /// Receipt or payment has no description.
    #[error("Description is required")]
    MissingDescription,

    /// Receipt or payment amount is zero or negative.
    #[error("Amount must be greater than zero")]
    NonPositiveAmount,

    /// Receipt or payment has no counter account.
    #[error("Account is required")]
    MissingCounterAccount,
}

impl Serialize for JournalValidationError {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Outcome of validating a journal entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ValidationReport {
    /// True when no rule was violated.
    pub valid: bool,
    /// Every violation found, in rule order.
    pub errors: Vec<JournalValidationError>,
}

impl ValidationReport {
    /// Builds a report from a list of violations.
    #[must_use]
    pub fn from_errors(errors: Vec<JournalValidationError>) -> Self {
        Self {
            valid: errors.is_empty(),
            errors,
        }
    }

    /// Returns the human-readable messages.
    #[must_use]
    pub fn messages(&self) -> Vec<String> {
        self.errors.iter().map(ToString::to_string).collect()
    }
}

/// Validates a candidate journal entry, collecting every violation.
#[must_use]
pub fn validate(entry: &JournalEntry) -> ValidationReport {
    let mut errors = Vec::new();

    if entry.id.is_blank() {
        errors.push(JournalValidationError::MissingEntryId);
    }

    if entry.date.trim().is_empty() {
        errors.push(JournalValidationError::MissingDate);
    } else if !is_strict_iso_date(&entry.date) {
        errors.push(JournalValidationError::InvalidDateFormat(entry.date.clone()));
    }

    if entry.created_at.trim().is_empty() {
        errors.push(JournalValidationError::MissingCreatedAt);
    }

    if entry.transactions.is_empty() {
        errors.push(JournalValidationError::NoPostings);
        return ValidationReport::from_errors(errors);
    }

    for (i, posting) in entry.transactions.iter().enumerate() {
        let position = i + 1;

        if posting.id.is_blank() {
            errors.push(JournalValidationError::MissingPostingId(position));
        }
        if posting.account_name.trim().is_empty() {
            errors.push(JournalValidationError::MissingAccountName(position));
        }
        if posting.account_type.trim().is_empty() {
            errors.push(JournalValidationError::MissingAccountType(position));
        }
        if posting.debit < Decimal::ZERO || posting.credit < Decimal::ZERO {
            errors.push(JournalValidationError::NegativeAmount(position));
        }
        if posting.debit > Decimal::ZERO && posting.credit > Decimal::ZERO {
            errors.push(JournalValidationError::BothDebitAndCredit(position));
        }
    }

    let debit = entry.total_debit();
    let credit = entry.total_credit();
    if !entry.is_opening_balance_only() && !approx_eq(debit, credit) {
        errors.push(JournalValidationError::Unbalanced { debit, credit });
    }

    let has_amounts = entry.transactions.iter().any(|p| !p.is_zero_amount());
    let has_openings = entry.transactions.iter().any(|p| p.has_opening_balance());
    if !has_amounts && !has_openings {
        errors.push(JournalValidationError::NoAmounts);
    }

    ValidationReport::from_errors(errors)
}
