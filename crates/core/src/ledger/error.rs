//! Ledger error types.
//!
//! These are data integrity anomalies found while deriving ledgers. They are
//! raised rather than defaulted: silently skipping a posting or guessing a
//! category would corrupt trial balance totals without any visible sign.

use thiserror::Error;

use ledgerly_shared::AppError;

/// Errors that can occur while deriving ledgers from journal entries.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Account type has no category mapping.
    #[error("Unknown account type: '{0}'")]
    UnknownAccountType(String),

    /// Entry date cannot be read as a calendar date.
    #[error("Journal entry {entry_id} has an invalid date: '{value}'")]
    InvalidDate {
        /// The offending entry.
        entry_id: String,
        /// The raw date value.
        value: String,
    },

    /// Posting has an empty account name.
    #[error("Posting {posting_id} in journal entry {entry_id} has no account name")]
    EmptyAccountName {
        /// The entry containing the posting.
        entry_id: String,
        /// The offending posting.
        posting_id: String,
    },
}

impl LedgerError {
    /// Returns the error code for machine-readable output.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownAccountType(_) => "UNKNOWN_ACCOUNT_TYPE",
            Self::InvalidDate { .. } => "INVALID_DATE",
            Self::EmptyAccountName { .. } => "EMPTY_ACCOUNT_NAME",
        }
    }
}

impl From<LedgerError> for AppError {
    fn from(err: LedgerError) -> Self {
        Self::DataIntegrity(err.to_string())
    }
}
