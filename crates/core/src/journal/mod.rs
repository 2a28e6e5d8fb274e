//! Journal entries: the input model, date handling, validation, and the
//! receipt/payment and edit helpers built on top of it.

pub mod date;
pub mod edit;
pub mod shortcuts;
pub mod types;
pub mod validation;

#[cfg(test)]
mod validation_props;

pub use date::{is_strict_iso_date, normalize_date};
pub use edit::{PostingChanges, diff_postings};
pub use shortcuts::{CashSource, CashVoucher, Payment, Receipt};
pub use types::{JournalEntry, Posting, PostingSide, is_opening_balance_description};
pub use validation::{JournalValidationError, ValidationReport, validate};
