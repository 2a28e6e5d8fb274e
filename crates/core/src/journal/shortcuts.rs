//! Receipt and payment shortcuts.
//!
//! A receipt or payment is a two-posting journal entry between a cash/bank
//! account and one counter account. These forms build that entry so callers
//! never hand-assemble the postings.

use chrono::Utc;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerly_shared::types::{JournalEntryId, PostingId};

use super::types::{JournalEntry, Posting};
use super::validation::{JournalValidationError, ValidationReport, validate};

const SOURCE_ACCOUNT_TYPE: &str = "Current Asset";
const DEFAULT_RECEIPT_COUNTER_TYPE: &str = "Revenue";
const DEFAULT_PAYMENT_COUNTER_TYPE: &str = "Expense";

/// The cash/bank side of a receipt or payment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum CashSource {
    /// Cash on hand.
    #[default]
    Cash,
    /// Bank account.
    Bank,
}

impl CashSource {
    /// Account name used for the source posting.
    #[must_use]
    pub const fn account_name(self) -> &'static str {
        match self {
            Self::Cash => "Cash",
            Self::Bank => "Bank",
        }
    }
}

/// Fields shared by the receipt and payment forms.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashVoucher {
    /// Entry date, `YYYY-MM-DD`.
    pub date: String,
    /// Description copied onto the entry.
    pub description: String,
    /// Amount moved (must be positive).
    pub amount: Decimal,
    /// Cash or bank.
    #[serde(default)]
    pub source: CashSource,
    /// The other side of the entry.
    pub counter_account: String,
    /// Account type of the counter account; defaults per voucher kind.
    #[serde(default)]
    pub counter_account_type: Option<String>,
    /// Cash-flow activity tag applied to the source posting.
    #[serde(default)]
    pub cash_flow_type: Option<String>,
}

/// Money received into cash or bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Receipt(pub CashVoucher);

/// Money paid out of cash or bank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Payment(pub CashVoucher);

impl Receipt {
    /// Builds the journal entry: debit the source, credit the counter account.
    ///
    /// # Errors
    ///
    /// Returns the collected violations if the form or the resulting entry
    /// is invalid.
    pub fn into_entry(self) -> Result<JournalEntry, ValidationReport> {
        build_entry(self.0, DEFAULT_RECEIPT_COUNTER_TYPE, true)
    }
}

impl Payment {
    /// Builds the journal entry: debit the counter account, credit the source.
    ///
    /// # Errors
    ///
    /// Returns the collected violations if the form or the resulting entry
    /// is invalid.
    pub fn into_entry(self) -> Result<JournalEntry, ValidationReport> {
        build_entry(self.0, DEFAULT_PAYMENT_COUNTER_TYPE, false)
    }
}

fn precheck(voucher: &CashVoucher) -> Vec<JournalValidationError> {
    let mut errors = Vec::new();
    if voucher.description.trim().is_empty() {
        errors.push(JournalValidationError::MissingDescription);
    }
    if voucher.amount <= Decimal::ZERO {
        errors.push(JournalValidationError::NonPositiveAmount);
    }
    if voucher.counter_account.trim().is_empty() {
        errors.push(JournalValidationError::MissingCounterAccount);
    }
    errors
}

fn build_entry(
    voucher: CashVoucher,
    default_counter_type: &str,
    is_receipt: bool,
) -> Result<JournalEntry, ValidationReport> {
    let errors = precheck(&voucher);
    if !errors.is_empty() {
        return Err(ValidationReport::from_errors(errors));
    }

    let counter_type = voucher
        .counter_account_type
        .as_deref()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .unwrap_or(default_counter_type)
        .to_string();
    let source_name = voucher.source.account_name();
    let counter_name = voucher.counter_account.trim().to_string();

    let (mut source, counter) = if is_receipt {
        (
            Posting::debit(PostingId::generate(), source_name, SOURCE_ACCOUNT_TYPE, voucher.amount),
            Posting::credit(PostingId::generate(), counter_name, counter_type, voucher.amount),
        )
    } else {
        (
            Posting::credit(PostingId::generate(), source_name, SOURCE_ACCOUNT_TYPE, voucher.amount),
            Posting::debit(PostingId::generate(), counter_name, counter_type, voucher.amount),
        )
    };
    source.cash_flow_type = voucher.cash_flow_type;

    let transactions = if is_receipt {
        vec![source, counter]
    } else {
        vec![counter, source]
    };

    let entry = JournalEntry {
        id: JournalEntryId::generate(),
        date: voucher.date,
        description: voucher.description.trim().to_string(),
        created_at: Utc::now().to_rfc3339(),
        transactions,
    };

    let report = validate(&entry);
    if report.valid { Ok(entry) } else { Err(report) }
}
