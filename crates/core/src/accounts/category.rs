//! Account categories and the normal-side rule.
//!
//! - Assets/Expenses: balance = opening + debit - credit (debit-normal)
//! - Liabilities/Capital/Revenues: balance = opening + credit - debit (credit-normal)

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerly_shared::types::split_by_sign;

use crate::ledger::error::LedgerError;

/// Static account type table.
///
/// Liability sub-types not listed here are still recognised by prefix, see
/// [`AccountCategory::of`].
const ACCOUNT_TYPES: &[(&str, AccountCategory)] = &[
    ("Fixed Asset", AccountCategory::Assets),
    ("Current Asset", AccountCategory::Assets),
    ("Accounts Receivable", AccountCategory::Assets),
    ("Cash", AccountCategory::Assets),
    ("Bank", AccountCategory::Assets),
    ("Expense", AccountCategory::Expenses),
    ("Salary", AccountCategory::Expenses),
    ("Rent", AccountCategory::Expenses),
    ("Wages", AccountCategory::Expenses),
    ("Other Expenses", AccountCategory::Expenses),
    ("Revenue", AccountCategory::Revenues),
    ("Sales", AccountCategory::Revenues),
    ("Service Revenue", AccountCategory::Revenues),
    ("Other Revenue", AccountCategory::Revenues),
    ("Capital", AccountCategory::Capital),
    ("Retained Earnings", AccountCategory::Capital),
];

const LIABILITY_PREFIXES: &[&str] = &["Short-term Liability", "Long-term Liability"];

/// Category of an account, derived from its account type.
///
/// Variants are declared in report order, so sorting by category groups rows
/// the way statements present them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum AccountCategory {
    /// Things the business owns.
    Assets,
    /// Costs incurred.
    Expenses,
    /// Income earned.
    Revenues,
    /// Amounts owed.
    Liabilities,
    /// Owner's equity.
    Capital,
}

/// The side on which a category's balance increases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NormalSide {
    /// Debits increase the balance.
    Debit,
    /// Credits increase the balance.
    Credit,
}

impl AccountCategory {
    /// All categories in report order.
    pub const ALL: [Self; 5] = [
        Self::Assets,
        Self::Expenses,
        Self::Revenues,
        Self::Liabilities,
        Self::Capital,
    ];

    /// Maps an account type to its category.
    ///
    /// Matching is exact (case-sensitive, untrimmed) against the static
    /// table, with any `Short-term Liability…` / `Long-term Liability…` type
    /// mapping to Liabilities. Unknown types are a data integrity error and
    /// are never defaulted.
    pub fn of(account_type: &str) -> Result<Self, LedgerError> {
        if let Some((_, category)) = ACCOUNT_TYPES
            .iter()
            .find(|(name, _)| *name == account_type)
        {
            return Ok(*category);
        }

        if LIABILITY_PREFIXES
            .iter()
            .any(|prefix| account_type.starts_with(prefix))
        {
            return Ok(Self::Liabilities);
        }

        Err(LedgerError::UnknownAccountType(account_type.to_string()))
    }

    /// Returns true for debit-normal categories (Assets, Expenses).
    #[must_use]
    pub const fn is_debit_normal(self) -> bool {
        matches!(self, Self::Assets | Self::Expenses)
    }

    /// Returns the normal side of this category.
    #[must_use]
    pub const fn normal_side(self) -> NormalSide {
        if self.is_debit_normal() {
            NormalSide::Debit
        } else {
            NormalSide::Credit
        }
    }

    /// Calculates the balance change caused by a debit/credit pair.
    #[must_use]
    pub fn signed_movement(self, debit: Decimal, credit: Decimal) -> Decimal {
        self.normal_side().balance_change(debit, credit)
    }

    /// Places a signed balance onto `(debit, credit)` columns.
    ///
    /// A positive balance lands on the normal side, a negative one on the
    /// opposite side with its absolute value.
    #[must_use]
    pub fn split(self, balance: Decimal) -> (Decimal, Decimal) {
        let (normal, opposite) = split_by_sign(balance);
        match self.normal_side() {
            NormalSide::Debit => (normal, opposite),
            NormalSide::Credit => (opposite, normal),
        }
    }
}

impl NormalSide {
    /// Calculates the balance change for a debit/credit pair.
    #[must_use]
    pub fn balance_change(self, debit: Decimal, credit: Decimal) -> Decimal {
        match self {
            Self::Debit => debit - credit,
            Self::Credit => credit - debit,
        }
    }
}

impl std::fmt::Display for AccountCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Self::Assets => "Assets",
            Self::Expenses => "Expenses",
            Self::Revenues => "Revenues",
            Self::Liabilities => "Liabilities",
            Self::Capital => "Capital",
        };
        f.write_str(name)
    }
}
