//! Report data types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use ledgerly_shared::types::{JournalEntryId, approx_eq, is_material};

use super::range::{DateRange, ReportMode};
use crate::accounts::{AccountCategory, CashFlowActivity};

/// One ledger's line in the trial balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceRow {
    /// Account name.
    pub account_name: String,
    /// Account type.
    pub account_type: String,
    /// Account category.
    pub category: AccountCategory,
    /// Ledger opening balance.
    pub opening_balance: Decimal,
    /// Debit column.
    pub debit: Decimal,
    /// Credit column.
    pub credit: Decimal,
}

impl TrialBalanceRow {
    /// Returns true if neither column shows a material amount.
    #[must_use]
    pub fn is_zero(&self) -> bool {
        !is_material(self.debit) && !is_material(self.credit)
    }
}

/// Trial balance totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrialBalanceTotals {
    /// Total debit.
    pub total_debit: Decimal,
    /// Total credit.
    pub total_credit: Decimal,
    /// Whether debits equal credits within a cent.
    pub is_balanced: bool,
}

impl TrialBalanceTotals {
    /// Sums the columns of a set of rows.
    #[must_use]
    pub fn of(rows: &[TrialBalanceRow]) -> Self {
        let total_debit: Decimal = rows.iter().map(|r| r.debit).sum();
        let total_credit: Decimal = rows.iter().map(|r| r.credit).sum();
        Self {
            total_debit,
            total_credit,
            is_balanced: approx_eq(total_debit, total_credit),
        }
    }
}

/// One ledger's line in a period trial balance.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodRow {
    /// Account name.
    pub account_name: String,
    /// Account type.
    pub account_type: String,
    /// Account category.
    pub category: AccountCategory,
    /// Balance immediately before the window.
    pub starting_balance: Decimal,
    /// Raw debits within the window.
    pub period_debit: Decimal,
    /// Raw credits within the window.
    pub period_credit: Decimal,
    /// Balance at the end of the window.
    pub closing_balance: Decimal,
    /// Displayed debit.
    pub debit: Decimal,
    /// Displayed credit.
    pub credit: Decimal,
}

/// Rows of one category with their subtotals.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CategoryGroup {
    /// The category.
    pub category: AccountCategory,
    /// Rows in this category, in report order.
    pub rows: Vec<PeriodRow>,
    /// Displayed debit subtotal.
    pub total_debit: Decimal,
    /// Displayed credit subtotal.
    pub total_credit: Decimal,
}

/// Trial balance over a date window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodTrialBalance {
    /// Period movement or as-of balances.
    pub mode: ReportMode,
    /// The window reported on.
    pub range: DateRange,
    /// Rows with something to show.
    pub rows: Vec<PeriodRow>,
    /// Sum of displayed debits.
    pub total_debits: Decimal,
    /// Sum of displayed credits.
    pub total_credits: Decimal,
    /// Whether displayed totals agree within a cent.
    pub is_balanced: bool,
}

impl PeriodTrialBalance {
    /// Groups rows by category in report order, skipping empty categories.
    #[must_use]
    pub fn by_category(&self) -> Vec<CategoryGroup> {
        AccountCategory::ALL
            .iter()
            .filter_map(|category| {
                let rows: Vec<PeriodRow> = self
                    .rows
                    .iter()
                    .filter(|r| r.category == *category)
                    .cloned()
                    .collect();
                if rows.is_empty() {
                    return None;
                }
                Some(CategoryGroup {
                    category: *category,
                    total_debit: rows.iter().map(|r| r.debit).sum(),
                    total_credit: rows.iter().map(|r| r.credit).sum(),
                    rows,
                })
            })
            .collect()
    }
}

/// Opening balance totals for the balance sheet categories.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OpeningBalanceTotals {
    /// Sum of asset openings.
    pub assets: Decimal,
    /// Sum of liability openings.
    pub liabilities: Decimal,
    /// Sum of capital openings.
    pub capital: Decimal,
}

/// Headline figures across all ledgers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSummary {
    /// Sum of revenue balances.
    pub total_revenue: Decimal,
    /// Sum of expense balances.
    pub total_expenses: Decimal,
    /// Revenue minus expenses.
    pub net_profit: Decimal,
    /// Sum of asset balances.
    pub total_assets: Decimal,
    /// Sum of liability balances.
    pub total_liabilities: Decimal,
    /// Sum of capital balances.
    pub total_capital: Decimal,
    /// Opening balance totals.
    pub opening_balances: OpeningBalanceTotals,
}

/// An account line on a statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatementLine {
    /// Account name.
    pub account_name: String,
    /// Account type.
    pub account_type: String,
    /// Amount shown for the account.
    pub amount: Decimal,
}

/// A group of statement lines with its total.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatementSection {
    /// Lines in this section.
    pub lines: Vec<StatementLine>,
    /// Section total.
    pub total: Decimal,
}

impl StatementSection {
    pub(crate) fn push(&mut self, line: StatementLine) {
        self.total += line.amount;
        self.lines.push(line);
    }
}

/// Income statement for a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncomeStatement {
    /// The window reported on.
    pub range: DateRange,
    /// Revenue accounts.
    pub revenue: StatementSection,
    /// Expense accounts.
    pub expenses: StatementSection,
    /// Revenue minus expenses.
    pub net_income: Decimal,
}

/// Balance sheet at the end of a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BalanceSheet {
    /// Balances are taken at the end of this date.
    pub as_of: NaiveDate,
    /// Asset accounts.
    pub assets: StatementSection,
    /// Liability accounts.
    pub liabilities: StatementSection,
    /// Capital accounts.
    pub capital: StatementSection,
    /// Revenue minus expenses up to the same date.
    pub net_income: Decimal,
    /// Liabilities + capital + net income.
    pub liabilities_and_equity: Decimal,
    /// Whether assets equal liabilities and equity within a cent.
    pub is_balanced: bool,
}

/// One cash movement on the cash-flow statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowLine {
    /// Posting date.
    pub date: NaiveDate,
    /// Owning journal entry.
    pub entry_id: JournalEntryId,
    /// Entry description.
    pub description: String,
    /// Cash-like account moved.
    pub account_name: String,
    /// Debit minus credit: positive is an inflow.
    pub amount: Decimal,
    /// True if cash came in.
    pub is_inflow: bool,
}

/// One activity section of the cash-flow statement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSection {
    /// The activity.
    pub activity: CashFlowActivity,
    /// Movements in date order.
    pub lines: Vec<CashFlowLine>,
    /// Sum of line amounts.
    pub total: Decimal,
}

/// Section totals.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowTotals {
    /// Net operating cash flow.
    pub operating: Decimal,
    /// Net investing cash flow.
    pub investing: Decimal,
    /// Net financing cash flow.
    pub financing: Decimal,
    /// Sum of the three.
    pub net_change: Decimal,
}

/// Cash positions and the reconciliation check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowSummary {
    /// Cash immediately before the window opens.
    pub beginning_cash: Decimal,
    /// Net change over the window.
    pub net_change: Decimal,
    /// Beginning cash plus net change.
    pub ending_cash_computed: Decimal,
    /// Cash walked directly up to the end of the window.
    pub ending_cash_direct: Decimal,
    /// Whether the two endings agree within a cent.
    pub reconciles: bool,
}

/// Cash-flow statement for a window.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CashFlowStatement {
    /// The window reported on.
    pub range: DateRange,
    /// Operating, investing, financing (always all three).
    pub sections: Vec<CashFlowSection>,
    /// Section totals.
    pub totals: CashFlowTotals,
    /// Positions and reconciliation.
    pub summary: CashFlowSummary,
}
