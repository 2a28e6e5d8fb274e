//! Derived books: everything computed from one snapshot of journal entries.
//!
//! Derivation is a pure function of the entries and the ledger options. Call
//! [`Books::derive`] once per change to the entry collection, or go through
//! [`BooksCache`] to reuse results for an unchanged snapshot.

pub mod cache;

use chrono::{Datelike, Local};
use serde::{Deserialize, Serialize};

use ledgerly_shared::config::LedgerSettings;

use crate::accounts::CashAccountPolicy;
use crate::journal::types::JournalEntry;
use crate::ledger::{Ledger, LedgerBuilder, LedgerError, OpeningBalances, carry_forward};
use crate::reports::{
    BalanceSheet, CashFlowStatement, DateRange, FinancialSummary, IncomeStatement,
    PeriodTrialBalance, TrialBalanceRow, TrialBalanceTotals, build_balance_sheet,
    build_cash_flow_statement, build_income_statement, build_period_trial_balance,
    build_trial_balance, calculate_financial_summary,
};

pub use cache::BooksCache;

/// Options for ledger derivation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerOptions {
    /// Year dating synthetic opening postings; `None` means the current year.
    #[serde(default)]
    pub fiscal_year: Option<i32>,
    /// Account-level opening balances.
    #[serde(default)]
    pub opening_balances: OpeningBalances,
}

impl LedgerOptions {
    /// Builds options from configuration.
    #[must_use]
    pub fn from_settings(settings: &LedgerSettings) -> Self {
        Self {
            fiscal_year: settings.fiscal_year,
            opening_balances: OpeningBalances::default(),
        }
    }

    /// Sets account-level opening balances.
    #[must_use]
    pub fn with_opening_balances(mut self, opening_balances: OpeningBalances) -> Self {
        self.opening_balances = opening_balances;
        self
    }

    /// The fiscal year actually used.
    #[must_use]
    pub fn resolved_fiscal_year(&self) -> i32 {
        self.fiscal_year.unwrap_or_else(|| Local::now().year())
    }

    /// A builder configured with these options.
    #[must_use]
    pub fn builder(&self) -> LedgerBuilder {
        LedgerBuilder::new()
            .fiscal_year(self.resolved_fiscal_year())
            .opening_balances(self.opening_balances.clone())
    }
}

/// Ledgers, trial balance, and summary for one entry snapshot.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Books {
    /// One ledger per account.
    pub ledgers: Vec<Ledger>,
    /// One row per ledger.
    pub trial_balance: Vec<TrialBalanceRow>,
    /// Trial balance totals.
    pub trial_balance_totals: TrialBalanceTotals,
    /// Headline figures.
    pub summary: FinancialSummary,
}

impl Books {
    /// Runs one full derivation pass.
    ///
    /// # Errors
    ///
    /// Returns `LedgerError` on integrity anomalies in the entries.
    pub fn derive(entries: &[JournalEntry], options: &LedgerOptions) -> Result<Self, LedgerError> {
        let ledgers = options.builder().build(entries)?;
        let trial_balance = build_trial_balance(&ledgers);
        let trial_balance_totals = TrialBalanceTotals::of(&trial_balance);
        let summary = calculate_financial_summary(&ledgers);

        Ok(Self {
            ledgers,
            trial_balance,
            trial_balance_totals,
            summary,
        })
    }

    /// Period trial balance over a window.
    #[must_use]
    pub fn period(&self, range: &DateRange) -> PeriodTrialBalance {
        build_period_trial_balance(&self.ledgers, range)
    }

    /// Cash-flow statement over a window.
    #[must_use]
    pub fn cash_flow(&self, range: &DateRange, policy: &CashAccountPolicy) -> CashFlowStatement {
        build_cash_flow_statement(&self.ledgers, range, policy)
    }

    /// Income statement over a window.
    #[must_use]
    pub fn income_statement(&self, range: &DateRange) -> IncomeStatement {
        build_income_statement(&self.ledgers, range)
    }

    /// Balance sheet at the end of a window.
    #[must_use]
    pub fn balance_sheet(&self, range: &DateRange) -> BalanceSheet {
        build_balance_sheet(&self.ledgers, range)
    }

    /// Closing balances carried forward to next year.
    #[must_use]
    pub fn year_end(&self) -> OpeningBalances {
        carry_forward(&self.ledgers)
    }
}
