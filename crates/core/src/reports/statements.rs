//! Financial summary, income statement, and balance sheet.

use rust_decimal::Decimal;

use ledgerly_shared::types::approx_eq;

use super::period::build_period_trial_balance;
use super::range::DateRange;
use super::types::{
    BalanceSheet, FinancialSummary, IncomeStatement, StatementLine, StatementSection,
};
use crate::accounts::AccountCategory;
use crate::ledger::Ledger;

/// Sums ledger balances (and balance-sheet openings) by category.
#[must_use]
pub fn calculate_financial_summary(ledgers: &[Ledger]) -> FinancialSummary {
    let mut summary = FinancialSummary::default();

    for ledger in ledgers {
        match ledger.category {
            AccountCategory::Revenues => summary.total_revenue += ledger.balance,
            AccountCategory::Expenses => summary.total_expenses += ledger.balance,
            AccountCategory::Assets => {
                summary.total_assets += ledger.balance;
                summary.opening_balances.assets += ledger.opening_balance;
            }
            AccountCategory::Liabilities => {
                summary.total_liabilities += ledger.balance;
                summary.opening_balances.liabilities += ledger.opening_balance;
            }
            AccountCategory::Capital => {
                summary.total_capital += ledger.balance;
                summary.opening_balances.capital += ledger.opening_balance;
            }
        }
    }

    summary.net_profit = summary.total_revenue - summary.total_expenses;
    summary
}

/// Builds the income statement for a window.
///
/// Each line is the amount the period engine displays for the account: net
/// movement in the window, or the closing balance when unbounded. Accounts
/// with nothing to show are left out.
#[must_use]
pub fn build_income_statement(ledgers: &[Ledger], range: &DateRange) -> IncomeStatement {
    let period = build_period_trial_balance(ledgers, range);
    let mut revenue = StatementSection::default();
    let mut expenses = StatementSection::default();

    for row in period.rows {
        let section = match row.category {
            AccountCategory::Revenues => &mut revenue,
            AccountCategory::Expenses => &mut expenses,
            _ => continue,
        };
        let amount = if row.category.is_debit_normal() {
            row.debit - row.credit
        } else {
            row.credit - row.debit
        };
        section.push(StatementLine {
            account_name: row.account_name,
            account_type: row.account_type,
            amount,
        });
    }

    let net_income = revenue.total - expenses.total;
    IncomeStatement {
        range: *range,
        revenue,
        expenses,
        net_income,
    }
}

/// Builds the balance sheet at the end of the window.
///
/// Balances include every movement up to and including the end date.
/// Net income to date is reported alongside capital so that
/// Assets = Liabilities + Capital + Net income.
#[must_use]
pub fn build_balance_sheet(ledgers: &[Ledger], range: &DateRange) -> BalanceSheet {
    let as_of = range.end();
    let mut assets = StatementSection::default();
    let mut liabilities = StatementSection::default();
    let mut capital = StatementSection::default();
    let mut net_income = Decimal::ZERO;

    for ledger in ledgers {
        let amount = ledger.balance_through(as_of);
        let section = match ledger.category {
            AccountCategory::Assets => &mut assets,
            AccountCategory::Liabilities => &mut liabilities,
            AccountCategory::Capital => &mut capital,
            AccountCategory::Revenues => {
                net_income += amount;
                continue;
            }
            AccountCategory::Expenses => {
                net_income -= amount;
                continue;
            }
        };
        section.push(StatementLine {
            account_name: ledger.account_name.clone(),
            account_type: ledger.account_type.clone(),
            amount,
        });
    }

    let liabilities_and_equity = liabilities.total + capital.total + net_income;
    BalanceSheet {
        as_of,
        is_balanced: approx_eq(assets.total, liabilities_and_equity),
        assets,
        liabilities,
        capital,
        net_income,
        liabilities_and_equity,
    }
}
