//! Period trial balance.
//!
//! One engine serves both "transactions in March" and "balance as of
//! March 31": with any date bound the rows show net movement inside the
//! window, with none they show closing balances.

use rust_decimal::Decimal;

use ledgerly_shared::types::approx_eq;

use super::range::{DateRange, ReportMode};
use super::types::{PeriodRow, PeriodTrialBalance};
use crate::ledger::Ledger;

/// Builds the trial balance for a date window.
///
/// Only rows with a positive displayed debit or credit are included.
#[must_use]
pub fn build_period_trial_balance(ledgers: &[Ledger], range: &DateRange) -> PeriodTrialBalance {
    let mode = range.mode();
    let rows: Vec<PeriodRow> = ledgers
        .iter()
        .map(|ledger| period_row(ledger, range, mode))
        .filter(|row| row.debit > Decimal::ZERO || row.credit > Decimal::ZERO)
        .collect();

    let total_debits: Decimal = rows.iter().map(|r| r.debit).sum();
    let total_credits: Decimal = rows.iter().map(|r| r.credit).sum();

    PeriodTrialBalance {
        mode,
        range: *range,
        rows,
        total_debits,
        total_credits,
        is_balanced: approx_eq(total_debits, total_credits),
    }
}

fn period_row(ledger: &Ledger, range: &DateRange, mode: ReportMode) -> PeriodRow {
    // Without a start filter the starting balance is the opening, unconditionally.
    let starting_balance = if range.has_start() {
        ledger.balance_before(range.start())
    } else {
        ledger.opening_balance
    };

    let (period_debit, period_credit) = ledger
        .movements()
        .filter(|p| range.contains(p.date))
        .fold((Decimal::ZERO, Decimal::ZERO), |(d, c), p| {
            (d + p.debit, c + p.credit)
        });

    let movement = ledger.category.signed_movement(period_debit, period_credit);
    let closing_balance = starting_balance + movement;

    let displayed = match mode {
        ReportMode::Period => movement,
        ReportMode::AsOf => closing_balance,
    };
    let (debit, credit) = ledger.category.split(displayed);

    PeriodRow {
        account_name: ledger.account_name.clone(),
        account_type: ledger.account_type.clone(),
        category: ledger.category,
        starting_balance,
        period_debit,
        period_credit,
        closing_balance,
        debit,
        credit,
    }
}
