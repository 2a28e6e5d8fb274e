//! Trial balance.
//!
//! Each row places the opening balance and the net movement onto the
//! debit/credit columns separately (per the account's normal side) and sums
//! the two placements. The builder emits one row per ledger; dropping zero
//! rows is left to the caller.

use crate::ledger::Ledger;

use super::types::TrialBalanceRow;

/// Builds one trial balance row per ledger.
#[must_use]
pub fn build_trial_balance(ledgers: &[Ledger]) -> Vec<TrialBalanceRow> {
    ledgers
        .iter()
        .map(|ledger| {
            let (opening_debit, opening_credit) = ledger.category.split(ledger.opening_balance);
            let (movement_debit, movement_credit) = ledger.category.split(ledger.net_movement());
            TrialBalanceRow {
                account_name: ledger.account_name.clone(),
                account_type: ledger.account_type.clone(),
                category: ledger.category,
                opening_balance: ledger.opening_balance,
                debit: opening_debit + movement_debit,
                credit: opening_credit + movement_credit,
            }
        })
        .collect()
}

/// Drops rows with nothing to show.
#[must_use]
pub fn non_zero_rows(rows: Vec<TrialBalanceRow>) -> Vec<TrialBalanceRow> {
    rows.into_iter().filter(|r| !r.is_zero()).collect()
}
