//! Double-entry ledger derivation.
//!
//! This module turns journal entries into per-account ledgers:
//! - Grouping postings by account and fixing opening balances
//! - Opening balance synthesis for display
//! - Running balance calculation
//! - Year-end carry-forward of closing balances

pub mod balance;
pub mod builder;
pub mod error;
pub mod types;
pub mod year_end;

#[cfg(test)]
mod builder_props;

pub use balance::RunningBalance;
pub use builder::{LedgerBuilder, build_ledgers};
pub use error::LedgerError;
pub use types::{AccountOpening, Ledger, LedgerKey, LedgerPosting, OpeningBalances};
pub use year_end::carry_forward;
