//! Core bookkeeping logic for Ledgerly.
//!
//! This crate contains pure business logic with no storage or UI
//! dependencies. It turns a snapshot of journal entries into ledgers and
//! financial reports.
//!
//! # Modules
//!
//! - `accounts` - Account categories and the cash-account heuristic
//! - `journal` - Journal entries, validation, and cash voucher shortcuts
//! - `ledger` - Ledger derivation, running balances, and year-end carry forward
//! - `reports` - Trial balances, statements, and the cash-flow statement
//! - `books` - One full derivation pass per snapshot, with caching

pub mod accounts;
pub mod books;
pub mod journal;
pub mod ledger;
pub mod reports;

#[cfg(test)]
mod testing;
