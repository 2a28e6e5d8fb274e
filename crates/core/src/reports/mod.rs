//! Financial report generation.
//!
//! This module provides pure business logic for reports derived from
//! ledgers:
//! - Trial Balance
//! - Period Trial Balance (period movement or as-of balances)
//! - Financial Summary, Income Statement, Balance Sheet
//! - Cash Flow Statement

pub mod cash_flow;
pub mod error;
pub mod period;
pub mod range;
pub mod statements;
pub mod trial_balance;
pub mod types;


pub use cash_flow::build_cash_flow_statement;
pub use error::ReportError;
pub use period::build_period_trial_balance;
pub use range::{DateRange, ReportMode};
pub use statements::{build_balance_sheet, build_income_statement, calculate_financial_summary};
pub use trial_balance::{build_trial_balance, non_zero_rows};
pub use types::*;
