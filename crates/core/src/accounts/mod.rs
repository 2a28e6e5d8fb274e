//! Account classification.
//!
//! - `category` - account type → category mapping and the normal-side rule
//! - `cash` - cash-like account detection and cash-flow activity tags

pub mod category;
pub mod cash;

pub use cash::{CashAccountPolicy, CashFlowActivity};
pub use category::{AccountCategory, NormalSide};
