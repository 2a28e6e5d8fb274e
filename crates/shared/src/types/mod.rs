//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{CURRENCY_EPSILON, approx_eq, format_amount, is_material, split_by_sign};
