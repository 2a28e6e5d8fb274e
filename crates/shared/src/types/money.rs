//! Decimal amount helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Every amount is a `rust_decimal::Decimal`; comparisons that the bookkeeping
//! rules describe as "non-zero" or "balanced" go through the helpers below,
//! which apply a one-cent rounding tolerance.

use rust_decimal::Decimal;

/// Currency rounding tolerance (0.01).
pub const CURRENCY_EPSILON: Decimal = Decimal::from_parts(1, 0, 0, false, 2);

/// Returns true if the amount is at least one cent away from zero.
#[must_use]
pub fn is_material(amount: Decimal) -> bool {
    amount.abs() >= CURRENCY_EPSILON
}

/// Returns true if two amounts differ by less than one cent.
#[must_use]
pub fn approx_eq(a: Decimal, b: Decimal) -> bool {
    (a - b).abs() < CURRENCY_EPSILON
}

/// Splits a signed amount into `(positive_part, negative_part)`.
///
/// Both parts are non-negative and at most one of them is non-zero.
#[must_use]
pub fn split_by_sign(amount: Decimal) -> (Decimal, Decimal) {
    if amount.is_sign_negative() {
        (Decimal::ZERO, -amount)
    } else {
        (amount, Decimal::ZERO)
    }
}

/// Formats an amount with two decimal places and thousands separators.
#[must_use]
pub fn format_amount(amount: Decimal) -> String {
    let rounded = amount.round_dp(2);
    let negative = rounded.is_sign_negative() && !rounded.is_zero();
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, ch) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    if negative {
        format!("-{grouped}.{fraction}")
    } else {
        format!("{grouped}.{fraction}")
    }
}
