//! Common utility functions for tax calculations.
//!
//! This module provides shared functionality used across both regimes,
//! including rounding, clamping and percentage helpers.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a decimal value to exactly two decimal places using half-up rounding.
///
/// Values at exactly 0.005 are rounded up to 0.01 (away from zero).
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(123.454)), dec!(123.45));
/// assert_eq!(round_half_up(dec!(123.455)), dec!(123.46));
/// assert_eq!(round_half_up(dec!(-123.455)), dec!(-123.46)); // Away from zero
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Rounds to the nearest whole rupee, half-up.
///
/// This is the only rounding applied to a tax figure; every step before it
/// is exact decimal arithmetic.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::round_to_rupee;
///
/// assert_eq!(round_to_rupee(dec!(13006.5)), dec!(13007));
/// assert_eq!(round_to_rupee(dec!(74100.156)), dec!(74100));
/// ```
pub fn round_to_rupee(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero)
}

/// Returns the maximum of two decimal values.
pub fn max(
    a: Decimal,
    b: Decimal,
) -> Decimal {
    if a > b { a } else { b }
}

/// `gross - deductions`, never below zero.
///
/// Saturates at the bottom of the `Decimal` range instead of overflowing.
///
/// # Examples
///
/// ```
/// use rust_decimal::Decimal;
/// use rust_decimal_macros::dec;
/// use tax_core::calculations::common::taxable_after;
///
/// assert_eq!(taxable_after(dec!(1000000), dec!(75000)), dec!(925000));
/// assert_eq!(taxable_after(dec!(50000), dec!(75000)), dec!(0));
/// assert_eq!(taxable_after(Decimal::MIN, dec!(75000)), dec!(0));
/// ```
pub fn taxable_after(
    gross: Decimal,
    deductions: Decimal,
) -> Decimal {
    max(gross.saturating_sub(deductions), Decimal::ZERO)
}

/// Clamps a claimed deduction into `[0, cap]`.
///
/// Claims above the statutory cap are reduced to it, and a negative claim
/// counts as nothing rather than adding to taxable income.
pub fn clamp_deduction(
    claimed: Decimal,
    cap: Decimal,
) -> Decimal {
    max(claimed, Decimal::ZERO).min(cap)
}

/// A whole-number percentage as a decimal fraction (`percent(5)` is `0.05`).
pub fn percent(value: i64) -> Decimal {
    Decimal::new(value, 2)
}

/// Rupee amount from an integer literal.
pub fn rupees(value: i64) -> Decimal {
    Decimal::from(value)
}
