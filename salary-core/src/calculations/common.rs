//! Rounding and clamping helpers shared by the calculators.
//!
//! Every rounding point in the engine goes through [`round_half_up`] so the
//! tax and reduction figures cannot drift apart.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a monetary value to cents.
///
/// Ties at half a cent round away from zero, matching how currency is shown
/// to the user.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::round_half_up;
///
/// assert_eq!(round_half_up(dec!(312.884)), dec!(312.88));
/// assert_eq!(round_half_up(dec!(312.885)), dec!(312.89));
/// assert_eq!(round_half_up(dec!(-0.005)), dec!(-0.01));
/// ```
pub fn round_half_up(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

/// Clamps a value to zero from below.
///
/// # Examples
///
/// ```
/// use rust_decimal_macros::dec;
/// use salary_core::calculations::common::non_negative;
///
/// assert_eq!(non_negative(dec!(-12.50)), dec!(0));
/// assert_eq!(non_negative(dec!(12.50)), dec!(12.50));
/// ```
pub fn non_negative(value: Decimal) -> Decimal {
    value.max(Decimal::ZERO)
}
