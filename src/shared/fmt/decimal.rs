//! Decimal formatting for the swap receipt and rate label.

use rust_decimal::prelude::*;

/// Format with exactly `dp` decimal places, rounding half away from zero.
///
/// `to_fixed(&dec!(5), 6)` is `"5.000000"`.
pub fn to_fixed(value: &Decimal, dp: u32) -> String {
    let rounded = value.round_dp_with_strategy(dp, RoundingStrategy::MidpointAwayFromZero);
    format!("{:.*}", dp as usize, rounded)
}
