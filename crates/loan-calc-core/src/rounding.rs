//! Lender-favourable rounding.

use rust_decimal::Decimal;

/// Decimal places kept before rounding up. A 28-digit rendering of a
/// repeating fraction such as 1/120 drifts by far less than this, so an
/// amount that is mathematically whole stays whole.
pub const SETTLE_DP: u32 = 12;

/// Round up to the next whole unit.
pub fn ceil_settled(value: Decimal) -> Decimal {
    value.round_dp(SETTLE_DP).ceil().normalize()
}
