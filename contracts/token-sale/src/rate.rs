//! Tiered price schedule.
//!
//! During the presale a single contribution is priced by its own size in
//! whole coin-units, not by the buyer's running total, so one large
//! contribution earns a better rate than several small ones. Tier bounds are
//! strict: a contribution of exactly 50 units is priced at the `< 100` tier.

use crate::error::SaleError;
use crate::math::{checked_div, checked_mul};

/// Tokens per payment base unit once the presale window has closed.
pub const PUBLIC_SALE_RATE: u128 = 40_000;

/// Rate for contributions at or above the last tier bound.
pub const TOP_RATE: u128 = 60_000;

/// `(upper bound in coin-units, rate)`, checked in order.
pub const PRESALE_TIERS: [(u128, u128); 6] = [
    (50, 48_000),
    (100, 50_000),
    (250, 52_000),
    (500, 54_000),
    (1_000, 56_000),
    (2_500, 58_000),
];

pub fn presale_rate(units: u128) -> u128 {
    PRESALE_TIERS
        .iter()
        .find(|(bound, _)| units < *bound)
        .map(|(_, rate)| *rate)
        .unwrap_or(TOP_RATE)
}

/// Rate applied to a contribution of `amount` base units at time `now`.
pub fn rate_at(now: u64, presale_end: u64, amount: u128, coin_unit: u128) -> Result<u128, SaleError> {
    if now > presale_end {
        return Ok(PUBLIC_SALE_RATE);
    }
    let units = checked_div(amount, coin_unit)?;
    Ok(presale_rate(units))
}

pub fn tokens_for(amount: u128, rate: u128) -> Result<u128, SaleError> {
    checked_mul(amount, rate)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tier_boundaries() {
        assert_eq!(presale_rate(0), 48_000);
        assert_eq!(presale_rate(49), 48_000);
        assert_eq!(presale_rate(50), 50_000);
        assert_eq!(presale_rate(99), 50_000);
        assert_eq!(presale_rate(100), 52_000);
        assert_eq!(presale_rate(249), 52_000);
        assert_eq!(presale_rate(250), 54_000);
        assert_eq!(presale_rate(500), 56_000);
        assert_eq!(presale_rate(999), 56_000);
        assert_eq!(presale_rate(1_000), 58_000);
        assert_eq!(presale_rate(2_499), 58_000);
        assert_eq!(presale_rate(2_500), 60_000);
        assert_eq!(presale_rate(u128::MAX), 60_000);
    }

    #[test]
    fn test_rate_switches_after_presale() {
        let unit = 10_000_000;
        assert_eq!(rate_at(100, 100, 3_000 * unit, unit), Ok(60_000));
        assert_eq!(rate_at(101, 100, 3_000 * unit, unit), Ok(PUBLIC_SALE_RATE));
    }

    #[test]
    fn test_rate_counts_whole_units_only() {
        let unit = 10_000_000;
        assert_eq!(rate_at(0, 10, 50 * unit - 1, unit), Ok(48_000));
        assert_eq!(rate_at(0, 10, 50 * unit, unit), Ok(50_000));
    }

    #[test]
    fn test_zero_coin_unit_rejected() {
        assert_eq!(rate_at(0, 10, 5, 0), Err(SaleError::ArithmeticOverflow));
    }

    #[test]
    fn test_tokens_overflow() {
        assert_eq!(tokens_for(10, 48_000), Ok(480_000));
        assert_eq!(tokens_for(u128::MAX, 2), Err(SaleError::ArithmeticOverflow));
    }
}
