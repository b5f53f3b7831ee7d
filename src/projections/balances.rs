//! Balance display formatting.

use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::balance::{FormattedBalances, RawBalances};

use super::decorate::from_wei;

/// Decimal places a balance is rounded to for display.
const BALANCE_DECIMALS: u32 = 2;

/// Formats one raw wei balance for display.
///
/// Divides by the fixed-point scale and rounds half-up to 2 decimal
/// places. Zero in, zero out; never fails.
#[must_use]
pub fn format(raw: u128) -> Decimal {
    from_wei(raw)
        .round_dp_with_strategy(BALANCE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
        .normalize()
}

/// Formats all four balance readings for the active account.
#[must_use]
pub fn format_all(raw: &RawBalances) -> FormattedBalances {
    FormattedBalances {
        wallet_ether: format(raw.wallet_ether),
        wallet_token: format(raw.wallet_token),
        exchange_ether: format(raw.exchange_ether),
        exchange_token: format(raw.exchange_token),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn rounds_to_two_places() {
        // 1.238 ether -> 1.24
        assert_eq!(format(1_238_000_000_000_000_000), dec!(1.24));
        // 1.234 ether -> 1.23
        assert_eq!(format(1_234_000_000_000_000_000), dec!(1.23));
        // Midpoint rounds away from zero: 1.235 -> 1.24
        assert_eq!(format(1_235_000_000_000_000_000), dec!(1.24));
    }

    #[test]
    fn zero_in_zero_out() {
        assert_eq!(format(0), dec!(0));
    }

    #[test]
    fn formats_all_four_readings() {
        let raw = RawBalances {
            wallet_ether: 1_000_000_000_000_000_000,
            wallet_token: 2_500_000_000_000_000_000,
            exchange_ether: 0,
            exchange_token: 100_000_000_000_000_000_000,
        };
        let formatted = format_all(&raw);
        assert_eq!(formatted.wallet_ether, dec!(1));
        assert_eq!(formatted.wallet_token, dec!(2.5));
        assert_eq!(formatted.exchange_ether, dec!(0));
        assert_eq!(formatted.exchange_token, dec!(100));
    }

    #[test]
    fn default_raw_balances_format_to_zero() {
        let formatted = format_all(&RawBalances::default());
        assert_eq!(formatted, FormattedBalances::default());
    }
}
