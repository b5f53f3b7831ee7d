//! Order decoration: wei conversion, pricing, and display formatting.

use std::cmp::Ordering;

use chrono::{DateTime, Utc};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::book::DecoratedOrder;
use crate::models::order::Order;
use crate::models::{Side, WEI_PER_ETHER};

/// Decimal places a token price is rounded to.
const PRICE_DECIMALS: u32 = 5;

/// Converts a raw fixed-point ledger amount to display units.
///
/// The integer and fractional parts are split before conversion, so the
/// result is exact for the full `u128` range: the fractional part is
/// always below 10^18 and the integer part below 10^21, both well inside
/// the 96-bit decimal mantissa, so neither conversion can panic.
#[must_use]
pub fn from_wei(raw: u128) -> Decimal {
    let whole = Decimal::from_i128_with_scale((raw / WEI_PER_ETHER) as i128, 0);
    let frac = Decimal::from_i128_with_scale((raw % WEI_PER_ETHER) as i128, 18);
    (whole + frac).normalize()
}

/// Ether-per-token price rounded half-up to 5 decimal places.
///
/// Returns `None` when the token amount is zero or the ratio overflows
/// the decimal range. Callers record the invalid-price sentinel instead
/// of producing a non-finite value.
#[must_use]
pub fn token_price(ether_amount: Decimal, token_amount: Decimal) -> Option<Decimal> {
    if token_amount.is_zero() {
        return None;
    }
    let ratio = ether_amount.checked_div(token_amount)?;
    Some(
        ratio
            .round_dp_with_strategy(PRICE_DECIMALS, RoundingStrategy::MidpointAwayFromZero)
            .normalize(),
    )
}

/// Enriches a raw order with computed display fields.
///
/// The side is buy iff the order gives ether (wants to acquire the token).
/// The raw order is carried unchanged inside the result.
#[must_use]
pub fn decorate(order: &Order) -> DecoratedOrder {
    let side = if order.token_give.is_ether() {
        Side::Buy
    } else {
        Side::Sell
    };
    let (ether_raw, token_raw) = match side {
        Side::Buy => (order.amount_give, order.amount_get),
        Side::Sell => (order.amount_get, order.amount_give),
    };
    let ether_amount = from_wei(ether_raw);
    let token_amount = from_wei(token_raw);
    let (price, valid_price) = match token_price(ether_amount, token_amount) {
        Some(p) => (p, true),
        None => (Decimal::ZERO, false),
    };

    DecoratedOrder {
        order: order.clone(),
        ether_amount,
        token_amount,
        token_price: price,
        valid_price,
        side,
        fill_action: side.counterpart(),
        formatted_timestamp: format_timestamp(order.timestamp),
    }
}

/// Formats a Unix timestamp as `h:mm:ss am/pm D/M` (UTC).
///
/// Timestamps outside chrono's representable range fall back to the raw
/// number rather than failing.
#[must_use]
pub fn format_timestamp(unix: u64) -> String {
    i64::try_from(unix)
        .ok()
        .and_then(|secs| DateTime::<Utc>::from_timestamp(secs, 0))
        .map_or_else(
            || unix.to_string(),
            |dt| dt.format("%-I:%M:%S %P %-d/%-m").to_string(),
        )
}

/// Orders quotable prices before invalid ones, then by price descending.
///
/// Ties compare equal so a stable sort keeps ledger insertion order.
pub(crate) fn price_desc(a: &DecoratedOrder, b: &DecoratedOrder) -> Ordering {
    match (a.valid_price, b.valid_price) {
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        _ => b.token_price.cmp(&a.token_price),
    }
}
