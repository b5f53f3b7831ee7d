//! Global trade history construction.

use std::collections::HashMap;

use rust_decimal::Decimal;

use crate::models::order::{Fill, Order};
use crate::models::trade::{PriceDirection, Trade};

use super::decorate::{decorate, format_timestamp};

/// Builds the global trade history, newest first.
///
/// Fills are joined to their orders by id (fills whose order is missing
/// are dropped), sorted oldest-first, colored against the previous print,
/// then re-sorted newest-first for presentation. Both sorts are stable, so
/// equal timestamps keep ledger insertion order.
///
/// The first trade is colored up by convention. A trade without a quotable
/// price is also colored up and does not move the comparison price, so a
/// degenerate order never flips the direction of the prints around it.
#[must_use]
pub fn build(fills: &[Fill], orders: &[Order]) -> Vec<Trade> {
    let by_id: HashMap<u64, &Order> = orders.iter().map(|o| (o.id, o)).collect();

    let mut joined: Vec<(&Fill, &Order)> = fills
        .iter()
        .filter_map(|f| by_id.get(&f.order_id).map(|o| (f, *o)))
        .collect();
    joined.sort_by_key(|(f, _)| f.timestamp);

    let mut trades = Vec::with_capacity(joined.len());
    let mut previous: Option<Decimal> = None;
    for (fill, order) in joined {
        let decorated = decorate(order);
        let direction = match previous {
            Some(prev) if decorated.valid_price => {
                if decorated.token_price >= prev {
                    PriceDirection::Up
                } else {
                    PriceDirection::Down
                }
            }
            _ => PriceDirection::Up,
        };
        if decorated.valid_price {
            previous = Some(decorated.token_price);
        }
        trades.push(Trade {
            timestamp: fill.timestamp,
            filling_user: fill.filling_user.clone(),
            order: decorated,
            price_direction: direction,
            formatted_timestamp: format_timestamp(fill.timestamp),
        });
    }

    // Newest first for presentation
    trades.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    trades
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Address;

    const ETHER_UNIT: u128 = 1_000_000_000_000_000_000;

    /// A buy order priced at `price_tenths / 10` ether per token.
    fn order(id: u64, price_tenths: u128) -> Order {
        Order {
            id,
            user: Address::new("0xabc0000000000000000000000000000000000def"),
            token_get: Address::new("0x1110000000000000000000000000000000000111"),
            amount_get: ETHER_UNIT,
            token_give: Address::ether(),
            amount_give: price_tenths * ETHER_UNIT / 10,
            timestamp: id,
        }
    }

    fn fill(order_id: u64, timestamp: u64) -> Fill {
        Fill {
            order_id,
            filling_user: Address::new("0x2220000000000000000000000000000000000222"),
            timestamp,
        }
    }

    #[test]
    fn colors_follow_price_sequence() {
        // Prices 1.0, 1.5, 1.2 in chronological order
        let orders = vec![order(1, 10), order(2, 15), order(3, 12)];
        let fills = vec![fill(1, 100), fill(2, 200), fill(3, 300)];

        let trades = build(&fills, &orders);

        // Newest first; reverse to read chronologically
        let directions: Vec<_> = trades
            .iter()
            .rev()
            .map(|t| t.price_direction)
            .collect();
        assert_eq!(
            directions,
            vec![PriceDirection::Up, PriceDirection::Up, PriceDirection::Down]
        );
    }

    #[test]
    fn equal_price_counts_as_up() {
        let orders = vec![order(1, 10), order(2, 10)];
        let fills = vec![fill(1, 100), fill(2, 200)];

        let trades = build(&fills, &orders);
        assert_eq!(trades[0].price_direction, PriceDirection::Up);
    }

    #[test]
    fn presentation_order_is_newest_first() {
        let orders = vec![order(1, 10), order(2, 10), order(3, 10)];
        let fills = vec![fill(2, 200), fill(1, 100), fill(3, 300)];

        let trades = build(&fills, &orders);
        let timestamps: Vec<u64> = trades.iter().map(|t| t.timestamp).collect();
        assert_eq!(timestamps, vec![300, 200, 100]);
    }

    #[test]
    fn equal_timestamps_keep_insertion_order() {
        let orders = vec![order(1, 10), order(2, 10), order(3, 10)];
        let fills = vec![fill(1, 100), fill(2, 100), fill(3, 100)];

        let trades = build(&fills, &orders);
        let ids: Vec<u64> = trades.iter().map(|t| t.order.order.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn fills_without_an_order_are_dropped() {
        let orders = vec![order(1, 10)];
        let fills = vec![fill(1, 100), fill(99, 200)];

        let trades = build(&fills, &orders);
        assert_eq!(trades.len(), 1);
        assert_eq!(trades[0].order.order.id, 1);
    }

    #[test]
    fn unpriceable_trade_does_not_flip_direction() {
        let mut degenerate = order(2, 10);
        degenerate.amount_get = 0; // zero token amount

        // Prices 1.0, <invalid>, 0.8
        let orders = vec![order(1, 10), degenerate, order(3, 8)];
        let fills = vec![fill(1, 100), fill(2, 200), fill(3, 300)];

        let trades = build(&fills, &orders);
        let directions: Vec<_> = trades.iter().rev().map(|t| t.price_direction).collect();
        // The degenerate print is neutral (up); 0.8 still compares to 1.0
        assert_eq!(
            directions,
            vec![PriceDirection::Up, PriceDirection::Up, PriceDirection::Down]
        );
    }

    #[test]
    fn empty_input_yields_empty_history() {
        assert!(build(&[], &[]).is_empty());
        assert!(build(&[fill(1, 100)], &[]).is_empty());
    }
}
