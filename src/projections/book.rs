//! Order book construction.

use crate::models::Side;
use crate::models::book::OrderBook;
use crate::models::order::Order;

use super::decorate::{decorate, price_desc};

/// Builds the order book from the open order set.
///
/// Every open order is decorated and partitioned by side. Both sides are
/// sorted by token price descending; asks are deliberately shown
/// highest-first as well, not best-price-first. The sort is stable, so
/// equal prices keep ledger insertion order, and orders without a
/// quotable price sort last.
#[must_use]
pub fn build(open_orders: &[Order]) -> OrderBook {
    let mut bids = Vec::new();
    let mut asks = Vec::new();

    for order in open_orders {
        let decorated = decorate(order);
        match decorated.side {
            Side::Buy => bids.push(decorated),
            Side::Sell => asks.push(decorated),
        }
    }

    bids.sort_by(price_desc);
    asks.sort_by(price_desc);

    OrderBook { bids, asks }
}
