//! Per-account views: open orders and fills.

use crate::models::Address;
use crate::models::book::DecoratedOrder;
use crate::models::order::{Fill, Order};
use crate::models::trade::AccountFill;

use super::decorate::decorate;
use super::trades;

/// Open orders belonging to `account`, decorated, newest first.
///
/// The sort is stable; orders placed at the same timestamp keep ledger
/// insertion order.
#[must_use]
pub fn my_open_orders(account: &Address, open_orders: &[Order]) -> Vec<DecoratedOrder> {
    let mut mine: Vec<DecoratedOrder> = open_orders
        .iter()
        .filter(|o| o.user == *account)
        .map(decorate)
        .collect();
    mine.sort_by(|a, b| b.order.timestamp.cmp(&a.order.timestamp));
    mine
}

/// Fills involving `account` as maker or taker, oldest first.
///
/// The per-account side is the maker's side when the account placed the
/// order, and its mirror when the account was the filling counterparty: a
/// buy from the maker's perspective is a sell from the taker's.
#[must_use]
pub fn my_fills(account: &Address, fills: &[Fill], orders: &[Order]) -> Vec<AccountFill> {
    let mut mine: Vec<AccountFill> = trades::build(fills, orders)
        .into_iter()
        .filter(|t| t.order.order.user == *account || t.filling_user == *account)
        .map(|trade| {
            let side = if trade.order.order.user == *account {
                trade.order.side
            } else {
                trade.order.side.counterpart()
            };
            AccountFill { trade, side }
        })
        .collect();
    mine.sort_by_key(|f| f.trade.timestamp);
    mine
}
