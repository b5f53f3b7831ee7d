//! Trade history view models.

use serde::Serialize;

use super::Address;
use super::Side;
use super::book::DecoratedOrder;

/// Direction of a trade's price relative to the print before it.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum PriceDirection {
    /// At or above the previous price. Also the convention for the first
    /// trade, which has nothing to compare against.
    #[default]
    Up,
    Down,
}

/// A fill joined with its order and decorated for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Trade {
    /// Fill timestamp (Unix seconds); orders carry their own placement time.
    pub timestamp: u64,
    /// Account that took the other side (the taker).
    pub filling_user: Address,
    pub order: DecoratedOrder,
    pub price_direction: PriceDirection,
    /// Fill time formatted for display (`h:mm:ss am/pm D/M`, UTC).
    pub formatted_timestamp: String,
}

/// A trade viewed from one account's perspective.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AccountFill {
    #[serde(flatten)]
    pub trade: Trade,
    /// Buy/sell from the account's own perspective: the maker's side when
    /// the account placed the order, its mirror when the account filled it.
    pub side: Side,
}
