//! Order book view models.

use rust_decimal::Decimal;
use serde::Serialize;

use super::Side;
use super::order::Order;

/// An [`Order`] enriched with computed display fields.
///
/// Decoration is additive: the raw order is carried unchanged, so the
/// original ledger fields can always be recovered.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DecoratedOrder {
    #[serde(flatten)]
    pub order: Order,
    /// Ether leg of the order in display units.
    pub ether_amount: Decimal,
    /// Token leg of the order in display units.
    pub token_amount: Decimal,
    /// Ether per token, rounded to 5 decimal places. Zero when
    /// `valid_price` is false.
    pub token_price: Decimal,
    /// False when the token amount is zero and no price can be quoted.
    pub valid_price: bool,
    pub side: Side,
    /// Action a counterparty takes to fill this order.
    pub fill_action: Side,
    /// Placement time formatted for display (`h:mm:ss am/pm D/M`, UTC).
    pub formatted_timestamp: String,
}

/// The current set of unmatched orders, grouped by side.
///
/// Both sides are sorted by price descending, ties in ledger order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderBook {
    pub bids: Vec<DecoratedOrder>,
    pub asks: Vec<DecoratedOrder>,
}
