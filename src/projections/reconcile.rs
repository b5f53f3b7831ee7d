//! Open-order reconciliation.

use std::collections::HashSet;

use crate::models::order::{Cancellation, Fill, Order};

/// Computes the open order set: all orders minus filled minus cancelled.
///
/// A pure set difference by order id. Fills and cancellations referencing
/// an unknown id are ignored; the ledger is the source of truth and a
/// referential mismatch must not crash the engine. Output preserves ledger
/// insertion order; downstream builders sort as they need.
#[must_use]
pub fn open_orders(
    orders: &[Order],
    fills: &[Fill],
    cancellations: &[Cancellation],
) -> Vec<Order> {
    let filled: HashSet<u64> = fills.iter().map(|f| f.order_id).collect();
    let cancelled: HashSet<u64> = cancellations.iter().map(|c| c.order_id).collect();

    orders
        .iter()
        .filter(|o| !filled.contains(&o.id) && !cancelled.contains(&o.id))
        .cloned()
        .collect()
}
