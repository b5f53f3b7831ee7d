//! Append-only storage of ledger events.

use crate::models::order::{Cancellation, Fill, Order};

/// Append-only store of the three ledger event feeds.
///
/// Events are immutable once appended; nothing here is ever deleted or
/// rewritten. A version counter increments on every mutation so consumers
/// can key memoized projections off a snapshot.
///
/// Each feed carries a `loaded` flag indicating whether its initial fetch
/// from the ledger has completed; views are computable either way, the
/// flags are informational for the presentation layer.
#[derive(Debug, Clone, Default)]
pub struct EventLog {
    orders: Vec<Order>,
    cancellations: Vec<Cancellation>,
    fills: Vec<Fill>,
    version: u64,
    orders_loaded: bool,
    cancellations_loaded: bool,
    fills_loaded: bool,
}

impl EventLog {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_order(&mut self, order: Order) {
        self.orders.push(order);
        self.version += 1;
    }

    pub fn append_cancellation(&mut self, cancellation: Cancellation) {
        self.cancellations.push(cancellation);
        self.version += 1;
    }

    pub fn append_fill(&mut self, fill: Fill) {
        self.fills.push(fill);
        self.version += 1;
    }

    /// All orders ever placed, in ledger order.
    #[must_use]
    pub fn orders(&self) -> &[Order] {
        &self.orders
    }

    #[must_use]
    pub fn cancellations(&self) -> &[Cancellation] {
        &self.cancellations
    }

    #[must_use]
    pub fn fills(&self) -> &[Fill] {
        &self.fills
    }

    /// Snapshot version; increments on every append and flag change.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    pub fn mark_orders_loaded(&mut self) {
        self.orders_loaded = true;
        self.version += 1;
    }

    pub fn mark_cancellations_loaded(&mut self) {
        self.cancellations_loaded = true;
        self.version += 1;
    }

    pub fn mark_fills_loaded(&mut self) {
        self.fills_loaded = true;
        self.version += 1;
    }

    /// True once all three feeds have completed their initial fetch.
    #[must_use]
    pub fn loaded(&self) -> bool {
        self.orders_loaded && self.cancellations_loaded && self.fills_loaded
    }
}
