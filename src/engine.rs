//! Pull-based projection engine with version-keyed memoization.

use serde::Serialize;
use tracing::debug;

use crate::Result;
use crate::config::EngineConfig;
use crate::events::EventLog;
use crate::feed::{self, LedgerEvent};
use crate::models::Address;
use crate::models::balance::{FormattedBalances, RawBalances};
use crate::models::book::{DecoratedOrder, OrderBook};
use crate::models::candle::ChartSeries;
use crate::models::order::{Cancellation, Fill, Order};
use crate::models::trade::{AccountFill, Trade};
use crate::projections::{account, balances, book, chart, reconcile, trades};

/// The full set of derived views over one ledger snapshot.
#[derive(Debug, Clone, Serialize)]
pub struct Views {
    pub order_book: OrderBook,
    /// Global trade history, newest first.
    pub trade_history: Vec<Trade>,
    pub chart: ChartSeries,
    /// Active account's open orders, newest first; empty with no account.
    pub my_open_orders: Vec<DecoratedOrder>,
    /// Active account's fills, oldest first; empty with no account.
    pub my_fills: Vec<AccountFill>,
    pub balances: FormattedBalances,
}

/// Owns the event log and recomputes all derived views on demand.
///
/// Recomputation is pure and total: the same snapshot always yields the
/// same views. The engine therefore caches the last result and keys it by
/// a state version that increments on every mutation (event append,
/// account switch, balance reading, loaded-flag change). Single-threaded
/// and synchronous; nothing here blocks.
#[derive(Debug, Default)]
pub struct ProjectionEngine {
    log: EventLog,
    active_account: Option<Address>,
    raw_balances: RawBalances,
    balances_loaded: bool,
    version: u64,
    cache: Option<(u64, Views)>,
}

impl ProjectionEngine {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an engine with the configured active account.
    #[must_use]
    pub fn from_config(config: &EngineConfig) -> Self {
        Self {
            active_account: config.account.clone(),
            ..Self::default()
        }
    }

    /// Read access to the underlying event log.
    #[must_use]
    pub fn log(&self) -> &EventLog {
        &self.log
    }

    /// Snapshot version; increments on every mutation.
    #[must_use]
    pub fn version(&self) -> u64 {
        self.version
    }

    #[must_use]
    pub fn account(&self) -> Option<&Address> {
        self.active_account.as_ref()
    }

    /// Applies a parsed ledger event.
    pub fn apply(&mut self, event: LedgerEvent) {
        feed::apply_event(&mut self.log, event);
        self.version += 1;
    }

    /// Parses one feed message and applies it.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`feed::parse_event`].
    pub fn apply_json(&mut self, raw: &str) -> Result<()> {
        if let Some(event) = feed::parse_event(raw)? {
            self.apply(event);
        }
        Ok(())
    }

    /// Parses a JSON array of feed messages and applies each, skipping
    /// malformed elements. Returns the number of events applied.
    ///
    /// # Errors
    ///
    /// Propagates the errors of [`feed::apply_batch`].
    pub fn apply_batch(&mut self, raw: &str) -> Result<usize> {
        let applied = feed::apply_batch(&mut self.log, raw)?;
        if applied > 0 {
            self.version += 1;
        }
        Ok(applied)
    }

    pub fn append_order(&mut self, order: Order) {
        self.log.append_order(order);
        self.version += 1;
    }

    pub fn append_cancellation(&mut self, cancellation: Cancellation) {
        self.log.append_cancellation(cancellation);
        self.version += 1;
    }

    pub fn append_fill(&mut self, fill: Fill) {
        self.log.append_fill(fill);
        self.version += 1;
    }

    /// Switches the active account for the per-account views.
    pub fn set_account(&mut self, account: Option<Address>) {
        if self.active_account != account {
            self.active_account = account;
            self.version += 1;
        }
    }

    /// Records a fresh balance reading for the active account.
    pub fn set_balances(&mut self, raw: RawBalances) {
        self.raw_balances = raw;
        self.balances_loaded = true;
        self.version += 1;
    }

    pub fn mark_orders_loaded(&mut self) {
        self.log.mark_orders_loaded();
        self.version += 1;
    }

    pub fn mark_cancellations_loaded(&mut self) {
        self.log.mark_cancellations_loaded();
        self.version += 1;
    }

    pub fn mark_fills_loaded(&mut self) {
        self.log.mark_fills_loaded();
        self.version += 1;
    }

    /// True once every event feed and the balance reading have completed
    /// their initial fetch.
    #[must_use]
    pub fn ready(&self) -> bool {
        self.log.loaded() && self.balances_loaded
    }

    /// Returns the views for the current snapshot, recomputing only when
    /// the state version moved since the last call.
    pub fn views(&mut self) -> &Views {
        let stale = match &self.cache {
            Some((version, _)) => *version != self.version,
            None => true,
        };
        if stale {
            debug!(
                version = self.version,
                orders = self.log.orders().len(),
                fills = self.log.fills().len(),
                cancellations = self.log.cancellations().len(),
                "recomputing projections"
            );
            let views = self.compute();
            self.cache = Some((self.version, views));
        }

        let Some((_, views)) = &self.cache else {
            unreachable!("cache populated above")
        };
        views
    }

    fn compute(&self) -> Views {
        let open = reconcile::open_orders(
            self.log.orders(),
            self.log.fills(),
            self.log.cancellations(),
        );
        let trade_history = trades::build(self.log.fills(), self.log.orders());
        let chart = chart::build(&trade_history);
        let (my_open_orders, my_fills) = match &self.active_account {
            Some(acct) => (
                account::my_open_orders(acct, &open),
                account::my_fills(acct, self.log.fills(), self.log.orders()),
            ),
            None => (Vec::new(), Vec::new()),
        };

        Views {
            order_book: book::build(&open),
            trade_history,
            chart,
            my_open_orders,
            my_fills,
            balances: balances::format_all(&self.raw_balances),
        }
    }
}
