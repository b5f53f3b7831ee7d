//! Derived-state projection engine for token exchange ledger events.
//!
//! Consumes three append-only ledger event feeds (orders placed, orders
//! cancelled, orders filled) plus raw balance readings, and deterministically
//! computes every derived view a presentation layer needs: the live order
//! book, the global trade history with price-direction coloring, per-account
//! open orders and fills, an hourly OHLC candle series, and display-formatted
//! balances.

pub mod config;
pub mod engine;
pub mod error;
pub mod events;
pub mod feed;
pub mod models;
pub mod projections;

pub use error::{DexlensError, Result};
