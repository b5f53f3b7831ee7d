//! Pure view builders over an immutable ledger snapshot.
//!
//! Every function here is total: called on empty input it returns an empty
//! result, and no comparator or aggregation ever panics on degenerate data.
//! Re-running any builder on the same snapshot yields identical output.

pub mod account;
pub mod balances;
pub mod book;
pub mod chart;
pub mod decorate;
pub mod reconcile;
pub mod trades;
