//! Crate-level error types.
//!
//! [`DexlensError`] unifies every error source (configuration, feed
//! parsing, JSON) behind a single enum so callers can match on the variant
//! they care about while still using the `?` operator for easy propagation.

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, DexlensError>;

/// Top-level error type returned by all public APIs.
#[derive(Debug, thiserror::Error)]
pub enum DexlensError {
    /// A configuration value was missing or malformed.
    #[error("configuration error: {0}")]
    Config(String),

    /// A ledger feed message did not have the expected shape.
    #[error("malformed ledger event: {0}")]
    MalformedEvent(String),

    /// JSON serialization or deserialization failed.
    #[error("json error: {0}")]
    Json(#[from] serde_json::Error),
}
