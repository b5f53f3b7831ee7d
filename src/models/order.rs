//! Raw ledger event records.
//!
//! These mirror the three append-only feeds recorded on the external
//! ledger. They are immutable once appended; every derived view is
//! recomputed from them on demand.

use serde::{Deserialize, Serialize};

use super::Address;

/// An order as recorded on the ledger.
///
/// One side of every order is the ether pseudo-token; the other is the
/// traded token. Amounts are raw fixed-point integers (18 implied
/// decimals), serialized as decimal strings the way the ledger's RPC layer
/// delivers them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    pub id: u64,
    /// Account that placed the order (the maker).
    pub user: Address,
    /// Token the maker wants to receive.
    pub token_get: Address,
    #[serde(with = "wei_str")]
    pub amount_get: u128,
    /// Token the maker offers.
    pub token_give: Address,
    #[serde(with = "wei_str")]
    pub amount_give: u128,
    /// Ledger timestamp (Unix seconds).
    pub timestamp: u64,
}

/// Withdrawal of an order by its creator.
///
/// The ledger enforces that an order is cancelled at most once and only by
/// its own maker; this engine just consumes the record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cancellation {
    pub order_id: u64,
    pub timestamp: u64,
}

/// The record that an order was matched. At most one fill exists per order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Fill {
    pub order_id: u64,
    /// Account that took the other side (the taker).
    pub filling_user: Address,
    pub timestamp: u64,
}

/// String codec for raw wei amounts.
///
/// Amounts routinely exceed `u64::MAX` (anything above ~18 ether), which
/// JSON numbers cannot carry, so they travel as decimal strings.
pub(crate) mod wei_str {
    use serde::{Deserialize, Deserializer, Serializer, de};

    pub fn serialize<S: Serializer>(value: &u128, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(value)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u128, D::Error> {
        let raw = String::deserialize(deserializer)?;
        raw.parse()
            .map_err(|e| de::Error::custom(format!("invalid wei amount {raw:?}: {e}")))
    }
}
