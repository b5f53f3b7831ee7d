//! Shared domain models for ledger event projections.
//!
//! Raw ledger records live in [`order`]; decorated view records in
//! [`book`], [`trade`], [`candle`], and [`balance`].

pub mod balance;
pub mod book;
pub mod candle;
pub mod order;
pub mod trade;

use std::fmt;

use serde::{Deserialize, Serialize};

/// The distinguished pseudo-token address the ledger uses for ether.
pub const ETHER_ADDRESS: &str = "0x0000000000000000000000000000000000000000";

/// Fixed-point scale of raw ledger amounts (18 implied decimal places).
pub const WEI_PER_ETHER: u128 = 1_000_000_000_000_000_000;

/// A ledger account or token address (0x-prefixed hex string).
///
/// Normalized to lowercase on construction so checksummed and plain forms
/// of the same address compare equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub struct Address(String);

impl Address {
    pub fn new(hex: impl Into<String>) -> Self {
        Self(hex.into().to_ascii_lowercase())
    }

    /// The ether pseudo-token address.
    #[must_use]
    pub fn ether() -> Self {
        Self::new(ETHER_ADDRESS)
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// True if this is the ether pseudo-token.
    #[must_use]
    pub fn is_ether(&self) -> bool {
        self.0 == ETHER_ADDRESS
    }
}

impl From<String> for Address {
    fn from(hex: String) -> Self {
        Self::new(hex)
    }
}

impl From<Address> for String {
    fn from(address: Address) -> Self {
        address.0
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Whether an order acquires or disposes of the traded token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    Buy,
    Sell,
}

impl Side {
    /// The side a counterparty takes when filling an order of this side.
    #[must_use]
    pub fn counterpart(self) -> Side {
        match self {
            Side::Buy => Side::Sell,
            Side::Sell => Side::Buy,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Side::Buy => "buy",
            Side::Sell => "sell",
        }
    }
}
