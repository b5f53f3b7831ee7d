//! Balance view models.

use rust_decimal::Decimal;
use serde::Serialize;

/// Raw ledger balance readings for the active account, in wei.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RawBalances {
    /// Ether held in the account's own wallet.
    pub wallet_ether: u128,
    /// Tokens held in the account's own wallet.
    pub wallet_token: u128,
    /// Ether deposited with the exchange.
    pub exchange_ether: u128,
    /// Tokens deposited with the exchange.
    pub exchange_token: u128,
}

/// The same four balances converted to display units (2 decimal places).
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct FormattedBalances {
    pub wallet_ether: Decimal,
    pub wallet_token: Decimal,
    pub exchange_ether: Decimal,
    pub exchange_token: Decimal,
}
