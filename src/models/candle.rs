//! OHLC chart view models.

use rust_decimal::Decimal;
use serde::Serialize;

use super::trade::PriceDirection;

/// OHLC aggregate of trade prices within one hour-aligned bucket.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Candle {
    /// Bucket start (Unix seconds, floored to the UTC hour).
    pub bucket_start: u64,
    pub open: Decimal,
    pub high: Decimal,
    pub low: Decimal,
    pub close: Decimal,
}

/// Hourly candle series plus a last-price summary.
///
/// Buckets with no trades are omitted, so the series is not necessarily
/// contiguous. The summary degrades gracefully below two trades.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ChartSeries {
    /// Price of the most recent trade, if any.
    pub last_price: Option<Decimal>,
    /// Up when the most recent trade printed at or above the one before it.
    pub last_price_direction: PriceDirection,
    /// Candles ordered by bucket start ascending.
    pub candles: Vec<Candle>,
}
