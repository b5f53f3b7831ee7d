//! Hourly OHLC aggregation and last-price summary.

use rust_decimal::Decimal;

use crate::models::candle::{Candle, ChartSeries};
use crate::models::trade::{PriceDirection, Trade};

/// Seconds per chart bucket (one UTC hour).
const BUCKET_SECS: u64 = 3600;

/// Builds the hourly candle series and last-price summary.
///
/// Trades are taken in chronological order and grouped by the floor of
/// their timestamp to the start of its UTC hour. Only buckets containing
/// at least one priced trade appear, so the series is not necessarily
/// contiguous. Trades without a quotable price are excluded from both the
/// candles and the summary.
///
/// The summary compares the last two chronological prints; with fewer than
/// two trades it degrades to a neutral direction, and with none the last
/// price is absent.
#[must_use]
pub fn build(trades: &[Trade]) -> ChartSeries {
    let mut chronological: Vec<&Trade> = trades
        .iter()
        .filter(|t| t.order.valid_price)
        .collect();
    chronological.sort_by_key(|t| t.timestamp);

    let mut candles: Vec<Candle> = Vec::new();
    for trade in &chronological {
        let price = trade.order.token_price;
        let bucket_start = trade.timestamp - trade.timestamp % BUCKET_SECS;
        match candles.last_mut() {
            Some(candle) if candle.bucket_start == bucket_start => {
                candle.high = candle.high.max(price);
                candle.low = candle.low.min(price);
                candle.close = price;
            }
            _ => candles.push(Candle {
                bucket_start,
                open: price,
                high: price,
                low: price,
                close: price,
            }),
        }
    }

    let prices: Vec<Decimal> = chronological.iter().map(|t| t.order.token_price).collect();
    let last_price = prices.last().copied();
    let last_price_direction = match prices.as_slice() {
        [.., second_last, last] if last < second_last => PriceDirection::Down,
        _ => PriceDirection::Up,
    };

    ChartSeries {
        last_price,
        last_price_direction,
        candles,
    }
}
