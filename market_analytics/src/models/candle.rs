//! Canonical in-memory representation of a daily price candle (OHLCV).
//!
//! Candles are supplied by the caller, already ordered oldest-to-newest. The
//! calendar date string (`date_str`) is the join key used when aligning a
//! symbol against its benchmark.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::errors::{AnalyticsError, Result};

/// A single daily bar.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candle {
    /// Bar timestamp in epoch milliseconds (UTC).
    pub date: i64,
    /// Calendar date (`YYYY-MM-DD`), unique within a series.
    pub date_str: String,
    /// Opening price.
    pub open: f64,
    /// Highest price of the session.
    pub high: f64,
    /// Lowest price of the session.
    pub low: f64,
    /// Closing price. Every rotation computation reads this field.
    pub close: f64,
    /// Shares traded.
    pub volume: u64,
}

impl Candle {
    /// Builds a candle keyed by the UTC calendar date of `date`.
    ///
    /// Returns `None` if `date` is outside the range chrono can represent.
    pub fn from_millis(
        date: i64,
        open: f64,
        high: f64,
        low: f64,
        close: f64,
        volume: u64,
    ) -> Option<Self> {
        let date_str = DateTime::from_timestamp_millis(date)?
            .date_naive()
            .format("%Y-%m-%d")
            .to_string();
        Some(Self {
            date,
            date_str,
            open,
            high,
            low,
            close,
            volume,
        })
    }
}

/// A symbol together with its ordered candles.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CandleSeries {
    /// Ticker (e.g., "AAPL", "XLK").
    pub symbol: String,
    /// Candles sorted ascending by `date`.
    pub candles: Vec<Candle>,
}

/// Checks the ordering invariant of a candle sequence: strictly ascending
/// `date` (which also rules out duplicate bars).
pub fn check_ordering(candles: &[Candle]) -> Result<()> {
    match candles.windows(2).position(|w| w[0].date >= w[1].date) {
        Some(i) => Err(AnalyticsError::invalid(
            "candles",
            format!(
                "not strictly ascending at {} -> {}",
                candles[i].date_str,
                candles[i + 1].date_str
            ),
        )),
        None => Ok(()),
    }
}
