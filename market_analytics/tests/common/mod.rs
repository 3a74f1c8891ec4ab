#![allow(dead_code)]

use market_analytics::models::{
    breadth::{AdvanceDecline, DateCount},
    candle::Candle,
};

pub const DAY_MS: i64 = 86_400_000;

/// 2024-01-01T00:00:00Z
pub const START_MS: i64 = 1_704_067_200_000;

/// Daily candles starting 2024-01-01 with open = high = low = close.
pub fn candles(closes: &[f64]) -> Vec<Candle> {
    closes
        .iter()
        .enumerate()
        .map(|(i, &close)| {
            Candle::from_millis(START_MS + i as i64 * DAY_MS, close, close, close, close, 1_000)
                .expect("date in range")
        })
        .collect()
}

pub fn date(i: usize) -> String {
    format!("2024-01-{:02}", i + 1)
}

pub fn counts(values: &[u32]) -> Vec<DateCount> {
    values
        .iter()
        .enumerate()
        .map(|(i, &count)| DateCount {
            date_str: date(i),
            count,
        })
        .collect()
}

pub fn advance_decline(pairs: &[(u32, u32)]) -> Vec<AdvanceDecline> {
    pairs
        .iter()
        .enumerate()
        .map(|(i, &(advances, declines))| AdvanceDecline {
            date_str: date(i),
            advances,
            declines,
        })
        .collect()
}

pub fn assert_close(actual: f64, expected: f64) {
    assert!(
        (actual - expected).abs() < 1e-9,
        "expected {expected}, got {actual}"
    );
}
