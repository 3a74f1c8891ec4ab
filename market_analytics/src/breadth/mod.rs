//! Breadth analytics: composite momentum rows and percentile-ranked global
//! daily breadth.

pub mod momentum;
pub mod percentile;

pub use momentum::{BreadthMomentumAggregator, build_momentum_rows};
pub use percentile::{PercentileTable, percentile_rank, rank_global_daily_breadth};

/// The last `lookback` entries of an oldest-to-newest series (all of it when
/// shorter).
pub fn trailing_window<T>(series: &[T], lookback: usize) -> &[T] {
    &series[series.len().saturating_sub(lookback)..]
}
