//! Relative Rotation Graph (RRG) engine.
//!
//! A symbol's relative strength against a benchmark is the ratio of their
//! closes. Two normalizations turn that raw line into chart coordinates:
//!
//! - **RS-Ratio**: `100 * rs / wma(period, rs)`, the relative strength trend
//!   independent of absolute price levels.
//! - **RS-Momentum**: `100 * rs_ratio / wma(momentum_period, rs_ratio)`, the
//!   acceleration of that trend.
//!
//! Both are centered on 100, the point of parity with the benchmark.
//!
//! Each trail point is computed from its own window rather than one sliding
//! pass, so a point depends only on the `total_period()` candles ending at its
//! date.

use indexmap::IndexMap;
use tracing::debug;

use crate::{
    align::{DateIndex, inner_join},
    errors::{AnalyticsError, Result},
    models::{
        candle::{Candle, CandleSeries},
        rotation::{RotationCoordinates, RotationPoint},
        settings::PeriodSettings,
    },
    stats::{sma_values, wma},
};

/// Default number of trail points drawn per symbol.
pub const DEFAULT_OBSERVATION_COUNT: usize = 10;

/// Computes the RS-Ratio/RS-Momentum pair for the last date of two aligned
/// close windows.
///
/// The windows must be the same length and hold exactly
/// `settings.total_period()` closes.
///
/// Errors:
/// - [`AnalyticsError::LengthMismatch`] if the windows differ in length
/// - [`AnalyticsError::InsufficientData`] if they are shorter than `total_period()`
/// - [`AnalyticsError::InvalidParameter`] if they are longer than `total_period()`
/// - [`AnalyticsError::ComputationError`] if the result is not finite
///   (e.g. a zero or NaN benchmark close)
pub fn compute_rotation_point(
    symbol_closes: &[f64],
    benchmark_closes: &[f64],
    settings: &PeriodSettings,
) -> Result<RotationCoordinates> {
    if symbol_closes.len() != benchmark_closes.len() {
        return Err(AnalyticsError::LengthMismatch {
            symbol: symbol_closes.len(),
            benchmark: benchmark_closes.len(),
        });
    }
    let required = settings.total_period();
    let got = symbol_closes.len();
    if got < required {
        return Err(AnalyticsError::InsufficientData { required, got });
    }
    if got > required {
        return Err(AnalyticsError::invalid(
            "window",
            format!("expected exactly {required} closes, got {got}"),
        ));
    }

    let rs: Vec<f64> = symbol_closes
        .iter()
        .zip(benchmark_closes)
        .map(|(s, b)| s / b)
        .collect();

    let rs = if settings.smoothing_period > 1 {
        sma_values(settings.smoothing_period, &rs)?
    } else {
        rs
    };

    let period = settings.period.get();
    let rs_ratio = (period - 1..rs.len())
        .map(|i| wma(period, &rs[..=i]).map(|avg| 100.0 * rs[i] / avg))
        .collect::<Result<Vec<f64>>>()?;

    let momentum_period = settings.momentum_period.get();
    let rs_momentum = (momentum_period..rs_ratio.len())
        .map(|i| wma(momentum_period, &rs_ratio[..=i]).map(|avg| 100.0 * rs_ratio[i] / avg))
        .collect::<Result<Vec<f64>>>()?;

    match (rs_ratio.last(), rs_momentum.last()) {
        (Some(&rs_ratio), Some(&rs_momentum)) if rs_ratio.is_finite() && rs_momentum.is_finite() => {
            Ok(RotationCoordinates {
                rs_ratio,
                rs_momentum,
            })
        }
        (Some(_), Some(_)) => Err(AnalyticsError::ComputationError(
            "RS-Ratio/RS-Momentum is not finite".to_string(),
        )),
        _ => Err(AnalyticsError::ComputationError(
            "no RS-Momentum value could be produced".to_string(),
        )),
    }
}

/// Builds up to `observation_count` rotation points for `ticker`, most recent first.
///
/// Point `i` is computed from the `total_period()` symbol candles ending `i`
/// candles before the latest, joined to the benchmark by date. The trail
/// stops at the first window that cannot be filled (short history, or a date
/// missing from the benchmark) or whose computation fails; the points built
/// so far are returned. This never fails.
pub fn build_rotation_trail(
    ticker: &str,
    symbol_candles: &[Candle],
    benchmark_candles: &[Candle],
    settings: &PeriodSettings,
    observation_count: usize,
) -> Vec<RotationPoint> {
    let total = settings.total_period();
    let benchmark = DateIndex::new(benchmark_candles);
    let mut trail = Vec::with_capacity(observation_count.min(symbol_candles.len()));

    debug!(
        ticker,
        candles = symbol_candles.len(),
        benchmark_candles = benchmark_candles.len(),
        ?settings,
        observation_count,
        "building rotation trail"
    );

    for offset in 0..observation_count {
        let Some(start) = symbol_candles
            .len()
            .checked_sub(offset + total)
        else {
            debug!(ticker, offset, total, "trail truncated: history too short");
            break;
        };
        let window = &symbol_candles[start..start + total];

        let aligned = inner_join(window, &benchmark);
        if aligned.len() < total {
            debug!(
                ticker,
                offset,
                aligned = aligned.len(),
                total,
                "trail truncated: benchmark is missing dates"
            );
            break;
        }

        let (symbol_closes, benchmark_closes): (Vec<f64>, Vec<f64>) =
            aligned.iter().map(|(s, b)| (s.close, b.close)).unzip();

        let coords = match compute_rotation_point(&symbol_closes, &benchmark_closes, settings) {
            Ok(coords) => coords,
            Err(err) => {
                debug!(ticker, offset, %err, "trail truncated: computation failed");
                break;
            }
        };

        let (latest, latest_benchmark) = aligned[aligned.len() - 1];
        trail.push(RotationPoint {
            symbol: ticker.to_string(),
            date: latest.date,
            date_str: latest.date_str.clone(),
            price: latest.close,
            benchmark_price: latest_benchmark.close,
            rs_value: latest.close / latest_benchmark.close,
            rs_ratio: coords.rs_ratio,
            rs_momentum: coords.rs_momentum,
        });
    }

    trail
}

/// One trail per tracked symbol, keyed by ticker in input order.
pub fn build_rotation_trails(
    symbols: &[CandleSeries],
    benchmark_candles: &[Candle],
    settings: &PeriodSettings,
    observation_count: usize,
) -> IndexMap<String, Vec<RotationPoint>> {
    symbols
        .iter()
        .map(|series| {
            let trail = build_rotation_trail(
                &series.symbol,
                &series.candles,
                benchmark_candles,
                settings,
                observation_count,
            );
            (series.symbol.clone(), trail)
        })
        .collect()
}
