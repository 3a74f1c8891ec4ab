//! Rolling window statistics: simple and linearly weighted moving averages.
//!
//! Both averages refuse to compute over fewer samples than their window and
//! report [`AnalyticsError::InsufficientData`] instead; what to do about it is
//! the caller's decision.

use crate::errors::{AnalyticsError, Result};

fn check_window(window: usize, got: usize) -> Result<()> {
    if window == 0 {
        return Err(AnalyticsError::invalid("window", "must be > 0"));
    }
    if got < window {
        return Err(AnalyticsError::InsufficientData {
            required: window,
            got,
        });
    }
    Ok(())
}

/// Simple moving average aligned to the input.
///
/// `out[i]` is the mean of `series[i + 1 - window..=i]` for `i >= window - 1`
/// and `None` before that. A window of 1 returns the series unchanged.
pub fn sma(window: usize, series: &[f64]) -> Result<Vec<Option<f64>>> {
    let defined = sma_values(window, series)?;
    let mut out = vec![None; window - 1];
    out.extend(defined.into_iter().map(Some));
    Ok(out)
}

/// The defined tail of [`sma`]: `series.len() - window + 1` values.
pub fn sma_values(window: usize, series: &[f64]) -> Result<Vec<f64>> {
    check_window(window, series.len())?;
    let n = window as f64;
    Ok(series
        .windows(window)
        .map(|w| w.iter().sum::<f64>() / n)
        .collect())
}

/// Linearly weighted mean of the last `window` values of `series`.
///
/// The most recent sample has weight `window`, the oldest weight 1.
pub fn wma(window: usize, series: &[f64]) -> Result<f64> {
    check_window(window, series.len())?;
    let tail = &series[series.len() - window..];
    let weighted: f64 = tail
        .iter()
        .zip(1..=window)
        .map(|(v, w)| v * w as f64)
        .sum();
    let weight_sum = (window * (window + 1) / 2) as f64;
    Ok(weighted / weight_sum)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn sma_leaves_warmup_undefined() {
        let out = sma(3, &[1.0, 2.0, 3.0, 4.0, 5.0]).unwrap();
        assert_eq!(out, vec![None, None, Some(2.0), Some(3.0), Some(4.0)]);
    }

    #[test]
    fn sma_rejects_short_series() {
        assert_eq!(
            sma(4, &[1.0, 2.0]).unwrap_err(),
            AnalyticsError::InsufficientData {
                required: 4,
                got: 2
            }
        );
        assert!(matches!(
            sma(0, &[1.0]),
            Err(AnalyticsError::InvalidParameter { .. })
        ));
    }

    #[test]
    fn wma_weights_recent_samples_most() {
        // (1*1 + 2*2 + 3*3) / 6
        let v = wma(3, &[1.0, 2.0, 3.0]).unwrap();
        assert!((v - 14.0 / 6.0).abs() < 1e-12);

        // only the last three samples count: (2*1 + 3*2 + 4*3) / 6
        let v = wma(3, &[100.0, 2.0, 3.0, 4.0]).unwrap();
        assert!((v - 20.0 / 6.0).abs() < 1e-12);
    }

    #[test]
    fn wma_rejects_short_series() {
        assert_eq!(
            wma(5, &[1.0, 2.0, 3.0]).unwrap_err(),
            AnalyticsError::InsufficientData {
                required: 5,
                got: 3
            }
        );
    }

    proptest! {
        #[test]
        fn sma_of_window_one_is_identity(
            series in proptest::collection::vec(-1e6f64..1e6, 1..64),
        ) {
            let out = sma(1, &series).unwrap();
            let expected: Vec<Option<f64>> = series.iter().copied().map(Some).collect();
            prop_assert_eq!(out, expected);
        }

        #[test]
        fn sma_defined_exactly_after_warmup(
            series in proptest::collection::vec(-1e3f64..1e3, 1..64),
            window in 1usize..16,
        ) {
            prop_assume!(window <= series.len());
            let out = sma(window, &series).unwrap();
            prop_assert_eq!(out.len(), series.len());
            for (i, v) in out.iter().enumerate() {
                prop_assert_eq!(v.is_some(), i + 1 >= window);
            }
        }

        #[test]
        fn wma_of_constant_is_constant(
            c in -1e6f64..1e6,
            len in 1usize..64,
            window in 1usize..64,
        ) {
            prop_assume!(window <= len);
            let v = wma(window, &vec![c; len]).unwrap();
            prop_assert!((v - c).abs() <= 1e-9 * c.abs().max(1.0));
        }
    }
}
