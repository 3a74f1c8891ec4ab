//! Period settings for the rotation engine.
//!
//! ```
//! use market_analytics::models::settings::PeriodSettings;
//!
//! let s = PeriodSettings::new(5, 3, 0).unwrap();
//! assert_eq!(s.total_period(), 8);
//! assert!(PeriodSettings::new(0, 3, 0).is_err());
//! ```

use std::num::NonZeroUsize;

use serde::{Deserialize, Serialize};

use crate::errors::{AnalyticsError, Result};

const fn nz(n: usize) -> NonZeroUsize {
    match NonZeroUsize::new(n) {
        Some(nz) => nz,
        None => unreachable!(),
    }
}

/// Lookback lengths for one RS-Ratio/RS-Momentum computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawPeriodSettings")]
pub struct PeriodSettings {
    /// RS-Ratio lookback.
    pub period: NonZeroUsize,
    /// RS-Momentum lookback.
    pub momentum_period: NonZeroUsize,
    /// SMA window applied to the raw RS line; 0 or 1 disables smoothing.
    pub smoothing_period: usize,
}

impl PeriodSettings {
    pub const DEFAULT_PERIOD: NonZeroUsize = nz(125);
    pub const DEFAULT_MOMENTUM_PERIOD: NonZeroUsize = nz(10);

    /// Validating constructor for plain integers (config files, CLI flags).
    pub fn new(period: usize, momentum_period: usize, smoothing_period: usize) -> Result<Self> {
        let period = NonZeroUsize::new(period)
            .ok_or_else(|| AnalyticsError::invalid("period", "must be > 0"))?;
        let momentum_period = NonZeroUsize::new(momentum_period)
            .ok_or_else(|| AnalyticsError::invalid("momentum_period", "must be > 0"))?;
        period
            .get()
            .checked_add(momentum_period.get())
            .and_then(|sum| sum.checked_add(smoothing_period))
            .ok_or_else(|| {
                AnalyticsError::invalid("total_period", "overflows usize")
            })?;
        Ok(Self {
            period,
            momentum_period,
            smoothing_period,
        })
    }

    /// Number of candles one rotation point consumes.
    ///
    /// Saturates for hand-built values that bypass [`PeriodSettings::new`].
    pub const fn total_period(&self) -> usize {
        self.period
            .get()
            .saturating_add(self.momentum_period.get())
            .saturating_add(self.smoothing_period)
    }
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawPeriodSettings {
    period: usize,
    momentum_period: usize,
    #[serde(default)]
    smoothing_period: usize,
}

impl TryFrom<RawPeriodSettings> for PeriodSettings {
    type Error = AnalyticsError;

    fn try_from(raw: RawPeriodSettings) -> Result<Self> {
        Self::new(raw.period, raw.momentum_period, raw.smoothing_period)
    }
}

impl Default for PeriodSettings {
    fn default() -> Self {
        Self {
            period: Self::DEFAULT_PERIOD,
            momentum_period: Self::DEFAULT_MOMENTUM_PERIOD,
            smoothing_period: 0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_dashboard_settings() {
        let s = PeriodSettings::default();
        assert_eq!(s.period.get(), 125);
        assert_eq!(s.momentum_period.get(), 10);
        assert_eq!(s.smoothing_period, 0);
        assert_eq!(s.total_period(), 135);
    }

    #[test]
    fn zero_momentum_is_rejected() {
        match PeriodSettings::new(10, 0, 0) {
            Err(AnalyticsError::InvalidParameter { name, .. }) => {
                assert_eq!(name, "momentum_period")
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
    }

    #[test]
    fn overflowing_total_is_rejected() {
        match PeriodSettings::new(usize::MAX, 1, 0) {
            Err(AnalyticsError::InvalidParameter { name, reason }) => {
                assert_eq!(name, "total_period");
                assert!(reason.contains("overflow"), "{reason}");
            }
            other => panic!("expected InvalidParameter, got {other:?}"),
        }
        assert!(PeriodSettings::new(2, 2, usize::MAX - 3).is_err());
        assert_eq!(
            PeriodSettings::new(2, 2, usize::MAX - 4).unwrap().total_period(),
            usize::MAX
        );
    }

    #[test]
    fn hand_built_total_saturates() {
        let s = PeriodSettings {
            period: NonZeroUsize::MAX,
            momentum_period: nz(10),
            smoothing_period: 5,
        };
        assert_eq!(s.total_period(), usize::MAX);
    }

    #[test]
    fn deserialize_checks_the_total() {
        let json = format!(
            r#"{{"period":{},"momentumPeriod":1,"smoothingPeriod":0}}"#,
            usize::MAX
        );
        assert!(serde_json::from_str::<PeriodSettings>(&json).is_err());
    }

    #[test]
    fn deserializes_camel_case_and_rejects_zero() {
        let s: PeriodSettings =
            serde_json::from_str(r#"{"period":14,"momentumPeriod":5,"smoothingPeriod":2}"#)
                .unwrap();
        assert_eq!(s, PeriodSettings::new(14, 5, 2).unwrap());

        let bad = serde_json::from_str::<PeriodSettings>(
            r#"{"period":0,"momentumPeriod":5,"smoothingPeriod":2}"#,
        );
        assert!(bad.is_err());
    }
}
