//! Analytics configuration: parsing, defaults, and validation.
//!
//! A TOML document with two optional tables:
//!
//! ```toml
//! [rotation]
//! period = 125
//! momentum_period = 10
//! smoothing_period = 0
//! observation_count = 10
//! benchmark = "SPY"
//!
//! [breadth]
//! percentile_lookback = 252
//! ```
//!
//! Every key falls back to the default shown. Unknown keys are rejected so
//! typos surface instead of silently using a default.
//!
//! Entrypoints:
//! - Parse + validate from a TOML string: [`load_config_str`]
//! - Parse + validate from a file path: [`load_config_path`]

use anyhow::{Context, bail};
use serde::{Deserialize, Serialize};
use toml::from_str;

use crate::{models::settings::PeriodSettings, rotation::DEFAULT_OBSERVATION_COUNT};

/// One trading year of daily readings.
pub const DEFAULT_PERCENTILE_LOOKBACK: usize = 252;

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct AnalyticsConfig {
    pub rotation: RotationCfg,
    pub breadth: BreadthCfg,
}

/// Defaults for rotation trails.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct RotationCfg {
    /// RS-Ratio lookback.
    pub period: usize,
    /// RS-Momentum lookback.
    pub momentum_period: usize,
    /// SMA window over the raw RS line (0 = none).
    pub smoothing_period: usize,
    /// Trail length per symbol.
    pub observation_count: usize,
    /// Benchmark ticker shown alongside the trails.
    pub benchmark: String,
}

impl Default for RotationCfg {
    fn default() -> Self {
        let settings = PeriodSettings::default();
        Self {
            period: settings.period.get(),
            momentum_period: settings.momentum_period.get(),
            smoothing_period: settings.smoothing_period,
            observation_count: DEFAULT_OBSERVATION_COUNT,
            benchmark: "SPY".to_string(),
        }
    }
}

impl RotationCfg {
    pub fn settings(&self) -> anyhow::Result<PeriodSettings> {
        PeriodSettings::new(self.period, self.momentum_period, self.smoothing_period)
            .context("invalid [rotation] periods")
    }
}

/// Defaults for breadth ranking.
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
#[serde(default, deny_unknown_fields)]
pub struct BreadthCfg {
    /// Trailing readings the percentile rank is computed over.
    pub percentile_lookback: usize,
}

impl Default for BreadthCfg {
    fn default() -> Self {
        Self {
            percentile_lookback: DEFAULT_PERCENTILE_LOOKBACK,
        }
    }
}

/// Checks value ranges serde cannot express.
///
/// Errors:
/// - zero `period` or `momentum_period`
/// - zero `observation_count`
/// - zero `percentile_lookback`
/// - empty `benchmark` after trimming
pub fn validate_config(cfg: &AnalyticsConfig) -> anyhow::Result<()> {
    cfg.rotation.settings()?;
    if cfg.rotation.observation_count == 0 {
        bail!("rotation.observation_count must be > 0");
    }
    if cfg.rotation.benchmark.trim().is_empty() {
        bail!("rotation.benchmark cannot be empty");
    }
    if cfg.breadth.percentile_lookback == 0 {
        bail!("breadth.percentile_lookback must be > 0");
    }
    Ok(())
}

/// Parse and validate a configuration from a TOML string.
pub fn load_config_str(toml_str: &str) -> anyhow::Result<AnalyticsConfig> {
    let mut cfg: AnalyticsConfig = from_str(toml_str).context("failed to parse config TOML")?;
    cfg.rotation.benchmark = cfg.rotation.benchmark.trim().to_uppercase();
    validate_config(&cfg)?;
    Ok(cfg)
}

/// Read a configuration TOML file from disk, parse, and validate it.
pub fn load_config_path(path: impl AsRef<std::path::Path>) -> anyhow::Result<AnalyticsConfig> {
    let text = std::fs::read_to_string(path.as_ref())
        .with_context(|| format!("read config file {}", path.as_ref().display()))?;
    load_config_str(&text)
}
