//! Breadth primitives (inputs) and the derived rows built from them.
//!
//! Counts looked up by date are `Option<u32>` in the derived rows: `None`
//! means the series had no entry for that date, which is not the same as a
//! reported count of zero. Ratios treat `None` as zero.

use serde::{Deserialize, Serialize};

/// A breadth count for one date (e.g. stocks up more than 4% on the day).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateCount {
    pub date_str: String,
    pub count: u32,
}

/// One day of the advance/decline line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdvanceDecline {
    pub date_str: String,
    pub advances: u32,
    pub declines: u32,
}

impl AdvanceDecline {
    /// Issues that moved on the day.
    pub fn total(&self) -> u64 {
        u64::from(self.advances) + u64::from(self.declines)
    }
}

/// A real-valued breadth reading for one date (e.g. the global daily breadth score).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DateValue {
    pub date_str: String,
    pub value: f64,
}

/// The parallel breadth series the momentum rows are built from.
///
/// The up-4% line is the date axis; every other series is joined onto it
/// by `date_str`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct BreadthInputs {
    #[serde(default)]
    pub advance_decline_line: Vec<AdvanceDecline>,
    pub up_four_percent_line: Vec<DateCount>,
    #[serde(default)]
    pub down_four_percent_line: Vec<DateCount>,
    /// Stocks up 25%+ over a month.
    #[serde(default)]
    pub one_month_up: Vec<DateCount>,
    /// Stocks down 25%+ over a month.
    #[serde(default)]
    pub one_month_down: Vec<DateCount>,
    /// Stocks up 25%+ over a quarter.
    #[serde(default)]
    pub three_month_up: Vec<DateCount>,
    /// Stocks down 25%+ over a quarter.
    #[serde(default)]
    pub three_month_down: Vec<DateCount>,
}

/// Up/down ratios over the last 1, 5 and 10 dates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpDownRatios {
    pub day_ratio: f64,
    pub five_day_ratio: f64,
    pub ten_day_ratio: f64,
}

/// Short-term row, driven by the 4% daily movers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShortTermMomentumRow {
    pub date_str: String,
    pub up: u32,
    pub down: Option<u32>,
    #[serde(flatten)]
    pub ratios: UpDownRatios,
    /// Advances + declines on the date.
    pub adl_sum: Option<u64>,
    /// Share of moving issues that were 4% up-movers, in percent.
    pub daily_momo: f64,
}

/// Medium- or long-term row, driven by the 25% movers over a month or quarter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrendMomentumRow {
    pub date_str: String,
    pub up: Option<u32>,
    pub down: Option<u32>,
    #[serde(flatten)]
    pub ratios: UpDownRatios,
}

/// Composite momentum for one date.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MomentumRow {
    pub st_momentum_row: ShortTermMomentumRow,
    pub mt_momentum_row: TrendMomentumRow,
    pub lt_momentum_row: TrendMomentumRow,
}

impl MomentumRow {
    pub fn date_str(&self) -> &str {
        &self.st_momentum_row.date_str
    }
}

/// Global daily breadth with its signed percentile rank.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GlobalDailyBreadthPoint {
    pub date_str: String,
    pub global_daily_breadth: f64,
    /// In [-100, 100]; 0 for a zero reading.
    pub global_daily_breadth_percentile_rank: f64,
}
