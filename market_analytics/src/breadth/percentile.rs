//! Signed percentile rank of a breadth reading.
//!
//! Positive and negative readings are ranked separately by magnitude, so the
//! strongest positive day of the history ranks 100 and the strongest negative
//! day ranks -100. Zero readings rank 0 and do not take part in either
//! population.
//!
//! Ties take the first matching position in the sorted population rather
//! than the average rank.

use crate::models::breadth::{DateValue, GlobalDailyBreadthPoint};

/// Sorted magnitudes of the positive and negative populations of a series.
#[derive(Debug, Clone, Default)]
pub struct PercentileTable {
    positives: Vec<f64>,
    negatives: Vec<f64>,
}

impl PercentileTable {
    pub fn new(series: &[DateValue]) -> Self {
        let mut positives: Vec<f64> = series
            .iter()
            .filter(|p| p.value > 0.0)
            .map(|p| p.value)
            .collect();
        let mut negatives: Vec<f64> = series
            .iter()
            .filter(|p| p.value < 0.0)
            .map(|p| -p.value)
            .collect();
        positives.sort_by(f64::total_cmp);
        negatives.sort_by(f64::total_cmp);
        Self {
            positives,
            negatives,
        }
    }

    /// Rank of `value` in [-100, 100].
    pub fn rank(&self, value: f64) -> f64 {
        if value > 0.0 {
            signed_rank(&self.positives, value, 100.0)
        } else if value < 0.0 {
            signed_rank(&self.negatives, -value, -100.0)
        } else {
            0.0
        }
    }
}

fn signed_rank(sorted: &[f64], magnitude: f64, scale: f64) -> f64 {
    if sorted.is_empty() {
        return 0.0;
    }
    let first = sorted.partition_point(|m| *m < magnitude).min(sorted.len() - 1);
    scale * (first + 1) as f64 / sorted.len() as f64
}

/// Rank of the reading on `target_date` within `series`; `None` if the date is absent.
pub fn percentile_rank(series: &[DateValue], target_date: &str) -> Option<f64> {
    let target = series.iter().find(|p| p.date_str == target_date)?;
    Some(PercentileTable::new(series).rank(target.value))
}

/// Ranks every reading of `series` against the whole series.
pub fn rank_global_daily_breadth(series: &[DateValue]) -> Vec<GlobalDailyBreadthPoint> {
    let table = PercentileTable::new(series);
    series
        .iter()
        .map(|p| GlobalDailyBreadthPoint {
            date_str: p.date_str.clone(),
            global_daily_breadth: p.value,
            global_daily_breadth_percentile_rank: table.rank(p.value),
        })
        .collect()
}
