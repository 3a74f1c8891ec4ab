//! Composite breadth momentum.
//!
//! Every presentation path (overview table, momentum chart, latest-day
//! summary) builds its rows through [`BreadthMomentumAggregator`].
//!
//! A row exists for axis index `i >= 10`, once ten earlier observations are
//! on record. For date `d` at such an index, with `W` the 10 axis dates
//! ending at `d`:
//! - short-term: 4% up/down movers, ratios over the last 1/5/10 dates of `W`,
//!   plus `daily_momo = 100 * up / (advances + declines)`
//! - medium-term: the same ratios over the 1-month 25% movers
//! - long-term: the same ratios over the 3-month 25% movers
//!
//! Ratios divide by `max(1, down)`. This is only a divide-by-zero guard: a
//! zero-down day reports the up count itself as its ratio.
//!
//! Unmatched dates never fail a row. They show up as `None` fields and count
//! as zero in ratios, so callers that need strict inputs must check for them.

use indexmap::IndexMap;

use crate::{
    align::{DateIndex, left_join},
    models::breadth::{
        AdvanceDecline, BreadthInputs, DateCount, MomentumRow, ShortTermMomentumRow,
        TrendMomentumRow, UpDownRatios,
    },
};

/// Axis dates per ratio window: the current date and the nine before it.
/// The first row also needs this many earlier axis dates.
pub const TRAILING_WINDOW: usize = 10;
const SHORT_WINDOW: usize = 5;

/// Up/down counts for one date; `None` = no entry in that series.
type UpDown = (Option<u32>, Option<u32>);

/// Date-indexed view over one set of [`BreadthInputs`].
///
/// Indexes are built once in [`BreadthMomentumAggregator::new`]; rows are then
/// independent pure functions of their date's neighborhood.
pub struct BreadthMomentumAggregator<'a> {
    axis: &'a [DateCount],
    axis_positions: IndexMap<&'a str, usize>,
    down_four: DateIndex<'a, DateCount>,
    advance_decline: DateIndex<'a, AdvanceDecline>,
    month_up: DateIndex<'a, DateCount>,
    month_down: DateIndex<'a, DateCount>,
    quarter_up: DateIndex<'a, DateCount>,
    quarter_down: DateIndex<'a, DateCount>,
}

impl<'a> BreadthMomentumAggregator<'a> {
    pub fn new(inputs: &'a BreadthInputs) -> Self {
        let axis = inputs.up_four_percent_line.as_slice();
        let mut axis_positions = IndexMap::with_capacity(axis.len());
        for (i, c) in axis.iter().enumerate() {
            axis_positions.entry(c.date_str.as_str()).or_insert(i);
        }
        Self {
            axis,
            axis_positions,
            down_four: DateIndex::new(&inputs.down_four_percent_line),
            advance_decline: DateIndex::new(&inputs.advance_decline_line),
            month_up: DateIndex::new(&inputs.one_month_up),
            month_down: DateIndex::new(&inputs.one_month_down),
            quarter_up: DateIndex::new(&inputs.three_month_up),
            quarter_down: DateIndex::new(&inputs.three_month_down),
        }
    }

    /// Rows for every axis date with [`TRAILING_WINDOW`] earlier dates, oldest first.
    pub fn rows(&self) -> Vec<MomentumRow> {
        (TRAILING_WINDOW..self.axis.len())
            .filter_map(|i| self.row_at(i))
            .collect()
    }

    /// Row for one date, `None` if the date is not on the axis or has fewer
    /// than [`TRAILING_WINDOW`] axis dates before it.
    pub fn row_for(&self, date_str: &str) -> Option<MomentumRow> {
        let i = *self.axis_positions.get(date_str)?;
        self.row_at(i)
    }

    fn row_at(&self, i: usize) -> Option<MomentumRow> {
        if i < TRAILING_WINDOW {
            return None;
        }
        let start = i + 1 - TRAILING_WINDOW;
        let window = self.axis.get(start..=i)?;
        let today = &window[window.len() - 1];
        let date = today.date_str.as_str();

        let short: Vec<UpDown> = left_join(window, &self.down_four)
            .into_iter()
            .map(|(up, down)| (Some(up.count), down.map(|d| d.count)))
            .collect();

        let adl_sum = self.advance_decline.get(date).map(AdvanceDecline::total);
        let daily_momo = match adl_sum {
            Some(sum) if sum > 0 => 100.0 * f64::from(today.count) / sum as f64,
            _ => 0.0,
        };

        Some(MomentumRow {
            st_momentum_row: ShortTermMomentumRow {
                date_str: today.date_str.clone(),
                up: today.count,
                down: self.down_four.count(date),
                ratios: up_down_ratios(&short),
                adl_sum,
                daily_momo,
            },
            mt_momentum_row: trend_row(window, &self.month_up, &self.month_down),
            lt_momentum_row: trend_row(window, &self.quarter_up, &self.quarter_down),
        })
    }
}

/// Builds the composite momentum rows for the full history in `inputs`.
pub fn build_momentum_rows(inputs: &BreadthInputs) -> Vec<MomentumRow> {
    BreadthMomentumAggregator::new(inputs).rows()
}

fn trend_row(
    window: &[DateCount],
    up: &DateIndex<'_, DateCount>,
    down: &DateIndex<'_, DateCount>,
) -> TrendMomentumRow {
    let pairs: Vec<UpDown> = window
        .iter()
        .map(|c| (up.count(&c.date_str), down.count(&c.date_str)))
        .collect();
    let (today_up, today_down) = pairs[pairs.len() - 1];
    TrendMomentumRow {
        date_str: window[window.len() - 1].date_str.clone(),
        up: today_up,
        down: today_down,
        ratios: up_down_ratios(&pairs),
    }
}

fn up_down_ratios(pairs: &[UpDown]) -> UpDownRatios {
    let n = pairs.len();
    UpDownRatios {
        day_ratio: floored_ratio(&pairs[n.saturating_sub(1)..]),
        five_day_ratio: floored_ratio(&pairs[n.saturating_sub(SHORT_WINDOW)..]),
        ten_day_ratio: floored_ratio(pairs),
    }
}

/// `sum(up) / max(1, sum(down))`, missing counts as zero.
fn floored_ratio(pairs: &[UpDown]) -> f64 {
    let (up, down) = pairs.iter().fold((0u64, 0u64), |(up, down), (u, d)| {
        (
            up + u64::from(u.unwrap_or(0)),
            down + u64::from(d.unwrap_or(0)),
        )
    });
    up as f64 / down.max(1) as f64
}
