//! Date-keyed alignment of parallel series.
//!
//! Every join goes through a [`DateIndex`] built once per series, so
//! aligning two series of length n is O(n) rather than a scan per date.
//! When a series repeats a date, the first occurrence wins.

use indexmap::IndexMap;

use crate::models::{
    breadth::{AdvanceDecline, DateCount, DateValue},
    candle::Candle,
};

/// Anything keyed by a calendar date string.
pub trait Dated {
    fn date_str(&self) -> &str;
}

impl Dated for Candle {
    fn date_str(&self) -> &str {
        &self.date_str
    }
}

impl Dated for DateCount {
    fn date_str(&self) -> &str {
        &self.date_str
    }
}

impl Dated for AdvanceDecline {
    fn date_str(&self) -> &str {
        &self.date_str
    }
}

impl Dated for DateValue {
    fn date_str(&self) -> &str {
        &self.date_str
    }
}

/// `date_str -> item` lookup over a borrowed series, in series order.
#[derive(Debug, Clone)]
pub struct DateIndex<'a, T> {
    by_date: IndexMap<&'a str, &'a T>,
}

impl<'a, T: Dated> DateIndex<'a, T> {
    pub fn new(items: &'a [T]) -> Self {
        let mut by_date = IndexMap::with_capacity(items.len());
        for item in items {
            by_date.entry(item.date_str()).or_insert(item);
        }
        Self { by_date }
    }

    pub fn get(&self, date_str: &str) -> Option<&'a T> {
        self.by_date.get(date_str).copied()
    }

    pub fn contains(&self, date_str: &str) -> bool {
        self.by_date.contains_key(date_str)
    }

    pub fn len(&self) -> usize {
        self.by_date.len()
    }

    pub fn is_empty(&self) -> bool {
        self.by_date.is_empty()
    }
}

impl DateIndex<'_, DateCount> {
    /// Count on `date_str`, `None` when the series has no entry for it.
    pub fn count(&self, date_str: &str) -> Option<u32> {
        self.get(date_str).map(|c| c.count)
    }
}

/// Pairs each item of `left` with the `right` item sharing its date; dates
/// missing from `right` are dropped. Order follows `left`.
pub fn inner_join<'l, 'r, L, R>(left: &'l [L], right: &DateIndex<'r, R>) -> Vec<(&'l L, &'r R)>
where
    L: Dated,
    R: Dated,
{
    left.iter()
        .filter_map(|l| right.get(l.date_str()).map(|r| (l, r)))
        .collect()
}

/// Pairs each item of `left` with the `right` item sharing its date, keeping
/// unmatched dates as `None`.
pub fn left_join<'l, 'r, L, R>(
    left: &'l [L],
    right: &DateIndex<'r, R>,
) -> Vec<(&'l L, Option<&'r R>)>
where
    L: Dated,
    R: Dated,
{
    left.iter().map(|l| (l, right.get(l.date_str()))).collect()
}
