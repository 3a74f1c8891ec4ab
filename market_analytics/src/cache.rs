//! Lock-free, read-mostly memo of rotation trails.
//!
//! Readers load an `Arc<HashMap<..>>` snapshot with no locking contention.
//! A miss builds the trail outside any lock and publishes a new snapshot with
//! an `rcu` swap, so concurrent readers see either the old or the new map.
//!
//! There is one entry per (ticker, settings, observation count). Each entry
//! carries fingerprints of the candles it was built from (date, date string,
//! close). When either fingerprint differs on the next read, the trail is
//! rebuilt and replaces the stale entry, so repeated polling with fresh data
//! keeps a single entry per ticker. [`TrailCache::invalidate`] and
//! [`TrailCache::clear`] drop entries outright.
//!
//! Nothing here is needed for correctness; [`build_rotation_trail`] returns
//! the same trail with or without the cache.

use std::{
    collections::HashMap,
    hash::{DefaultHasher, Hash, Hasher},
    sync::Arc,
};

use arc_swap::ArcSwap;
use tracing::trace;

use crate::{
    models::{candle::Candle, rotation::RotationPoint, settings::PeriodSettings},
    rotation::build_rotation_trail,
};

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct TrailKey {
    ticker: String,
    settings: PeriodSettings,
    observation_count: usize,
}

#[derive(Debug, Clone)]
struct CachedTrail {
    symbol: u64,
    benchmark: u64,
    trail: Arc<Vec<RotationPoint>>,
}

impl CachedTrail {
    fn is_current(&self, symbol: u64, benchmark: u64) -> bool {
        self.symbol == symbol && self.benchmark == benchmark
    }
}

type Trails = HashMap<TrailKey, CachedTrail>;

/// Read-through memo for [`build_rotation_trail`].
pub struct TrailCache {
    entries: ArcSwap<Trails>,
}

impl Default for TrailCache {
    fn default() -> Self {
        Self::new()
    }
}

impl TrailCache {
    pub fn new() -> Self {
        Self {
            entries: ArcSwap::from_pointee(Trails::new()),
        }
    }

    /// Returns the memoized trail for these inputs. On a miss, or when the
    /// candles changed since the entry was built, builds the trail and stores
    /// it in place of any previous entry for the same key.
    pub fn get_or_build(
        &self,
        ticker: &str,
        symbol_candles: &[Candle],
        benchmark_candles: &[Candle],
        settings: &PeriodSettings,
        observation_count: usize,
    ) -> Arc<Vec<RotationPoint>> {
        let key = TrailKey {
            ticker: ticker.to_string(),
            settings: *settings,
            observation_count,
        };
        let symbol = fingerprint(symbol_candles);
        let benchmark = fingerprint(benchmark_candles);

        match self.entries.load().get(&key) {
            Some(cached) if cached.is_current(symbol, benchmark) => {
                trace!(ticker, "rotation trail cache hit");
                return Arc::clone(&cached.trail);
            }
            Some(_) => trace!(ticker, "rotation trail cache stale"),
            None => trace!(ticker, "rotation trail cache miss"),
        }

        let trail = Arc::new(build_rotation_trail(
            ticker,
            symbol_candles,
            benchmark_candles,
            settings,
            observation_count,
        ));
        let entry = CachedTrail {
            symbol,
            benchmark,
            trail: Arc::clone(&trail),
        };
        self.entries.rcu(|current| {
            let mut next = Trails::clone(current);
            next.insert(key.clone(), entry.clone());
            next
        });
        trail
    }

    /// Drops every entry for `ticker`.
    pub fn invalidate(&self, ticker: &str) {
        self.entries.rcu(|current| {
            let mut next = Trails::clone(current);
            next.retain(|k, _| k.ticker != ticker);
            next
        });
    }

    /// Clears the cache to an empty map.
    pub fn clear(&self) {
        self.entries.store(Arc::new(Trails::new()));
    }

    pub fn len(&self) -> usize {
        self.entries.load().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.load().is_empty()
    }
}

fn fingerprint(candles: &[Candle]) -> u64 {
    let mut h = DefaultHasher::new();
    candles.len().hash(&mut h);
    for c in candles {
        c.date.hash(&mut h);
        c.date_str.hash(&mut h);
        c.close.to_bits().hash(&mut h);
    }
    h.finish()
}
