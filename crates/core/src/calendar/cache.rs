//! Memoized month grids.
//!
//! A grid is a pure function of `(month, events, today)`. Views that flip back
//! and forth between months can keep a [`MonthGridCache`] over a fixed event
//! set instead of rebuilding the grid on every navigation.

use std::num::NonZeroUsize;

use chrono::NaiveDate;
use lru::LruCache;
use serde::Serialize;

use super::grid::build_grid;
use super::types::{Event, MonthGrid, YearMonth};

type GridKey = (YearMonth, Option<NaiveDate>);

/// Hit and miss counters of a [`MonthGridCache`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub len: usize,
}

/// LRU cache of built month grids over a fixed set of events.
#[derive(Debug)]
pub struct MonthGridCache {
    events: Vec<Event>,
    store: LruCache<GridKey, MonthGrid>,
    hits: u64,
    misses: u64,
}

impl MonthGridCache {
    /// Creates a cache holding at most `capacity` grids.
    pub fn new(events: Vec<Event>, capacity: NonZeroUsize) -> Self {
        Self {
            events,
            store: LruCache::new(capacity),
            hits: 0,
            misses: 0,
        }
    }

    /// Returns the events the grids are built from.
    pub fn events(&self) -> &[Event] {
        &self.events
    }

    /// Returns the grid for `month`, building it on a miss.
    pub fn grid(&mut self, month: YearMonth, today: Option<NaiveDate>) -> &MonthGrid {
        let key = (month, today);
        if self.store.contains(&key) {
            self.hits += 1;
        } else {
            self.misses += 1;
        }

        let events = &self.events;
        self.store
            .get_or_insert(key, || build_grid(month, events, today))
    }

    /// Replaces the event set. Cached grids are dropped since they may be stale.
    pub fn replace_events(&mut self, events: Vec<Event>) {
        self.events = events;
        self.store.clear();
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            len: self.store.len(),
        }
    }
}
