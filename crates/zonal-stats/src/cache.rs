//! Caching for aggregated per-state sums.
//!
//! A year's aggregation reads every raster tile and rasterizes every
//! state polygon; dashboard interactions (slider drags, state
//! selection) would otherwise re-trigger that work on every request.
//! Results are memoized by (year, file set, boundary set); since
//! aggregation is a pure function of those inputs, a cached value is
//! bit-identical to a recomputation.

use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::num::NonZeroUsize;
use std::path::PathBuf;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use lru::LruCache;
use serde::Serialize;
use tracing::debug;

use emission_common::StateBoundary;

use crate::aggregate::aggregate_year;
use crate::error::Result;

/// Cache key: (year, file-set hash, boundary fingerprint).
pub type AggregateKey = (i32, u64, u64);

/// Cache statistics snapshot.
#[derive(Debug, Clone, Default, Serialize)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
    pub evictions: u64,
}

impl CacheStats {
    /// Hit rate as a percentage.
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}

/// LRU cache of per-state sum vectors.
pub struct AggregateCache {
    cache: LruCache<AggregateKey, Arc<Vec<f64>>>,
    hits: AtomicU64,
    misses: AtomicU64,
    evictions: AtomicU64,
}

impl AggregateCache {
    /// Create a cache holding up to `capacity` year entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            cache: LruCache::new(NonZeroUsize::new(capacity.max(1)).unwrap_or(NonZeroUsize::MIN)),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
            evictions: AtomicU64::new(0),
        }
    }

    /// Try to get a sum vector from the cache.
    pub fn get(&mut self, key: &AggregateKey) -> Option<Arc<Vec<f64>>> {
        if let Some(sums) = self.cache.get(key) {
            self.hits.fetch_add(1, Ordering::Relaxed);
            Some(Arc::clone(sums))
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            None
        }
    }

    /// Insert a sum vector, evicting the least recently used entry at
    /// capacity.
    pub fn insert(&mut self, key: AggregateKey, sums: Arc<Vec<f64>>) {
        if self.cache.len() == usize::from(self.cache.cap()) && !self.cache.contains(&key) {
            self.evictions.fetch_add(1, Ordering::Relaxed);
        }
        self.cache.put(key, sums);
    }

    /// Get cache statistics.
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.len(),
            evictions: self.evictions.load(Ordering::Relaxed),
        }
    }

    /// Clear all entries.
    pub fn clear(&mut self) {
        self.cache.clear();
    }
}

/// Aggregator bound to one boundary set, with a shared cache.
///
/// This is the type services hold in their application state: all
/// requests flow through `sums_for_year`, which computes on miss and
/// returns the shared vector on hit.
pub struct CachedAggregator {
    boundaries: Arc<Vec<StateBoundary>>,
    boundary_hash: u64,
    cache: Mutex<AggregateCache>,
}

impl CachedAggregator {
    /// Create an aggregator over the given boundaries with a cache of
    /// `capacity` year entries.
    pub fn new(boundaries: Arc<Vec<StateBoundary>>, capacity: usize) -> Self {
        let boundary_hash = fingerprint_boundaries(&boundaries);
        Self {
            boundaries,
            boundary_hash,
            cache: Mutex::new(AggregateCache::new(capacity)),
        }
    }

    /// The boundary set this aggregator sums against, in index order.
    pub fn boundaries(&self) -> &[StateBoundary] {
        &self.boundaries
    }

    /// Per-state sums (raw tonnes) for one year, computing on miss.
    ///
    /// The returned vector is aligned to `boundaries()` order.
    pub fn sums_for_year(&self, year: i32, files: &[PathBuf]) -> Result<Arc<Vec<f64>>> {
        let key = (year, hash_file_set(files), self.boundary_hash);

        if let Some(sums) = self.lock_cache().get(&key) {
            return Ok(sums);
        }

        // Compute outside the lock; concurrent misses for the same key
        // duplicate work but stay correct (pure function, same value).
        let sums = Arc::new(aggregate_year(year, files, &self.boundaries)?);
        debug!(year, states = sums.len(), "aggregated year");

        self.lock_cache().insert(key, Arc::clone(&sums));
        Ok(sums)
    }

    /// Cache statistics snapshot.
    pub fn cache_stats(&self) -> CacheStats {
        self.lock_cache().stats()
    }

    /// Drop all cached sums.
    pub fn clear_cache(&self) {
        self.lock_cache().clear();
    }

    fn lock_cache(&self) -> std::sync::MutexGuard<'_, AggregateCache> {
        // Poisoning only happens if aggregation panicked; the cache
        // itself is still consistent.
        self.cache.lock().unwrap_or_else(|e| e.into_inner())
    }
}

/// Hash a file set independent of its given order.
fn hash_file_set(files: &[PathBuf]) -> u64 {
    let mut sorted: Vec<&PathBuf> = files.iter().collect();
    sorted.sort();

    let mut hasher = DefaultHasher::new();
    for path in sorted {
        path.hash(&mut hasher);
    }
    hasher.finish()
}

/// Cheap fingerprint of a boundary set: names, polygon/ring shapes,
/// and first vertices. Enough to distinguish swapped boundary files.
fn fingerprint_boundaries(boundaries: &[StateBoundary]) -> u64 {
    let mut hasher = DefaultHasher::new();
    for b in boundaries {
        b.name.hash(&mut hasher);
        b.polygons.len().hash(&mut hasher);
        for polygon in &b.polygons {
            polygon.len().hash(&mut hasher);
            for ring in polygon {
                ring.len().hash(&mut hasher);
                if let Some(&(x, y)) = ring.first() {
                    x.to_bits().hash(&mut hasher);
                    y.to_bits().hash(&mut hasher);
                }
            }
        }
    }
    hasher.finish()
}
