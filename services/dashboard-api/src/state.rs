//! Application state for the dashboard API.

use std::num::NonZeroUsize;
use std::sync::{Arc, Mutex};

use anyhow::{Context, Result};
use lru::LruCache;
use tokio::sync::RwLock;
use tracing::info;

use boundaries::load_boundaries_with_property;
use emission_common::BoundingBox;
use raster_io::RasterIndex;
use zonal_stats::{CachedAggregator, EmissionPanel};

use crate::config::DashboardConfig;

/// One rendered overlay: PNG bytes plus placement bounds.
#[derive(Clone)]
pub struct RenderedOverlay {
    pub png: Arc<Vec<u8>>,
    pub bounds: BoundingBox,
}

/// Shared application state.
pub struct AppState {
    /// Service configuration.
    pub config: DashboardConfig,

    /// Raster files grouped by year.
    pub index: RasterIndex,

    /// Zonal aggregation with the shared sum cache.
    pub aggregator: CachedAggregator,

    /// Lazily built state × year panel.
    panel: RwLock<Option<Arc<EmissionPanel>>>,

    /// Rendered overlay cache, keyed by (year, tile index).
    overlay_cache: Mutex<LruCache<(i32, usize), RenderedOverlay>>,
}

impl AppState {
    /// Build state from configuration: scan the raster directory and
    /// load the boundary file.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        let index = RasterIndex::scan(&config.data_dir)
            .with_context(|| format!("scanning raster directory {}", config.data_dir))?;

        let state_boundaries =
            load_boundaries_with_property(&config.boundaries_file, &config.name_property)
                .with_context(|| format!("loading boundaries from {}", config.boundaries_file))?;

        info!(
            years = index.len(),
            states = state_boundaries.len(),
            "dashboard state initialized"
        );

        let aggregator = CachedAggregator::new(Arc::new(state_boundaries), config.cache_capacity);

        let overlay_capacity =
            NonZeroUsize::new(config.overlay_cache_capacity.max(1)).unwrap_or(NonZeroUsize::MIN);

        Ok(Self {
            config,
            index,
            aggregator,
            panel: RwLock::new(None),
            overlay_cache: Mutex::new(LruCache::new(overlay_capacity)),
        })
    }

    /// The full panel, building it on first use.
    ///
    /// Building runs on the blocking pool; per-year sums computed for
    /// earlier map requests are reused through the aggregation cache.
    pub async fn panel(self: Arc<Self>) -> Result<Arc<EmissionPanel>> {
        if let Some(panel) = self.panel.read().await.as_ref() {
            return Ok(Arc::clone(panel));
        }

        let state = Arc::clone(&self);
        let built = tokio::task::spawn_blocking(move || {
            EmissionPanel::build(&state.index, &state.aggregator)
        })
        .await??;
        let built = Arc::new(built);

        let mut slot = self.panel.write().await;
        // another request may have won the race; keep the first build
        if let Some(panel) = slot.as_ref() {
            return Ok(Arc::clone(panel));
        }
        *slot = Some(Arc::clone(&built));
        Ok(built)
    }

    /// Cached overlay lookup.
    pub fn cached_overlay(&self, year: i32, tile: usize) -> Option<RenderedOverlay> {
        self.overlay_cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .get(&(year, tile))
            .cloned()
    }

    /// Store a rendered overlay.
    pub fn store_overlay(&self, year: i32, tile: usize, overlay: RenderedOverlay) {
        self.overlay_cache
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .put((year, tile), overlay);
    }
}
