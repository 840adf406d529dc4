//! Service configuration from environment variables.

use serde::{Deserialize, Serialize};

/// Configuration for the dashboard API.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Directory holding the emission GeoTIFFs.
    pub data_dir: String,

    /// Path to the state boundary GeoJSON file.
    pub boundaries_file: String,

    /// Feature property carrying the state name.
    pub name_property: String,

    /// Aggregation cache capacity in year entries.
    pub cache_capacity: usize,

    /// Downsample factor applied when rendering overlays.
    pub overlay_downsample: usize,

    /// Overlay PNG cache capacity in entries.
    pub overlay_cache_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_dir: "data/AIR_CO2_USA".to_string(),
            boundaries_file: "data/us_states.geojson".to_string(),
            name_property: "NAME".to_string(),
            cache_capacity: 64,
            overlay_downsample: 4,
            overlay_cache_capacity: 32,
        }
    }
}

impl DashboardConfig {
    /// Load configuration from environment variables, falling back to
    /// defaults for anything unset.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(val) = std::env::var("ATLAS_DATA_DIR") {
            config.data_dir = val;
        }

        if let Ok(val) = std::env::var("ATLAS_BOUNDARIES_FILE") {
            config.boundaries_file = val;
        }

        if let Ok(val) = std::env::var("ATLAS_NAME_PROPERTY") {
            config.name_property = val;
        }

        if let Ok(val) = std::env::var("ATLAS_CACHE_CAPACITY") {
            if let Ok(n) = val.parse() {
                config.cache_capacity = n;
            }
        }

        if let Ok(val) = std::env::var("ATLAS_OVERLAY_DOWNSAMPLE") {
            if let Ok(n) = val.parse() {
                config.overlay_downsample = n;
            }
        }

        if let Ok(val) = std::env::var("ATLAS_OVERLAY_CACHE_CAPACITY") {
            if let Ok(n) = val.parse() {
                config.overlay_cache_capacity = n;
            }
        }

        config
    }
}
