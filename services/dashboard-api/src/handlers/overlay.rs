//! Raster overlay images for the map page.
//!
//! A year can have several raster tiles; the dashboard places one
//! image overlay per tile. `GET /overlay/:year` lists the tiles with
//! their placement bounds, `GET /overlay/:year/:tile` returns the PNG.
//! The normalization scale is shared across all of a year's tiles so
//! their colors are comparable.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    http::header,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;

use overlay_renderer::{create_png_auto, render_overlay, OverlayOptions, ValueScale};
use raster_io::open_raster_downsampled;

use crate::handlers::ApiError;
use crate::state::{AppState, RenderedOverlay};

#[derive(Debug, Serialize)]
pub struct OverlayTile {
    pub tile: usize,
    /// `[[south, west], [north, east]]` placement corners
    pub bounds: [[f64; 2]; 2],
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct OverlayIndexResponse {
    pub year: i32,
    pub tiles: Vec<OverlayTile>,
}

/// GET /overlay/:year - list the year's overlay tiles and bounds
pub async fn overlay_index_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(year): Path<i32>,
) -> Result<Json<OverlayIndexResponse>, ApiError> {
    let files = state
        .index
        .files_for_year(year)
        .ok_or_else(|| ApiError::not_found(format!("no rasters for year {}", year)))?;

    let mut tiles = Vec::with_capacity(files.len());
    for (tile, _) in files.iter().enumerate() {
        let rendered = rendered_overlay(&state, year, tile).await?;
        tiles.push(OverlayTile {
            tile,
            bounds: rendered.bounds.leaflet_corners(),
            url: format!("/overlay/{}/{}", year, tile),
        });
    }

    Ok(Json(OverlayIndexResponse { year, tiles }))
}

/// GET /overlay/:year/:tile - the rendered PNG for one tile
pub async fn overlay_png_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path((year, tile)): Path<(i32, usize)>,
) -> Result<Response, ApiError> {
    let rendered = rendered_overlay(&state, year, tile).await?;

    Ok((
        [(header::CONTENT_TYPE, "image/png")],
        rendered.png.as_ref().clone(),
    )
        .into_response())
}

/// Fetch a rendered overlay from the cache, rendering on miss.
async fn rendered_overlay(
    state: &Arc<AppState>,
    year: i32,
    tile: usize,
) -> Result<RenderedOverlay, ApiError> {
    if let Some(rendered) = state.cached_overlay(year, tile) {
        return Ok(rendered);
    }

    let files = state
        .index
        .files_for_year(year)
        .ok_or_else(|| ApiError::not_found(format!("no rasters for year {}", year)))?;
    let path = files
        .get(tile)
        .ok_or_else(|| {
            ApiError::not_found(format!("year {} has no tile {}", year, tile))
        })?
        .clone();
    let all_files = files.to_vec();

    let downsample = state.config.overlay_downsample;
    let rendered = tokio::task::spawn_blocking(move || -> Result<RenderedOverlay, ApiError> {
        // scale over every tile of the year, full resolution
        let mut tile_data: Vec<Vec<f32>> = Vec::with_capacity(all_files.len());
        for f in &all_files {
            let t = raster_io::open_raster(f).map_err(ApiError::internal)?;
            tile_data.push(t.data);
        }
        let scale = ValueScale::from_tiles(tile_data.iter().map(|d| d.as_slice()))
            .map_err(ApiError::internal)?;

        let raster = open_raster_downsampled(&path, downsample).map_err(ApiError::internal)?;
        let rgba = render_overlay(&raster, &scale, &OverlayOptions::default());
        let png = create_png_auto(&rgba, raster.width, raster.height).map_err(ApiError::internal)?;

        Ok(RenderedOverlay {
            png: Arc::new(png),
            bounds: raster.bounds(),
        })
    })
    .await
    .map_err(ApiError::internal)??;

    state.store_overlay(year, tile, rendered.clone());
    Ok(rendered)
}
