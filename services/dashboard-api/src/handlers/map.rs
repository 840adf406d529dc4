//! Choropleth data for the per-year map page.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use serde_json::json;

use boundaries::geojson::{Feature, FeatureCollection, Geometry};
use zonal_stats::TONNES_PER_MEGATONNE;

use crate::handlers::ApiError;
use crate::state::AppState;

/// GET /map/:year - GeoJSON FeatureCollection with per-state emission
/// totals (million tonnes) for the choropleth layer.
pub async fn map_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(year): Path<i32>,
) -> Result<Json<FeatureCollection>, ApiError> {
    let files = state
        .index
        .files_for_year(year)
        .ok_or_else(|| ApiError::not_found(format!("no rasters for year {}", year)))?
        .to_vec();

    let sums = {
        let state = Arc::clone(&state);
        tokio::task::spawn_blocking(move || state.aggregator.sums_for_year(year, &files))
            .await
            .map_err(ApiError::internal)?
            .map_err(ApiError::internal)?
    };

    let features = state
        .aggregator
        .boundaries()
        .iter()
        .zip(sums.iter())
        .map(|(boundary, &sum)| {
            let mut polygons: Vec<Vec<Vec<Vec<f64>>>> = boundary
                .polygons
                .iter()
                .map(|polygon| {
                    polygon
                        .iter()
                        .map(|ring| ring.iter().map(|&(x, y)| vec![x, y]).collect())
                        .collect()
                })
                .collect();

            // a single part is a Polygon; disjoint parts must come out
            // as MultiPolygon or their exteriors would read as holes
            let geometry = if polygons.len() == 1 {
                Geometry::Polygon {
                    coordinates: polygons.remove(0),
                }
            } else {
                Geometry::MultiPolygon {
                    coordinates: polygons,
                }
            };

            let mut properties = HashMap::new();
            properties.insert("NAME".to_string(), json!(boundary.name));
            properties.insert(
                "emission_sum".to_string(),
                json!(sum / TONNES_PER_MEGATONNE),
            );
            properties.insert("year".to_string(), json!(year));

            Feature {
                type_: "Feature".to_string(),
                properties,
                geometry: Some(geometry),
            }
        })
        .collect();

    Ok(Json(FeatureCollection {
        type_: "FeatureCollection".to_string(),
        features,
    }))
}
