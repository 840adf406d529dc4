//! Per-state time series for the line-chart page.

use std::sync::Arc;

use axum::{
    extract::{Extension, Path},
    response::Json,
};
use serde::Serialize;

use crate::handlers::ApiError;
use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct SeriesPoint {
    pub year: i32,
    pub emission_mt: f64,
}

#[derive(Debug, Serialize)]
pub struct SeriesResponse {
    pub state: String,
    pub points: Vec<SeriesPoint>,
}

/// GET /states/:name/series - one state's emissions across all years,
/// sorted by year.
pub async fn series_handler(
    Extension(state): Extension<Arc<AppState>>,
    Path(name): Path<String>,
) -> Result<Json<SeriesResponse>, ApiError> {
    let panel = state.panel().await.map_err(ApiError::internal)?;

    let points: Vec<SeriesPoint> = panel
        .state_series(&name)
        .into_iter()
        .map(|row| SeriesPoint {
            year: row.year,
            emission_mt: row.emission_mt,
        })
        .collect();

    if points.is_empty() {
        return Err(ApiError::not_found(format!("unknown state: {}", name)));
    }

    Ok(Json(SeriesResponse {
        state: name,
        points,
    }))
}
