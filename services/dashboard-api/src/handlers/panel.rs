//! Full state × year panel and per-year table slices.

use std::sync::Arc;

use axum::{
    extract::{Extension, Query},
    response::Json,
};
use serde::{Deserialize, Serialize};

use zonal_stats::PanelRow;

use crate::handlers::ApiError;
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct PanelParams {
    /// Restrict to one year; rows come back sorted descending by
    /// emission (the table/bar-chart order).
    pub year: Option<i32>,
}

#[derive(Debug, Serialize)]
pub struct PanelResponse {
    pub rows: Vec<PanelRow>,
}

/// GET /panel - the long-form panel, optionally sliced to one year
pub async fn panel_handler(
    Extension(state): Extension<Arc<AppState>>,
    Query(params): Query<PanelParams>,
) -> Result<Json<PanelResponse>, ApiError> {
    let panel = state.panel().await.map_err(ApiError::internal)?;

    let rows = match params.year {
        Some(year) => {
            let slice = panel.year_slice(year);
            if slice.is_empty() {
                return Err(ApiError::not_found(format!("no rasters for year {}", year)));
            }
            slice.into_iter().cloned().collect()
        }
        None => panel.rows().to_vec(),
    };

    Ok(Json(PanelResponse { rows }))
}
