//! Year listing for the dashboard's year slider.

use std::sync::Arc;

use axum::{extract::Extension, response::Json};
use serde::Serialize;

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct YearsResponse {
    pub years: Vec<i32>,
    pub min_year: Option<i32>,
    pub max_year: Option<i32>,
}

/// GET /years - all indexed years plus slider bounds
pub async fn years_handler(Extension(state): Extension<Arc<AppState>>) -> Json<YearsResponse> {
    Json(YearsResponse {
        years: state.index.years(),
        min_year: state.index.min_year(),
        max_year: state.index.max_year(),
    })
}
