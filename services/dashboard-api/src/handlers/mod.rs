//! Request handlers for the dashboard API.

pub mod map;
pub mod overlay;
pub mod panel;
pub mod series;
pub mod years;

use std::sync::Arc;

use axum::{
    extract::Extension,
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::get,
    Router,
};
use serde::Serialize;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use crate::state::AppState;

/// Build the full router over shared state.
pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(health_handler))
        .route("/years", get(years::years_handler))
        .route("/map/:year", get(map::map_handler))
        .route("/states/:name/series", get(series::series_handler))
        .route("/panel", get(panel::panel_handler))
        .route("/cache/stats", get(cache_stats_handler))
        .route("/overlay/:year", get(overlay::overlay_index_handler))
        .route("/overlay/:year/:tile", get(overlay::overlay_png_handler))
        .layer(Extension(state))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}

/// Error payload returned for all failed requests.
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub description: String,
}

/// API error with its HTTP status.
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    Internal(String),
}

impl ApiError {
    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }

    pub fn internal(msg: impl std::fmt::Display) -> Self {
        Self::Internal(msg.to_string())
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, description) = match self {
            ApiError::NotFound(d) => (StatusCode::NOT_FOUND, "NotFound", d),
            ApiError::Internal(d) => (StatusCode::INTERNAL_SERVER_ERROR, "InternalError", d),
        };

        (
            status,
            Json(ErrorBody {
                code: code.to_string(),
                description,
            }),
        )
            .into_response()
    }
}

#[derive(Debug, Serialize)]
struct HealthResponse {
    status: String,
}

/// GET /health - basic health check
async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

/// GET /cache/stats - aggregation cache counters
async fn cache_stats_handler(
    Extension(state): Extension<Arc<AppState>>,
) -> Json<zonal_stats::CacheStats> {
    Json(state.aggregator.cache_stats())
}
