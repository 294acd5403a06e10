use axum::{
    extract::{rejection::QueryRejection, Query, State},
    http::{StatusCode, Uri},
    Json,
};
use chrono::Utc;
use serde_json::{json, Value};

use crate::error::{AppError, AppResult};
use crate::models::{
    service_version, AvailableEndpoints, HealthStatus, SearchParams, ServiceInfo, VideoResult,
    SERVICE_ID,
};
use crate::services::{runtime, video_search};

use super::AppState;

/// Service description
pub async fn root() -> Json<ServiceInfo> {
    Json(ServiceInfo::default())
}

/// Look up a video by free text or direct URL
pub async fn ytsearch(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> AppResult<Json<VideoResult>> {
    let Query(params) = params.map_err(|rejection| {
        tracing::debug!(error = %rejection, "Unreadable search query string");
        AppError::MissingQuery
    })?;
    let query = params.query().ok_or(AppError::MissingQuery)?;
    let video = video_search::find_video(state.search_provider.clone(), query).await?;
    Ok(Json(video))
}

/// Health check endpoint
pub async fn health_check(State(state): State<AppState>) -> (StatusCode, Json<HealthStatus>) {
    (
        StatusCode::OK,
        Json(HealthStatus {
            status: "healthy",
            service: SERVICE_ID,
            timestamp: Utc::now().to_rfc3339(),
            uptime: runtime::uptime_secs(state.started_at),
            memory: runtime::memory_snapshot(),
            version: service_version(),
        }),
    )
}

/// Any route not matched above
pub async fn not_found(uri: Uri) -> (StatusCode, Json<Value>) {
    tracing::debug!(uri = %uri, "Unknown endpoint");
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "available_endpoints": AvailableEndpoints::default(),
        })),
    )
}
