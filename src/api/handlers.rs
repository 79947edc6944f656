use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Extension, Json,
};
use serde::Deserialize;
use serde_json::{json, Value};

use crate::{
    error::{AppError, AppResult},
    middleware::request_id::RequestId,
    models::{MoodsResponse, RecommendationResponse},
};

use super::AppState;

#[derive(Debug, Deserialize)]
pub struct RecommendRequest {
    #[serde(default)]
    pub mood: Option<String>,
}

/// Liveness check at the root path
pub async fn status() -> Json<Value> {
    Json(json!({ "status": "Backend is running" }))
}

/// Health check endpoint
pub async fn health_check() -> (StatusCode, Json<Value>) {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Lists every mood with the genres it draws from
pub async fn moods() -> Json<MoodsResponse> {
    Json(MoodsResponse::all())
}

/// Recommends one anime for the submitted mood
pub async fn recommend(
    State(state): State<AppState>,
    Extension(request_id): Extension<RequestId>,
    body: Result<Json<RecommendRequest>, JsonRejection>,
) -> AppResult<Json<RecommendationResponse>> {
    let Json(request) = body.map_err(|rejection| {
        tracing::info!(request_id = %request_id, error = %rejection, "Rejected request body");
        AppError::BadRequest(rejection.body_text())
    })?;

    // A null or absent mood is treated like an empty one
    let mood = request.mood.unwrap_or_default();

    tracing::info!(
        request_id = %request_id,
        mood = %mood,
        "Processing recommendation request"
    );

    let recommendation = state.engine.recommend(&mood).await.map_err(|e| {
        tracing::info!(request_id = %request_id, error = %e, "Recommendation not served");
        e
    })?;

    Ok(Json(RecommendationResponse { recommendation }))
}
