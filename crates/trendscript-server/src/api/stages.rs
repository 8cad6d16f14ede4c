//! Single-step endpoints, one per pipeline phase.

use axum::{extract::State, Extension, Json};
use serde::{Deserialize, Serialize};
use trendscript_core::{TrendSet, TrendsData, ViralAngle};

use crate::middleware::RequestId;

use super::{map_pipeline_error, require_text, ApiError, ApiResponse, AppState};

// ---------------------------------------------------------------------------
// Request bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
pub(super) struct VideoIdeaRequest {
    pub video_idea: Option<String>,
    pub category_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct FetchTrendsRequest {
    pub keyword: Option<String>,
    pub category_id: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ViralAngleRequest {
    pub original_idea: Option<String>,
    #[serde(default)]
    pub category_trends: TrendSet,
    #[serde(default)]
    pub global_trends: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub(super) struct ScriptRequest {
    pub viral_angle: Option<String>,
}

// ---------------------------------------------------------------------------
// Response bodies
// ---------------------------------------------------------------------------

#[derive(Debug, Serialize)]
pub(super) struct KeywordResponse {
    keyword: String,
    original_idea: String,
}

#[derive(Debug, Serialize)]
pub(super) struct TrendsResponse {
    keyword: String,
    category_trends: TrendSet,
    global_trends: Vec<String>,
}

#[derive(Debug, Serialize)]
pub(super) struct ScriptResponse {
    script: String,
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

/// POST /api/v1/extract-keyword
pub(super) async fn extract_keyword(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<VideoIdeaRequest>,
) -> Result<Json<ApiResponse<KeywordResponse>>, ApiError> {
    let idea = require_text(&req_id.0, "video_idea", body.video_idea.as_deref())?;

    let keyword = state
        .pipeline
        .extract_keyword(idea)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(ApiResponse::new(
        KeywordResponse {
            keyword,
            original_idea: idea.to_string(),
        },
        req_id.0,
    ))
}

/// POST /api/v1/fetch-trends — upstream failures come back as empty lists.
pub(super) async fn fetch_trends(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<FetchTrendsRequest>,
) -> Result<Json<ApiResponse<TrendsResponse>>, ApiError> {
    let keyword = require_text(&req_id.0, "keyword", body.keyword.as_deref())?.to_string();
    let category_id = state.category_or_default(body.category_id);

    let TrendsData {
        category_trends,
        global_trends,
    } = state.pipeline.fetch_trends(&keyword, &category_id).await;

    Ok(ApiResponse::new(
        TrendsResponse {
            keyword,
            category_trends,
            global_trends,
        },
        req_id.0,
    ))
}

/// POST /api/v1/generate-viral-angle
pub(super) async fn generate_viral_angle(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ViralAngleRequest>,
) -> Result<Json<ApiResponse<ViralAngle>>, ApiError> {
    let idea = require_text(&req_id.0, "original_idea", body.original_idea.as_deref())?;
    let trends = TrendsData {
        category_trends: body.category_trends,
        global_trends: body.global_trends,
    };

    let angle = state
        .pipeline
        .generate_viral_angle(idea, &trends)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(ApiResponse::new(angle, req_id.0))
}

/// POST /api/v1/generate-script
pub(super) async fn generate_script(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<ScriptRequest>,
) -> Result<Json<ApiResponse<ScriptResponse>>, ApiError> {
    let viral_angle = require_text(&req_id.0, "viral_angle", body.viral_angle.as_deref())?;

    let script = state
        .pipeline
        .generate_script(viral_angle)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(ApiResponse::new(ScriptResponse { script }, req_id.0))
}
