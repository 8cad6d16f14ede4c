use axum::{extract::State, Extension, Json};
use trendscript_core::PipelineResult;

use crate::middleware::RequestId;

use super::stages::VideoIdeaRequest;
use super::{map_pipeline_error, require_text, ApiError, ApiResponse, AppState};

/// POST /api/v1/full-pipeline — run every phase in one call.
pub(super) async fn full_pipeline(
    State(state): State<AppState>,
    Extension(req_id): Extension<RequestId>,
    Json(body): Json<VideoIdeaRequest>,
) -> Result<Json<ApiResponse<PipelineResult>>, ApiError> {
    let idea = require_text(&req_id.0, "video_idea", body.video_idea.as_deref())?;
    let category_id = state.category_or_default(body.category_id);

    tracing::info!(request_id = %req_id.0, category_id = %category_id, "full pipeline requested");

    let result = state
        .pipeline
        .run(idea, &category_id)
        .await
        .map_err(|e| map_pipeline_error(req_id.0.clone(), &e))?;

    Ok(ApiResponse::new(result, req_id.0))
}
