mod pipeline;
mod stages;

use std::sync::Arc;

use axum::{
    http::{header, HeaderName, Method, StatusCode},
    response::IntoResponse,
    routing::{get, post},
    Extension, Json, Router,
};
use chrono::{DateTime, Utc};
use serde::Serialize;
use tower::ServiceBuilder;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use trendscript_core::Phase;
use trendscript_pipeline::{Pipeline, PipelineError};

use crate::middleware::{request_id, RequestId, REQUEST_ID_HEADER};

#[derive(Clone)]
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub default_category_id: Arc<str>,
}

impl AppState {
    pub(super) fn category_or_default(&self, category_id: Option<String>) -> String {
        category_id
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty())
            .unwrap_or_else(|| self.default_category_id.to_string())
    }
}

#[derive(Debug, Serialize)]
pub struct ApiResponse<T: Serialize> {
    pub data: T,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ResponseMeta {
    pub request_id: String,
    pub timestamp: DateTime<Utc>,
}

#[derive(Debug, Serialize)]
pub struct ApiError {
    pub error: ErrorBody,
    pub meta: ResponseMeta,
}

#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub code: String,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phase: Option<Phase>,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct ServiceInfo {
    message: &'static str,
    version: &'static str,
}

#[derive(Debug, Serialize, PartialEq, Eq)]
struct HealthData {
    status: &'static str,
}

impl ResponseMeta {
    pub(super) fn new(request_id: String) -> Self {
        Self {
            request_id,
            timestamp: Utc::now(),
        }
    }
}

impl<T: Serialize> ApiResponse<T> {
    pub(super) fn new(data: T, request_id: String) -> Json<Self> {
        Json(Self {
            data,
            meta: ResponseMeta::new(request_id),
        })
    }
}

impl ApiError {
    pub fn new(
        request_id: impl Into<String>,
        code: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            error: ErrorBody {
                code: code.into(),
                message: message.into(),
                phase: None,
            },
            meta: ResponseMeta::new(request_id.into()),
        }
    }

    #[must_use]
    pub fn with_phase(mut self, phase: Phase) -> Self {
        self.error.phase = Some(phase);
        self
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match self.error.code.as_str() {
            "validation_error" => StatusCode::BAD_REQUEST,
            "upstream_error" => StatusCode::BAD_GATEWAY,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };
        (status, Json(self)).into_response()
    }
}

/// Translates a failed pipeline phase into the HTTP error shape.
pub(super) fn map_pipeline_error(request_id: String, error: &PipelineError) -> ApiError {
    tracing::error!(phase = %error.phase, error = %error.source, "pipeline phase failed");
    ApiError::new(request_id, "upstream_error", error.to_string()).with_phase(error.phase)
}

/// Returns a required text field unchanged, or a validation error when it is
/// missing or blank.
pub(super) fn require_text<'a>(
    request_id: &str,
    field: &str,
    value: Option<&'a str>,
) -> Result<&'a str, ApiError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or_else(|| {
            ApiError::new(
                request_id,
                "validation_error",
                format!("{field} is required"),
            )
        })
}

fn build_cors() -> CorsLayer {
    CorsLayer::new()
        .allow_origin(tower_http::cors::Any)
        .allow_methods([Method::GET, Method::POST])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static(REQUEST_ID_HEADER),
        ])
}

pub fn build_app(state: AppState) -> Router {
    Router::new()
        .route("/", get(root))
        .route("/api/v1/health", get(health))
        .route("/api/v1/extract-keyword", post(stages::extract_keyword))
        .route("/api/v1/fetch-trends", post(stages::fetch_trends))
        .route(
            "/api/v1/generate-viral-angle",
            post(stages::generate_viral_angle),
        )
        .route("/api/v1/generate-script", post(stages::generate_script))
        .route("/api/v1/full-pipeline", post(pipeline::full_pipeline))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(build_cors())
                .layer(axum::middleware::from_fn(request_id)),
        )
        .with_state(state)
}

async fn root(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    ApiResponse::new(
        ServiceInfo {
            message: "Viral Script Generator API",
            version: env!("CARGO_PKG_VERSION"),
        },
        req_id.0,
    )
}

async fn health(Extension(req_id): Extension<RequestId>) -> impl IntoResponse {
    ApiResponse::new(HealthData { status: "ok" }, req_id.0)
}
