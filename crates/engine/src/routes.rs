//! HTTP surface: document upload, health and metrics.

use std::sync::Arc;
use std::time::Duration;

use axum::body::Bytes;
use axum::extract::{DefaultBodyLimit, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use fra_common::api::documents::{ErrorResponse, PageReport, ProcessResponse};
use fra_common::config::AtlasConfig;
use fra_common::AtlasError;
use metrics_exporter_prometheus::PrometheusHandle;

use crate::export::to_feature_collection;
use crate::pipeline::{Pipeline, ProcessedBatch};

/// Shared application state accessible from axum handlers.
pub struct AppState {
    pub pipeline: Arc<Pipeline>,
    pub config: AtlasConfig,
    /// None when no Prometheus recorder is installed (e.g. in tests).
    pub metrics_handle: Option<PrometheusHandle>,
}

impl AppState {
    pub fn new(config: AtlasConfig, metrics_handle: Option<PrometheusHandle>) -> Self {
        Self {
            pipeline: Arc::new(Pipeline::from_config(&config)),
            config,
            metrics_handle,
        }
    }
}

pub fn router(state: Arc<AppState>) -> Router {
    let upload_limit = state.config.service.max_upload_bytes;

    Router::new()
        .route("/documents", post(process_document))
        .route("/health", get(health_handler))
        .route("/metrics", get(metrics_handler))
        .layer(DefaultBodyLimit::max(upload_limit))
        .with_state(state)
}

/// Run an uploaded document through the pipeline.
///
/// Decoding runs on the blocking pool, bounded by the configured timeout. A
/// timed-out decode is abandoned, not cancelled.
async fn process_document(
    State(state): State<Arc<AppState>>,
    body: Bytes,
) -> Result<Json<ProcessResponse>, ApiError> {
    let pipeline = Arc::clone(&state.pipeline);
    let timeout = Duration::from_millis(state.config.parser.decode_timeout_ms);
    let size = body.len();

    let task = tokio::task::spawn_blocking(move || pipeline.process(&body, None));

    let batch = match tokio::time::timeout(timeout, task).await {
        Ok(Ok(Ok(batch))) => batch,
        Ok(Ok(Err(e))) => return Err(AtlasError::from(e).into()),
        Ok(Err(e)) => return Err(AtlasError::Internal(format!("pipeline task failed: {e}")).into()),
        Err(_) => {
            metrics::counter!("routes.documents.timeout").increment(1);
            return Err(AtlasError::Timeout(format!(
                "document processing exceeded {}ms",
                timeout.as_millis()
            ))
            .into());
        }
    };

    tracing::debug!(batch_id = %batch.batch_id, bytes = size, "Upload processed");
    Ok(Json(build_response(batch)?))
}

fn build_response(batch: ProcessedBatch) -> Result<ProcessResponse, AtlasError> {
    let geojson = to_feature_collection(&batch.claims, batch.batch_id, batch.processed_at)?;

    let pages = batch
        .pages
        .iter()
        .map(|p| PageReport {
            page_number: p.page_number,
            status: p.status.clone(),
            chars: p.text.chars().count(),
            embedded_json: p.embedded_json.len(),
            claim_blocks: p.claim_blocks.len(),
        })
        .collect();

    Ok(ProcessResponse {
        batch_id: batch.batch_id,
        processed_at: batch.processed_at,
        pages,
        claims: batch.claims,
        summary: batch.summary,
        geojson,
    })
}

/// Health check endpoint. The pipeline has no external dependencies.
async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({ "status": "healthy" }))
}

/// Prometheus metrics endpoint.
async fn metrics_handler(State(state): State<Arc<AppState>>) -> String {
    state
        .metrics_handle
        .as_ref()
        .map(PrometheusHandle::render)
        .unwrap_or_default()
}

/// Maps pipeline errors onto HTTP status codes.
pub struct ApiError(AtlasError);

impl From<AtlasError> for ApiError {
    fn from(e: AtlasError) -> Self {
        Self(e)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self.0 {
            AtlasError::Decode(_) => StatusCode::UNPROCESSABLE_ENTITY,
            AtlasError::Timeout(_) => StatusCode::GATEWAY_TIMEOUT,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        };

        if self.0.is_document_error() {
            tracing::warn!(error = %self.0, "Document rejected");
        } else {
            tracing::error!(error = %self.0, "Request failed");
        }

        let body = ErrorResponse {
            error: self.0.to_string(),
        };
        (status, Json(body)).into_response()
    }
}
