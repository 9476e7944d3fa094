use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;

use super::state::AppState;
use crate::error::{FetchError, PipelineError};
use crate::pipeline::Pipeline;
use crate::templates::ExtractionTemplate;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

pub async fn health_handler() -> impl IntoResponse {
    (
        StatusCode::OK,
        Json(HealthResponse {
            status: "healthy".to_string(),
        }),
    )
}

#[tracing::instrument(skip(state))]
pub async fn school_shootings_handler(State(state): State<AppState>) -> Response {
    respond(&state.pipeline, &state.templates.school_shootings).await
}

#[tracing::instrument(skip(state))]
pub async fn mass_shootings_handler(State(state): State<AppState>) -> Response {
    respond(&state.pipeline, &state.templates.mass_shootings_pre_2018).await
}

async fn respond<T: ExtractionTemplate>(pipeline: &Pipeline, template: &T) -> Response {
    match pipeline.handle(template).await {
        Ok(body) => (
            StatusCode::OK,
            [(header::CONTENT_TYPE, "application/json")],
            body,
        )
            .into_response(),
        Err(e) => error_response(template.name(), &e),
    }
}

/// Gateway errors for upstream failures; everything else is ours.
pub fn status_for(error: &PipelineError) -> StatusCode {
    match error {
        PipelineError::Fetch(FetchError::Timeout { .. }) => StatusCode::GATEWAY_TIMEOUT,
        PipelineError::Fetch(_) => StatusCode::BAD_GATEWAY,
        PipelineError::Parse(_) | PipelineError::Serialize(_) | PipelineError::Worker(_) => {
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

fn error_response(template: &str, error: &PipelineError) -> Response {
    let status = status_for(error);
    let message = match error {
        PipelineError::Fetch(e) => {
            tracing::warn!(template, error = %e, "Upstream fetch failed");
            format!("Failed to fetch source page: {}", e)
        }
        PipelineError::Parse(_) | PipelineError::Serialize(_) | PipelineError::Worker(_) => {
            tracing::error!(template, error = %error, "Extraction failed");
            "Failed to extract records from source page".to_string()
        }
    };

    (status, Json(ErrorResponse { error: message })).into_response()
}
