//! HTTP API for the web interface.

use crate::generate::SiteGenerator;
use axum::{
    Json, Router,
    extract::State,
    http::{StatusCode, header},
    response::{Html, IntoResponse, Response},
    routing::{get, post},
};
use serde::Deserialize;
use serde_json::json;
use siteforge_error::SiteforgeError;
use siteforge_interface::SiteforgeDriver;
use std::sync::Arc;
use tracing::instrument;

const INDEX_PAGE: &str = include_str!("../assets/index.html");

/// API server state.
pub struct ApiState<D> {
    /// The generation pipeline.
    pub generator: Arc<SiteGenerator<D>>,
}

impl<D> Clone for ApiState<D> {
    fn clone(&self) -> Self {
        Self {
            generator: Arc::clone(&self.generator),
        }
    }
}

impl<D> ApiState<D> {
    /// Creates a new API state.
    pub fn new(generator: SiteGenerator<D>) -> Self {
        Self {
            generator: Arc::new(generator),
        }
    }
}

/// Creates the API router.
pub fn create_router<D>(generator: SiteGenerator<D>) -> Router
where
    D: SiteforgeDriver + 'static,
{
    let state = ApiState::new(generator);

    Router::new()
        .route("/", get(index))
        .route("/health", get(health_check))
        .route("/api/generate", post(generate_site::<D>))
        .with_state(state)
}

/// The single-page form: one text input, one generate trigger, and a
/// download trigger that appears once the browser holds the archive.
async fn index() -> impl IntoResponse {
    Html(INDEX_PAGE)
}

/// Health check endpoint.
#[instrument(skip_all)]
async fn health_check() -> impl IntoResponse {
    (StatusCode::OK, Json(json!({ "status": "healthy" })))
}

/// Body of a generation request.
#[derive(Debug, Deserialize)]
pub struct GeneratePayload {
    /// Free-text site description
    pub prompt: String,
}

/// Runs one generation cycle and answers with the archive bytes.
///
/// The archive exists only for the duration of this response; the browser
/// keeps the blob until the user downloads it.
#[instrument(skip(state, payload))]
async fn generate_site<D>(
    State(state): State<ApiState<D>>,
    Json(payload): Json<GeneratePayload>,
) -> Response
where
    D: SiteforgeDriver + 'static,
{
    match state.generator.generate(&payload.prompt).await {
        Ok(site) => (
            [
                (header::CONTENT_TYPE, "application/zip"),
                (
                    header::CONTENT_DISPOSITION,
                    "attachment; filename=\"site.zip\"",
                ),
            ],
            site.archive().clone(),
        )
            .into_response(),
        Err(err) => error_response(err),
    }
}

/// Maps a pipeline failure to a status code and a JSON error body.
fn error_response(err: SiteforgeError) -> Response {
    let status = match &err {
        SiteforgeError::EmptyPrompt => StatusCode::BAD_REQUEST,
        SiteforgeError::Gemini(_) => StatusCode::BAD_GATEWAY,
        SiteforgeError::Extract(_) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::INTERNAL_SERVER_ERROR,
    };
    (status, Json(json!({ "error": err.to_string() }))).into_response()
}
