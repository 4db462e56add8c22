//! HTTP surface of the ListenLearn service.
//!
//! Routes:
//! - `GET  /api/health`: liveness probe
//! - `GET  /api/lessons`: lesson summaries in catalog order
//! - `GET  /api/lessons/{lesson_id}`: full lesson including transcript and answers
//! - `POST /api/lessons/{lesson_id}/submit`: grade a set of answers
//! - `GET  /openapi.json`: generated OpenAPI document

use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::HeaderValue;
use axum::routing::{get, post};
use axum::{Json, Router};
use tower_http::cors::{AllowHeaders, AllowMethods, AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::info;

use listenlearn_common::api::{ErrorResponse, HealthResponse, SubmitAnswersRequest};
use listenlearn_common::catalog::Catalog;
use listenlearn_common::grading::{self, GradingResult};
use listenlearn_common::model::{Lesson, LessonSummary};

use crate::error::ApiError;
use crate::extract::JsonBody;
use crate::openapi;

const CORS_MAX_AGE: Duration = Duration::from_secs(600);

/// Read-only state shared by every request.
#[derive(Clone)]
pub struct AppState {
    catalog: Arc<Catalog>,
}

pub fn create_app(catalog: Arc<Catalog>, cors_origins: Vec<HeaderValue>) -> Router {
    Router::new()
        .nest("/api", api_router())
        .route("/openapi.json", get(openapi::openapi_json))
        .layer(cors_layer(cors_origins))
        .layer(TraceLayer::new_for_http())
        .with_state(AppState { catalog })
}

fn api_router() -> Router<AppState> {
    Router::new()
        .route("/health", get(health))
        .route("/lessons", get(list_lessons))
        .route("/lessons/{lesson_id}", get(get_lesson))
        .route("/lessons/{lesson_id}/submit", post(submit_answers))
}

// Credentials rule out `*` for methods and headers, so both are mirrored from the preflight.
fn cors_layer(origins: Vec<HeaderValue>) -> CorsLayer {
    CorsLayer::new()
        .allow_origin(AllowOrigin::list(origins))
        .allow_methods(AllowMethods::mirror_request())
        .allow_headers(AllowHeaders::mirror_request())
        .allow_credentials(true)
        .max_age(CORS_MAX_AGE)
}

fn find_lesson<'a>(catalog: &'a Catalog, lesson_id: &str) -> Result<&'a Lesson, ApiError> {
    catalog
        .find(lesson_id)
        .ok_or_else(|| ApiError::LessonNotFound(lesson_id.to_string()))
}

#[utoipa::path(
    get,
    path = "/api/health",
    responses(
        (status = OK, body = HealthResponse, description = "Service is up"),
    ),
    tag = "util"
)]
pub(crate) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse::ok())
}

#[utoipa::path(
    get,
    path = "/api/lessons",
    responses(
        (status = OK, body = Vec<LessonSummary>, description = "All lessons in catalog order"),
    ),
    tag = "lessons"
)]
pub(crate) async fn list_lessons(State(state): State<AppState>) -> Json<Vec<LessonSummary>> {
    Json(state.catalog.list_summaries())
}

#[utoipa::path(
    get,
    path = "/api/lessons/{lesson_id}",
    params(
        ("lesson_id" = String, Path, description = "Lesson identifier"),
    ),
    responses(
        (status = OK, body = Lesson, description = "Lesson with transcript and questions"),
        (status = NOT_FOUND, body = ErrorResponse, description = "Unknown lesson id"),
    ),
    tag = "lessons"
)]
pub(crate) async fn get_lesson(
    State(state): State<AppState>,
    Path(lesson_id): Path<String>,
) -> Result<Json<Lesson>, ApiError> {
    let lesson = find_lesson(&state.catalog, &lesson_id)?;
    Ok(Json(lesson.clone()))
}

#[utoipa::path(
    post,
    path = "/api/lessons/{lesson_id}/submit",
    params(
        ("lesson_id" = String, Path, description = "Lesson identifier"),
    ),
    request_body = SubmitAnswersRequest,
    responses(
        (status = OK, body = GradingResult, description = "Score and per-question feedback"),
        (status = NOT_FOUND, body = ErrorResponse, description = "Unknown lesson id"),
        (status = UNPROCESSABLE_ENTITY, body = ErrorResponse, description = "Body is not a valid submission"),
    ),
    tag = "lessons"
)]
pub(crate) async fn submit_answers(
    State(state): State<AppState>,
    Path(lesson_id): Path<String>,
    payload: Result<JsonBody<SubmitAnswersRequest>, ApiError>,
) -> Result<Json<GradingResult>, ApiError> {
    let lesson = find_lesson(&state.catalog, &lesson_id)?;
    let JsonBody(request) = payload?;

    let result = grading::grade(&lesson.questions, &request.answers);
    info!(
        lesson_id = %lesson.id,
        score = result.score,
        total = result.total,
        "graded submission"
    );
    Ok(Json(result))
}
