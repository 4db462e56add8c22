use axum::extract::rejection::BytesRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;

use listenlearn_common::api::ErrorResponse;
use listenlearn_common::error::CommonError;

/// Errors that stop the server from starting.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("config error: {0}")]
    Config(String),

    #[error(transparent)]
    Common(#[from] CommonError),
}

/// Errors returned to HTTP clients.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("Lesson not found")]
    LessonNotFound(String),

    #[error("{0}")]
    InvalidBody(String),

    #[error(transparent)]
    ReadBody(#[from] BytesRejection),
}

impl ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::LessonNotFound(_) => StatusCode::NOT_FOUND,
            Self::InvalidBody(_) => StatusCode::UNPROCESSABLE_ENTITY,
            Self::ReadBody(rejection) => rejection.status(),
        }
    }

    fn detail(&self) -> String {
        match self {
            Self::LessonNotFound(_) | Self::InvalidBody(_) => self.to_string(),
            Self::ReadBody(rejection) => rejection.body_text(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match &self {
            Self::LessonNotFound(lesson_id) => {
                tracing::info!(lesson_id = %lesson_id, "lesson not found");
            }
            Self::InvalidBody(reason) => {
                tracing::info!(error = %reason, "rejected request body");
            }
            Self::ReadBody(rejection) => {
                tracing::warn!(error = %rejection, "failed to read request body");
            }
        }
        let body = ErrorResponse {
            detail: self.detail(),
        };
        (self.status_code(), Json(body)).into_response()
    }
}
