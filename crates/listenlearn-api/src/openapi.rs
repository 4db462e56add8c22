use axum::Json;
use utoipa::OpenApi;

use listenlearn_common::api::{ErrorResponse, HealthResponse, SubmitAnswersRequest};
use listenlearn_common::grading::GradingResult;
use listenlearn_common::model::{Lesson, LessonSummary, Question};

use crate::server;

#[derive(OpenApi)]
#[openapi(
    info(title = "ListenLearn API"),
    paths(
        server::health,
        server::list_lessons,
        server::get_lesson,
        server::submit_answers,
    ),
    components(schemas(
        HealthResponse,
        LessonSummary,
        Lesson,
        Question,
        SubmitAnswersRequest,
        GradingResult,
        ErrorResponse,
    )),
    tags(
        (name = "lessons", description = "Listening lessons and answer grading"),
        (name = "util", description = "Service status"),
    )
)]
pub struct ApiDoc;

pub(crate) async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}
