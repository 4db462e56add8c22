/// Error types shared by the ListenLearn crates.
///
/// These errors describe a catalog that violates its identifier invariants. They can only
/// surface while the catalog is being built at startup; request handling never produces them.
/// Server-specific errors are defined in the server crate and wrap `CommonError` via `#[from]`.

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum CommonError {
    #[error("duplicate lesson id: {0}")]
    DuplicateLesson(String),

    #[error("duplicate question id {question_id} in lesson {lesson_id}")]
    DuplicateQuestion {
        lesson_id: String,
        question_id: String,
    },
}
