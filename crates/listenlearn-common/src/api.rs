use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct HealthResponse {
    pub status: String,
}

impl HealthResponse {
    pub fn ok() -> Self {
        Self {
            status: "ok".to_string(),
        }
    }
}

/// Body of `POST /api/lessons/{lesson_id}/submit`.
#[derive(Debug, Clone, Deserialize, ToSchema)]
pub struct SubmitAnswersRequest {
    /// Free-text answers keyed by question id. Missing questions count as unanswered and
    /// unknown ids are ignored.
    pub answers: HashMap<String, String>,
}

/// Body of every failed request.
#[derive(Debug, Clone, Serialize, ToSchema)]
pub struct ErrorResponse {
    pub detail: String,
}
