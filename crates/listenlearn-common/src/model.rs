use serde::Serialize;
use utoipa::ToSchema;

/// A comprehension question attached to a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Question {
    /// Identifier, unique within its lesson (e.g. "q1")
    pub id: String,
    /// Question shown to the learner
    pub prompt: String,
    /// Reference answer; a submission is correct when it contains this text
    pub answer: String,
}

/// A listening lesson with its audio, transcript and questions.
///
/// Serializes to the detail view of the lesson: answers are part of the payload, the catalog
/// does not hide them from clients.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct Lesson {
    /// Globally unique identifier, e.g. "lesson-1"
    pub id: String,
    pub title: String,
    /// Proficiency level tag, e.g. "A2", "B1"
    pub level: String,
    pub duration_minutes: u32,
    pub description: String,
    /// URL of the audio recording
    pub audio_url: String,
    /// Full text of the recording
    pub transcript: String,
    /// Questions in presentation order
    pub questions: Vec<Question>,
}

/// Listing view of a lesson: everything except audio, transcript and questions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct LessonSummary {
    pub id: String,
    pub title: String,
    pub level: String,
    pub duration_minutes: u32,
    pub description: String,
}

impl Lesson {
    pub fn summary(&self) -> LessonSummary {
        LessonSummary {
            id: self.id.clone(),
            title: self.title.clone(),
            level: self.level.clone(),
            duration_minutes: self.duration_minutes,
            description: self.description.clone(),
        }
    }
}
