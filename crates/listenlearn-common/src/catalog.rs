//! In-memory lesson catalog.
//!
//! The catalog is built once at startup and never mutated afterwards, so it can be shared
//! behind an `Arc` and read concurrently without locking.

use std::collections::HashSet;

use crate::error::CommonError;
use crate::model::{Lesson, LessonSummary, Question};

#[derive(Debug, Clone)]
pub struct Catalog {
    lessons: Vec<Lesson>,
}

impl Catalog {
    /// Build a catalog, rejecting duplicate lesson ids and duplicate question ids within a
    /// lesson. Question ids may repeat across lessons.
    pub fn new(lessons: Vec<Lesson>) -> Result<Self, CommonError> {
        let mut lesson_ids = HashSet::new();
        for lesson in &lessons {
            if !lesson_ids.insert(lesson.id.as_str()) {
                return Err(CommonError::DuplicateLesson(lesson.id.clone()));
            }

            let mut question_ids = HashSet::new();
            for question in &lesson.questions {
                if !question_ids.insert(question.id.as_str()) {
                    return Err(CommonError::DuplicateQuestion {
                        lesson_id: lesson.id.clone(),
                        question_id: question.id.clone(),
                    });
                }
            }
        }

        Ok(Self { lessons })
    }

    /// The lessons shipped with the service.
    pub fn builtin() -> Result<Self, CommonError> {
        Self::new(builtin_lessons())
    }

    pub fn list_summaries(&self) -> Vec<LessonSummary> {
        self.lessons.iter().map(Lesson::summary).collect()
    }

    /// Exact, case-sensitive match on the lesson id.
    pub fn find(&self, lesson_id: &str) -> Option<&Lesson> {
        self.lessons.iter().find(|lesson| lesson.id == lesson_id)
    }

    pub fn len(&self) -> usize {
        self.lessons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lessons.is_empty()
    }
}

fn question(id: &str, prompt: &str, answer: &str) -> Question {
    Question {
        id: id.to_string(),
        prompt: prompt.to_string(),
        answer: answer.to_string(),
    }
}

fn builtin_lessons() -> Vec<Lesson> {
    vec![
        Lesson {
            id: "lesson-1".to_string(),
            title: "Morning Routine in English".to_string(),
            level: "A2".to_string(),
            duration_minutes: 6,
            description: "Practice listening to daily routine vocabulary.".to_string(),
            audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-2.mp3".to_string(),
            transcript: "Every morning, I wake up at seven. I make a cup of coffee and check my \
schedule. On weekdays, I take the bus to the office. I like to arrive early \
so I can review my notes before the first meeting."
                .to_string(),
            questions: vec![
                question("q1", "What time does the speaker wake up?", "seven"),
                question("q2", "How does the speaker go to the office?", "bus"),
            ],
        },
        Lesson {
            id: "lesson-2".to_string(),
            title: "Travel Planning".to_string(),
            level: "B1".to_string(),
            duration_minutes: 8,
            description: "Listen for details about planning a trip.".to_string(),
            audio_url: "https://www.soundhelix.com/examples/mp3/SoundHelix-Song-3.mp3".to_string(),
            transcript: "We decided to visit Kyoto in October because the weather is mild. First, \
we compared flight prices and booked a small hotel near the train station. \
We also wrote a list of temples we want to see and reserved tickets for a \
tea ceremony."
                .to_string(),
            questions: vec![
                question("q1", "Why did they choose October?", "mild weather"),
                question("q2", "Where is the hotel located?", "near the train station"),
            ],
        },
    ]
}
