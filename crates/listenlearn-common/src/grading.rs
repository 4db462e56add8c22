//! Keyword grading of free-text answers.
//!
//! An answer is correct when, after trimming and lowercasing both sides, it is non-empty and
//! contains the reference answer. Matching is plain substring containment with no word
//! boundaries, so a reference of "bus" is satisfied by "business".

use std::collections::HashMap;

use indexmap::IndexMap;
use serde::Serialize;
use utoipa::ToSchema;

use crate::model::Question;

pub const CORRECT_FEEDBACK: &str = "✅ 正确";
const INCORRECT_FEEDBACK_PREFIX: &str = "❌ 参考答案: ";

/// Outcome of grading one submission against a lesson.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct GradingResult {
    /// Number of questions answered correctly
    pub score: usize,
    /// Number of questions in the lesson
    pub total: usize,
    /// One message per question, in question order
    pub feedback: IndexMap<String, String>,
}

/// Grade `answers` against `questions`.
///
/// Every question gets a feedback entry whether or not it was answered, so
/// `feedback.len() == total` and `score <= total` always hold.
pub fn grade(questions: &[Question], answers: &HashMap<String, String>) -> GradingResult {
    let mut feedback = IndexMap::with_capacity(questions.len());
    let mut score = 0;

    for question in questions {
        let submitted = answers.get(&question.id).map(String::as_str).unwrap_or_default();
        if is_correct(submitted, &question.answer) {
            score += 1;
            feedback.insert(question.id.clone(), CORRECT_FEEDBACK.to_string());
        } else {
            feedback.insert(question.id.clone(), incorrect_feedback(&question.answer));
        }
    }

    GradingResult {
        score,
        total: questions.len(),
        feedback,
    }
}

/// Empty submissions never match, even against an empty reference.
pub fn is_correct(submitted: &str, reference: &str) -> bool {
    let submitted = normalize(submitted);
    let expected = normalize(reference);
    !submitted.is_empty() && submitted.contains(&expected)
}

/// The message carries the reference answer as written, not its normalized form.
pub fn incorrect_feedback(reference: &str) -> String {
    format!("{INCORRECT_FEEDBACK_PREFIX}{reference}")
}

/// Trims Unicode whitespace plus the ASCII separators U+001C..=U+001F, then lowercases.
fn normalize(text: &str) -> String {
    text.trim_matches(|c: char| c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c))
        .to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, answer: &str) -> Question {
        Question {
            id: id.to_string(),
            prompt: format!("prompt for {id}"),
            answer: answer.to_string(),
        }
    }

    fn answers(pairs: &[(&str, &str)]) -> HashMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn containment_ignores_case_and_surrounding_whitespace() {
        assert!(is_correct(" Seven ", "seven"));
        assert!(is_correct("around SEVEN o'clock", "Seven"));
        assert!(is_correct("the hotel is near the train station", "  near the train station "));
    }

    #[test]
    fn empty_submission_is_never_correct() {
        assert!(!is_correct("", "seven"));
        assert!(!is_correct("   \t\n", "seven"));
        assert!(!is_correct("", ""));
    }

    #[test]
    fn empty_reference_matches_any_non_empty_answer() {
        assert!(is_correct("anything", ""));
        assert!(is_correct("x", "   "));
    }

    #[test]
    fn separator_characters_are_trimmed_like_whitespace() {
        assert!(!is_correct("\u{1c}\u{1d}\u{1e}\u{1f}", ""));
        assert!(is_correct("\u{1f} Seven\u{1c}", "seven"));
        assert!(is_correct("seven", "\u{1e}seven\u{1d}"));
    }

    #[test]
    fn matching_has_no_word_boundaries() {
        assert!(is_correct("business", "bus"));
        assert!(is_correct("sevenfold", "seven"));
    }

    #[test]
    fn reference_containing_submission_is_not_enough() {
        assert!(!is_correct("train", "near the train station"));
        assert!(!is_correct("mild", "mild weather"));
    }

    #[test]
    fn grades_mixed_submission() {
        let questions = vec![question("q1", "seven"), question("q2", "bus")];
        let result = grade(
            &questions,
            &answers(&[("q1", "around seven o'clock"), ("q2", "car")]),
        );

        assert_eq!(result.score, 1);
        assert_eq!(result.total, 2);
        assert_eq!(result.feedback["q1"], CORRECT_FEEDBACK);
        assert_eq!(result.feedback["q2"], "❌ 参考答案: bus");
    }

    #[test]
    fn unanswered_questions_still_get_feedback() {
        let questions = vec![
            question("q1", "seven"),
            question("q2", "bus"),
            question("q3", "coffee"),
        ];
        let result = grade(&questions, &answers(&[("q2", "the bus")]));

        assert_eq!(result.score, 1);
        assert_eq!(result.total, 3);
        assert_eq!(result.feedback.len(), 3);
        assert_eq!(result.feedback["q1"], incorrect_feedback("seven"));
        assert_eq!(result.feedback["q2"], CORRECT_FEEDBACK);
        assert_eq!(result.feedback["q3"], incorrect_feedback("coffee"));
    }

    #[test]
    fn unknown_answer_keys_are_ignored() {
        let questions = vec![question("q1", "seven")];
        let result = grade(&questions, &answers(&[("q1", "seven"), ("q9", "extra")]));

        assert_eq!(result.score, 1);
        assert_eq!(result.total, 1);
        assert_eq!(result.feedback.keys().collect::<Vec<_>>(), vec!["q1"]);
    }

    #[test]
    fn feedback_keeps_question_order() {
        let questions = vec![question("b", "x"), question("a", "y"), question("c", "z")];
        let result = grade(&questions, &HashMap::new());

        assert_eq!(result.feedback.keys().collect::<Vec<_>>(), vec!["b", "a", "c"]);
    }

    #[test]
    fn incorrect_feedback_shows_reference_as_written() {
        let questions = vec![question("q1", "  Near the Train Station ")];
        let result = grade(&questions, &answers(&[("q1", "by the river")]));

        assert_eq!(result.feedback["q1"], "❌ 参考答案:   Near the Train Station ");
    }

    #[test]
    fn lesson_without_questions_scores_zero_of_zero() {
        let result = grade(&[], &answers(&[("q1", "seven")]));

        assert_eq!(result.score, 0);
        assert_eq!(result.total, 0);
        assert!(result.feedback.is_empty());
    }

    #[test]
    fn grading_is_idempotent() {
        let questions = vec![question("q1", "seven"), question("q2", "bus")];
        let submitted = answers(&[("q1", "Seven"), ("q2", "")]);

        assert_eq!(grade(&questions, &submitted), grade(&questions, &submitted));
    }

    #[test]
    fn serializes_feedback_as_ordered_object() {
        let questions = vec![question("q2", "bus"), question("q1", "seven")];
        let result = grade(&questions, &answers(&[("q1", "seven")]));

        let json = serde_json::to_string(&result).unwrap();
        assert_eq!(
            json,
            r#"{"score":1,"total":2,"feedback":{"q2":"❌ 参考答案: bus","q1":"✅ 正确"}}"#
        );
    }
}
