use std::collections::HashMap;

use serde::Deserialize;
use validator::Validate;

use crate::constants::quiz::DEFAULT_QUESTION_COUNT;
use crate::models::domain::{Difficulty, QuizRecord};

fn default_question_count() -> usize {
    DEFAULT_QUESTION_COUNT
}

#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizRequest {
    #[validate(length(min = 1, max = 64))]
    pub subject: String,

    #[serde(default)]
    pub difficulty: Difficulty,

    #[serde(default = "default_question_count")]
    #[validate(range(min = 1, max = 50))]
    pub number_of_questions: usize,
}

#[derive(Debug, Clone, Deserialize)]
pub struct SubmitAttemptRequest {
    pub quiz: QuizRecord,
    #[serde(default)]
    pub answers: HashMap<usize, String>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_valid_generate_request() {
        let request: GenerateQuizRequest = serde_json::from_str(
            r#"{"subject": "science", "difficulty": "hard", "numberOfQuestions": 5}"#,
        )
        .expect("request should deserialize");

        assert!(request.validate().is_ok());
        assert_eq!(request.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_generate_request_defaults() {
        let request: GenerateQuizRequest =
            serde_json::from_str(r#"{"subject": "history"}"#).expect("request should deserialize");

        assert_eq!(request.difficulty, Difficulty::Medium);
        assert_eq!(request.number_of_questions, 10);
    }

    #[test]
    fn test_zero_questions_is_invalid() {
        let request = GenerateQuizRequest {
            subject: "science".to_string(),
            difficulty: Difficulty::Easy,
            number_of_questions: 0,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_empty_subject_is_invalid() {
        let request = GenerateQuizRequest {
            subject: String::new(),
            difficulty: Difficulty::Easy,
            number_of_questions: 5,
        };
        assert!(request.validate().is_err());
    }

    #[test]
    fn test_answers_keyed_by_index() {
        let answers: HashMap<usize, String> =
            serde_json::from_str(r#"{"0": "A", "3": "C"}"#).expect("answers should deserialize");

        assert_eq!(answers.get(&3).map(String::as_str), Some("C"));
    }
}
