#[cfg(test)]
pub mod fixtures {
    use crate::models::domain::{Difficulty, Question};

    /// A well-formed medium question whose correct answer is "A".
    pub fn sample_question(text: &str) -> Question {
        Question {
            question_text: text.to_string(),
            options: vec![
                "A) First choice".to_string(),
                "B) Second choice".to_string(),
                "C) Third choice".to_string(),
                "D) Fourth choice".to_string(),
            ],
            correct_answer: "A".to_string(),
            explanation: format!("The first choice answers: {text}"),
            topic: "Fundamentals".to_string(),
            difficulty: Difficulty::Medium,
        }
    }

    /// `n` distinct questions, numbered from 1.
    pub fn sample_questions(n: usize) -> Vec<Question> {
        (1..=n)
            .map(|i| sample_question(&format!("Sample question number {i}?")))
            .collect()
    }

    /// Model-style pretty JSON for a question list.
    pub fn questions_json(questions: &[Question]) -> String {
        serde_json::to_string_pretty(questions).expect("questions should serialize")
    }
}

#[cfg(test)]
pub mod test_helpers {
    use std::sync::Arc;

    use async_trait::async_trait;

    use crate::{
        app_state::AppState,
        config::Config,
        errors::UpstreamError,
        services::{CompletionClient, CompletionRequest, CompletionResponse},
    };

    /// Completion client that behaves like an unreachable model service.
    pub struct OfflineClient;

    #[async_trait]
    impl CompletionClient for OfflineClient {
        async fn complete(
            &self,
            _request: CompletionRequest,
        ) -> Result<CompletionResponse, UpstreamError> {
            Err(UpstreamError::Transport("connection refused".to_string()))
        }
    }

    /// App state whose every model call fails, so quizzes come from the bank.
    pub fn offline_state(config: Config) -> AppState {
        AppState::with_client(&config, Arc::new(OfflineClient))
    }
}

#[cfg(test)]
mod tests {
    use super::fixtures::*;

    #[test]
    fn test_sample_questions_are_distinct_and_valid() {
        let questions = sample_questions(3);

        assert_eq!(questions.len(), 3);
        assert_ne!(questions[0].question_text, questions[1].question_text);
        assert!(questions.iter().all(|q| q.validate().is_ok()));
    }

    #[test]
    fn test_questions_json_is_an_array() {
        let json = questions_json(&sample_questions(2));

        assert!(json.trim_start().starts_with('['));
        assert!(json.trim_end().ends_with(']'));
    }
}
