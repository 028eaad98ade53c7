use chrono::{DateTime, Utc};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::models::domain::{Difficulty, Question};

/// Output of one quiz generation. Constructed once and read-only afterwards.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct QuizRecord {
    subject: String,
    difficulty: Difficulty,
    requested_count: usize,
    questions: Vec<Question>,
    generated_at: DateTime<Utc>,
    degraded: bool,
}

impl QuizRecord {
    pub(crate) fn new(
        subject: &str,
        difficulty: Difficulty,
        questions: Vec<Question>,
        degraded: bool,
    ) -> Self {
        QuizRecord {
            subject: subject.to_string(),
            difficulty,
            requested_count: questions.len(),
            questions,
            generated_at: Utc::now(),
            degraded,
        }
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    pub fn requested_count(&self) -> usize {
        self.requested_count
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn generated_at(&self) -> DateTime<Utc> {
        self.generated_at
    }

    /// True when any fallback substitution happened while building the quiz.
    pub fn degraded(&self) -> bool {
        self.degraded
    }

    pub fn time_limit_seconds(&self) -> u64 {
        self.difficulty.time_limit_seconds(self.questions.len())
    }
}
