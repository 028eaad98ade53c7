use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::models::domain::Difficulty;

/// Finished attempt handed to the history/statistics collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttempt {
    pub id: String,
    pub subject: String,
    pub difficulty: Difficulty,
    pub total_questions: usize,
    pub score: u32,
    pub correct_answers: usize,
    pub completed_at: DateTime<Utc>,
    pub questions: Vec<QuizAttemptQuestion>,
}

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizAttemptQuestion {
    pub question: String,
    pub user_answer: Option<String>,
    pub correct_answer: String,
    pub is_correct: bool,
}
