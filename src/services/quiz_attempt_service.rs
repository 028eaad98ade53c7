use std::collections::HashMap;

use chrono::Utc;
use uuid::Uuid;

use crate::errors::{AppError, AppResult};
use crate::models::domain::quiz_attempt::{QuizAttempt, QuizAttemptQuestion};
use crate::models::domain::QuizRecord;

pub struct QuizAttemptService;

impl QuizAttemptService {
    /// Grade submitted answers (keyed by question index) against a quiz.
    pub fn grade_attempt(
        quiz: &QuizRecord,
        answers: &HashMap<usize, String>,
    ) -> AppResult<QuizAttempt> {
        let questions = quiz.questions();

        if questions.is_empty() {
            return Err(AppError::BadRequest("Quiz has no questions".to_string()));
        }

        if let Some(index) = answers.keys().find(|&&index| index >= questions.len()) {
            return Err(AppError::BadRequest(format!(
                "Answer for question {} but quiz has {} questions",
                index,
                questions.len()
            )));
        }

        let results: Vec<QuizAttemptQuestion> = questions
            .iter()
            .enumerate()
            .map(|(index, question)| {
                let user_answer = answers.get(&index).cloned();
                let is_correct = user_answer
                    .as_deref()
                    .is_some_and(|answer| question.is_correct(answer));

                QuizAttemptQuestion {
                    question: question.question_text.clone(),
                    user_answer,
                    correct_answer: question.correct_answer.clone(),
                    is_correct,
                }
            })
            .collect();

        let correct_answers = results.iter().filter(|r| r.is_correct).count();
        let score = Self::score(correct_answers, results.len());

        Ok(QuizAttempt {
            id: Uuid::new_v4().to_string(),
            subject: quiz.subject().to_string(),
            difficulty: quiz.difficulty(),
            total_questions: results.len(),
            score,
            correct_answers,
            completed_at: Utc::now(),
            questions: results,
        })
    }

    /// `round(100 * correct / total)`, rounding halves up.
    pub fn score(correct: usize, total: usize) -> u32 {
        if total == 0 {
            return 0;
        }
        ((200 * correct + total) / (2 * total)) as u32
    }
}
