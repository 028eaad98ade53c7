use serde::Serialize;

use crate::constants::quiz::QUESTION_COUNT_CHOICES;
use crate::models::domain::{Difficulty, QuizRecord};
use crate::services::fallback_bank::SubjectInfo;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerateQuizResponse {
    pub quiz: QuizRecord,
    pub time_limit_seconds: u64,
}

impl From<QuizRecord> for GenerateQuizResponse {
    fn from(quiz: QuizRecord) -> Self {
        GenerateQuizResponse {
            time_limit_seconds: quiz.time_limit_seconds(),
            quiz,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct SubjectDto {
    pub id: &'static str,
    pub name: &'static str,
}

impl From<SubjectInfo> for SubjectDto {
    fn from(info: SubjectInfo) -> Self {
        SubjectDto {
            id: info.id,
            name: info.name,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DifficultyDto {
    pub value: Difficulty,
    pub seconds_per_question: u32,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SubjectsResponse {
    pub subjects: Vec<SubjectDto>,
    pub difficulties: Vec<DifficultyDto>,
    pub question_counts: Vec<usize>,
}

impl SubjectsResponse {
    pub fn new(subjects: Vec<SubjectInfo>) -> Self {
        SubjectsResponse {
            subjects: subjects.into_iter().map(SubjectDto::from).collect(),
            difficulties: Difficulty::ALL
                .iter()
                .map(|d| DifficultyDto {
                    value: *d,
                    seconds_per_question: d.seconds_per_question(),
                })
                .collect(),
            question_counts: QUESTION_COUNT_CHOICES.to_vec(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_questions;

    #[test]
    fn test_generate_response_carries_time_limit() {
        let quiz = QuizRecord::new("science", Difficulty::Hard, sample_questions(3), false);

        let response = GenerateQuizResponse::from(quiz);

        assert_eq!(response.time_limit_seconds, 360);
    }

    #[test]
    fn test_subjects_response_lists_difficulties() {
        let response = SubjectsResponse::new(vec![SubjectInfo {
            id: "art",
            name: "Art",
        }]);
        let json = serde_json::to_value(&response).expect("response should serialize");

        assert_eq!(json["subjects"][0]["id"], "art");
        assert_eq!(json["difficulties"][1]["value"], "medium");
        assert_eq!(json["difficulties"][1]["secondsPerQuestion"], 90);
        assert_eq!(json["questionCounts"], serde_json::json!([5, 10, 15, 20]));
    }
}
