//! Best-effort extraction of a question array from free-form model output.
//!
//! The model is asked for bare JSON but often wraps it in prose or markdown
//! fences. The outermost `[` … `]` span is taken as the payload; anything
//! that does not then decode as an array of complete question objects is a
//! [`ParseError`], never a partial result.

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Deserialize;
use serde_json::Value;

use crate::{
    errors::ParseError,
    models::domain::{Difficulty, Question},
};

static OUTER_ARRAY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)\[.*\]").expect("OUTER_ARRAY is a valid regex pattern"));

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct WireQuestion {
    question: String,
    options: Vec<String>,
    correct_answer: String,
    explanation: String,
    topic: String,
    /// Required on the wire; replaced by the requested difficulty.
    #[serde(rename = "difficulty")]
    _difficulty: Value,
}

/// Returns the greedy `[` … `]` span, or the whole text when there is none.
pub fn extract_json_array(raw: &str) -> &str {
    OUTER_ARRAY
        .find(raw)
        .map(|m| m.as_str())
        .unwrap_or(raw)
}

/// Parses model output into questions stamped with the requested difficulty.
pub fn parse_questions(raw: &str, difficulty: Difficulty) -> Result<Vec<Question>, ParseError> {
    let payload = extract_json_array(raw);

    let value: Value =
        serde_json::from_str(payload).map_err(|e| ParseError::InvalidJson(e.to_string()))?;

    let Value::Array(items) = value else {
        return Err(ParseError::NotAnArray);
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| {
            serde_json::from_value::<WireQuestion>(item)
                .map(|wire| Question {
                    question_text: wire.question,
                    options: wire.options,
                    correct_answer: wire.correct_answer,
                    explanation: wire.explanation,
                    topic: wire.topic,
                    difficulty,
                })
                .map_err(|e| ParseError::MalformedQuestion {
                    index,
                    reason: e.to_string(),
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::{questions_json, sample_questions};

    #[test]
    fn parses_bare_array() {
        let raw = questions_json(&sample_questions(2));

        let parsed = parse_questions(&raw, Difficulty::Medium).expect("should parse");

        assert_eq!(parsed, sample_questions(2));
    }

    #[test]
    fn parses_array_wrapped_in_prose_and_fences() {
        let raw = format!(
            "Sure! Here are your questions:\n```json\n{}\n```\nGood luck [and have fun].",
            questions_json(&sample_questions(1))
        );

        // The greedy span runs to the final `]`, so trailing bracketed prose
        // makes the payload invalid.
        assert!(matches!(
            parse_questions(&raw, Difficulty::Medium),
            Err(ParseError::InvalidJson(_))
        ));

        let raw = format!(
            "Sure! Here are your questions:\n```json\n{}\n```\nGood luck.",
            questions_json(&sample_questions(1))
        );
        let parsed = parse_questions(&raw, Difficulty::Medium).expect("should parse");
        assert_eq!(parsed.len(), 1);
    }

    #[test]
    fn plain_text_is_a_parse_error() {
        assert!(matches!(
            parse_questions("not json", Difficulty::Easy),
            Err(ParseError::InvalidJson(_))
        ));
    }

    #[test]
    fn non_array_json_is_rejected() {
        assert_eq!(
            parse_questions(r#"{"question": "?"}"#, Difficulty::Easy),
            Err(ParseError::NotAnArray)
        );
    }

    #[test]
    fn missing_field_rejects_whole_array() {
        let raw = r#"[
            {"question": "Q1?", "options": ["A) 1", "B) 2", "C) 3", "D) 4"], "correctAnswer": "A",
             "explanation": "e", "topic": "t", "difficulty": "easy"},
            {"question": "Q2?", "options": ["A) 1", "B) 2", "C) 3", "D) 4"], "correctAnswer": "B",
             "topic": "t", "difficulty": "easy"}
        ]"#;

        let result = parse_questions(raw, Difficulty::Easy);

        assert!(matches!(
            result,
            Err(ParseError::MalformedQuestion { index: 1, .. })
        ));
    }

    #[test]
    fn bracket_matched_garbage_is_a_parse_error() {
        assert!(parse_questions("[this is not, json]", Difficulty::Hard).is_err());
        assert!(parse_questions("[1, 2, 3]", Difficulty::Hard).is_err());
    }

    #[test]
    fn model_difficulty_is_replaced_with_requested() {
        let raw = questions_json(&sample_questions(1)).replace("\"medium\"", "\"Very Hard\"");

        let parsed = parse_questions(&raw, Difficulty::Hard).expect("should parse");

        assert_eq!(parsed[0].difficulty, Difficulty::Hard);
    }

    #[test]
    fn missing_difficulty_key_is_malformed() {
        let raw = questions_json(&sample_questions(1))
            .replace("\"difficulty\": \"medium\"", "\"level\": 3");

        assert!(matches!(
            parse_questions(&raw, Difficulty::Easy),
            Err(ParseError::MalformedQuestion { index: 0, .. })
        ));
    }

    #[test]
    fn empty_array_parses_to_no_questions() {
        assert_eq!(parse_questions("[]", Difficulty::Easy), Ok(vec![]));
    }

    #[test]
    fn reparsing_parsed_output_is_idempotent() {
        let raw = format!("Here you go: {}", questions_json(&sample_questions(3)));
        let first = parse_questions(&raw, Difficulty::Medium).expect("should parse");

        let reserialized = questions_json(&first);
        let second = parse_questions(&reserialized, Difficulty::Medium).expect("should reparse");
        let third = parse_questions(&reserialized, Difficulty::Medium).expect("should reparse");

        assert_eq!(first, second);
        assert_eq!(second, third);
    }

    #[test]
    fn extract_without_brackets_returns_whole_text() {
        assert_eq!(extract_json_array("no brackets"), "no brackets");
        assert_eq!(extract_json_array("a [1] b [2] c"), "[1] b [2]");
    }
}
