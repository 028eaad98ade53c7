use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::{errors::ValidationError, models::domain::Difficulty};

pub const OPTION_LABELS: [&str; 4] = ["A", "B", "C", "D"];

/// A single multiple-choice question. Option strings carry their own label
/// (`"A) Paris"`), and `correct_answer` names one of those labels.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize, JsonSchema)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    #[serde(rename = "question")]
    pub question_text: String,
    pub options: Vec<String>,
    pub correct_answer: String,
    pub explanation: String,
    pub topic: String,
    pub difficulty: Difficulty,
}

impl Question {
    /// Checks the scoring invariants: four options labelled `A) `..`D) ` in
    /// order, and a correct answer naming one of those labels.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.question_text.trim().is_empty() {
            return Err(ValidationError::EmptyField("question"));
        }
        if self.explanation.trim().is_empty() {
            return Err(ValidationError::EmptyField("explanation"));
        }
        if self.options.len() != OPTION_LABELS.len() {
            return Err(ValidationError::OptionCount(self.options.len()));
        }
        for (option, label) in self.options.iter().zip(OPTION_LABELS) {
            if option_label(option) != Some(label) {
                return Err(ValidationError::UnlabelledOption {
                    expected: label,
                    option: option.clone(),
                });
            }
        }
        if !OPTION_LABELS.contains(&self.correct_answer.as_str()) {
            return Err(ValidationError::UnknownAnswer(self.correct_answer.clone()));
        }
        Ok(())
    }

    pub fn is_correct(&self, answer: &str) -> bool {
        answer == self.correct_answer
    }
}

/// Leading `"X) "` label of an option string, if present.
pub fn option_label(option: &str) -> Option<&str> {
    let label = option.get(..1)?;
    if option.get(1..3) == Some(") ") && OPTION_LABELS.contains(&label) {
        Some(label)
    } else {
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::fixtures::sample_question;

    #[test]
    fn question_uses_original_wire_keys() {
        let json = serde_json::to_value(sample_question("Capital?")).expect("should serialize");

        assert_eq!(json["question"], "Capital?");
        assert_eq!(json["correctAnswer"], "A");
        assert_eq!(json["difficulty"], "medium");
        assert!(json.get("questionText").is_none());
    }

    #[test]
    fn valid_question_passes_validation() {
        assert!(sample_question("Capital?").validate().is_ok());
    }

    #[test]
    fn question_with_three_options_is_rejected() {
        let mut question = sample_question("Capital?");
        question.options.pop();

        assert_eq!(question.validate(), Err(ValidationError::OptionCount(3)));
    }

    #[test]
    fn answer_outside_labels_is_rejected() {
        let mut question = sample_question("Capital?");
        question.correct_answer = "E".to_string();

        assert!(matches!(
            question.validate(),
            Err(ValidationError::UnknownAnswer(answer)) if answer == "E"
        ));
    }

    #[test]
    fn options_out_of_label_order_are_rejected() {
        let mut question = sample_question("Capital?");
        question.options.swap(0, 1);

        assert!(matches!(
            question.validate(),
            Err(ValidationError::UnlabelledOption { expected: "A", .. })
        ));
    }

    #[test]
    fn blank_explanation_is_rejected() {
        let mut question = sample_question("Capital?");
        question.explanation = "  ".to_string();

        assert_eq!(
            question.validate(),
            Err(ValidationError::EmptyField("explanation"))
        );
    }

    #[test]
    fn option_label_requires_paren_and_space() {
        assert_eq!(option_label("B) Berlin"), Some("B"));
        assert_eq!(option_label("B Berlin"), None);
        assert_eq!(option_label("E) Elsewhere"), None);
        assert_eq!(option_label(""), None);
    }
}
