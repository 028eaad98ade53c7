use crate::{
    constants::prompts::{GENERATION_REQUIREMENTS, OUTPUT_RULES, REVIEW_CHECKLIST},
    models::domain::{Difficulty, Question},
};

/// Input for one agent call, tagged by the stage that consumes it.
#[derive(Clone, Debug, PartialEq)]
pub enum PromptContext<'a> {
    Generation {
        subject: &'a str,
        difficulty: Difficulty,
        number_of_questions: usize,
    },
    Review {
        questions: &'a [Question],
        subject: &'a str,
        difficulty: Difficulty,
    },
}

/// Builds the user instruction for an agent call. Pure and infallible.
pub fn build_prompt(task: &str, context: &PromptContext<'_>) -> String {
    match context {
        PromptContext::Generation {
            subject,
            difficulty,
            number_of_questions,
        } => generation_prompt(task, subject, *difficulty, *number_of_questions),
        PromptContext::Review {
            questions,
            subject,
            difficulty,
        } => review_prompt(task, questions, subject, *difficulty),
    }
}

fn generation_prompt(task: &str, subject: &str, difficulty: Difficulty, count: usize) -> String {
    format!(
        r#"{task}.

Generate exactly {count} {difficulty} level multiple-choice questions about {subject}.

{GENERATION_REQUIREMENTS}
- Questions should be appropriate for {difficulty} difficulty level

Format your response as a JSON array with this structure:
[
  {{
    "question": "Question text here?",
    "options": ["A) Option 1", "B) Option 2", "C) Option 3", "D) Option 4"],
    "correctAnswer": "A",
    "explanation": "Brief explanation of why this is correct",
    "topic": "Specific topic within the subject",
    "difficulty": "{difficulty}"
  }}
]

Each array item must validate against this JSON Schema:
{schema}

{OUTPUT_RULES}

Subject: {subject}
Difficulty: {difficulty}
Number of questions: {count}"#,
        schema = question_schema(),
    )
}

fn review_prompt(task: &str, questions: &[Question], subject: &str, difficulty: Difficulty) -> String {
    let questions_json =
        serde_json::to_string_pretty(questions).unwrap_or_else(|_| "[]".to_string());

    format!(
        r#"{task}.

Review these {subject} quiz questions for {difficulty} difficulty level and improve them if needed.

{REVIEW_CHECKLIST}

Questions to review:
{questions_json}

Return the improved questions in the same JSON format, keeping exactly {count} questions and making any necessary corrections or improvements.

{OUTPUT_RULES}"#,
        count = questions.len(),
    )
}

fn question_schema() -> String {
    let schema = schemars::schema_for!(Question);
    serde_json::to_string_pretty(&schema).unwrap_or_else(|_| "{}".to_string())
}
