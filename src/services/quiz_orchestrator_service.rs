use std::{future::Future, num::NonZeroUsize, sync::Arc};

use crate::{
    config::Config,
    models::domain::{Difficulty, Question, QuizRecord},
    services::{
        agent::Agent,
        fallback_bank::FallbackBank,
        model_service::CompletionClient,
        prompt_builder::PromptContext,
        response_parser::parse_questions,
    },
};

/// Two-stage generate → review pipeline with fallback substitution.
///
/// `generate_quiz` always returns a complete record: upstream failures,
/// unparsable output and unscoreable questions are all absorbed here and
/// reported only through [`QuizRecord::degraded`].
pub struct QuizOrchestrator {
    client: Arc<dyn CompletionClient>,
    generator: Agent,
    reviewer: Agent,
    bank: FallbackBank,
}

impl QuizOrchestrator {
    pub fn new(client: Arc<dyn CompletionClient>, config: &Config) -> Self {
        Self::with_agents(client, Agent::generator(config), Agent::reviewer(config))
    }

    pub fn with_agents(client: Arc<dyn CompletionClient>, generator: Agent, reviewer: Agent) -> Self {
        Self {
            client,
            generator,
            reviewer,
            bank: FallbackBank::new(),
        }
    }

    pub fn bank(&self) -> &FallbackBank {
        &self.bank
    }

    pub async fn generate_quiz(
        &self,
        subject: &str,
        difficulty: Difficulty,
        number_of_questions: NonZeroUsize,
    ) -> QuizRecord {
        let count = number_of_questions.get();
        log::info!(
            "Generating {} {} questions for '{}'",
            count,
            difficulty,
            subject
        );

        let (questions, degraded) = self.run_pipeline(subject, difficulty, count).await;
        let (questions, degraded) = self.normalize(subject, difficulty, count, questions, degraded);

        log::info!(
            "Quiz for '{}' ready with {} questions (degraded: {})",
            subject,
            questions.len(),
            degraded
        );

        QuizRecord::new(subject, difficulty, questions, degraded)
    }

    /// Runs `generate_quiz` until `cancel` resolves. Returns `None` when
    /// cancelled; nothing outside the dropped pipeline has been touched.
    pub async fn generate_quiz_or_cancel<C>(
        &self,
        subject: &str,
        difficulty: Difficulty,
        number_of_questions: NonZeroUsize,
        cancel: C,
    ) -> Option<QuizRecord>
    where
        C: Future<Output = ()>,
    {
        tokio::select! {
            biased;
            _ = cancel => {
                log::info!("Quiz generation for '{}' cancelled", subject);
                None
            }
            record = self.generate_quiz(subject, difficulty, number_of_questions) => Some(record),
        }
    }

    async fn run_pipeline(
        &self,
        subject: &str,
        difficulty: Difficulty,
        count: usize,
    ) -> (Vec<Question>, bool) {
        let generation_context = PromptContext::Generation {
            subject,
            difficulty,
            number_of_questions: count,
        };

        let generated = match self
            .generator
            .execute(self.client.as_ref(), &generation_context)
            .await
        {
            Ok(text) => text,
            Err(e) => {
                log::warn!("Generation unavailable, serving fallback questions: {}", e);
                return (Vec::new(), true);
            }
        };

        let mut degraded = false;
        let mut working = match parse_questions(&generated, difficulty) {
            Ok(parsed) => keep_scoreable(parsed, "generation", &mut degraded),
            Err(e) => {
                log::warn!("Could not parse generated questions, using fallback: {}", e);
                return (self.bank.draw(subject, difficulty, count), true);
            }
        };
        if working.is_empty() {
            return (working, true);
        }

        let review_context = PromptContext::Review {
            questions: &working,
            subject,
            difficulty,
        };
        let reviewed = self
            .reviewer
            .execute(self.client.as_ref(), &review_context)
            .await;

        match reviewed {
            Ok(text) => match parse_questions(&text, difficulty) {
                Ok(parsed) => working = keep_scoreable(parsed, "review", &mut degraded),
                Err(e) => {
                    log::warn!("Could not parse reviewed questions, keeping originals: {}", e);
                    degraded = true;
                }
            },
            Err(e) => {
                log::warn!("Review unavailable, keeping generated questions: {}", e);
                degraded = true;
            }
        }

        (working, degraded)
    }

    /// Single point of length correction: truncate, or pad from the bank.
    fn normalize(
        &self,
        subject: &str,
        difficulty: Difficulty,
        count: usize,
        mut questions: Vec<Question>,
        mut degraded: bool,
    ) -> (Vec<Question>, bool) {
        if questions.len() > count {
            log::debug!("Truncating {} questions to {}", questions.len(), count);
            questions.truncate(count);
        } else if questions.len() < count {
            let missing = count - questions.len();
            log::info!("Padding quiz with {} fallback questions", missing);
            questions.extend(self.bank.draw(subject, difficulty, missing));
            degraded = true;
        }
        (questions, degraded)
    }
}

fn keep_scoreable(questions: Vec<Question>, stage: &str, degraded: &mut bool) -> Vec<Question> {
    questions
        .into_iter()
        .enumerate()
        .filter_map(|(index, question)| match question.validate() {
            Ok(()) => Some(question),
            Err(e) => {
                log::warn!("Dropping {} question {}: {}", stage, index, e);
                *degraded = true;
                None
            }
        })
        .collect()
}
