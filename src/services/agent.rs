use crate::{
    config::Config,
    constants::prompts::{
        GENERATION_TASK, GENERATOR_BACKSTORY, GENERATOR_GOAL, GENERATOR_ROLE, REVIEWER_BACKSTORY,
        REVIEWER_GOAL, REVIEWER_ROLE, REVIEW_TASK,
    },
    errors::UpstreamError,
    services::{
        model_service::{CompletionClient, CompletionRequest},
        prompt_builder::{build_prompt, PromptContext},
    },
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgentRole {
    Generator,
    Reviewer,
}

/// Persona and sampling settings for one stage of the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub struct Agent {
    pub kind: AgentRole,
    pub role: String,
    pub goal: String,
    pub backstory: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

impl Agent {
    pub fn generator(config: &Config) -> Self {
        Self {
            kind: AgentRole::Generator,
            role: GENERATOR_ROLE.to_string(),
            goal: GENERATOR_GOAL.to_string(),
            backstory: GENERATOR_BACKSTORY.to_string(),
            temperature: config.generator_temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    pub fn reviewer(config: &Config) -> Self {
        Self {
            kind: AgentRole::Reviewer,
            role: REVIEWER_ROLE.to_string(),
            goal: REVIEWER_GOAL.to_string(),
            backstory: REVIEWER_BACKSTORY.to_string(),
            temperature: config.reviewer_temperature,
            max_output_tokens: config.max_output_tokens,
        }
    }

    /// Task line that opens every prompt this agent sends.
    pub fn task(&self) -> &'static str {
        match self.kind {
            AgentRole::Generator => GENERATION_TASK,
            AgentRole::Reviewer => REVIEW_TASK,
        }
    }

    pub fn system_instruction(&self) -> String {
        format!(
            "You are a {}. {} Your goal is: {}",
            self.role, self.backstory, self.goal
        )
    }

    /// One call to the completion service. Failures are returned as-is and
    /// never retried here.
    pub async fn execute(
        &self,
        client: &dyn CompletionClient,
        context: &PromptContext<'_>,
    ) -> Result<String, UpstreamError> {
        let request = CompletionRequest {
            system_instruction: self.system_instruction(),
            user_instruction: build_prompt(self.task(), context),
            temperature: self.temperature,
            max_output_tokens: self.max_output_tokens,
        };

        match client.complete(request).await {
            Ok(response) => {
                log::debug!("{:?} returned {} chars", self.kind, response.text.len());
                Ok(response.text)
            }
            Err(e) => {
                log::warn!("{:?} call failed: {}", self.kind, e);
                Err(e)
            }
        }
    }
}
