//! Boundary to the external text-completion service.
//!
//! Everything above this module talks to [`CompletionClient`]; the
//! OpenAI-compatible implementation is only wired in by `AppState::new`.

use std::time::Duration;

use async_openai::{
    config::OpenAIConfig,
    error::OpenAIError,
    types::chat::{
        ChatCompletionRequestMessage, ChatCompletionRequestSystemMessageArgs,
        ChatCompletionRequestUserMessageArgs, CreateChatCompletionRequestArgs,
    },
    Client,
};
use async_trait::async_trait;
use backoff::{ExponentialBackoff, ExponentialBackoffBuilder};
use secrecy::ExposeSecret;

use crate::{config::Config, errors::UpstreamError};

#[derive(Clone, Debug, PartialEq)]
pub struct CompletionRequest {
    pub system_instruction: String,
    pub user_instruction: String,
    pub temperature: f32,
    pub max_output_tokens: u32,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CompletionResponse {
    pub text: String,
}

#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CompletionClient: Send + Sync {
    async fn complete(&self, request: CompletionRequest)
        -> Result<CompletionResponse, UpstreamError>;
}

pub struct OpenAiCompletionClient {
    client: Client<OpenAIConfig>,
    model_name: String,
    timeout: Duration,
}

impl OpenAiCompletionClient {
    pub fn new(config: &Config) -> Self {
        let openai_config = OpenAIConfig::new()
            .with_api_key(config.openai_api_key.expose_secret())
            .with_api_base(&config.openai_api_base);

        Self {
            client: Client::with_config(openai_config).with_backoff(single_attempt()),
            model_name: config.model_name.clone(),
            timeout: config.upstream_timeout(),
        }
    }

    fn build_messages(
        request: &CompletionRequest,
    ) -> Result<Vec<ChatCompletionRequestMessage>, OpenAIError> {
        let system = ChatCompletionRequestSystemMessageArgs::default()
            .content(request.system_instruction.as_str())
            .build()?;
        let user = ChatCompletionRequestUserMessageArgs::default()
            .content(request.user_instruction.as_str())
            .build()?;

        Ok(vec![
            ChatCompletionRequestMessage::System(system),
            ChatCompletionRequestMessage::User(user),
        ])
    }
}

#[async_trait]
impl CompletionClient for OpenAiCompletionClient {
    async fn complete(
        &self,
        request: CompletionRequest,
    ) -> Result<CompletionResponse, UpstreamError> {
        log::debug!(
            "Calling completion model {} (system {} chars, user {} chars)",
            self.model_name,
            request.system_instruction.len(),
            request.user_instruction.len()
        );

        let messages = Self::build_messages(&request)
            .map_err(|e| UpstreamError::InvalidRequest(e.to_string()))?;

        let chat_request = CreateChatCompletionRequestArgs::default()
            .model(&self.model_name)
            .messages(messages)
            .temperature(request.temperature)
            .max_tokens(request.max_output_tokens)
            .build()
            .map_err(|e| UpstreamError::InvalidRequest(e.to_string()))?;

        let response = tokio::time::timeout(self.timeout, self.client.chat().create(chat_request))
            .await
            .map_err(|_| UpstreamError::Timeout(self.timeout.as_secs()))?
            .map_err(classify_openai_error)?;

        let text = response
            .choices
            .first()
            .and_then(|choice| choice.message.content.clone())
            .filter(|content| !content.trim().is_empty())
            .ok_or(UpstreamError::EmptyResponse)?;

        Ok(CompletionResponse { text })
    }
}

/// async-openai retries 5xx and rate-limit responses by default. Upstream
/// failures are absorbed by the fallback bank, so each call is attempted once.
fn single_attempt() -> ExponentialBackoff {
    ExponentialBackoffBuilder::new()
        .with_max_elapsed_time(Some(Duration::ZERO))
        .build()
}

fn classify_openai_error(err: OpenAIError) -> UpstreamError {
    match err {
        OpenAIError::ApiError(api_error) => UpstreamError::Rejected(api_error.message),
        other => UpstreamError::Transport(other.to_string()),
    }
}
