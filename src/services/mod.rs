pub mod agent;
pub mod fallback_bank;
pub mod in_flight;
pub mod model_service;
pub mod prompt_builder;
pub mod quiz_attempt_service;
pub mod quiz_orchestrator_service;
pub mod response_parser;

pub use agent::{Agent, AgentRole};
pub use fallback_bank::FallbackBank;
pub use in_flight::{InFlightGuard, InFlightRegistry};
pub use model_service::{
    CompletionClient, CompletionRequest, CompletionResponse, OpenAiCompletionClient,
};
pub use quiz_attempt_service::QuizAttemptService;
pub use quiz_orchestrator_service::QuizOrchestrator;
