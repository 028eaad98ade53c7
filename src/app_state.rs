use std::sync::Arc;

use crate::{
    config::Config,
    services::{CompletionClient, InFlightRegistry, OpenAiCompletionClient, QuizOrchestrator},
};

#[derive(Clone)]
pub struct AppState {
    pub quiz_orchestrator: Arc<QuizOrchestrator>,
    pub in_flight: Arc<InFlightRegistry>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let client = Arc::new(OpenAiCompletionClient::new(&config));
        Self::with_client(&config, client)
    }

    /// Wires the pipeline around any completion client, e.g. a test double.
    pub fn with_client(config: &Config, client: Arc<dyn CompletionClient>) -> Self {
        let quiz_orchestrator = Arc::new(QuizOrchestrator::new(client, config));

        Self {
            quiz_orchestrator,
            in_flight: Arc::new(InFlightRegistry::new()),
        }
    }
}
