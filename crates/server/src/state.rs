use std::sync::Arc;

use orchestrator::{personas, ChatCompletionClient, ForgeClient, Orchestrator};

use crate::config::ServerConfig;

#[derive(Clone)]
pub struct AppState {
    pub engine: Arc<Orchestrator>,
    pub forge: Arc<ForgeClient>,
}

impl AppState {
    /// Wire the production advisory bench against the configured
    /// completion and forge services.
    pub fn new(config: &ServerConfig) -> Self {
        let backend = ChatCompletionClient::new(
            config.completion.base_url.as_str(),
            config.completion.api_key.as_str(),
        )
        .with_model(&config.completion.model)
        .with_max_tokens(config.completion.max_tokens)
        .with_timeout(config.completion.timeout);

        let engine = Orchestrator::new(personas::csuite(), Arc::new(backend));

        let forge = ForgeClient::new(config.forge.base_url.as_str())
            .with_poll_interval(config.forge.poll_interval)
            .with_max_wait(config.forge.max_wait);

        Self {
            engine: Arc::new(engine),
            forge: Arc::new(forge),
        }
    }

    /// Assemble state from pre-built parts. Used by tests to inject
    /// doubles without touching the environment.
    pub fn from_parts(engine: Arc<Orchestrator>, forge: Arc<ForgeClient>) -> Self {
        Self { engine, forge }
    }
}
