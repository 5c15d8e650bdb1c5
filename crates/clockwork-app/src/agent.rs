//! Assembly of the time agent from configuration.

use std::sync::Arc;

use clockwork_ai::{
    builtin_tool_executor, builtin_tools, AiClient, AiError, Conversation, GeminiClient,
    GeminiConfig, InMemoryRunner, LlmAgent,
};
use clockwork_config::{AgentConfig, ClockworkConfig, ModelConfig};

/// The agent that answers time questions with the `get_current_time` tool.
pub fn build_agent(config: &AgentConfig) -> LlmAgent {
    LlmAgent::new(&config.name)
        .with_description(&config.description)
        .with_instruction(&config.instruction)
        .with_tools(builtin_tools())
        .with_tool_executor(builtin_tool_executor())
        .with_max_tool_rounds(config.max_tool_rounds)
}

/// Gemini client using the API key from the environment.
pub fn gemini_client(config: &ModelConfig) -> Result<GeminiClient, AiError> {
    let gemini = GeminiConfig::from_env()?
        .with_model(&config.name)
        .with_max_tokens(config.max_tokens)
        .with_temperature(config.temperature);
    GeminiClient::new(gemini)
}

pub fn build_runner(config: &ClockworkConfig, client: Arc<dyn AiClient>) -> Arc<InMemoryRunner> {
    Arc::new(InMemoryRunner::new(
        build_agent(&config.agent),
        client,
        &config.session.app_name,
    ))
}

/// A fresh conversation scoped to the configured user and app.
pub fn build_conversation(config: &ClockworkConfig, runner: Arc<InMemoryRunner>) -> Conversation {
    Conversation::new(runner, &config.session.user_id, &config.session.app_name)
}
