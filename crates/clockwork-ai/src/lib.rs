//! Agent engine for Clockwork.
//!
//! Provides:
//! - a Gemini API client with function calling
//! - the built-in time tool
//! - an in-memory agent runtime (session service, runner, event stream)
//! - the conversation handle that owns one session and executes turns
//! - a blocking adapter for callers that cannot await

pub mod agent;
pub mod content;
pub mod conversation;
pub mod gemini;
pub mod runtime;
pub mod token_tracker;
pub mod tools;

use async_trait::async_trait;

pub use agent::LlmAgent;
pub use content::{Content, Part, Role, ToolCall, ToolResponse};
pub use conversation::{
    BlockingConversation, ChatMessage, ChatRole, Conversation, TurnError, TurnOutcome,
};
pub use gemini::{GeminiClient, GeminiConfig};
pub use runtime::{
    AgentRuntime, AgentSession, Event, EventStream, InMemoryRunner, InMemorySessionService,
    SessionService,
};
pub use token_tracker::TokenTracker;
pub use tools::{builtin_tool_executor, builtin_tools, ToolExecutor};

/// A hosted model that can answer one generation request.
#[async_trait]
pub trait AiClient: Send + Sync {
    async fn generate_content(&self, request: &ModelRequest) -> Result<ModelResponse, AiError>;
}

/// Everything the model sees for one call.
#[derive(Debug, Clone, Default)]
pub struct ModelRequest {
    pub system_instruction: Option<String>,
    pub contents: Vec<Content>,
    pub tools: Vec<ToolDefinition>,
}

#[derive(Debug, Clone)]
pub struct ModelResponse {
    pub content: Content,
    pub usage: TokenUsage,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ToolDefinition {
    pub name: String,
    pub description: String,
    pub parameters: serde_json::Value,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenUsage {
    pub input_tokens: u64,
    pub output_tokens: u64,
}

impl TokenUsage {
    pub fn total_tokens(&self) -> u64 {
        self.input_tokens.saturating_add(self.output_tokens)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum AiError {
    #[error("API error: {0}")]
    ApiError(String),
    #[error("Rate limited")]
    RateLimited,
    #[error("Network error: {0}")]
    NetworkError(String),
    #[error("Parse error: {0}")]
    ParseError(String),
    #[error("Timeout")]
    Timeout,
    #[error("Session not found: {0}")]
    SessionNotFound(String),
}
