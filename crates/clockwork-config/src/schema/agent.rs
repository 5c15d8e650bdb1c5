use serde::{Deserialize, Serialize};

/// Default behavioral instructions for the time agent.
pub const DEFAULT_INSTRUCTION: &str = "You are a helpful assistant.
When the user asks for the time, use the 'get_current_time' tool.
You yourself do NOT know what time it is - you MUST use the tool!
Respond in the same language as the user's question.
Be friendly and precise in your answer.";

/// Agent identity and behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Internal agent name, also used as the author of its events.
    pub name: String,
    pub description: String,
    /// System instruction sent with every model call.
    pub instruction: String,
    /// Upper bound on tool-call rounds per turn (valid range: 1-50).
    pub max_tool_rounds: u32,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            name: "root_agent".into(),
            description: "A helpful assistant that can tell the current time.".into(),
            instruction: DEFAULT_INSTRUCTION.into(),
            max_tool_rounds: 10,
        }
    }
}
