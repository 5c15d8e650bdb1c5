//! LLM agent definition: identity, instruction, and tools.

use crate::tools::ToolExecutor;
use crate::ToolDefinition;

/// An agent backed by a hosted model.
///
/// The agent itself is passive configuration; `InMemoryRunner` drives it.
#[derive(Clone)]
pub struct LlmAgent {
    /// Agent name, used as the author of the events it produces.
    pub(crate) name: String,
    pub(crate) description: String,
    /// System instruction sent with every model call.
    pub(crate) instruction: Option<String>,
    pub(crate) tools: Vec<ToolDefinition>,
    pub(crate) tool_executor: Option<ToolExecutor>,
    /// Maximum tool-call rounds per turn to prevent infinite loops.
    pub(crate) max_tool_rounds: u32,
}

impl LlmAgent {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            instruction: None,
            tools: Vec::new(),
            tool_executor: None,
            max_tool_rounds: 10,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_instruction(mut self, instruction: impl Into<String>) -> Self {
        self.instruction = Some(instruction.into());
        self
    }

    pub fn with_tools(mut self, tools: Vec<ToolDefinition>) -> Self {
        self.tools = tools;
        self
    }

    pub fn with_tool_executor(mut self, executor: ToolExecutor) -> Self {
        self.tool_executor = Some(executor);
        self
    }

    pub fn with_max_tool_rounds(mut self, max: u32) -> Self {
        self.max_tool_rounds = max;
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn instruction(&self) -> Option<&str> {
        self.instruction.as_deref()
    }

    pub fn tools(&self) -> &[ToolDefinition] {
        &self.tools
    }
}

impl std::fmt::Debug for LlmAgent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LlmAgent")
            .field("name", &self.name)
            .field("description", &self.description)
            .field("tools", &self.tools.len())
            .field("has_tool_executor", &self.tool_executor.is_some())
            .field("max_tool_rounds", &self.max_tool_rounds)
            .finish()
    }
}
