use chrono::{DateTime, Utc};

use crate::content::{Content, ToolCall, ToolResponse};

/// One item of an agent run.
#[derive(Debug, Clone)]
pub struct Event {
    pub id: String,
    /// Shared by all events of one run.
    pub invocation_id: String,
    /// `"user"` or the name of the agent that produced the event.
    pub author: String,
    pub content: Option<Content>,
    /// Set on incremental chunks of a response still being produced.
    pub partial: bool,
    pub timestamp: DateTime<Utc>,
}

impl Event {
    pub fn new(
        invocation_id: impl Into<String>,
        author: impl Into<String>,
        content: Option<Content>,
    ) -> Self {
        Self {
            id: clockwork_common::new_id(),
            invocation_id: invocation_id.into(),
            author: author.into(),
            content,
            partial: false,
            timestamp: Utc::now(),
        }
    }

    pub fn function_calls(&self) -> Vec<&ToolCall> {
        self.content
            .as_ref()
            .map(|c| c.function_calls().collect())
            .unwrap_or_default()
    }

    pub fn function_responses(&self) -> Vec<&ToolResponse> {
        self.content
            .as_ref()
            .map(|c| c.function_responses().collect())
            .unwrap_or_default()
    }

    /// Whether this event concludes the turn: a complete message that
    /// neither requests a tool nor reports a tool result.
    pub fn is_final_response(&self) -> bool {
        !self.partial && self.function_calls().is_empty() && self.function_responses().is_empty()
    }
}
