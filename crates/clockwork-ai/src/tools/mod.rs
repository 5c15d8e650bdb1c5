//! Built-in tools the agent can call.
//!
//! Clockwork ships exactly one tool: `get_current_time`. The model decides
//! when to call it; the runner dispatches the call through a `ToolExecutor`.

mod clock;
mod definitions;

use std::sync::Arc;

use serde_json::{json, Value};
use tracing::warn;

pub use clock::{current_time_at, get_current_time, CurrentTime};
pub use definitions::{builtin_tools, to_gemini_tool, GET_CURRENT_TIME};

/// Callback for executing tool calls. Takes a tool name + arguments,
/// returns the tool's structured result.
pub type ToolExecutor = Arc<dyn Fn(&str, &Value) -> Value + Send + Sync>;

/// Executor that dispatches the built-in tools by name.
pub fn builtin_tool_executor() -> ToolExecutor {
    Arc::new(|name, _arguments| match name {
        GET_CURRENT_TIME => serde_json::to_value(get_current_time())
            .unwrap_or_else(|e| json!({ "status": "error", "error": e.to_string() })),
        other => {
            warn!(tool = %other, "Model requested unknown tool");
            json!({ "error": format!("unknown tool: {other}") })
        }
    })
}
