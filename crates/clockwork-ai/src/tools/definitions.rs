//! Tool declarations exposed to the model.

use crate::ToolDefinition;

pub const GET_CURRENT_TIME: &str = "get_current_time";

/// Create the built-in tool definitions that Clockwork exposes to the model.
pub fn builtin_tools() -> Vec<ToolDefinition> {
    vec![ToolDefinition {
        name: GET_CURRENT_TIME.to_string(),
        description: "Returns the current system time in 24-hour format (HH:MM). \
                      Use this tool when the user asks for the current time \
                      or wants to know what time it is now."
            .to_string(),
        parameters: serde_json::json!({
            "type": "object",
            "properties": {}
        }),
    }]
}

/// Convert a tool definition to a Gemini function declaration.
///
/// Gemini rejects object schemas without properties, so zero-argument
/// tools are declared without `parameters`.
pub fn to_gemini_tool(tool: &ToolDefinition) -> serde_json::Value {
    let has_properties = tool.parameters["properties"]
        .as_object()
        .is_some_and(|props| !props.is_empty());

    let mut decl = serde_json::json!({
        "name": tool.name,
        "description": tool.description,
    });
    if has_properties {
        decl["parameters"] = tool.parameters.clone();
    }
    decl
}
