//! Gemini API client struct, request building, and response parsing.

use serde_json::{json, Value};

use crate::content::{Content, Part, Role, ToolCall};
use crate::tools::to_gemini_tool;
use crate::{AiError, ModelRequest, ModelResponse, TokenUsage};

use super::config::GeminiConfig;

/// Gemini API client.
pub struct GeminiClient {
    pub(crate) config: GeminiConfig,
    pub(crate) http: reqwest::Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, AiError> {
        let http = reqwest::Client::builder()
            .connect_timeout(std::time::Duration::from_secs(10))
            .timeout(std::time::Duration::from_secs(120))
            .build()
            .map_err(|e| AiError::NetworkError(format!("failed to build HTTP client: {e}")))?;
        Ok(Self { config, http })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    pub(crate) fn api_url(&self) -> String {
        format!("{}/{}:generateContent", self.config.base_url, self.config.model)
    }

    /// Build the JSON request body for the Gemini API.
    pub(crate) fn build_request_body(&self, request: &ModelRequest) -> Value {
        let contents: Vec<Value> = request.contents.iter().map(content_to_json).collect();

        let mut body = json!({
            "contents": contents,
            "generationConfig": {
                "maxOutputTokens": self.config.max_tokens,
                "temperature": self.config.temperature,
            }
        });

        if let Some(ref instruction) = request.system_instruction {
            body["systemInstruction"] = json!({
                "parts": [{ "text": instruction }]
            });
        }

        if !request.tools.is_empty() {
            let tool_defs: Vec<_> = request.tools.iter().map(to_gemini_tool).collect();
            body["tools"] = json!([{
                "functionDeclarations": tool_defs
            }]);
        }

        body
    }

    /// Parse a Gemini response into the first candidate's content.
    pub(crate) fn parse_response(&self, json: Value) -> Result<ModelResponse, AiError> {
        let candidates = json["candidates"]
            .as_array()
            .ok_or_else(|| AiError::ParseError("no candidates in response".to_string()))?;

        let first = candidates
            .first()
            .ok_or_else(|| AiError::ParseError("empty candidates".to_string()))?;

        // A candidate blocked by safety filters carries no content at all.
        let parts = first["content"]["parts"]
            .as_array()
            .map(|parts| parts.iter().filter_map(part_from_json).collect())
            .unwrap_or_default();

        let usage = TokenUsage {
            input_tokens: json["usageMetadata"]["promptTokenCount"]
                .as_u64()
                .unwrap_or(0),
            output_tokens: json["usageMetadata"]["candidatesTokenCount"]
                .as_u64()
                .unwrap_or(0),
        };

        Ok(ModelResponse {
            content: Content {
                role: Role::Model,
                parts,
            },
            usage,
        })
    }
}

fn content_to_json(content: &Content) -> Value {
    let role = match content.role {
        Role::User => "user",
        Role::Model => "model",
    };
    let parts: Vec<Value> = content
        .parts
        .iter()
        .map(|part| match part {
            Part::Text(text) => json!({ "text": text }),
            Part::FunctionCall(call) => json!({
                "functionCall": { "name": call.name, "args": call.arguments }
            }),
            Part::FunctionResponse(response) => json!({
                "functionResponse": { "name": response.name, "response": response.response }
            }),
        })
        .collect();
    json!({ "role": role, "parts": parts })
}

fn part_from_json(part: &Value) -> Option<Part> {
    // Thinking models return their reasoning as text parts flagged `thought`.
    if part["thought"].as_bool() == Some(true) {
        return None;
    }
    if let Some(text) = part["text"].as_str() {
        return Some(Part::Text(text.to_string()));
    }
    let fc = part.get("functionCall")?;
    Some(Part::FunctionCall(ToolCall {
        id: fc["id"]
            .as_str()
            .map(str::to_string)
            .unwrap_or_else(|| uuid::Uuid::new_v4().to_string()),
        name: fc["name"].as_str().unwrap_or("").to_string(),
        arguments: match &fc["args"] {
            Value::Null => json!({}),
            args => args.clone(),
        },
    }))
}
