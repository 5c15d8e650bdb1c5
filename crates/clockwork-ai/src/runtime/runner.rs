//! Runner that drives an `LlmAgent` against a model client.

use std::sync::Arc;

use async_stream::try_stream;
use clockwork_common::{new_correlation_id, SessionId};
use futures_util::Stream;
use serde_json::json;
use tokio::sync::Mutex;
use tracing::{debug, warn};

use crate::agent::LlmAgent;
use crate::content::{Content, Part, Role, ToolResponse};
use crate::token_tracker::TokenTracker;
use crate::{AiClient, AiError, ModelRequest, TokenUsage};

use super::event::Event;
use super::session_service::{InMemorySessionService, SessionService};
use super::{AgentRuntime, EventStream};

/// Runs one agent for one application, keeping sessions in memory.
pub struct InMemoryRunner {
    app_name: String,
    agent: LlmAgent,
    client: Arc<dyn AiClient>,
    sessions: InMemorySessionService,
    tracker: Mutex<TokenTracker>,
}

impl InMemoryRunner {
    pub fn new(agent: LlmAgent, client: Arc<dyn AiClient>, app_name: impl Into<String>) -> Self {
        Self {
            app_name: app_name.into(),
            agent,
            client,
            sessions: InMemorySessionService::new(),
            tracker: Mutex::new(TokenTracker::new()),
        }
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn agent(&self) -> &LlmAgent {
        &self.agent
    }

    /// Cumulative token usage across all sessions.
    pub async fn token_usage(&self) -> TokenUsage {
        self.tracker.lock().await.total().clone()
    }

    /// Number of model calls made across all sessions.
    pub async fn model_calls(&self) -> u64 {
        self.tracker.lock().await.call_count()
    }

    fn model_request(&self, contents: &[Content]) -> ModelRequest {
        ModelRequest {
            system_instruction: self.agent.instruction.clone(),
            contents: contents.to_vec(),
            tools: self.agent.tools.clone(),
        }
    }

    /// Model/tool loop for one user message.
    fn events<'a>(
        &'a self,
        user_id: &'a str,
        session_id: &'a SessionId,
        message: Content,
    ) -> impl Stream<Item = Result<Event, AiError>> + Send + 'a {
        try_stream! {
            let session = self
                .sessions
                .get_session(&self.app_name, user_id, session_id)
                .await?
                .ok_or_else(|| AiError::SessionNotFound(session_id.to_string()))?;

            let invocation_id = new_correlation_id();
            debug!(%session_id, invocation = %invocation_id, "Agent run started");

            let mut contents = session.contents();
            contents.push(message.clone());
            self.sessions
                .append_event(session_id, Event::new(&invocation_id, "user", Some(message)))
                .await?;

            let mut rounds = 0;
            loop {
                let response = self
                    .client
                    .generate_content(&self.model_request(&contents))
                    .await?;
                let (session_tokens, model_calls) = {
                    let mut tracker = self.tracker.lock().await;
                    tracker.record(session_id.as_str(), &response.usage);
                    let session_tokens = tracker
                        .for_session(session_id.as_str())
                        .map(TokenUsage::total_tokens)
                        .unwrap_or_default();
                    (session_tokens, tracker.call_count())
                };
                debug!(
                    invocation = %invocation_id,
                    input_tokens = response.usage.input_tokens,
                    output_tokens = response.usage.output_tokens,
                    session_tokens,
                    model_calls,
                    "Model responded"
                );

                let event = Event::new(&invocation_id, &self.agent.name, Some(response.content));
                let calls: Vec<_> = event.function_calls().into_iter().cloned().collect();
                // A reply with no parts is yielded but never replayed.
                match event.content {
                    Some(ref content) if !content.parts.is_empty() => {
                        contents.push(content.clone());
                        self.sessions.append_event(session_id, event.clone()).await?;
                    }
                    _ => warn!(invocation = %invocation_id, "Model returned no content"),
                }
                yield event;

                if calls.is_empty() {
                    break;
                }

                // Every recorded call gets a response, even when the run stops here.
                rounds += 1;
                let executor = match self.agent.tool_executor.as_ref() {
                    Some(executor) if rounds <= self.agent.max_tool_rounds => Ok(executor),
                    Some(_) => {
                        warn!(invocation = %invocation_id, rounds, "Max tool rounds reached, ending run");
                        Err("tool round limit reached")
                    }
                    None => {
                        warn!(invocation = %invocation_id, "Model requested tools but agent has no executor");
                        Err("no tool executor available")
                    }
                };

                let parts = calls
                    .iter()
                    .map(|call| {
                        let response = match executor {
                            Ok(run) => {
                                debug!(tool = %call.name, "Executing tool");
                                run(&call.name, &call.arguments)
                            }
                            Err(reason) => json!({ "error": reason }),
                        };
                        Part::FunctionResponse(ToolResponse {
                            id: call.id.clone(),
                            name: call.name.clone(),
                            response,
                        })
                    })
                    .collect();
                let results = Content {
                    role: Role::User,
                    parts,
                };
                contents.push(results.clone());

                let event = Event::new(&invocation_id, &self.agent.name, Some(results));
                self.sessions.append_event(session_id, event.clone()).await?;
                yield event;

                if executor.is_err() {
                    break;
                }
            }

            debug!(invocation = %invocation_id, rounds, "Agent run finished");
        }
    }
}

impl AgentRuntime for InMemoryRunner {
    fn session_service(&self) -> &dyn SessionService {
        &self.sessions
    }

    fn run<'a>(
        &'a self,
        user_id: &'a str,
        session_id: &'a SessionId,
        message: Content,
    ) -> EventStream<'a> {
        Box::pin(self.events(user_id, session_id, message))
    }
}
