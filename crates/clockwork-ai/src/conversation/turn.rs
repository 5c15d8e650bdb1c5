//! Turn execution: submit one message and drain the event stream.

use futures_util::{Stream, StreamExt};
use tracing::{debug, warn};

use crate::content::Content;
use crate::runtime::Event;
use crate::AiError;

use super::manager::Conversation;
use super::types::{display_text, BusyGuard, ChatMessage, TurnError, TurnOutcome};

/// Draw events in order until the first final response with content and
/// return the text of its first part.
///
/// Events after that one are never polled. `Ok(None)` means the stream
/// ended without such an event.
pub async fn final_response_text<S>(events: S) -> Result<Option<String>, AiError>
where
    S: Stream<Item = Result<Event, AiError>>,
{
    futures_util::pin_mut!(events);
    while let Some(event) = events.next().await {
        let event = event?;
        if !event.is_final_response() {
            continue;
        }
        if let Some(first) = event.content.as_ref().and_then(|c| c.parts.first()) {
            return Ok(Some(first.as_text().unwrap_or_default().to_string()));
        }
    }
    Ok(None)
}

impl Conversation {
    /// Run one turn: ensure a session, submit `text`, return the final response.
    pub async fn run_turn(&self, text: &str) -> Result<TurnOutcome, TurnError> {
        if text.trim().is_empty() {
            return Err(TurnError::EmptyMessage);
        }
        let _guard = BusyGuard::acquire(&self.busy)?;

        let session_id = self
            .ensure_session()
            .await
            .map_err(TurnError::SessionCreation)?;

        debug!(%session_id, "Submitting turn");
        let events = self
            .runtime
            .run(&self.user_id, &session_id, Content::user_text(text));

        match final_response_text(events).await {
            Ok(Some(reply)) => Ok(TurnOutcome::Reply(reply)),
            Ok(None) => {
                warn!(%session_id, "Agent produced no final response");
                Ok(TurnOutcome::NoResponse)
            }
            Err(e) => {
                warn!(%session_id, error = %e, "Turn failed");
                Err(TurnError::Runtime(e))
            }
        }
    }

    /// Run a turn on behalf of a chat UI.
    ///
    /// Appends the user message and the assistant's reply (or `Error: ...`)
    /// to `history` and returns it with an empty string for the input box.
    /// Empty input leaves the history untouched.
    pub async fn respond(
        &self,
        message: &str,
        mut history: Vec<ChatMessage>,
    ) -> (String, Vec<ChatMessage>) {
        let result = self.run_turn(message).await;
        if !matches!(result, Err(TurnError::EmptyMessage)) {
            history.push(ChatMessage::user(message));
            history.push(ChatMessage::assistant(display_text(&result)));
        }
        (String::new(), history)
    }
}
