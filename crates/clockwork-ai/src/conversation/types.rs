//! Conversation types and concurrency guards.

use std::sync::atomic::{AtomicBool, Ordering};

use serde::{Deserialize, Serialize};

use crate::AiError;

/// Speaker of a displayed chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One entry of the chat history shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::User,
            content: content.into(),
        }
    }

    pub fn assistant(content: impl Into<String>) -> Self {
        Self {
            role: ChatRole::Assistant,
            content: content.into(),
        }
    }
}

/// Result of a turn that reached the end of its event stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TurnOutcome {
    /// Text of the first final response.
    Reply(String),
    /// The stream ended without a final response carrying content.
    NoResponse,
}

impl TurnOutcome {
    /// Text to display; empty when no response was produced.
    pub fn text(&self) -> &str {
        match self {
            TurnOutcome::Reply(text) => text,
            TurnOutcome::NoResponse => "",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum TurnError {
    #[error("message is empty")]
    EmptyMessage,
    #[error("conversation is busy with another turn")]
    Busy,
    #[error("failed to create session: {0}")]
    SessionCreation(#[source] AiError),
    #[error("{0}")]
    Runtime(#[source] AiError),
}

/// Render a turn result for display: the reply text, or `Error: <description>`.
pub fn display_text(result: &Result<TurnOutcome, TurnError>) -> String {
    match result {
        Ok(outcome) => outcome.text().to_string(),
        Err(e) => format!("Error: {e}"),
    }
}

/// Holds the `busy` flag for one turn and clears it on drop.
pub(crate) struct BusyGuard<'a> {
    flag: &'a AtomicBool,
}

impl<'a> BusyGuard<'a> {
    /// Fails with `TurnError::Busy` if a turn is already running.
    pub(crate) fn acquire(flag: &'a AtomicBool) -> Result<Self, TurnError> {
        if flag
            .compare_exchange(false, true, Ordering::Acquire, Ordering::Relaxed)
            .is_err()
        {
            return Err(TurnError::Busy);
        }
        Ok(Self { flag })
    }
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.store(false, Ordering::Release);
    }
}
