//! Blocking adapter for callers that cannot await.

use tokio::runtime::Runtime;

use super::manager::Conversation;
use super::types::{ChatMessage, TurnError, TurnOutcome};

/// Owns a long-lived tokio runtime and runs every conversation call on it,
/// blocking the calling thread until the call completes.
///
/// Must not be used from inside another tokio runtime.
pub struct BlockingConversation {
    runtime: Runtime,
    conversation: Conversation,
}

impl BlockingConversation {
    pub fn new(conversation: Conversation) -> std::io::Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(1)
            .enable_all()
            .build()?;
        Ok(Self {
            runtime,
            conversation,
        })
    }

    pub fn conversation(&self) -> &Conversation {
        &self.conversation
    }

    pub fn submit(&self, text: &str) -> Result<TurnOutcome, TurnError> {
        self.runtime.block_on(self.conversation.run_turn(text))
    }

    pub fn respond(&self, message: &str, history: Vec<ChatMessage>) -> (String, Vec<ChatMessage>) {
        self.runtime
            .block_on(self.conversation.respond(message, history))
    }

    pub fn reset(&self) -> Vec<ChatMessage> {
        self.runtime.block_on(self.conversation.reset())
    }
}
