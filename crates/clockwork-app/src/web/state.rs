use std::sync::Arc;

use clockwork_ai::{Conversation, InMemoryRunner};

/// Shared router state: the one conversation behind the chat page.
#[derive(Clone)]
pub struct AppState {
    pub(super) conversation: Arc<Conversation>,
    /// Runner the conversation submits to, kept for usage reporting.
    pub(super) runner: Arc<InMemoryRunner>,
    pub(super) model: Arc<str>,
}

impl AppState {
    pub fn new(
        runner: Arc<InMemoryRunner>,
        conversation: Conversation,
        model: impl Into<Arc<str>>,
    ) -> Self {
        Self {
            conversation: Arc::new(conversation),
            runner,
            model: model.into(),
        }
    }
}
