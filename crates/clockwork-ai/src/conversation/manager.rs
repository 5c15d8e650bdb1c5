//! Conversation struct and session lifecycle.

use std::sync::atomic::AtomicBool;
use std::sync::Arc;

use clockwork_common::SessionId;
use tokio::sync::Mutex;
use tracing::{debug, info};

use crate::runtime::AgentRuntime;
use crate::AiError;

use super::types::ChatMessage;

/// A conversation with the agent, bound to at most one runtime session.
pub struct Conversation {
    pub(super) runtime: Arc<dyn AgentRuntime>,
    /// User the session is created for.
    pub(super) user_id: String,
    /// Application the session is created under.
    pub(super) app_name: String,
    /// Active session, created lazily by the first turn.
    pub(super) session_id: Mutex<Option<SessionId>>,
    /// Whether a turn is currently in flight.
    pub(super) busy: AtomicBool,
}

impl Conversation {
    pub fn new(
        runtime: Arc<dyn AgentRuntime>,
        user_id: impl Into<String>,
        app_name: impl Into<String>,
    ) -> Self {
        Self {
            runtime,
            user_id: user_id.into(),
            app_name: app_name.into(),
            session_id: Mutex::new(None),
            busy: AtomicBool::new(false),
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    /// The active session, if one has been created since the last reset.
    pub async fn session_id(&self) -> Option<SessionId> {
        self.session_id.lock().await.clone()
    }

    /// Return the active session, creating it first if there is none.
    ///
    /// The lock is held across creation so concurrent callers never create
    /// two sessions. A failed creation leaves the conversation without a
    /// session; the next call tries again.
    pub async fn ensure_session(&self) -> Result<SessionId, AiError> {
        let mut active = self.session_id.lock().await;
        if let Some(ref id) = *active {
            return Ok(id.clone());
        }

        let session = self
            .runtime
            .session_service()
            .create_session(&self.user_id, &self.app_name)
            .await?;
        info!(session_id = %session.id, user_id = %self.user_id, "Conversation session created");
        *active = Some(session.id.clone());
        Ok(session.id)
    }

    /// Forget the active session and return the (empty) history to display.
    ///
    /// The runtime is not told; the old session just becomes unreachable.
    pub async fn reset(&self) -> Vec<ChatMessage> {
        if let Some(old) = self.session_id.lock().await.take() {
            debug!(session_id = %old, "Conversation reset");
        }
        Vec::new()
    }
}
