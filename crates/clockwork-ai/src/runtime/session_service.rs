//! Session storage for the agent runtime.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use clockwork_common::SessionId;
use tokio::sync::RwLock;
use tracing::debug;

use crate::content::Content;
use crate::AiError;

use super::event::Event;

/// A conversation held by the runtime: all events recorded so far.
#[derive(Debug, Clone)]
pub struct AgentSession {
    pub id: SessionId,
    pub app_name: String,
    pub user_id: String,
    pub events: Vec<Event>,
    pub last_update: DateTime<Utc>,
}

impl AgentSession {
    /// Contents of all recorded events, in order, as the model should see them.
    pub fn contents(&self) -> Vec<Content> {
        self.events
            .iter()
            .filter(|event| !event.partial)
            .filter_map(|event| event.content.clone())
            .collect()
    }
}

#[async_trait]
pub trait SessionService: Send + Sync {
    async fn create_session(&self, user_id: &str, app_name: &str)
        -> Result<AgentSession, AiError>;

    /// Look up a session; `None` if it does not exist within this scope.
    async fn get_session(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &SessionId,
    ) -> Result<Option<AgentSession>, AiError>;

    async fn append_event(&self, session_id: &SessionId, event: Event) -> Result<(), AiError>;
}

/// Session service that keeps everything in process memory.
///
/// Sessions are lost on restart and never evicted.
#[derive(Clone, Default)]
pub struct InMemorySessionService {
    sessions: Arc<RwLock<HashMap<SessionId, AgentSession>>>,
}

impl InMemorySessionService {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionService for InMemorySessionService {
    async fn create_session(
        &self,
        user_id: &str,
        app_name: &str,
    ) -> Result<AgentSession, AiError> {
        let session = AgentSession {
            id: SessionId::new(),
            app_name: app_name.to_string(),
            user_id: user_id.to_string(),
            events: Vec::new(),
            last_update: Utc::now(),
        };
        self.sessions
            .write()
            .await
            .insert(session.id.clone(), session.clone());
        debug!(session_id = %session.id, user_id, app_name, "Created session");
        Ok(session)
    }

    async fn get_session(
        &self,
        app_name: &str,
        user_id: &str,
        session_id: &SessionId,
    ) -> Result<Option<AgentSession>, AiError> {
        let map = self.sessions.read().await;
        Ok(map
            .get(session_id)
            .filter(|s| s.app_name == app_name && s.user_id == user_id)
            .cloned())
    }

    async fn append_event(&self, session_id: &SessionId, event: Event) -> Result<(), AiError> {
        let mut map = self.sessions.write().await;
        let session = map
            .get_mut(session_id)
            .ok_or_else(|| AiError::SessionNotFound(session_id.to_string()))?;
        session.last_update = event.timestamp;
        session.events.push(event);
        Ok(())
    }
}
