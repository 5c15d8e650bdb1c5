//! In-process agent runtime.
//!
//! A runtime owns a session service and turns one user message into an
//! ordered stream of events: model replies, tool invocations, and tool
//! results. Callers drain the stream until the final response.

mod event;
mod runner;
mod session_service;


use clockwork_common::SessionId;
use futures_util::stream::BoxStream;

use crate::content::Content;
use crate::AiError;

pub use event::Event;
pub use runner::InMemoryRunner;
pub use session_service::{AgentSession, InMemorySessionService, SessionService};

/// Ordered events produced by one agent run.
pub type EventStream<'a> = BoxStream<'a, Result<Event, AiError>>;

/// An agent runtime that conversations submit their turns to.
pub trait AgentRuntime: Send + Sync {
    fn session_service(&self) -> &dyn SessionService;

    /// Submit `message` to the session and stream the resulting events.
    ///
    /// Nothing happens until the stream is polled; dropping it early stops
    /// the run after the last event drawn.
    fn run<'a>(
        &'a self,
        user_id: &'a str,
        session_id: &'a SessionId,
        message: Content,
    ) -> EventStream<'a>;
}
