//! Conversation handle: one session, one turn at a time.
//!
//! A `Conversation` lazily creates its session on the first turn, reuses it
//! for every later turn, and forgets it on reset. Turns submit the user's
//! text to the agent runtime and drain the event stream until the final
//! response.

mod blocking;
mod manager;
mod turn;
mod types;


pub use blocking::BlockingConversation;
pub use manager::Conversation;
pub use turn::final_response_text;
pub use types::{display_text, ChatMessage, ChatRole, TurnError, TurnOutcome};
