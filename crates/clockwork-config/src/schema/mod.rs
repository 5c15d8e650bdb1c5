//! Configuration schema types for Clockwork.
//!
//! All structs use `serde(default)` so partial configs work correctly.

mod agent;
mod model;
mod server;
mod session;
mod system;

pub use agent::*;
pub use model::*;
pub use server::*;
pub use session::*;
pub use system::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Clockwork.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ClockworkConfig {
    pub agent: AgentConfig,
    pub model: ModelConfig,
    pub session: SessionConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}
