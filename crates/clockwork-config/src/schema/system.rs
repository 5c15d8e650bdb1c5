//! Logging configuration.

use serde::{Deserialize, Serialize};

/// Log level.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Trace,
    Debug,
    #[default]
    Info,
    Warn,
    Error,
}

impl LogLevel {
    /// Filter directive scoped to the clockwork crates.
    pub fn directive(self) -> &'static str {
        match self {
            LogLevel::Trace => "clockwork=trace",
            LogLevel::Debug => "clockwork=debug",
            LogLevel::Info => "clockwork=info",
            LogLevel::Warn => "clockwork=warn",
            LogLevel::Error => "clockwork=error",
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: LogLevel,
}
