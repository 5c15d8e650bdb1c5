//! Full configuration validation.
//!
//! Each check pushes onto a shared error list; the result is a single
//! `ConfigError` naming every offending field.

mod helpers;

#[cfg(test)]
mod tests;

use crate::schema::ClockworkConfig;
use clockwork_common::ConfigError;

use helpers::{validate_non_empty, validate_range, validate_range_f64};

/// Run all validations on a config, collecting all errors.
pub fn validate(config: &ClockworkConfig) -> Result<(), ConfigError> {
    let mut errors: Vec<String> = Vec::new();

    validate_non_empty(&mut errors, "agent.name", &config.agent.name);
    validate_range(
        &mut errors,
        "agent.max_tool_rounds",
        config.agent.max_tool_rounds,
        1,
        50,
    );

    validate_non_empty(&mut errors, "model.name", &config.model.name);
    validate_range(&mut errors, "model.max_tokens", config.model.max_tokens, 1, 65536);
    validate_range_f64(
        &mut errors,
        "model.temperature",
        config.model.temperature,
        0.0,
        2.0,
    );

    validate_non_empty(&mut errors, "session.user_id", &config.session.user_id);
    validate_non_empty(&mut errors, "session.app_name", &config.session.app_name);

    validate_non_empty(&mut errors, "server.host", &config.server.host);
    if config.server.port == 0 {
        errors.push("server.port must be non-zero".into());
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ConfigError::ValidationError(errors.join("; ")))
    }
}
