use super::*;

#[test]
fn default_config_is_valid() {
    assert!(validate(&ClockworkConfig::default()).is_ok());
}

#[test]
fn out_of_range_tool_rounds_rejected() {
    let mut config = ClockworkConfig::default();
    config.agent.max_tool_rounds = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("agent.max_tool_rounds = 0"), "got: {err}");
}

#[test]
fn nan_temperature_rejected() {
    let mut config = ClockworkConfig::default();
    config.model.temperature = f64::NAN;
    assert!(validate(&config).is_err());
}

#[test]
fn empty_names_rejected() {
    let mut config = ClockworkConfig::default();
    config.session.user_id = "  ".into();
    config.model.name = String::new();
    let err = validate(&config).unwrap_err().to_string();
    assert!(err.contains("session.user_id must not be empty"));
    assert!(err.contains("model.name must not be empty"));
}

#[test]
fn all_errors_are_collected() {
    let mut config = ClockworkConfig::default();
    config.model.max_tokens = 0;
    config.model.temperature = 2.5;
    config.server.port = 0;
    let err = validate(&config).unwrap_err().to_string();
    assert_eq!(err.matches("; ").count(), 2, "got: {err}");
}
