//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> String {
    r##"# Clockwork Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.
# The API key is read from GOOGLE_API_KEY (or GEMINI_API_KEY), never from this file.

[agent]
# name = "root_agent"
# description = "A helpful assistant that can tell the current time."
# max_tool_rounds = 10   # 1-50
# instruction = """
# You are a helpful assistant.
# When the user asks for the time, use the 'get_current_time' tool.
# """

[model]
# name = "gemini-2.0-flash"
# max_tokens = 4096      # 1-65536
# temperature = 0.7      # 0.0-2.0

[session]
# user_id = "web_user"
# app_name = "root_agent"

[server]
# host = "127.0.0.1"
# port = 7860

[logging]
# level = "info"         # trace, debug, info, warn, error
"##
    .to_string()
}
