use serde::{Deserialize, Serialize};

/// Scope under which conversation sessions are created.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub user_id: String,
    pub app_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            user_id: "web_user".into(),
            app_name: "root_agent".into(),
        }
    }
}
