//! Authentication configuration

use serde::{Deserialize, Serialize};
use tracing::warn;

const PLACEHOLDER_PASSWORD: &str = "change-me";

/// The single static credential pair accepted by the login endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Login name, also used as the owner of every task
    #[serde(default = "default_user_id")]
    pub user_id: String,
    /// Plain-text password; hashed in memory at startup
    #[serde(default = "default_password")]
    pub password: String,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            user_id: default_user_id(),
            password: default_password(),
        }
    }
}

impl AuthConfig {
    /// Whether the password is still the shipped placeholder
    pub fn uses_placeholder_password(&self) -> bool {
        self.password == PLACEHOLDER_PASSWORD
    }
}

fn default_user_id() -> String {
    "demo".to_string()
}

fn default_password() -> String {
    PLACEHOLDER_PASSWORD.to_string()
}

/// Warn about insecure authentication settings
pub fn warn_insecure_config(config: &AuthConfig) {
    if config.uses_placeholder_password() {
        warn!(
            "Login password is the placeholder value. Set VOICE_TODO_PASSWORD or auth.password before exposing the service."
        );
    }
}
