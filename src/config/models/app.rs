//! Top-level service configuration

use super::*;
use serde::{Deserialize, Serialize};

/// Every configuration section of the service
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// HTTP server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Login credentials
    #[serde(default)]
    pub auth: AuthConfig,
    /// Remote text-generation settings
    #[serde(default)]
    pub ai: GeminiConfig,
    /// AI request budgets
    #[serde(default)]
    pub rate_limit: RateLimitConfig,
    /// Log output
    #[serde(default)]
    pub logging: LoggingConfig,
}
