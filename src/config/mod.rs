//! Configuration management for the service
//!
//! This module handles loading, validation, and management of all service configuration.

mod loader;
pub mod models;
pub mod validation;

pub use models::*;
pub use validation::Validate;

use crate::utils::error::{GatewayError, Result};
use std::path::Path;
use tracing::{debug, info};

/// Main configuration struct for the service
#[derive(Debug, Clone, Default)]
pub struct Config {
    /// Service configuration
    pub app: AppConfig,
}

impl Config {
    /// Load configuration from a YAML file
    pub async fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!("Loading configuration from: {:?}", path);

        let content = tokio::fs::read_to_string(path)
            .await
            .map_err(|e| GatewayError::Config(format!("Failed to read config file: {}", e)))?;

        let app: AppConfig = serde_yaml::from_str(&content)
            .map_err(|e| GatewayError::Config(format!("Failed to parse config: {}", e)))?;

        let config = Self { app };
        config.validate()?;

        debug!("Configuration loaded successfully");
        Ok(config)
    }

    /// Load configuration from environment variables on top of defaults
    pub fn from_env() -> Result<Self> {
        info!("Loading configuration from environment variables");

        let mut app = AppConfig::default();
        app.apply_env(|key| std::env::var(key).ok())?;

        let config = Self { app };
        config.validate()?;
        Ok(config)
    }

    /// Load a YAML file, then let environment variables override it
    pub async fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let mut config = Self::from_file(path).await?;
        config.app.apply_env(|key| std::env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Get server configuration
    pub fn server(&self) -> &ServerConfig {
        &self.app.server
    }

    /// Get auth configuration
    pub fn auth(&self) -> &AuthConfig {
        &self.app.auth
    }

    /// Get remote text-generation configuration
    pub fn ai(&self) -> &GeminiConfig {
        &self.app.ai
    }

    /// Get AI request budgets
    pub fn rate_limit(&self) -> &RateLimitConfig {
        &self.app.rate_limit
    }

    /// Get logging configuration
    pub fn logging(&self) -> &LoggingConfig {
        &self.app.logging
    }

    /// Validate the entire configuration
    pub fn validate(&self) -> Result<()> {
        debug!("Validating configuration");

        self.app
            .validate()
            .map_err(|e| GatewayError::Config(format!("Invalid configuration: {}", e)))?;

        crate::config::models::auth::warn_insecure_config(&self.app.auth);
        self.app.server.cors.warn_if_permissive();

        debug!("Configuration validation completed");
        Ok(())
    }
}
