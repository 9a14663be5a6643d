//! Environment variable overrides
//!
//! This module layers environment variables over file or default configuration.

use super::models::*;
use crate::utils::error::{GatewayError, Result};
use std::str::FromStr;
use tracing::debug;

impl AppConfig {
    /// Apply overrides read through `lookup`
    ///
    /// `lookup` is usually `|key| std::env::var(key).ok()`.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        debug!("Applying environment overrides");

        // Server configuration
        if let Some(host) = lookup("VOICE_TODO_HOST") {
            self.server.host = host;
        }
        if let Some(port) = lookup("VOICE_TODO_PORT") {
            self.server.port = parse_var("VOICE_TODO_PORT", &port)?;
        }

        // Auth configuration
        if let Some(user_id) = lookup("VOICE_TODO_USER_ID") {
            self.auth.user_id = user_id;
        }
        if let Some(password) = lookup("VOICE_TODO_PASSWORD") {
            self.auth.password = password;
        }

        // Remote text generation
        if let Some(api_key) = lookup("GEMINI_API_KEY").or_else(|| lookup("GOOGLE_API_KEY")) {
            self.ai.api_key = Some(api_key);
        }
        if let Some(model) = lookup("GEMINI_MODEL") {
            self.ai.model = model;
        }
        if let Some(base_url) = lookup("GEMINI_BASE_URL") {
            self.ai.base_url = base_url;
        }
        if let Some(timeout) = lookup("AI_REQUEST_TIMEOUT") {
            self.ai.request_timeout = parse_var("AI_REQUEST_TIMEOUT", &timeout)?;
        }

        // Budgets
        if let Some(per_minute) = lookup("AI_MAX_PER_MINUTE") {
            self.rate_limit.max_per_minute = parse_var("AI_MAX_PER_MINUTE", &per_minute)?;
        }
        if let Some(per_day) = lookup("AI_MAX_PER_DAY") {
            self.rate_limit.max_per_day = parse_var("AI_MAX_PER_DAY", &per_day)?;
        }

        if let Some(level) = lookup("LOG_LEVEL") {
            self.logging.level = level;
        }

        Ok(())
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .trim()
        .parse()
        .map_err(|e| GatewayError::Config(format!("Invalid {}: {}", name, e)))
}
