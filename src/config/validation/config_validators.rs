//! Core configuration validators
//!
//! Validation implementations for each configuration section.

use super::trait_def::Validate;
use crate::config::models::*;
use tracing::debug;
use url::Url;

impl Validate for AppConfig {
    fn validate(&self) -> Result<(), String> {
        debug!("Validating service configuration");

        self.server.validate()?;
        self.server.cors.validate()?;
        self.auth.validate()?;
        self.ai.validate()?;
        self.rate_limit.validate()?;
        self.logging.validate()?;

        Ok(())
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<(), String> {
        if self.host.is_empty() {
            return Err("Server host cannot be empty".to_string());
        }

        if self.port == 0 {
            return Err("Server port must be greater than 0".to_string());
        }

        if self.max_body_size == 0 {
            return Err("Max body size cannot be 0".to_string());
        }

        if self.workers == Some(0) {
            return Err("Worker count cannot be 0".to_string());
        }

        Ok(())
    }
}

impl Validate for CorsConfig {
    fn validate(&self) -> Result<(), String> {
        if self.enabled && self.allows_all_origins() && self.allow_credentials {
            return Err("CORS cannot allow all origins (*) when credentials are enabled for security reasons".to_string());
        }
        Ok(())
    }
}

impl Validate for AuthConfig {
    fn validate(&self) -> Result<(), String> {
        if self.user_id.trim().is_empty() {
            return Err("Auth user_id cannot be empty".to_string());
        }
        if self.password.is_empty() {
            return Err("Auth password cannot be empty".to_string());
        }
        Ok(())
    }
}

impl Validate for GeminiConfig {
    fn validate(&self) -> Result<(), String> {
        let url = Url::parse(&self.base_url)
            .map_err(|e| format!("AI base_url has invalid URL format: {}", e))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(format!(
                "AI base_url must use http:// or https:// scheme, got: {}",
                url.scheme()
            ));
        }

        if self.model.trim().is_empty() {
            return Err("AI model cannot be empty".to_string());
        }

        if !(0.0..=2.0).contains(&self.temperature) {
            return Err(format!(
                "AI temperature must be between 0 and 2, got {}",
                self.temperature
            ));
        }

        if !(self.top_p > 0.0 && self.top_p <= 1.0) {
            return Err(format!("AI top_p must be in (0, 1], got {}", self.top_p));
        }

        if self.max_output_tokens == 0 {
            return Err("AI max_output_tokens must be greater than 0".to_string());
        }

        if self.request_timeout == 0 {
            return Err("AI request_timeout must be greater than 0".to_string());
        }

        Ok(())
    }
}

impl Validate for RateLimitConfig {
    fn validate(&self) -> Result<(), String> {
        if self.max_per_minute == 0 {
            return Err("Rate limit max_per_minute must be greater than 0".to_string());
        }
        if self.max_per_day == 0 {
            return Err("Rate limit max_per_day must be greater than 0".to_string());
        }
        if self.max_per_minute > self.max_per_day {
            return Err(format!(
                "Rate limit max_per_minute ({}) cannot exceed max_per_day ({})",
                self.max_per_minute, self.max_per_day
            ));
        }
        if self.minute_window_secs == 0 || self.day_window_secs == 0 {
            return Err("Rate limit windows must be longer than 0 seconds".to_string());
        }
        Ok(())
    }
}

impl Validate for LoggingConfig {
    fn validate(&self) -> Result<(), String> {
        tracing_subscriber::EnvFilter::try_new(&self.level)
            .map(|_| ())
            .map_err(|e| format!("Invalid log level '{}': {}", self.level, e))
    }
}
