//! Configuration data models
//!
//! This module defines all configuration structures used throughout the service.

#![allow(missing_docs)]

pub mod app;
pub mod auth;
pub mod logging;
pub mod rate_limit;
pub mod server;

// Re-export all configuration types
pub use crate::core::providers::gemini::{GeminiConfig, SafetySetting};
pub use app::*;
pub use auth::*;
pub use logging::*;
pub use rate_limit::*;
pub use server::*;

/// Default bind address
pub fn default_host() -> String {
    "0.0.0.0".to_string()
}

/// Default server port
pub fn default_port() -> u16 {
    5000
}

/// Default maximum body size in bytes
pub fn default_max_body_size() -> usize {
    256 * 1024
}

pub fn default_max_per_minute() -> u32 {
    10
}

pub fn default_max_per_day() -> u32 {
    1000
}

pub fn default_minute_window_secs() -> u64 {
    60
}

pub fn default_day_window_secs() -> u64 {
    86_400
}

pub(crate) fn default_true() -> bool {
    true
}
