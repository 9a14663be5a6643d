//! Google Gemini backend
//!
//! Only the Google AI Studio `generateContent` endpoint is used, one
//! single-turn text prompt per call.

pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod provider;

pub use client::GeminiClient;
pub use config::{GeminiConfig, SafetySetting};
pub use error::GeminiErrorMapper;

use crate::core::providers::ProviderError;

/// Build a client from config
pub fn create_gemini_client(config: GeminiConfig) -> Result<GeminiClient, ProviderError> {
    GeminiClient::new(config)
}
