//! [`TextGenerator`] implementation backed by Gemini

use async_trait::async_trait;

use crate::core::providers::{ProviderError, TextGenerator};

use super::client::GeminiClient;
use super::error::PROVIDER;

#[async_trait]
impl TextGenerator for GeminiClient {
    fn name(&self) -> &'static str {
        PROVIDER
    }

    async fn generate(&self, prompt: &str) -> Result<String, ProviderError> {
        let request = self.build_request(prompt);
        let response = self.generate_content(&request).await?;

        if let Some(text) = response.first_text() {
            return Ok(text.to_string());
        }
        match response.block_reason() {
            Some(reason) => Err(ProviderError::blocked(PROVIDER, reason)),
            None => Err(ProviderError::empty_response(PROVIDER)),
        }
    }
}
