//! Gemini HTTP client
//!
//! Talks to the Google AI Studio `generateContent` endpoint. The API key is
//! sent as the `key` query parameter and never written to logs.

use reqwest::{Client, ClientBuilder, Response};
use tokio::time::timeout;

use crate::core::providers::ProviderError;

use super::config::GeminiConfig;
use super::error::{GeminiErrorMapper, PROVIDER, gemini_network_error, gemini_parse_error};
use super::models::{Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig};

/// Gemini API client
#[derive(Debug, Clone)]
pub struct GeminiClient {
    config: GeminiConfig,
    http_client: Client,
}

impl GeminiClient {
    pub fn new(config: GeminiConfig) -> Result<Self, ProviderError> {
        let http_client = ClientBuilder::new()
            .timeout(config.request_timeout())
            .connect_timeout(config.connect_timeout())
            .build()
            .map_err(|e| gemini_network_error(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self {
            config,
            http_client,
        })
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Single-turn request carrying the configured sampling and safety settings
    pub fn build_request(&self, prompt: &str) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: vec![Content::text(prompt)],
            generation_config: GenerationConfig {
                temperature: self.config.temperature,
                max_output_tokens: self.config.max_output_tokens,
                top_k: self.config.top_k,
                top_p: self.config.top_p,
            },
            safety_settings: self.config.safety_settings.clone(),
        }
    }

    pub async fn generate_content(
        &self,
        request: &GenerateContentRequest,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let api_key = self
            .config
            .api_key
            .as_deref()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| ProviderError::configuration(PROVIDER, "API key is not configured"))?;

        let url = self.config.get_endpoint();
        if self.config.debug {
            tracing::debug!("Gemini request URL: {}", url);
            tracing::debug!(
                "Gemini request body: {}",
                serde_json::to_string(request).unwrap_or_default()
            );
        }

        let response = timeout(
            self.config.request_timeout(),
            self.http_client
                .post(&url)
                .query(&[("key", api_key)])
                .json(request)
                .send(),
        )
        .await
        .map_err(|_| ProviderError::timeout(PROVIDER, "Request timeout"))?
        .map_err(|e| {
            // The URL carries the API key
            let e = e.without_url();
            if e.is_timeout() {
                ProviderError::timeout(PROVIDER, e.to_string())
            } else {
                gemini_network_error(format!("Network error: {}", e))
            }
        })?;

        self.handle_response(response).await
    }

    async fn handle_response(
        &self,
        response: Response,
    ) -> Result<GenerateContentResponse, ProviderError> {
        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| gemini_network_error(format!("Failed to read response: {}", e)))?;

        if !status.is_success() {
            return Err(GeminiErrorMapper::from_http_status(status.as_u16(), &body));
        }

        serde_json::from_str(&body)
            .map_err(|e| gemini_parse_error(format!("Invalid response body: {}", e)))
    }
}
