//! Gemini error mapping

use crate::core::providers::ProviderError;

pub(crate) const PROVIDER: &str = "gemini";

/// Maps Gemini HTTP failures onto [`ProviderError`]
pub struct GeminiErrorMapper;

impl GeminiErrorMapper {
    pub fn from_http_status(status: u16, body: &str) -> ProviderError {
        let message = Self::extract_message(body).unwrap_or_else(|| body.to_string());
        match status {
            401 | 403 => ProviderError::authentication(PROVIDER, message),
            429 => ProviderError::rate_limit(PROVIDER, Self::extract_retry_after(body)),
            _ => ProviderError::api_error(PROVIDER, status, message),
        }
    }

    /// `error.message` from a Google API error envelope
    fn extract_message(body: &str) -> Option<String> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("error")?
            .get("message")?
            .as_str()
            .map(str::to_string)
    }

    /// Seconds from a `RetryInfo` detail such as `"retryDelay": "30s"`
    fn extract_retry_after(body: &str) -> Option<u64> {
        let value: serde_json::Value = serde_json::from_str(body).ok()?;
        value
            .get("error")?
            .get("details")?
            .as_array()?
            .iter()
            .filter_map(|detail| detail.get("retryDelay")?.as_str())
            .find_map(|delay| delay.trim_end_matches('s').parse::<u64>().ok())
    }
}

pub(crate) fn gemini_network_error(message: impl Into<String>) -> ProviderError {
    ProviderError::network(PROVIDER, message)
}

pub(crate) fn gemini_parse_error(message: impl Into<String>) -> ProviderError {
    ProviderError::parse(PROVIDER, message)
}
