//! Errors raised by remote text-generation providers

/// Failure of a single call to a text-generation backend.
///
/// Every variant carries the provider name so log lines stay attributable
/// once several backends are configured.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ProviderError {
    #[error("Network error for {provider}: {message}")]
    Network {
        provider: &'static str,
        message: String,
    },

    #[error("Request to {provider} timed out: {message}")]
    Timeout {
        provider: &'static str,
        message: String,
    },

    #[error("API error from {provider} (status {status}): {message}")]
    Api {
        provider: &'static str,
        status: u16,
        message: String,
    },

    #[error("Authentication failed for {provider}: {message}")]
    Authentication {
        provider: &'static str,
        message: String,
    },

    #[error("Rate limited by {provider}: {message}")]
    RateLimit {
        provider: &'static str,
        message: String,
        retry_after: Option<u64>,
    },

    #[error("Failed to parse response from {provider}: {message}")]
    Parse {
        provider: &'static str,
        message: String,
    },

    #[error("{provider} returned no usable text")]
    EmptyResponse { provider: &'static str },

    #[error("Content blocked by {provider}: {reason}")]
    Blocked {
        provider: &'static str,
        reason: String,
    },

    #[error("Configuration error for {provider}: {message}")]
    Configuration {
        provider: &'static str,
        message: String,
    },
}

impl ProviderError {
    pub fn network(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Network {
            provider,
            message: message.into(),
        }
    }

    pub fn timeout(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Timeout {
            provider,
            message: message.into(),
        }
    }

    pub fn api_error(provider: &'static str, status: u16, message: impl Into<String>) -> Self {
        Self::Api {
            provider,
            status,
            message: message.into(),
        }
    }

    pub fn authentication(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Authentication {
            provider,
            message: message.into(),
        }
    }

    pub fn rate_limit(provider: &'static str, retry_after: Option<u64>) -> Self {
        let message = match retry_after {
            Some(secs) => format!("retry after {} seconds", secs),
            None => "too many requests".to_string(),
        };
        Self::RateLimit {
            provider,
            message,
            retry_after,
        }
    }

    pub fn parse(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Parse {
            provider,
            message: message.into(),
        }
    }

    pub fn empty_response(provider: &'static str) -> Self {
        Self::EmptyResponse { provider }
    }

    pub fn blocked(provider: &'static str, reason: impl Into<String>) -> Self {
        Self::Blocked {
            provider,
            reason: reason.into(),
        }
    }

    pub fn configuration(provider: &'static str, message: impl Into<String>) -> Self {
        Self::Configuration {
            provider,
            message: message.into(),
        }
    }

    /// Name of the backend that produced the error
    pub fn provider(&self) -> &'static str {
        match self {
            Self::Network { provider, .. }
            | Self::Timeout { provider, .. }
            | Self::Api { provider, .. }
            | Self::Authentication { provider, .. }
            | Self::RateLimit { provider, .. }
            | Self::Parse { provider, .. }
            | Self::EmptyResponse { provider }
            | Self::Blocked { provider, .. }
            | Self::Configuration { provider, .. } => provider,
        }
    }

    /// Whether a later identical request could plausibly succeed
    pub fn is_retryable(&self) -> bool {
        match self {
            Self::Network { .. } | Self::Timeout { .. } | Self::RateLimit { .. } => true,
            Self::Api { status, .. } => matches!(*status, 429 | 500..=599),
            _ => false,
        }
    }
}
