//! Type conversions for GatewayError

use super::types::GatewayError;
use crate::core::providers::ProviderError;

impl From<ProviderError> for GatewayError {
    fn from(err: ProviderError) -> Self {
        match err {
            ProviderError::Configuration { message, .. } => GatewayError::Config(message),
            ProviderError::Authentication { message, .. } => GatewayError::Unauthorized(message),
            other => GatewayError::Provider(other),
        }
    }
}

impl From<uuid::Error> for GatewayError {
    fn from(err: uuid::Error) -> Self {
        GatewayError::BadRequest(format!("Invalid task id: {}", err))
    }
}
