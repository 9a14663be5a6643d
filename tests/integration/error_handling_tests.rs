//! Error handling integration tests
//!
//! Verifies that errors map to the right HTTP status and envelope.

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_error_body;
    use actix_web::ResponseError;
    use actix_web::body::to_bytes;
    use serde_json::Value;
    use voice_todo_rs::core::rate_limiter::{RateLimitExceeded, RateWindow};
    use voice_todo_rs::{GatewayError, ProviderError};

    async fn body_of(err: &GatewayError) -> Value {
        let bytes = to_bytes(err.error_response().into_body()).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    // ==================== ProviderError to GatewayError Conversion ====================

    #[test]
    fn test_auth_error_flow() {
        let err: GatewayError = ProviderError::authentication("gemini", "bad key").into();
        assert!(matches!(err, GatewayError::Unauthorized(_)));
        assert_eq!(err.status_code().as_u16(), 401);
    }

    #[test]
    fn test_configuration_error_flow() {
        let err: GatewayError = ProviderError::configuration("gemini", "missing key").into();
        assert!(matches!(err, GatewayError::Config(_)));
        assert_eq!(err.status_code().as_u16(), 500);
    }

    #[test]
    fn test_remote_failures_are_bad_gateway() {
        for provider_err in [
            ProviderError::api_error("gemini", 503, "unavailable"),
            ProviderError::rate_limit("gemini", Some(30)),
            ProviderError::timeout("gemini", "slow"),
        ] {
            let err: GatewayError = provider_err.into();
            assert_eq!(err.status_code().as_u16(), 502);
        }
    }

    // ==================== Local budget ====================

    #[actix_web::test]
    async fn test_rate_limit_envelope() {
        let err: GatewayError = RateLimitExceeded {
            window: RateWindow::Day,
            limit: 1000,
        }
        .into();
        assert!(err.is_rate_limited());
        assert_eq!(err.status_code().as_u16(), 429);

        let body = body_of(&err).await;
        assert_error_body(&body, "RATE_LIMIT_EXCEEDED");
        assert!(body["error"]["message"].as_str().unwrap().contains("1000"));
    }

    #[actix_web::test]
    async fn test_internal_details_are_hidden() {
        let err = GatewayError::internal("secret stack detail");
        let body = body_of(&err).await;
        assert_error_body(&body, "INTERNAL_ERROR");
        assert_eq!(body["error"]["message"], "An internal error occurred");
    }
}
