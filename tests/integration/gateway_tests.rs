//! Refinement gateway tests against a mock Gemini server
//!
//! The full path is exercised: limiter, prompt, HTTP client, response
//! parsing, cleanup and fallback.

#[cfg(test)]
mod tests {
    use crate::common::fixtures::test_config;
    use actix_web::{test, web};
    use serde_json::{Value, json};
    use std::sync::Arc;
    use std::time::Duration;
    use voice_todo_rs::config::RateLimitConfig;
    use voice_todo_rs::core::providers::gemini::{GeminiClient, GeminiConfig};
    use voice_todo_rs::server::{AppState, create_app};
    use voice_todo_rs::{DualWindowLimiter, RefinementGateway};
    use wiremock::matchers::{body_string_contains, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ENDPOINT: &str = "/v1beta/models/gemini-1.5-flash:generateContent";

    fn gateway_for(server: &MockServer, max_per_minute: u32) -> RefinementGateway {
        let config = GeminiConfig::new_google_ai("test-key").with_base_url(server.uri());
        let client = GeminiClient::new(config).unwrap();
        let limiter = DualWindowLimiter::new(RateLimitConfig {
            max_per_minute,
            ..RateLimitConfig::default()
        });
        RefinementGateway::new(Arc::new(limiter), Arc::new(client))
    }

    fn reply(text: &str) -> ResponseTemplate {
        ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [{"content": {"role": "model", "parts": [{"text": text}]}}]
        }))
    }

    #[tokio::test]
    async fn test_refine_strips_quotes_from_model_reply() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .and(query_param("key", "test-key"))
            .and(body_string_contains("pick up dry cleaning"))
            .respond_with(reply("  \"Pick up dry cleaning on Friday\"\n"))
            .expect(1)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server, 5);
        let refined = gateway
            .refine("um pick up dry cleaning friday", None)
            .await
            .unwrap();
        assert_eq!(refined, "Pick up dry cleaning on Friday");
    }

    #[tokio::test]
    async fn test_remote_errors_fall_back_to_original() {
        for response in [
            ResponseTemplate::new(500).set_body_string("internal"),
            ResponseTemplate::new(429).set_body_json(json!({
                "error": {"code": 429, "message": "quota", "status": "RESOURCE_EXHAUSTED"}
            })),
            ResponseTemplate::new(200).set_body_string("<html>"),
            ResponseTemplate::new(200).set_body_json(json!({"candidates": []})),
            reply("   "),
        ] {
            let server = MockServer::start().await;
            Mock::given(method("POST"))
                .and(path(ENDPOINT))
                .respond_with(response)
                .mount(&server)
                .await;

            let gateway = gateway_for(&server, 5);
            let refinement = gateway.refine_detailed("buy milk", None).await.unwrap();
            assert_eq!(refinement.text, "buy milk");
            assert!(!refinement.refined);
            assert_eq!(gateway.usage().minute_usage, "1/5");
        }
    }

    #[tokio::test]
    async fn test_slow_backend_times_out_to_original() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(reply("Too late").set_delay(Duration::from_secs(2)))
            .mount(&server)
            .await;

        let gateway = gateway_for(&server, 5).with_timeout(Duration::from_millis(100));
        let refined = gateway.refine("buy milk", None).await.unwrap();
        assert_eq!(refined, "buy milk");
    }

    #[tokio::test]
    async fn test_budget_exhaustion_stops_remote_calls() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(reply("Buy milk"))
            .expect(2)
            .mount(&server)
            .await;

        let gateway = gateway_for(&server, 2);
        assert!(gateway.refine("buy milk", None).await.is_ok());
        assert!(gateway.refine("buy milk", None).await.is_ok());
        let err = gateway.refine("buy milk", None).await.unwrap_err();
        assert_eq!(err.limit, 2);
        // MockServer verifies the call count on drop
    }

    #[tokio::test]
    async fn test_missing_key_returns_original_without_request() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(reply("never"))
            .expect(0)
            .mount(&server)
            .await;

        let config = GeminiConfig::default().with_base_url(server.uri());
        let client = GeminiClient::new(config).unwrap();
        let gateway = RefinementGateway::new(
            Arc::new(DualWindowLimiter::new(RateLimitConfig::default())),
            Arc::new(client),
        );
        let refinement = gateway.refine_detailed("buy milk", None).await.unwrap();
        assert_eq!(refinement.text, "buy milk");
        assert!(!refinement.refined);
    }

    #[actix_web::test]
    async fn test_http_refine_through_gemini_client() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path(ENDPOINT))
            .respond_with(reply("Email Sam the slides"))
            .mount(&server)
            .await;

        let mut config = test_config(3);
        config.app.ai = GeminiConfig::new_google_ai("test-key").with_base_url(server.uri());
        let state = AppState::from_config(config).unwrap();
        let app = test::init_service(create_app(web::Data::new(state))).await;

        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["aiConfigured"], true);

        let req = test::TestRequest::post()
            .uri("/api/ai/refine")
            .set_json(json!({"text": "email sam slides"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["text"], "Email Sam the slides");
        assert_eq!(body["refined"], true);
        assert_eq!(body["usage"]["minuteUsage"], "1/3");
    }
}
