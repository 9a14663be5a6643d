//! Live Gemini refinement
//!
//! Run with: `GEMINI_API_KEY=... cargo test gemini -- --ignored`

#[cfg(test)]
mod tests {
    use crate::skip_without_env;
    use std::sync::Arc;
    use voice_todo_rs::config::RateLimitConfig;
    use voice_todo_rs::core::providers::TextGenerator;
    use voice_todo_rs::core::providers::gemini::{GeminiClient, GeminiConfig};
    use voice_todo_rs::{DualWindowLimiter, RefinementGateway};

    fn live_client() -> GeminiClient {
        let key = std::env::var("GEMINI_API_KEY").unwrap();
        GeminiClient::new(GeminiConfig::new_google_ai(key)).unwrap()
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_generate() {
        skip_without_env!("GEMINI_API_KEY");

        let text = live_client()
            .generate("Reply with the single word: ready")
            .await
            .unwrap();
        assert!(!text.trim().is_empty());
    }

    #[tokio::test]
    #[ignore]
    async fn test_live_refinement() {
        skip_without_env!("GEMINI_API_KEY");

        let gateway = RefinementGateway::new(
            Arc::new(DualWindowLimiter::new(RateLimitConfig::default())),
            Arc::new(live_client()),
        );
        let refinement = gateway
            .refine_detailed("uh remind me call the dentist tomorrow", Some("health"))
            .await
            .unwrap();

        assert!(refinement.refined, "expected model output: {:?}", refinement);
        assert!(!refinement.text.starts_with('"'));
        assert_eq!(gateway.usage().minute_usage, "1/10");
    }
}
