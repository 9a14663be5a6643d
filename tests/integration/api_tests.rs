//! HTTP API integration tests
//!
//! Each test builds the full actix application over in-memory storage.

#[cfg(test)]
mod tests {
    use crate::common::assertions::assert_error_body;
    use crate::common::fixtures::{TEST_PASSWORD, TEST_USER};
    use crate::common::{StubGenerator, test_state};
    use actix_web::http::StatusCode;
    use actix_web::{test, web};
    use serde_json::{Value, json};
    use voice_todo_rs::core::providers::ProviderError;
    use voice_todo_rs::server::create_app;

    macro_rules! app {
        ($state:expr) => {
            test::init_service(create_app(web::Data::new($state))).await
        };
    }

    // ==================== Health & Auth ====================

    #[actix_web::test]
    async fn test_health_reports_running() {
        let app = app!(test_state(5, StubGenerator::replying("x")));
        let req = test::TestRequest::get().uri("/api/health").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["status"], "ok");
        assert_eq!(body["message"], "Server is running");
        assert_eq!(body["version"], voice_todo_rs::VERSION);
        assert_eq!(body["aiConfigured"], false);
    }

    #[actix_web::test]
    async fn test_login_success_and_failure() {
        let app = app!(test_state(5, StubGenerator::replying("x")));

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"userId": TEST_USER, "password": TEST_PASSWORD}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"success": true, "userId": TEST_USER}));

        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .set_json(json!({"userId": TEST_USER, "password": "wrong"}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
        let body: Value = test::read_body_json(resp).await;
        assert_eq!(
            body,
            json!({"success": false, "message": "Invalid credentials"})
        );
    }

    #[actix_web::test]
    async fn test_malformed_json_is_bad_request() {
        let app = app!(test_state(5, StubGenerator::replying("x")));
        let req = test::TestRequest::post()
            .uri("/api/auth/login")
            .insert_header(("content-type", "application/json"))
            .set_payload("{not json")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_error_body(&body, "BAD_REQUEST");
    }

    // ==================== Tasks ====================

    macro_rules! create_task {
        ($app:expr, $text:expr, $due:expr) => {{
            let req = test::TestRequest::post()
                .uri("/api/todos")
                .set_json(json!({"userId": TEST_USER, "text": $text, "dueDate": $due}))
                .to_request();
            let created: Value = test::call_and_read_body_json(&$app, req).await;
            created
        }};
    }

    #[actix_web::test]
    async fn test_task_lifecycle() {
        let app = app!(test_state(5, StubGenerator::replying("x")));

        let created = create_task!(app, "  buy milk ", Some("2024-03-06T09:00"));
        assert_eq!(created["text"], "buy milk");
        assert_eq!(created["completed"], false);
        assert_eq!(created["dueDate"], "2024-03-06T09:00");
        let id = created["_id"].as_str().unwrap().to_string();

        let req = test::TestRequest::patch()
            .uri(&format!("/api/todos/{}/status", id))
            .set_json(json!({"completed": true}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"success": true}));

        let req = test::TestRequest::patch()
            .uri(&format!("/api/todos/{}/text", id))
            .set_json(json!({"text": "buy oat milk"}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/todos/{}/duedate", id))
            .set_json(json!({"dueDate": null}))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::patch()
            .uri(&format!("/api/todos/{}/share", id))
            .to_request();
        test::call_service(&app, req).await;

        let req = test::TestRequest::get()
            .uri(&format!("/api/todos/{}", TEST_USER))
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        let task = &list.as_array().unwrap()[0];
        assert_eq!(task["text"], "buy oat milk");
        assert_eq!(task["completed"], true);
        assert_eq!(task["shared"], true);
        assert!(task["dueDate"].is_null());

        let req = test::TestRequest::delete()
            .uri(&format!("/api/todos/{}", id))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let req = test::TestRequest::get()
            .uri(&format!("/api/todos/{}", TEST_USER))
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list, json!([]));
    }

    #[actix_web::test]
    async fn test_list_is_newest_first_and_filtered() {
        let app = app!(test_state(5, StubGenerator::replying("x")));
        create_task!(app, "first", Some("2024-03-06"));
        create_task!(app, "second", None::<&str>);

        let req = test::TestRequest::get()
            .uri(&format!("/api/todos/{}", TEST_USER))
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        let texts: Vec<&str> = list
            .as_array()
            .unwrap()
            .iter()
            .map(|t| t["text"].as_str().unwrap())
            .collect();
        assert_eq!(texts, vec!["second", "first"]);

        let req = test::TestRequest::get()
            .uri(&format!("/api/todos/{}?date=2024-03-06", TEST_USER))
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list.as_array().unwrap().len(), 1);
        assert_eq!(list[0]["text"], "first");

        let req = test::TestRequest::get()
            .uri("/api/todos/someone-else")
            .to_request();
        let list: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(list, json!([]));
    }

    #[actix_web::test]
    async fn test_similar_stats_and_links() {
        let app = app!(test_state(5, StubGenerator::replying("x")));
        let created = create_task!(app, "buy milk", Some("2024-03-06T09:00"));
        let id = created["_id"].as_str().unwrap();

        let req = test::TestRequest::get()
            .uri(&format!("/api/todos/{}/similar?text=BUY%20MILK", TEST_USER))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"similar": true}));

        let req = test::TestRequest::get()
            .uri(&format!("/api/todos/{}/stats", TEST_USER))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["total"], 1);

        let req = test::TestRequest::get()
            .uri(&format!("/api/todos/{}/links", id))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        let calendar = body["calendar"].as_str().unwrap();
        assert!(calendar.starts_with("https://calendar.google.com/calendar/render?"));
        assert!(calendar.contains("20240306T090000"));
        assert!(calendar.contains("20240306T100000"));
        assert_eq!(body["share"], "https://wa.me/?text=buy+milk");
    }

    #[actix_web::test]
    async fn test_task_errors() {
        let app = app!(test_state(5, StubGenerator::replying("x")));

        let req = test::TestRequest::post()
            .uri("/api/todos")
            .set_json(json!({"userId": TEST_USER, "text": "   "}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
        let body: Value = test::read_body_json(resp).await;
        assert_error_body(&body, "VALIDATION_ERROR");

        let req = test::TestRequest::delete()
            .uri("/api/todos/not-a-uuid")
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

        let req = test::TestRequest::patch()
            .uri(&format!("/api/todos/{}/status", uuid::Uuid::new_v4()))
            .set_json(json!({"completed": true}))
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND);
        let body: Value = test::read_body_json(resp).await;
        assert_error_body(&body, "NOT_FOUND");
    }

    // ==================== Daily usage ====================

    #[actix_web::test]
    async fn test_daily_usage_counter() {
        let app = app!(test_state(5, StubGenerator::replying("x")));

        let req = test::TestRequest::get()
            .uri(&format!("/api/ai-usage/{}", TEST_USER))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"dailyUsage": 0}));

        for _ in 0..2 {
            let req = test::TestRequest::post()
                .uri("/api/ai-usage")
                .set_json(json!({"userId": TEST_USER}))
                .to_request();
            let body: Value = test::call_and_read_body_json(&app, req).await;
            assert_eq!(body, json!({"success": true}));
        }

        let req = test::TestRequest::get()
            .uri(&format!("/api/ai-usage/{}", TEST_USER))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"dailyUsage": 2}));
    }

    // ==================== AI refinement ====================

    #[actix_web::test]
    async fn test_refine_returns_cleaned_text_and_usage() {
        let generator = StubGenerator::replying("\"Call mom tomorrow at 3 PM\"");
        let app = app!(test_state(2, generator.clone()));

        let req = test::TestRequest::post()
            .uri("/api/ai/refine")
            .set_json(json!({
                "text": "uh call mom tomorrow 3pm",
                "context": "family",
                "userId": TEST_USER
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["text"], "Call mom tomorrow at 3 PM");
        assert_eq!(body["refined"], true);
        assert_eq!(body["usage"]["minuteUsage"], "1/2");
        assert_eq!(body["usage"]["dailyUsage"], "1/100");

        let prompt = generator.last_prompt().unwrap();
        assert!(prompt.contains("uh call mom tomorrow 3pm"));
        assert!(prompt.contains("family"));

        let req = test::TestRequest::get()
            .uri(&format!("/api/ai-usage/{}", TEST_USER))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"dailyUsage": 1}));
    }

    #[actix_web::test]
    async fn test_refine_falls_back_on_provider_failure() {
        let generator =
            StubGenerator::failing(ProviderError::api_error("gemini", 500, "backend down"));
        let app = app!(test_state(2, generator.clone()));

        let req = test::TestRequest::post()
            .uri("/api/ai/refine")
            .set_json(json!({"text": "buy milk"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["text"], "buy milk");
        assert_eq!(body["refined"], false);
        assert_eq!(body["usage"]["minuteUsage"], "1/2");
        assert_eq!(generator.calls(), 1);
    }

    #[actix_web::test]
    async fn test_refine_rate_limited() {
        let generator = StubGenerator::replying("Buy milk");
        let app = app!(test_state(1, generator.clone()));

        let refine = || {
            test::TestRequest::post()
                .uri("/api/ai/refine")
                .set_json(json!({"text": "buy milk"}))
                .to_request()
        };

        let resp = test::call_service(&app, refine()).await;
        assert_eq!(resp.status(), StatusCode::OK);

        let resp = test::call_service(&app, refine()).await;
        assert_eq!(resp.status(), StatusCode::TOO_MANY_REQUESTS);
        let body: Value = test::read_body_json(resp).await;
        assert_error_body(&body, "RATE_LIMIT_EXCEEDED");
        assert!(
            body["error"]["message"]
                .as_str()
                .unwrap()
                .contains("per minute")
        );
        assert_eq!(generator.calls(), 1);

        let req = test::TestRequest::get().uri("/api/ai/usage").to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body["minuteUsage"], "1/1");
        assert_eq!(body["minuteRemaining"], 0);
    }

    // ==================== Voice ====================

    #[actix_web::test]
    async fn test_extract_endpoint() {
        let app = app!(test_state(5, StubGenerator::replying("x")));
        let req = test::TestRequest::post()
            .uri("/api/extract")
            .set_json(json!({"text": "Call mom tomorrow at 3pm", "today": "2024-03-05"}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["date"], "2024-03-06");
        assert_eq!(body["time"], "15:00");
        assert_eq!(body["foundKeywords"], json!(["tomorrow", "time: 15:00"]));
        assert_eq!(body["dueDate"], "2024-03-06T15:00");
    }

    #[actix_web::test]
    async fn test_compose_without_refinement_skips_generator() {
        let generator = StubGenerator::replying("unused");
        let app = app!(test_state(5, generator.clone()));
        let req = test::TestRequest::post()
            .uri("/api/compose")
            .set_json(json!({
                "text": "  gym friday morning ",
                "refine": false,
                "today": "2024-03-05"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["text"], "gym friday morning");
        assert_eq!(body["refined"], false);
        assert_eq!(body["dueDate"], "2024-03-08T09:00");
        assert_eq!(generator.calls(), 0);
    }

    #[actix_web::test]
    async fn test_compose_with_refinement_reextracts() {
        let generator = StubGenerator::replying("Gym session on Friday at 7am");
        let app = app!(test_state(5, generator.clone()));
        let req = test::TestRequest::post()
            .uri("/api/compose")
            .set_json(json!({
                "text": "gym friday",
                "refine": true,
                "userId": TEST_USER,
                "today": "2024-03-05"
            }))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;

        assert_eq!(body["text"], "Gym session on Friday at 7am");
        assert_eq!(body["refined"], true);
        assert_eq!(body["dueDate"], "2024-03-08T07:00");
        assert_eq!(generator.calls(), 1);
    }

    #[actix_web::test]
    async fn test_transcript_assembly() {
        let app = app!(test_state(5, StubGenerator::replying("x")));
        let req = test::TestRequest::post()
            .uri("/api/transcript")
            .set_json(json!({"segments": [
                {"text": "buy", "isFinal": false},
                {"text": "buy milk", "isFinal": true},
                {"text": "tomorrow", "isFinal": true},
                {"text": "at nine", "isFinal": false}
            ]}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"text": "buy milk tomorrow"}));

        let req = test::TestRequest::post()
            .uri("/api/transcript")
            .set_json(json!({"segments": []}))
            .to_request();
        let body: Value = test::call_and_read_body_json(&app, req).await;
        assert_eq!(body, json!({"text": null}));
    }
}
