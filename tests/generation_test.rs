// Generation endpoint tests against a mock backend.

use std::time::Duration;

use reviewbud::error::ReviewError;
use reviewbud::generation::GenerationClient;
use reviewbud::state::{FormSnapshot, SubmissionResult};
use serde_json::json;
use wiremock::matchers::{body_string_contains, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TOKEN_PATH: &str = "/submit/tok123/";

fn snapshot() -> FormSnapshot {
    FormSnapshot {
        business_name: "Cafe Nero".to_string(),
        business_address: "1 High St".to_string(),
        google_url: "https://search.google.com/local/writereview?placeid=ChIJabc".to_string(),
        food_rating: 5,
        service_rating: 4,
        atmosphere_rating: 3,
        recommend_rating: 2,
        tags: "Cozy, Clean".to_string(),
        feedback: "Lovely flat white".to_string(),
        customer_name: "Sam".to_string(),
    }
}

fn client(server: &MockServer) -> GenerationClient {
    GenerationClient::new(
        format!("{}{}", server.uri(), TOKEN_PATH),
        Duration::from_secs(5),
    )
    .unwrap()
}

async fn respond_with(template: ResponseTemplate) -> MockServer {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .respond_with(template)
        .mount(&server)
        .await;
    server
}

fn failure_message(result: SubmissionResult) -> String {
    match result {
        SubmissionResult::Failure { message } => message,
        other => panic!("expected failure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_success_response() {
    let server = respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "success": true,
        "ai_review": "Great coffee and friendly staff.",
        "google_url": "https://example/review",
        "generation_method": "ai",
    })))
    .await;

    let result = client(&server).generate(&snapshot()).await;
    assert_eq!(
        result,
        SubmissionResult::Success {
            review_text: "Great coffee and friendly staff.".to_string(),
            review_target_url: "https://example/review".to_string(),
            generation_method: "ai".to_string(),
        }
    );
}

#[tokio::test]
async fn test_application_failure_uses_backend_error() {
    let server = respond_with(ResponseTemplate::new(200).set_body_json(json!({
        "success": false,
        "error": "quota exceeded",
    })))
    .await;

    let result = client(&server).generate(&snapshot()).await;
    assert_eq!(failure_message(result), "quota exceeded");
}

#[tokio::test]
async fn test_failure_without_error_uses_default_message() {
    let server =
        respond_with(ResponseTemplate::new(200).set_body_json(json!({ "success": false }))).await;

    let result = client(&server).generate(&snapshot()).await;
    assert_eq!(failure_message(result), "Failed to generate review");
}

#[tokio::test]
async fn test_malformed_body_is_failure() {
    let server = respond_with(ResponseTemplate::new(200).set_body_string("<html>oops</html>")).await;

    let client = client(&server);
    assert!(matches!(
        client.request_review(&snapshot()).await,
        Err(ReviewError::MalformedResponse(_))
    ));

    let message = failure_message(client.generate(&snapshot()).await);
    assert!(message.contains("Malformed response"), "{}", message);
}

#[tokio::test]
async fn test_http_error_status_is_failure() {
    let server = respond_with(ResponseTemplate::new(500)).await;

    let client = client(&server);
    assert!(matches!(
        client.request_review(&snapshot()).await,
        Err(ReviewError::Status { status: 500 })
    ));

    let message = failure_message(client.generate(&snapshot()).await);
    assert!(message.contains("HTTP 500"), "{}", message);
}

#[tokio::test]
async fn test_unreachable_endpoint_is_failure() {
    let client =
        GenerationClient::new("http://127.0.0.1:9/submit/tok123/", Duration::from_secs(2)).unwrap();

    let message = failure_message(client.generate(&snapshot()).await);
    assert!(message.contains("Generation request failed"), "{}", message);
}

#[tokio::test]
async fn test_timeout_is_failure() {
    let server = respond_with(
        ResponseTemplate::new(200)
            .set_body_json(json!({ "success": true }))
            .set_delay(Duration::from_secs(2)),
    )
    .await;

    let client = GenerationClient::new(
        format!("{}{}", server.uri(), TOKEN_PATH),
        Duration::from_millis(100),
    )
    .unwrap();

    let message = failure_message(client.generate(&snapshot()).await);
    assert!(message.contains("Generation request failed"), "{}", message);
}

#[tokio::test]
async fn test_request_is_form_encoded_with_marker_header() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TOKEN_PATH))
        .and(header("X-Requested-With", "XMLHttpRequest"))
        .and(header("content-type", "application/x-www-form-urlencoded"))
        .and(body_string_contains("business_name=Cafe+Nero"))
        .and(body_string_contains("food_rating=5"))
        .and(body_string_contains("recommend_rating=2"))
        .and(body_string_contains("tags=Cozy%2C+Clean"))
        .and(body_string_contains("customer_name=Sam"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "success": true,
            "ai_review": "Nice.",
            "google_url": "https://example/review",
        })))
        .expect(1)
        .mount(&server)
        .await;

    let result = client(&server).generate(&snapshot()).await;
    assert_eq!(
        result,
        SubmissionResult::Success {
            review_text: "Nice.".to_string(),
            review_target_url: "https://example/review".to_string(),
            generation_method: "unknown".to_string(),
        }
    );
}
