//! Scoring client tests using wiremock.
//!
//! These tests verify that score_essay posts the exact request body to
//! POST /ai/scoreEssay and classifies every failure mode by stage.

use bandcheck::messages::{ErrorStage, NetworkResponse};
use bandcheck::models::{ScoreRequest, TaskType};
use bandcheck::network::client::{create_client, score_essay};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn sample_request() -> ScoreRequest {
    ScoreRequest::new(
        "Some people believe that...\nIn conclusion, I agree.",
        "Do you agree or disagree?",
        TaskType::Task2,
    )
}

#[tokio::test]
async fn test_score_essay_success() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/scoreEssay"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({
            "essay": "Some people believe that...\nIn conclusion, I agree.",
            "question": "Do you agree or disagree?",
            "taskType": "2",
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "overall_band": 7,
            "coherence": {"score": 6, "feedback": "ok"},
            "grammar": {"score": 8, "feedback": "good"},
        })))
        .mount(&mock_server)
        .await;

    let client = create_client();
    let response = score_essay(&client, &mock_server.uri(), sample_request(), 1).await;

    match response {
        NetworkResponse::Scored { id, report, .. } => {
            assert_eq!(id, 1);
            assert_eq!(report.overall_band, Some(7.0));
            assert_eq!(report.criteria.len(), 2);
            assert_eq!(report.criteria[0].0, "coherence");
            assert_eq!(report.criteria[1].0, "grammar");
        }
        other => panic!("Expected Scored, got {:?}", other),
    }
}

#[tokio::test]
async fn test_score_essay_sends_empty_essay_as_is() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/scoreEssay"))
        .and(body_json(serde_json::json!({
            "essay": "",
            "question": "",
            "taskType": "1",
        })))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(serde_json::json!({"overall_band": 4})),
        )
        .mount(&mock_server)
        .await;

    let client = create_client();
    let request = ScoreRequest::new("", "", TaskType::Task1);
    let response = score_essay(&client, &mock_server.uri(), request, 7).await;

    assert!(matches!(response, NetworkResponse::Scored { id: 7, .. }));
}

#[tokio::test]
async fn test_non_success_status_is_status_stage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/scoreEssay"))
        .respond_with(ResponseTemplate::new(503).set_body_string("upstream unavailable"))
        .mount(&mock_server)
        .await;

    let client = create_client();
    let response = score_essay(&client, &mock_server.uri(), sample_request(), 2).await;

    match response {
        NetworkResponse::Failed { id, stage, message, .. } => {
            assert_eq!(id, 2);
            assert_eq!(stage, ErrorStage::Status(503));
            assert!(stage.is_retryable());
            assert!(message.contains("503"));
        }
        other => panic!("Expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_non_json_body_is_parse_stage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/scoreEssay"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>"))
        .mount(&mock_server)
        .await;

    let client = create_client();
    let response = score_essay(&client, &mock_server.uri(), sample_request(), 3).await;

    match response {
        NetworkResponse::Failed { stage, .. } => {
            assert_eq!(stage, ErrorStage::Parse);
            assert!(!stage.is_retryable());
        }
        other => panic!("Expected Failed, got {:?}", other),
    }
}

#[tokio::test]
async fn test_json_array_body_is_parse_stage() {
    let mock_server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/ai/scoreEssay"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([1, 2, 3])))
        .mount(&mock_server)
        .await;

    let client = create_client();
    let response = score_essay(&client, &mock_server.uri(), sample_request(), 4).await;

    assert!(matches!(
        response,
        NetworkResponse::Failed {
            stage: ErrorStage::Parse,
            ..
        }
    ));
}

#[tokio::test]
async fn test_connection_failure_is_transport_stage() {
    // Nothing listens on this address
    let client = create_client();
    let response = score_essay(&client, "http://127.0.0.1:1", sample_request(), 5).await;

    match response {
        NetworkResponse::Failed { stage, .. } => {
            assert_eq!(stage, ErrorStage::Transport);
            assert!(stage.is_retryable());
        }
        other => panic!("Expected Failed, got {:?}", other),
    }
}
