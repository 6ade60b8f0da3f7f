//! HTTP client wrapper - submits essays and classifies failures by stage

use std::time::{Duration, Instant};

use crate::constants::SCORE_ESSAY_PATH;
use crate::messages::{ErrorStage, NetworkResponse};
use crate::models::{FeedbackReport, ScoreRequest};

/// Create an HTTP client with default configuration
pub fn create_client() -> reqwest::Client {
    reqwest::Client::builder()
        .timeout(Duration::from_secs(30))
        .build()
        .unwrap_or_else(|_| reqwest::Client::new())
}

/// Submit an essay to the scoring service and classify the outcome.
///
/// Failure stages: transport (nothing came back), status (non-2xx
/// answer, checked before any parsing), parse (body was not a valid
/// feedback report).
pub async fn score_essay(
    client: &reqwest::Client,
    base_url: &str,
    request: ScoreRequest,
    request_id: u64,
) -> NetworkResponse {
    let start = Instant::now();
    let url = format!("{}{}", base_url.trim_end_matches('/'), SCORE_ESSAY_PATH);

    let result = client.post(&url).json(&request).send().await;
    let elapsed = start.elapsed().as_millis() as u64;

    let resp = match result {
        Ok(resp) => resp,
        Err(e) => {
            let msg = if e.is_timeout() {
                "Request timed out (30s)".to_string()
            } else if e.is_connect() {
                format!("Connection failed: {}", e)
            } else {
                format!("Request failed: {}", e)
            };
            return NetworkResponse::Failed {
                id: request_id,
                stage: ErrorStage::Transport,
                message: msg,
                time_ms: elapsed,
            };
        }
    };

    let status = resp.status();
    if !status.is_success() {
        let body = resp.text().await.unwrap_or_default();
        return NetworkResponse::Failed {
            id: request_id,
            stage: ErrorStage::Status(status.as_u16()),
            message: format!("Service returned {}: {}", status, truncate(&body, 200)),
            time_ms: start.elapsed().as_millis() as u64,
        };
    }

    let body = match resp.text().await {
        Ok(body) => body,
        Err(e) => {
            return NetworkResponse::Failed {
                id: request_id,
                stage: ErrorStage::Transport,
                message: format!("Error reading body: {}", e),
                time_ms: start.elapsed().as_millis() as u64,
            };
        }
    };

    let parsed = serde_json::from_str::<serde_json::Value>(&body)
        .map_err(anyhow::Error::from)
        .and_then(FeedbackReport::from_value);

    match parsed {
        Ok(report) => NetworkResponse::Scored {
            id: request_id,
            report,
            time_ms: start.elapsed().as_millis() as u64,
        },
        Err(e) => NetworkResponse::Failed {
            id: request_id,
            stage: ErrorStage::Parse,
            message: format!("Invalid response body: {}", e),
            time_ms: start.elapsed().as_millis() as u64,
        },
    }
}

fn truncate(s: &str, max: usize) -> &str {
    match s.char_indices().nth(max) {
        Some((idx, _)) => &s[..idx],
        None => s,
    }
}
