//! Network messages - communication between App and Network layers

use crate::models::{FeedbackReport, ScoreRequest};

/// Commands sent from App layer to Network layer
#[derive(Debug, Clone)]
pub enum NetworkCommand {
    /// Submit an essay to the scoring service
    ScoreEssay { id: u64, request: ScoreRequest },
    /// Cancel a pending scoring request
    CancelRequest(u64),
    /// Shutdown the network actor
    Shutdown,
}

/// Stage at which a scoring request failed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorStage {
    /// Connection, DNS, or timeout failure before a status was received
    Transport,
    /// Service answered with a non-success HTTP status
    Status(u16),
    /// Body received but not parseable as a feedback report
    Parse,
}

impl ErrorStage {
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorStage::Transport => "transport",
            ErrorStage::Status(_) => "status",
            ErrorStage::Parse => "parse",
        }
    }

    /// Whether resubmitting the same essay is likely to help
    pub fn is_retryable(&self) -> bool {
        match self {
            ErrorStage::Transport => true,
            ErrorStage::Status(code) => *code >= 500,
            ErrorStage::Parse => false,
        }
    }

    /// Short notice shown in the status bar
    pub fn user_notice(&self) -> String {
        let cause = match self {
            ErrorStage::Transport => "could not reach the scoring service".to_string(),
            ErrorStage::Status(code) => format!("scoring service returned HTTP {}", code),
            ErrorStage::Parse => "scoring service sent an unreadable response".to_string(),
        };
        if self.is_retryable() {
            format!("Error fetching feedback: {}. Press 's' to retry.", cause)
        } else {
            format!("Error fetching feedback: {}.", cause)
        }
    }
}

/// Responses sent from Network layer to App layer
#[derive(Debug, Clone)]
pub enum NetworkResponse {
    /// Essay was scored successfully
    Scored {
        id: u64,
        report: FeedbackReport,
        time_ms: u64,
    },
    /// Request failed at some stage
    Failed {
        id: u64,
        stage: ErrorStage,
        message: String,
        time_ms: u64,
    },
    /// Request was cancelled
    Cancelled { id: u64 },
}

impl NetworkResponse {
    /// Get the request ID from the response
    pub fn id(&self) -> u64 {
        match self {
            NetworkResponse::Scored { id, .. } => *id,
            NetworkResponse::Failed { id, .. } => *id,
            NetworkResponse::Cancelled { id } => *id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_stages() {
        assert!(ErrorStage::Transport.is_retryable());
        assert!(ErrorStage::Status(503).is_retryable());
        assert!(!ErrorStage::Status(400).is_retryable());
        assert!(!ErrorStage::Parse.is_retryable());
    }

    #[test]
    fn test_user_notice_mentions_status_code() {
        let notice = ErrorStage::Status(502).user_notice();
        assert!(notice.contains("502"));
        assert!(notice.contains("retry"));
    }
}
