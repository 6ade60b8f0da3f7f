use serde::{Deserialize, Serialize};
use serde_json::Value;

/// IELTS writing task type
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum TaskType {
    Task1,
    #[default]
    Task2,
}

impl TaskType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskType::Task1 => "Task 1",
            TaskType::Task2 => "Task 2",
        }
    }

    /// Value the scoring service expects in the `taskType` field
    pub fn wire_value(&self) -> &'static str {
        match self {
            TaskType::Task1 => "1",
            TaskType::Task2 => "2",
        }
    }

    pub fn next(&self) -> TaskType {
        match self {
            TaskType::Task1 => TaskType::Task2,
            TaskType::Task2 => TaskType::Task1,
        }
    }
}

/// Payload sent to the scoring service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ScoreRequest {
    pub essay: String,
    pub question: String,
    #[serde(rename = "taskType")]
    pub task_type: String,
}

impl ScoreRequest {
    pub fn new(essay: impl Into<String>, question: impl Into<String>, task_type: TaskType) -> Self {
        ScoreRequest {
            essay: essay.into(),
            question: question.into(),
            task_type: task_type.wire_value().to_string(),
        }
    }
}

/// One scored criterion returned by the service
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct FeedbackItem {
    pub score: f64,
    pub feedback: String,
}

/// Parsed scoring response.
///
/// The wire format is an open JSON object: `overall_band` plus an
/// arbitrary set of criterion keys whose names and count are decided
/// by the service. Criteria keep the order the service sent them in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeedbackReport {
    pub overall_band: Option<f64>,
    pub criteria: Vec<(String, FeedbackItem)>,
}

impl FeedbackReport {
    /// Parse a report from the service's dynamically-keyed JSON object.
    ///
    /// Entries that do not conform to `{score, feedback}` are skipped
    /// rather than failing the whole response.
    pub fn from_value(value: Value) -> anyhow::Result<Self> {
        let map = match value {
            Value::Object(map) => map,
            other => anyhow::bail!("expected a JSON object, got {}", json_type_name(&other)),
        };

        let mut report = FeedbackReport::default();
        for (key, val) in map {
            if key == "overall_band" {
                report.overall_band = val.as_f64();
                continue;
            }
            match serde_json::from_value::<FeedbackItem>(val) {
                Ok(item) => report.criteria.push((key, item)),
                Err(e) => {
                    tracing::warn!(criterion = %key, error = %e, "Skipping malformed feedback entry");
                }
            }
        }

        Ok(report)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_request_serializes_exact_essay() {
        let req = ScoreRequest::new("line one\nline two\u{0007}", "Describe the chart.", TaskType::Task1);
        let body = serde_json::to_value(&req).unwrap();
        assert_eq!(body["essay"], "line one\nline two\u{0007}");
        assert_eq!(body["question"], "Describe the chart.");
        assert_eq!(body["taskType"], "1");
    }

    #[test]
    fn test_request_allows_empty_essay() {
        let req = ScoreRequest::new("", "q", TaskType::Task2);
        let body = serde_json::to_string(&req).unwrap();
        assert!(body.contains(r#""essay":"""#));
        assert!(body.contains(r#""taskType":"2""#));
    }

    #[test]
    fn test_parse_report_keeps_criterion_order() {
        let report = FeedbackReport::from_value(json!({
            "overall_band": 7,
            "coherence": {"score": 6, "feedback": "ok"},
            "grammar": {"score": 8, "feedback": "good"},
        }))
        .unwrap();

        assert_eq!(report.overall_band, Some(7.0));
        assert_eq!(report.criteria.len(), 2);
        assert_eq!(report.criteria[0].0, "coherence");
        assert_eq!(report.criteria[0].1.score, 6.0);
        assert_eq!(report.criteria[1].0, "grammar");
        assert_eq!(report.criteria[1].1.feedback, "good");
    }

    #[test]
    fn test_parse_report_missing_overall_band() {
        let report = FeedbackReport::from_value(json!({
            "lexical_resource": {"score": 5.5, "feedback": "limited range"},
        }))
        .unwrap();

        assert_eq!(report.overall_band, None);
        assert_eq!(report.criteria.len(), 1);
    }

    #[test]
    fn test_parse_report_skips_malformed_entries() {
        let report = FeedbackReport::from_value(json!({
            "overall_band": 6.5,
            "coherence": {"score": 6, "feedback": "ok"},
            "task_response": "not an object",
            "grammar": {"points": 8},
        }))
        .unwrap();

        assert_eq!(report.overall_band, Some(6.5));
        assert_eq!(report.criteria.len(), 1);
        assert_eq!(report.criteria[0].0, "coherence");
    }

    #[test]
    fn test_parse_report_rejects_non_object() {
        assert!(FeedbackReport::from_value(json!([1, 2, 3])).is_err());
        assert!(FeedbackReport::from_value(json!("oops")).is_err());
    }

    #[test]
    fn test_task_type_cycle() {
        assert_eq!(TaskType::Task1.next(), TaskType::Task2);
        assert_eq!(TaskType::Task2.next(), TaskType::Task1);
    }
}
