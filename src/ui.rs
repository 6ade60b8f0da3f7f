use ratatui::{prelude::*, widgets::*};

use crate::models::FeedbackReport;

/// Humanize a criterion key for display: "lexical_resource" -> "Lexical Resource"
pub fn humanize_key(key: &str) -> String {
    key.split('_')
        .filter(|word| !word.is_empty())
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Format a band score without a trailing ".0"
pub fn format_band(score: f64) -> String {
    if score.fract().abs() < f64::EPSILON {
        format!("{:.0}", score)
    } else {
        format!("{:.1}", score)
    }
}

/// Band score color on the 0-9 scale
pub fn band_color(score: f64) -> Color {
    if score >= 7.0 {
        Color::Green
    } else if score >= 5.5 {
        Color::Yellow
    } else {
        Color::Red
    }
}

/// Build the feedback panel content from a parsed report
pub fn feedback_lines(report: &FeedbackReport) -> Vec<Line<'static>> {
    let mut lines = Vec::new();

    let band_line = match report.overall_band {
        Some(band) => Line::from(Span::styled(
            format!("Overall Band Score: {}/9", format_band(band)),
            Style::default().fg(band_color(band)).bold(),
        )),
        None => Line::from(Span::styled(
            "Overall Band Score: N/A",
            Style::default().fg(Color::DarkGray).bold(),
        )),
    };
    lines.push(band_line);
    lines.push(Line::from(""));

    for (key, item) in &report.criteria {
        lines.push(Line::from(Span::styled(
            format!("{}: {}/9", humanize_key(key), format_band(item.score)),
            Style::default().fg(band_color(item.score)).bold(),
        )));
        for text_line in item.feedback.lines() {
            lines.push(Line::from(format!("  {}", text_line)));
        }
        lines.push(Line::from(""));
    }

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::FeedbackItem;

    #[test]
    fn test_humanize_key() {
        assert_eq!(humanize_key("coherence"), "Coherence");
        assert_eq!(humanize_key("lexical_resource"), "Lexical Resource");
        assert_eq!(humanize_key("task_response_quality"), "Task Response Quality");
        assert_eq!(humanize_key(""), "");
    }

    #[test]
    fn test_format_band() {
        assert_eq!(format_band(7.0), "7");
        assert_eq!(format_band(6.5), "6.5");
    }

    fn report_text(report: &FeedbackReport) -> String {
        feedback_lines(report)
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_feedback_lines_render_band_and_criteria() {
        let report = FeedbackReport {
            overall_band: Some(7.0),
            criteria: vec![
                (
                    "coherence".to_string(),
                    FeedbackItem {
                        score: 6.0,
                        feedback: "ok".to_string(),
                    },
                ),
                (
                    "grammar".to_string(),
                    FeedbackItem {
                        score: 8.0,
                        feedback: "good".to_string(),
                    },
                ),
            ],
        };

        let text = report_text(&report);
        assert!(text.contains("Overall Band Score: 7/9"));
        assert!(text.contains("Coherence: 6/9"));
        assert!(text.contains("ok"));
        assert!(text.contains("Grammar: 8/9"));
        assert!(text.contains("good"));
        // Criteria render in response order
        assert!(text.find("Coherence").unwrap() < text.find("Grammar").unwrap());
    }

    #[test]
    fn test_feedback_lines_missing_band_shows_na() {
        let report = FeedbackReport::default();
        let text = report_text(&report);
        assert!(text.contains("Overall Band Score: N/A"));
    }
}
