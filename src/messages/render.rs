//! Render state - data structure sent from App layer to UI for rendering

use crate::messages::ui_events::{InputMode, Panel};
use crate::models::{FeedbackReport, TaskType};

/// Complete state needed by the UI to render
#[derive(Debug, Clone, Default)]
pub struct RenderState {
    // Submission form
    pub essay: String,
    pub question: String,
    pub task_type: TaskType,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub cursor_position: usize,

    // Scoring lifecycle
    pub is_loading: bool,
    pub feedback: Option<FeedbackReport>,
    pub error_notice: Option<String>,
    pub time_ms: u64,

    // Feedback panel
    pub feedback_scroll: u16,

    // Popups
    pub show_help: bool,
}
