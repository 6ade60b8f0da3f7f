//! App state - pure data structure with no I/O logic

use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::RenderState;
use crate::models::{FeedbackReport, TaskType};

/// Main application state - pure data, no I/O
pub struct AppState {
    // Submission form
    pub essay: String,
    pub question: String,
    pub task_type: TaskType,
    pub cursor_position: usize,

    // UI state
    pub active_panel: Panel,
    pub input_mode: InputMode,
    pub feedback_scroll: u16,

    // Scoring lifecycle
    pub feedback: Option<FeedbackReport>,
    pub error_notice: Option<String>,
    pub is_loading: bool,
    pub next_request_id: u64,
    pub pending_request_id: Option<u64>,
    pub time_ms: u64,

    // Popups
    pub show_help: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        AppState {
            essay: String::new(),
            question: String::new(),
            task_type: TaskType::default(),
            cursor_position: 0,
            active_panel: Panel::Essay,
            input_mode: InputMode::Normal,
            feedback_scroll: 0,
            feedback: None,
            error_notice: None,
            is_loading: false,
            next_request_id: 1,
            pending_request_id: None,
            time_ms: 0,
            show_help: false,
        }
    }

    /// Generate a unique request ID
    pub fn next_id(&mut self) -> u64 {
        let id = self.next_request_id;
        self.next_request_id += 1;
        id
    }

    /// Get the current input field content
    pub fn current_input(&self) -> &str {
        match self.active_panel {
            Panel::Essay => &self.essay,
            Panel::Question => &self.question,
            _ => "",
        }
    }

    /// Get mutable reference to current input field
    pub fn current_input_mut(&mut self) -> &mut String {
        match self.active_panel {
            Panel::Question => &mut self.question,
            // TaskType and Feedback are not editable; essay is the fallback
            _ => &mut self.essay,
        }
    }

    /// Convert state to RenderState for UI
    pub fn to_render_state(&self) -> RenderState {
        RenderState {
            essay: self.essay.clone(),
            question: self.question.clone(),
            task_type: self.task_type,
            active_panel: self.active_panel,
            input_mode: self.input_mode,
            cursor_position: self.cursor_position,
            is_loading: self.is_loading,
            feedback: self.feedback.clone(),
            error_notice: self.error_notice.clone(),
            time_ms: self.time_ms,
            feedback_scroll: self.feedback_scroll,
            show_help: self.show_help,
        }
    }
}
