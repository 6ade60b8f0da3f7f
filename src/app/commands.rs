//! Command handlers - business logic for processing UI events

use crate::app::AppState;
use crate::messages::ui_events::{InputMode, Panel};
use crate::messages::{NetworkCommand, NetworkResponse};
use crate::models::ScoreRequest;

impl AppState {
    // ========================
    // Navigation
    // ========================

    pub fn next_panel(&mut self) {
        self.active_panel = self.active_panel.next();
    }

    pub fn prev_panel(&mut self) {
        self.active_panel = self.active_panel.prev();
    }

    // ========================
    // Input editing
    // ========================

    pub fn start_editing(&mut self) {
        self.input_mode = InputMode::Editing;
        self.cursor_position = self.current_input().len();
    }

    pub fn stop_editing(&mut self) {
        self.input_mode = InputMode::Normal;
    }

    pub fn move_cursor_left(&mut self) {
        let input = self.current_input();
        if self.cursor_position > 0 {
            let new_pos = input[..self.cursor_position]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            self.cursor_position = new_pos;
        }
    }

    pub fn move_cursor_right(&mut self) {
        let input = self.current_input();
        if self.cursor_position < input.len() {
            let new_pos = input[self.cursor_position..]
                .char_indices()
                .nth(1)
                .map(|(i, _)| self.cursor_position + i)
                .unwrap_or(input.len());
            self.cursor_position = new_pos;
        }
    }

    pub fn enter_char(&mut self, c: char) {
        let cursor_pos = self.cursor_position;
        let input = self.current_input_mut();
        if cursor_pos <= input.len() {
            input.insert(cursor_pos, c);
            self.cursor_position = cursor_pos + c.len_utf8();
        }
    }

    pub fn delete_char(&mut self) {
        if self.cursor_position > 0 {
            let cursor_pos = self.cursor_position;
            let input = self.current_input_mut();
            let prev_pos = input[..cursor_pos]
                .char_indices()
                .last()
                .map(|(i, _)| i)
                .unwrap_or(0);
            input.remove(prev_pos);
            self.cursor_position = prev_pos;
        }
    }

    // ========================
    // Task type
    // ========================

    pub fn cycle_task_type(&mut self) {
        if !self.is_loading {
            self.task_type = self.task_type.next();
        }
    }

    // ========================
    // Feedback scrolling
    // ========================

    pub fn scroll_up(&mut self) {
        self.feedback_scroll = self.feedback_scroll.saturating_sub(1);
    }

    pub fn scroll_down(&mut self) {
        self.feedback_scroll = self.feedback_scroll.saturating_add(1);
    }

    // ========================
    // Help popup
    // ========================

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
    }

    pub fn close_help(&mut self) {
        self.show_help = false;
    }

    // ========================
    // Submission
    // ========================

    /// Prepare a scoring request. Returns None while a request is in
    /// flight; the loading guard is the only duplicate-submit protection.
    pub fn prepare_request(&mut self) -> Option<NetworkCommand> {
        if self.is_loading {
            return None;
        }

        self.is_loading = true;
        self.feedback = None;
        self.error_notice = None;
        self.feedback_scroll = 0;
        self.time_ms = 0;

        let id = self.next_id();
        self.pending_request_id = Some(id);

        Some(NetworkCommand::ScoreEssay {
            id,
            request: ScoreRequest::new(self.essay.clone(), self.question.clone(), self.task_type),
        })
    }

    /// Cancel the current pending request
    pub fn cancel_request(&mut self) -> Option<NetworkCommand> {
        self.pending_request_id.map(NetworkCommand::CancelRequest)
    }

    // ========================
    // Response handling
    // ========================

    pub fn handle_response(&mut self, response: NetworkResponse) {
        // Only the pending request's result is ever applied; a late
        // response from a superseded submission is discarded here.
        if self.pending_request_id != Some(response.id()) {
            tracing::debug!(id = response.id(), "Discarding stale network response");
            return;
        }

        match response {
            NetworkResponse::Scored { report, time_ms, .. } => {
                self.feedback = Some(report);
                self.error_notice = None;
                self.time_ms = time_ms;
                self.finalize_request();
            }
            NetworkResponse::Failed {
                stage,
                message,
                time_ms,
                ..
            } => {
                tracing::error!(stage = stage.as_str(), %message, "Scoring request failed");
                self.feedback = None;
                self.error_notice = Some(stage.user_notice());
                self.time_ms = time_ms;
                self.finalize_request();
            }
            NetworkResponse::Cancelled { .. } => {
                self.feedback = None;
                self.error_notice = Some(String::from("Request cancelled."));
                self.time_ms = 0;
                self.finalize_request();
            }
        }
    }

    /// Reset in-flight bookkeeping after a terminal response
    fn finalize_request(&mut self) {
        self.is_loading = false;
        self.pending_request_id = None;
        self.feedback_scroll = 0;
    }
}
