//! UI events - messages from UI layer to App layer

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Events generated from user input in the UI layer
#[derive(Debug, Clone)]
pub enum UiEvent {
    // Panel navigation
    NextPanel,
    PrevPanel,
    ScrollUp,
    ScrollDown,

    // Input editing
    StartEditing,
    StopEditing,
    CharInput(char),
    Backspace,
    CursorLeft,
    CursorRight,

    // Scoring actions
    Submit,
    CancelRequest,
    CycleTaskType,

    // Popups
    ToggleHelp,
    CloseHelp,

    // System
    Quit,
}

/// Active panel in the UI (needed for context-aware event mapping)
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum Panel {
    #[default]
    Essay,
    Question,
    TaskType,
    Feedback,
}

impl Panel {
    pub fn next(&self) -> Panel {
        match self {
            Panel::Essay => Panel::Question,
            Panel::Question => Panel::TaskType,
            Panel::TaskType => Panel::Feedback,
            Panel::Feedback => Panel::Essay,
        }
    }

    pub fn prev(&self) -> Panel {
        match self {
            Panel::Essay => Panel::Feedback,
            Panel::Question => Panel::Essay,
            Panel::TaskType => Panel::Question,
            Panel::Feedback => Panel::TaskType,
        }
    }
}

/// Input mode
#[derive(Clone, Copy, PartialEq, Debug, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Editing,
}

/// Convert a key event to a UiEvent based on current UI context
pub fn key_to_ui_event(
    key: KeyEvent,
    active_panel: Panel,
    input_mode: InputMode,
    show_help: bool,
) -> Option<UiEvent> {
    use crossterm::event::KeyEventKind;

    if key.kind != KeyEventKind::Press {
        return None;
    }

    // Global Ctrl shortcuts
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        match key.code {
            KeyCode::Char('x') => return Some(UiEvent::CancelRequest),
            KeyCode::Char('c') => return Some(UiEvent::Quit),
            _ => {}
        }
    }

    if show_help {
        return Some(UiEvent::CloseHelp);
    }

    match input_mode {
        InputMode::Normal => match key.code {
            KeyCode::Char('q') => Some(UiEvent::Quit),
            KeyCode::Char('?') => Some(UiEvent::ToggleHelp),
            KeyCode::Tab => Some(UiEvent::NextPanel),
            KeyCode::BackTab => Some(UiEvent::PrevPanel),
            KeyCode::Char('s') => Some(UiEvent::Submit),
            KeyCode::Char('t') => Some(UiEvent::CycleTaskType),
            KeyCode::Char('e') | KeyCode::Enter => match active_panel {
                Panel::Essay | Panel::Question => Some(UiEvent::StartEditing),
                Panel::TaskType => Some(UiEvent::CycleTaskType),
                Panel::Feedback => None,
            },
            KeyCode::Up if active_panel == Panel::Feedback => Some(UiEvent::ScrollUp),
            KeyCode::Down if active_panel == Panel::Feedback => Some(UiEvent::ScrollDown),
            _ => None,
        },
        InputMode::Editing => match key.code {
            KeyCode::Esc => Some(UiEvent::StopEditing),
            KeyCode::Left => Some(UiEvent::CursorLeft),
            KeyCode::Right => Some(UiEvent::CursorRight),
            KeyCode::Backspace => Some(UiEvent::Backspace),
            KeyCode::Char(c) => Some(UiEvent::CharInput(c)),
            KeyCode::Enter => match active_panel {
                // Essays are multi-line; the question submits directly
                Panel::Essay => Some(UiEvent::CharInput('\n')),
                Panel::Question => Some(UiEvent::Submit),
                _ => Some(UiEvent::StopEditing),
            },
            _ => None,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyEventKind, KeyEventState};

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::NONE,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn test_submit_key_in_normal_mode() {
        let event = key_to_ui_event(press(KeyCode::Char('s')), Panel::Essay, InputMode::Normal, false);
        assert!(matches!(event, Some(UiEvent::Submit)));
    }

    #[test]
    fn test_s_is_text_while_editing() {
        let event = key_to_ui_event(press(KeyCode::Char('s')), Panel::Essay, InputMode::Editing, false);
        assert!(matches!(event, Some(UiEvent::CharInput('s'))));
    }

    #[test]
    fn test_enter_inserts_newline_in_essay() {
        let event = key_to_ui_event(press(KeyCode::Enter), Panel::Essay, InputMode::Editing, false);
        assert!(matches!(event, Some(UiEvent::CharInput('\n'))));
    }

    #[test]
    fn test_enter_submits_from_question() {
        let event = key_to_ui_event(press(KeyCode::Enter), Panel::Question, InputMode::Editing, false);
        assert!(matches!(event, Some(UiEvent::Submit)));
    }

    #[test]
    fn test_help_popup_swallows_keys() {
        let event = key_to_ui_event(press(KeyCode::Char('s')), Panel::Essay, InputMode::Normal, true);
        assert!(matches!(event, Some(UiEvent::CloseHelp)));
    }

    #[test]
    fn test_ctrl_x_cancels_even_while_editing() {
        let key = KeyEvent {
            code: KeyCode::Char('x'),
            modifiers: KeyModifiers::CONTROL,
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        };
        let event = key_to_ui_event(key, Panel::Essay, InputMode::Editing, false);
        assert!(matches!(event, Some(UiEvent::CancelRequest)));
    }
}
