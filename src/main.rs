//! Bandcheck TUI - Actor-based essay scoring client
//!
//! Architecture:
//! - UI Layer (Ratatui) - synchronous terminal rendering
//! - App Layer - central state machine processing events
//! - Network Layer (Tokio) - async HTTP calls to the scoring service

mod app;
mod config;
mod constants;
mod messages;
mod models;
mod network;
mod ui;

use std::io;
use std::time::Duration;

use crossterm::{
    event::{self, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{prelude::*, widgets::*};
use tokio::sync::mpsc;

use app::AppActor;
use config::Config;
use constants::{APP_NAME, APP_VERSION};
use messages::ui_events::{key_to_ui_event, InputMode, Panel};
use messages::{NetworkCommand, NetworkResponse, RenderState, UiEvent};
use network::NetworkActor;
use ui::feedback_lines;

/// Terminal cleanup guard
struct TerminalGuard;

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Resolve configuration before touching the terminal so a bad URL
    // fails with a readable message
    let config = Config::from_env()?;

    // Initialize logging to file
    let file_appender = tracing_appender::rolling::never(".", "bandcheck.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    tracing_subscriber::fmt()
        .with_writer(non_blocking)
        .with_ansi(false)
        .init();

    tracing::info!(base_url = %config.base_url, "Starting {} {}", APP_NAME, APP_VERSION);

    // Terminal setup
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let _guard = TerminalGuard;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // Create channels
    let (ui_tx, ui_rx) = mpsc::unbounded_channel::<UiEvent>();
    let (net_cmd_tx, net_cmd_rx) = mpsc::unbounded_channel::<NetworkCommand>();
    let (net_resp_tx, net_resp_rx) = mpsc::unbounded_channel::<NetworkResponse>();
    let (render_tx, mut render_rx) = mpsc::unbounded_channel::<RenderState>();

    // Spawn network actor
    let network_actor = NetworkActor::new(net_resp_tx, config.base_url.clone());
    tokio::spawn(network_actor.run(net_cmd_rx));

    // Spawn app actor
    let app_actor = AppActor::new(net_cmd_tx, render_tx);
    tokio::spawn(app_actor.run(ui_rx, net_resp_rx));

    // Run UI loop (synchronous with async polling)
    run_ui_loop(&mut terminal, ui_tx, &mut render_rx).await?;

    Ok(())
}

/// Run the synchronous UI rendering loop
async fn run_ui_loop(
    terminal: &mut Terminal<impl Backend>,
    ui_tx: mpsc::UnboundedSender<UiEvent>,
    render_rx: &mut mpsc::UnboundedReceiver<RenderState>,
) -> anyhow::Result<()> {
    let mut current_state = RenderState::default();

    loop {
        // Draw with current state
        terminal.draw(|f| draw_ui(f, &current_state))?;

        // Poll for events with timeout
        if event::poll(Duration::from_millis(50))? {
            if let Event::Key(key) = event::read()? {
                if let Some(event) = key_to_ui_event(
                    key,
                    current_state.active_panel,
                    current_state.input_mode,
                    current_state.show_help,
                ) {
                    if matches!(event, UiEvent::Quit) {
                        let _ = ui_tx.send(event);
                        break;
                    }
                    let _ = ui_tx.send(event);
                }
            }
        }

        // Check for state updates (non-blocking)
        while let Ok(state) = render_rx.try_recv() {
            current_state = state;
        }
    }

    Ok(())
}

// ============================================================================
// UI Drawing Functions
// ============================================================================

fn draw_ui(f: &mut Frame, state: &RenderState) {
    let area = f.area();

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title bar
            Constraint::Min(8),    // Essay
            Constraint::Length(3), // Question + task type
            Constraint::Min(8),    // Feedback
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    draw_title_bar(f, state, chunks[0]);
    draw_essay_panel(f, state, chunks[1]);

    let form_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(20), Constraint::Length(16)])
        .split(chunks[2]);
    draw_question_panel(f, state, form_chunks[0]);
    draw_task_type_panel(f, state, form_chunks[1]);

    draw_feedback_panel(f, state, chunks[3]);
    draw_status_bar(f, state, chunks[4]);

    if state.show_help {
        draw_help_popup(f, area);
    }
}

fn draw_title_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let spans = vec![
        Span::styled(
            format!(" {} ", APP_NAME),
            Style::default().fg(Color::Black).bg(Color::Cyan).bold(),
        ),
        Span::raw(" IELTS essay checker"),
        Span::styled(
            if state.is_loading { "  [grading...]" } else { "" },
            Style::default().fg(Color::Yellow),
        ),
    ];
    f.render_widget(Paragraph::new(Line::from(spans)), area);
}

fn panel_border_style(state: &RenderState, panel: Panel) -> Style {
    let is_focused = state.active_panel == panel;
    if is_focused && state.input_mode == InputMode::Editing {
        Style::default().fg(Color::Yellow)
    } else if is_focused {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

fn draw_essay_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let word_count = state.essay.split_whitespace().count();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style(state, Panel::Essay))
        .title(" Essay ")
        .title_bottom(Line::from(format!(" {} words ", word_count)).right_aligned());

    let essay = Paragraph::new(state.essay.as_str())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(essay, area);

    if state.active_panel == Panel::Essay && state.input_mode == InputMode::Editing {
        let (row, col) = cursor_row_col(&state.essay, state.cursor_position);
        let max_x = area.x + area.width.saturating_sub(2);
        let max_y = area.y + area.height.saturating_sub(2);
        let cursor_x = (area.x + col as u16 + 1).min(max_x);
        let cursor_y = (area.y + row as u16 + 1).min(max_y);
        f.set_cursor_position(Position::new(cursor_x, cursor_y));
    }
}

/// Row and column of a byte offset within a multi-line buffer
fn cursor_row_col(text: &str, cursor: usize) -> (usize, usize) {
    let before = &text[..cursor.min(text.len())];
    let row = before.matches('\n').count();
    let col = before
        .rsplit('\n')
        .next()
        .map(|line| line.chars().count())
        .unwrap_or(0);
    (row, col)
}

fn draw_question_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style(state, Panel::Question))
        .title(" Question ");

    let question = Paragraph::new(state.question.as_str()).block(block);
    f.render_widget(question, area);

    if state.active_panel == Panel::Question && state.input_mode == InputMode::Editing {
        let max_x = area.x + area.width.saturating_sub(2);
        let col = state.question[..state.cursor_position.min(state.question.len())]
            .chars()
            .count();
        let cursor_x = (area.x + col as u16 + 1).min(max_x);
        f.set_cursor_position(Position::new(cursor_x, area.y + 1));
    }
}

fn draw_task_type_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style(state, Panel::TaskType))
        .title(" Task (t) ");

    let task = Paragraph::new(Span::styled(
        state.task_type.as_str(),
        Style::default().fg(Color::Magenta).bold(),
    ))
    .block(block);
    f.render_widget(task, area);
}

fn draw_feedback_panel(f: &mut Frame, state: &RenderState, area: Rect) {
    let title = if state.is_loading {
        Span::styled(" Grading... ", Style::default().fg(Color::Yellow).bold())
    } else {
        Span::raw(" Feedback ")
    };

    let time_text = if state.time_ms > 0 {
        format!(" {}ms ", state.time_ms)
    } else {
        String::new()
    };

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(panel_border_style(state, Panel::Feedback))
        .title(title)
        .title_bottom(Line::from(time_text).right_aligned());

    let lines = match &state.feedback {
        Some(report) => feedback_lines(report),
        None if state.is_loading => vec![Line::from(Span::styled(
            "Grading your essay, this may take a moment...",
            Style::default().fg(Color::DarkGray),
        ))],
        None => vec![Line::from(Span::styled(
            "No feedback yet. Write your essay and press 's' to submit.",
            Style::default().fg(Color::DarkGray),
        ))],
    };

    let feedback = Paragraph::new(lines)
        .block(block)
        .wrap(Wrap { trim: false })
        .scroll((state.feedback_scroll, 0));
    f.render_widget(feedback, area);
}

fn draw_status_bar(f: &mut Frame, state: &RenderState, area: Rect) {
    let (text, style) = if let Some(notice) = &state.error_notice {
        (
            format!(" {} ", notice),
            Style::default().fg(Color::White).bg(Color::Red),
        )
    } else if state.is_loading {
        (
            String::from(" Grading essay... | Ctrl+X:cancel "),
            Style::default().fg(Color::Yellow),
        )
    } else if state.input_mode == InputMode::Editing {
        (
            String::from(" ESC:stop editing | arrows:move "),
            Style::default().fg(Color::DarkGray),
        )
    } else {
        (
            String::from(" Tab:panel | e:edit | t:task | s:submit | ?:help | q:quit "),
            Style::default().fg(Color::DarkGray),
        )
    };

    f.render_widget(Paragraph::new(text).style(style), area);
}

fn draw_help_popup(f: &mut Frame, area: Rect) {
    let popup_area = centered_rect(60, 70, area);

    let help_text = format!(
        r#"
 {} {} - Keyboard Shortcuts

 NAVIGATION
   Tab / Shift+Tab    Switch panels
   ↑ / ↓              Scroll feedback

 SUBMISSION
   e / Enter          Edit essay or question
   t                  Toggle task type (Task 1/Task 2)
   s                  Submit essay for scoring
   Ctrl+X             Cancel in-flight request

 EDITING
   ESC                Stop editing
   Enter              New line (essay) / submit (question)

 GENERAL
   ?                  Toggle this help
   q / Ctrl+C         Quit

 Press any key to close...
"#,
        APP_NAME, APP_VERSION
    );

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Help ")
        .style(Style::default().bg(Color::Black));

    let help = Paragraph::new(help_text)
        .block(block)
        .wrap(Wrap { trim: false });

    f.render_widget(Clear, popup_area);
    f.render_widget(help, popup_area);
}

fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
