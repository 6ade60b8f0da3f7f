//! # Bandcheck
//!
//! A terminal client for an essay-scoring service: paste your IELTS
//! essay, pick the task type and question, and get per-criterion band
//! scores back.
//!
//! ## Architecture
//! Actor-based with channels:
//! - UI Layer (Ratatui) - synchronous
//! - App Layer (State machine)
//! - Network Layer (Tokio runtime)

pub mod app;
pub mod config;
pub mod constants;
pub mod messages;
pub mod models;
pub mod network;
pub mod ui;

// Re-export commonly used types
pub use app::{AppActor, AppState};
pub use config::Config;
pub use messages::{ErrorStage, NetworkCommand, NetworkResponse, RenderState, UiEvent};
pub use models::{FeedbackItem, FeedbackReport, ScoreRequest, TaskType};
pub use network::NetworkActor;
