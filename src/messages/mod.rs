//! Message types passed between the UI, App, and Network layers

pub mod network;
pub mod render;
pub mod ui_events;

pub use network::{ErrorStage, NetworkCommand, NetworkResponse};
pub use render::RenderState;
pub use ui_events::UiEvent;
