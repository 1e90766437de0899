//! Application-level modules for the pixel editor host.
//!
//! This module contains the parent container state, the per-frame
//! coordinator and settings persistence.

mod app_state;
mod editor_state;
mod editor_coordinator;
mod settings_coordinator;

pub use app_state::AppState;
pub use editor_state::EditorState;
pub use editor_coordinator::{DrawingNudge, EditorCoordinator};
pub use settings_coordinator::{PanelSettings, SettingsCoordinator};
