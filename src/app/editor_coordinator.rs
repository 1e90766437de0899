//! Per-frame coordination between the host loop and the active panel.
//!
//! Enforces the frame order the panel relies on: all input first, then
//! the update step, then drawing into the software screen.

use rpixed::palette::BACKGROUND_COLOR;
use rpixed::{InputEvent, PanelEvents, PanelMode};
use crate::app::AppState;

/// Keyboard nudges of the drawing target, in tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DrawingNudge {
    pub tiles_x: i32,
    pub tiles_y: i32,
}

/// Coordinates the editor's frame phases.
///
/// This struct is responsible for:
/// - Routing input events to the active panel
/// - Running the panel update after input
/// - Drawing the active panel and its scroll-bars
/// - Switching between the image and tilemap editors
pub struct EditorCoordinator;

impl EditorCoordinator {
    /// Switches the visible editor.
    pub fn switch_mode(state: &mut AppState, mode: PanelMode) {
        if state.mode != mode {
            tracing::info!(from = state.mode.label(), to = mode.label(), "switching editor");
            let (leaving, _) = state.active_panel_and_editor();
            leaving.cancel_interaction();
            state.mode = mode;
            state.editor.clear_help_message();
        }
    }

    /// Runs one frame: input, update, draw.
    ///
    /// # Arguments
    /// * `state` - Application state
    /// * `events` - Pointer events collected this frame, in order
    /// * `nudge` - Drawing target movement requested from the keyboard
    pub fn run_frame(state: &mut AppState, events: &[InputEvent], nudge: Option<DrawingNudge>) {
        state.editor.clear_help_message();

        // The editor can move its drawing target without going through the
        // panel; the update step below picks that up in image mode.
        if let Some(nudge) = nudge {
            if state.mode == PanelMode::Image {
                state.editor.nudge_drawing_pos(nudge.tiles_x, nudge.tiles_y);
            }
        }

        let (panel, editor) = state.active_panel_and_editor();
        for event in events {
            panel.dispatch(&mut *editor, *event);
        }
        panel.on_update(&*editor);

        state.screen.cls(BACKGROUND_COLOR);
        let panel = match state.mode {
            PanelMode::Image => &state.image_panel,
            PanelMode::Tilemap => &state.tilemap_panel,
        };
        panel.draw_with_scroll_bars(&state.editor, &mut state.screen);
    }
}
