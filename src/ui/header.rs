//! Header panel UI rendering
//!
//! Handles the top bar with the editor mode selector.

use eframe::egui;
use rpixed::PanelMode;
use crate::app::AppState;

/// Result of user interaction with the header panel
pub enum HeaderInteraction {
    /// User picked a different editor
    ModeSelected(PanelMode),
}

/// Renders the application header with the editor selector
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
///
/// # Returns
/// * `Option<HeaderInteraction>` - User interaction result
pub fn render_header(ui: &mut egui::Ui, state: &AppState) -> Option<HeaderInteraction> {
    let mut interaction = None;

    ui.horizontal(|ui| {
        for mode in [PanelMode::Image, PanelMode::Tilemap] {
            if ui.selectable_label(state.mode == mode, mode.label()).clicked() && state.mode != mode {
                interaction = Some(HeaderInteraction::ModeSelected(mode));
            }
        }

        ui.separator();

        let hint = match state.mode {
            PanelMode::Image => "L-click: target  R-drag: view  Arrows: move target",
            PanelMode::Tilemap => "L-click: tile  R-drag: view",
        };
        ui.weak(hint);
    });

    interaction
}
