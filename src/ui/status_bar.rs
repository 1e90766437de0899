//! Status bar UI rendering
//!
//! Shows the help line published by the hovered panel and the live
//! viewport and selection positions.

use eframe::egui;
use egui::RichText;
use rpixed::PanelHost;
use crate::app::AppState;

/// Renders the status panel at the bottom of the window
///
/// # Arguments
/// * `ui` - The egui UI context for drawing
/// * `state` - Reference to application state
pub fn render_status_bar(ui: &mut egui::Ui, state: &AppState) {
    ui.horizontal(|ui| {
        let panel = state.active_panel();
        let (viewport_x, viewport_y) = panel.viewport();
        let (select_x, select_y) = panel.selection();

        ui.label(RichText::new(state.mode.label()).strong());
        ui.label(RichText::new("|").strong());
        ui.label(format!("View: {},{}", viewport_x, viewport_y));
        ui.label(RichText::new("|").strong());
        ui.label(format!("Select: {},{}", select_x, select_y));

        if state.mode == rpixed::PanelMode::Image {
            let (drawing_x, drawing_y) = state.editor.drawing_pos();
            ui.label(RichText::new("|").strong());
            ui.label(format!("Target: {},{}", drawing_x, drawing_y));
        }

        let help = state.editor.help_message();
        if !help.is_empty() {
            ui.label(RichText::new("|").strong());
            ui.label(RichText::new(help).monospace().color(egui::Color32::YELLOW));
        }
    });
}
