//! Panel orchestration and layout management.
//!
//! Lays out the header, status bar and the central screen view, and runs
//! the active image panel's frame inside the central panel.

use eframe::egui;
use crate::app::{AppState, EditorCoordinator};
use crate::ui::input::panel_input_handler::{self, PointerTracker};
use crate::ui::screen_view::ScreenView;
use crate::ui::{header, status_bar};

/// Result of panel interactions that need to be handled by the application.
pub enum PanelInteraction {
    /// User picked a different editor
    ModeSwitchRequested(rpixed::PanelMode),
}

/// Manages the layout and rendering of all UI panels.
pub struct PanelManager;

impl PanelManager {
    /// Renders all panels in the application window.
    ///
    /// This is the main entry point for rendering the entire UI, called from
    /// the eframe::App::update() implementation.
    pub fn render_all_panels(
        ctx: &egui::Context,
        state: &mut AppState,
        screen_view: &mut ScreenView,
        pointer: &mut PointerTracker,
    ) -> Option<PanelInteraction> {
        let mut interaction: Option<PanelInteraction> = None;

        // Header panel at the top
        egui::TopBottomPanel::top("header").show(ctx, |ui| {
            if let Some(header_interaction) = header::render_header(ui, state) {
                interaction = Some(match header_interaction {
                    header::HeaderInteraction::ModeSelected(mode) => {
                        PanelInteraction::ModeSwitchRequested(mode)
                    }
                });
            }
        });

        // Status panel at the very bottom
        egui::TopBottomPanel::bottom("status_panel").show(ctx, |ui| {
            status_bar::render_status_bar(ui, state);
        });

        // Center: the editor screen
        let screen_frame = egui::Frame::default()
            .inner_margin(egui::Margin::same(4))
            .fill(egui::Color32::BLACK);

        egui::CentralPanel::default()
            .frame(screen_frame)
            .show(ctx, |ui| {
                ui.centered_and_justified(|ui| {
                    let (rect, scale) = screen_view.allocate(ui, &state.screen);

                    let frame = panel_input_handler::sample_pointer(ctx, rect, scale);
                    let events = pointer.step(frame);
                    let nudge = panel_input_handler::sample_nudge(ctx);

                    EditorCoordinator::run_frame(state, &events, nudge);
                    screen_view.paint(ui, rect, &state.screen);

                    // Keep frames coming while a button is held
                    if pointer.held().is_some() {
                        ctx.request_repaint();
                    }
                });
            });

        interaction
    }
}
