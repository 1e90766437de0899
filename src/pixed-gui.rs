//! Pixel Editor GUI Application
//!
//! Hosts the image and tilemap panels inside an egui window. The panels draw
//! into a 240x160 palette-indexed screen that is scaled up without filtering.

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]
//! The application is built with a modular architecture:
//! - `app/` - Editor state, frame coordination and persisted settings
//! - `ui/` - Window layout, screen presentation and pointer sampling
//!
//! The panel itself, its scroll-bars and the viewport arithmetic live in
//! the `rpixed` library.

use eframe::egui;
use tracing_subscriber::EnvFilter;

mod app;
mod ui;

use app::{AppState, EditorCoordinator, SettingsCoordinator};
use ui::input::panel_input_handler::PointerTracker;
use ui::panel_manager::{PanelInteraction, PanelManager};
use ui::screen_view::ScreenView;

/// Main application entry point that initializes logging and launches the editor.
fn main() -> eframe::Result {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1000.0, 760.0])
            .with_title("Pixel Editor"),
        ..Default::default()
    };

    eframe::run_native(
        "Pixel Editor",
        options,
        Box::new(|cc| Ok(Box::new(PixelEditorApp::new(cc)))),
    )
}

/// The main Pixel Editor application.
///
/// Delegates to coordinators:
/// - `EditorCoordinator` runs the active panel's frame and switches editors
/// - `SettingsCoordinator` restores and persists viewports and the drawing position
/// - `PanelManager` handles UI panel layout and rendering
struct PixelEditorApp {
    /// Centralized application state
    state: AppState,
    /// Texture presenting the software screen
    screen_view: ScreenView,
    /// Turns sampled pointer state into panel events
    pointer: PointerTracker,
}

impl PixelEditorApp {
    /// Creates the editor, restoring the last session's settings when present.
    fn new(cc: &eframe::CreationContext) -> Self {
        let settings = SettingsCoordinator::load_panel_settings(cc.storage);
        tracing::info!(mode = settings.mode.label(), "starting editor");

        Self {
            state: AppState::with_settings(&settings),
            screen_view: ScreenView::new(),
            pointer: PointerTracker::new(),
        }
    }

    fn handle_panel_interaction(&mut self, interaction: PanelInteraction) {
        match interaction {
            PanelInteraction::ModeSwitchRequested(mode) => {
                EditorCoordinator::switch_mode(&mut self.state, mode);
                // A press in one editor must not turn into a drag in the other
                self.pointer = PointerTracker::new();
            }
        }
    }
}

impl eframe::App for PixelEditorApp {
    /// Called when the app is being shut down - ensures settings are saved.
    fn save(&mut self, storage: &mut dyn eframe::Storage) {
        SettingsCoordinator::save_panel_settings(storage, &self.state.settings());
    }

    /// Main update loop: render all panels, then apply any requested editor switch.
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        if let Some(interaction) = PanelManager::render_all_panels(
            ctx,
            &mut self.state,
            &mut self.screen_view,
            &mut self.pointer,
        ) {
            self.handle_panel_interaction(interaction);
            ctx.request_repaint();
        }
    }
}
