//! Centralized application state for the pixel editor host.
//!
//! Composes the parent container, one panel per editing mode and the
//! software screen both panels draw into.

use rpixed::{Framebuffer, ImagePanel, PanelMode};
use crate::app::{EditorState, PanelSettings};

/// Width of the editor screen in pixels.
pub const SCREEN_WIDTH: i32 = 240;
/// Height of the editor screen in pixels.
pub const SCREEN_HEIGHT: i32 = 160;

/// Main application state composed of focused state components.
pub struct AppState {
    /// Parent container shared with the panels
    pub editor: EditorState,

    /// Panel embedded in the image editor
    pub image_panel: ImagePanel,

    /// Panel embedded in the tilemap editor
    pub tilemap_panel: ImagePanel,

    /// Which editor is showing
    pub mode: PanelMode,

    /// Palette-indexed frame the active panel draws into
    pub screen: Framebuffer,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Creates a new application state with default values.
    pub fn new() -> Self {
        Self {
            editor: EditorState::new(),
            image_panel: ImagePanel::new(PanelMode::Image),
            tilemap_panel: ImagePanel::new(PanelMode::Tilemap),
            mode: PanelMode::Image,
            screen: Framebuffer::new(SCREEN_WIDTH, SCREEN_HEIGHT),
        }
    }

    /// Creates a new AppState with settings restored from storage.
    pub fn with_settings(settings: &PanelSettings) -> Self {
        let mut state = Self::new();
        state.mode = settings.mode;
        state.image_panel.restore_viewport(settings.image_viewport.0, settings.image_viewport.1);
        state.tilemap_panel.restore_viewport(settings.tilemap_viewport.0, settings.tilemap_viewport.1);
        state.editor.restore_drawing_pos(settings.drawing_pos.0, settings.drawing_pos.1);
        state
    }

    /// Captures the settings worth persisting.
    pub fn settings(&self) -> PanelSettings {
        use rpixed::PanelHost;
        PanelSettings {
            mode: self.mode,
            image_viewport: self.image_panel.viewport(),
            tilemap_viewport: self.tilemap_panel.viewport(),
            drawing_pos: self.editor.drawing_pos(),
        }
    }

    // ===== Split Borrows =====

    /// Returns the active panel together with the parent container.
    pub fn active_panel_and_editor(&mut self) -> (&mut ImagePanel, &mut EditorState) {
        let panel = match self.mode {
            PanelMode::Image => &mut self.image_panel,
            PanelMode::Tilemap => &mut self.tilemap_panel,
        };
        (panel, &mut self.editor)
    }

    /// Returns the active panel.
    pub fn active_panel(&self) -> &ImagePanel {
        match self.mode {
            PanelMode::Image => &self.image_panel,
            PanelMode::Tilemap => &self.tilemap_panel,
        }
    }
}
