//! Parent container state shared with the image panels.
//!
//! The editor owns the image bank, the drawing position (authoritative
//! selection in image mode) and the help line shown in the status bar.

use rpixed::domain::viewport_operations::snap_to_grid;
use rpixed::{IndexedImage, PanelHost, IMAGE_SIZE};

/// Default seed for the demo image bank.
pub const DEMO_SEED: u64 = 42;

/// Side length of the image editor's drawing target.
const DRAWING_TARGET_SIZE: i32 = 16;

/// State owned by the editor that embeds the panels.
///
/// Responsibilities:
/// - Owning the backing image
/// - Holding the drawing position, the system of record for image-mode selection
/// - Collecting help text published by hovered widgets
pub struct EditorState {
    image: IndexedImage,
    drawing_x: i32,
    drawing_y: i32,
    help_message: String,
}

impl Default for EditorState {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorState {
    /// Creates an editor showing the seeded demo image bank.
    pub fn new() -> Self {
        Self::with_image(IndexedImage::generate_demo(DEMO_SEED))
    }

    /// Creates an editor over an existing image.
    pub fn with_image(image: IndexedImage) -> Self {
        Self {
            image,
            drawing_x: 0,
            drawing_y: 0,
            help_message: String::new(),
        }
    }

    /// Returns the current help line.
    pub fn help_message(&self) -> &str {
        &self.help_message
    }

    /// Clears the help line; widgets republish it while hovered.
    pub fn clear_help_message(&mut self) {
        self.help_message.clear();
    }

    /// Restores a persisted drawing position, snapped to the grid and clamped.
    pub fn restore_drawing_pos(&mut self, x: i32, y: i32) {
        let max = IMAGE_SIZE - DRAWING_TARGET_SIZE;
        self.drawing_x = snap_to_grid(x).clamp(0, max);
        self.drawing_y = snap_to_grid(y).clamp(0, max);
    }

    /// Moves the drawing target by whole tiles, clamped to the image.
    ///
    /// This is the editor's own path for changing the selection, independent
    /// of the panel.
    pub fn nudge_drawing_pos(&mut self, tiles_x: i32, tiles_y: i32) {
        let max = IMAGE_SIZE - DRAWING_TARGET_SIZE;
        self.drawing_x = (self.drawing_x + tiles_x * rpixed::GRID_SIZE).clamp(0, max);
        self.drawing_y = (self.drawing_y + tiles_y * rpixed::GRID_SIZE).clamp(0, max);
    }
}

impl PanelHost for EditorState {
    fn drawing_pos(&self) -> (i32, i32) {
        (self.drawing_x, self.drawing_y)
    }

    fn set_drawing_pos(&mut self, x: i32, y: i32) {
        self.drawing_x = x;
        self.drawing_y = y;
    }

    fn set_help_message(&mut self, message: String) {
        self.help_message = message;
    }

    fn image(&self) -> &IndexedImage {
        &self.image
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nudge_clamps_to_image() {
        let mut editor = EditorState::with_image(IndexedImage::default());
        editor.nudge_drawing_pos(-1, 2);
        assert_eq!(editor.drawing_pos(), (0, 16));
        editor.nudge_drawing_pos(100, 100);
        assert_eq!(editor.drawing_pos(), (240, 240));
    }

    #[test]
    fn test_restore_snaps_and_clamps() {
        let mut editor = EditorState::with_image(IndexedImage::default());
        editor.restore_drawing_pos(35, 999);
        assert_eq!(editor.drawing_pos(), (32, 240));
    }

    #[test]
    fn test_help_message_roundtrip() {
        let mut editor = EditorState::with_image(IndexedImage::default());
        editor.set_help_message("VIEW:R-DRAG (0,0)".to_string());
        assert_eq!(editor.help_message(), "VIEW:R-DRAG (0,0)");
        editor.clear_help_message();
        assert!(editor.help_message().is_empty());
    }
}
