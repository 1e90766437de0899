//! Mouse interaction state.
//!
//! This module encapsulates state that spans several input events:
//! the sub-grid pan accumulator and the widget that captured the pointer.

use crate::domain::viewport_operations::extract_pan_step;

/// Widget that received the press and keeps receiving drags until release.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerTarget {
    /// The panel body (selection or panning)
    Panel,
    /// The horizontal scroll-bar
    HorizontalScrollBar,
    /// The vertical scroll-bar
    VerticalScrollBar,
}

/// State related to ongoing mouse interactions.
///
/// Responsibilities:
/// - Accumulating secondary-button drag motion below one grid step
/// - Tracking pointer capture between press and release
#[derive(Debug, Clone, Default)]
pub struct InteractionState {
    /// Pan debt not yet applied to the viewport, `|value| < GRID_SIZE` between drags
    drag_offset_x: i32,
    drag_offset_y: i32,
    /// Widget holding the pointer, if a button is down
    captured: Option<PointerTarget>,
}

impl InteractionState {
    /// Creates a new interaction state with no active interactions.
    pub fn new() -> Self {
        Self {
            drag_offset_x: 0,
            drag_offset_y: 0,
            captured: None,
        }
    }

    /// Resets all interaction state.
    pub fn reset(&mut self) {
        self.reset_drag();
        self.captured = None;
    }

    // ===== Drag/Pan State =====

    /// Starts a fresh pan gesture.
    pub fn reset_drag(&mut self) {
        self.drag_offset_x = 0;
        self.drag_offset_y = 0;
    }

    /// Returns the current accumulator `(x, y)`.
    pub fn drag_offset(&self) -> (i32, i32) {
        (self.drag_offset_x, self.drag_offset_y)
    }

    /// Feeds one drag tick and returns the whole grid steps to pan by.
    ///
    /// Pointer motion is subtracted: dragging content to the right reveals
    /// what lies to its left. The sub-grid remainder is kept for the next
    /// tick, so slow drags still add up without drift.
    ///
    /// # Arguments
    /// * `dx`, `dy` - Pointer motion since the previous tick
    ///
    /// # Returns
    /// Tuple of (pan_x, pan_y), each a multiple of the grid size
    pub fn accumulate_drag(&mut self, dx: i32, dy: i32) -> (i32, i32) {
        self.drag_offset_x -= dx;
        self.drag_offset_y -= dy;

        let step_x = extract_pan_step(self.drag_offset_x);
        let step_y = extract_pan_step(self.drag_offset_y);
        self.drag_offset_x -= step_x;
        self.drag_offset_y -= step_y;

        (step_x, step_y)
    }

    // ===== Pointer Capture =====

    /// Returns the widget holding the pointer, if any.
    pub fn captured(&self) -> Option<PointerTarget> {
        self.captured
    }

    /// Records which widget received the press.
    pub fn capture(&mut self, target: PointerTarget) {
        self.captured = Some(target);
    }

    /// Releases the pointer and returns the widget that held it.
    pub fn release(&mut self) -> Option<PointerTarget> {
        self.captured.take()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accumulate_extracts_whole_steps() {
        let mut interaction = InteractionState::new();
        assert_eq!(interaction.accumulate_drag(-20, 0), (16, 0));
        assert_eq!(interaction.drag_offset(), (4, 0));
    }

    #[test]
    fn test_small_moves_add_up() {
        let mut interaction = InteractionState::new();
        assert_eq!(interaction.accumulate_drag(3, 3), (0, 0));
        assert_eq!(interaction.accumulate_drag(3, 3), (0, 0));
        assert_eq!(interaction.accumulate_drag(3, 3), (-8, -8));
        assert_eq!(interaction.drag_offset(), (-1, -1));
    }

    #[test]
    fn test_reset_drag_clears_residue() {
        let mut interaction = InteractionState::new();
        interaction.accumulate_drag(-5, 6);
        interaction.reset_drag();
        assert_eq!(interaction.drag_offset(), (0, 0));
    }

    #[test]
    fn test_capture_and_release() {
        let mut interaction = InteractionState::new();
        interaction.capture(PointerTarget::VerticalScrollBar);
        assert_eq!(interaction.captured(), Some(PointerTarget::VerticalScrollBar));
        assert_eq!(interaction.release(), Some(PointerTarget::VerticalScrollBar));
        assert_eq!(interaction.captured(), None);
    }
}
