//! Viewport state management.
//!
//! This module encapsulates the visible window into the backing resource.
//! Offsets are always grid-aligned and within the per-mode bounds.

use crate::domain::viewport_operations::{clamp_viewport, snap_to_grid};

/// State related to the visible viewport.
///
/// Responsibilities:
/// - Holding the top-left offset of the visible window
/// - Enforcing viewport boundaries
/// - Applying pan steps and scroll-bar positions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    /// Left edge of the visible window in resource pixels
    x: i32,
    /// Top edge of the visible window in resource pixels
    y: i32,
    /// Largest allowed `x`
    max_x: i32,
    /// Largest allowed `y`
    max_y: i32,
}

impl ViewportState {
    /// Creates a viewport at the origin with the given bounds.
    pub fn new(max_x: i32, max_y: i32) -> Self {
        Self { x: 0, y: 0, max_x, max_y }
    }

    // ===== Viewport Queries =====

    /// Returns the horizontal offset.
    pub fn x(&self) -> i32 {
        self.x
    }

    /// Returns the vertical offset.
    pub fn y(&self) -> i32 {
        self.y
    }

    /// Returns the offset as an `(x, y)` pair.
    pub fn offset(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    // ===== Viewport Mutations =====

    /// Moves the viewport by whole pixels and clamps to the bounds.
    ///
    /// # Arguments
    /// * `dx` - Horizontal movement, expected to be grid-aligned
    /// * `dy` - Vertical movement, expected to be grid-aligned
    pub fn pan_by(&mut self, dx: i32, dy: i32) {
        self.x = clamp_viewport(self.x + dx, self.max_x);
        self.y = clamp_viewport(self.y + dy, self.max_y);
    }

    /// Sets the horizontal offset from a scroll-bar value.
    pub fn set_x(&mut self, x: i32) {
        self.x = clamp_viewport(x, self.max_x);
    }

    /// Sets the vertical offset from a scroll-bar value.
    pub fn set_y(&mut self, y: i32) {
        self.y = clamp_viewport(y, self.max_y);
    }

    /// Restores a persisted offset, re-aligning it to the grid.
    ///
    /// # Arguments
    /// * `x` - Stored horizontal offset
    /// * `y` - Stored vertical offset
    pub fn restore(&mut self, x: i32, y: i32) {
        self.set_x(snap_to_grid(x));
        self.set_y(snap_to_grid(y));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pan_clamps_to_bounds() {
        let mut viewport = ViewportState::new(192, 128);
        viewport.pan_by(-8, -8);
        assert_eq!(viewport.offset(), (0, 0));
        viewport.pan_by(400, 400);
        assert_eq!(viewport.offset(), (192, 128));
    }

    #[test]
    fn test_restore_realigns() {
        let mut viewport = ViewportState::new(192, 192);
        viewport.restore(43, 1000);
        assert_eq!(viewport.offset(), (40, 192));
        viewport.restore(-5, 7);
        assert_eq!(viewport.offset(), (0, 0));
    }
}
