//! Selection state management.
//!
//! This module encapsulates the selection rectangle. Its size is fixed per
//! mode; its origin is grid-aligned and kept inside the backing resource.

/// State related to the selection rectangle.
///
/// Responsibilities:
/// - Tracking the selection origin in resource pixels
/// - Exposing the fixed selection size
/// - Keeping the origin inside `[0, resource_size - size]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionState {
    /// Selection origin in resource pixels
    x: i32,
    y: i32,
    /// Selection extent, fixed at construction
    width: i32,
    height: i32,
    /// Largest allowed origin on each axis
    max_x: i32,
    max_y: i32,
}

impl SelectionState {
    /// Creates a selection at the origin.
    ///
    /// # Arguments
    /// * `width`, `height` - Selection extent
    /// * `resource_size` - Side length of the backing resource
    pub fn new(width: i32, height: i32, resource_size: i32) -> Self {
        Self {
            x: 0,
            y: 0,
            width,
            height,
            max_x: resource_size - width,
            max_y: resource_size - height,
        }
    }

    // ===== Selection Queries =====

    /// Returns the selection origin `(x, y)`.
    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    /// Returns the selection extent `(width, height)`.
    pub fn size(&self) -> (i32, i32) {
        (self.width, self.height)
    }

    // ===== Selection Mutations =====

    /// Moves the selection. Returns true if the origin changed.
    ///
    /// Values from the parent container are clamped so a stale or foreign
    /// drawing position can never push the overlay out of the resource.
    pub fn set_position(&mut self, x: i32, y: i32) -> bool {
        let x = x.clamp(0, self.max_x);
        let y = y.clamp(0, self.max_y);
        let changed = (x, y) != (self.x, self.y);
        self.x = x;
        self.y = y;
        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_position_reports_change() {
        let mut selection = SelectionState::new(16, 16, 256);
        assert!(!selection.set_position(0, 0));
        assert!(selection.set_position(32, 8));
        assert_eq!(selection.position(), (32, 8));
    }

    #[test]
    fn test_set_position_clamps() {
        let mut selection = SelectionState::new(8, 8, 256);
        selection.set_position(300, -4);
        assert_eq!(selection.position(), (248, 0));
        assert_eq!(selection.size(), (8, 8));
    }
}
