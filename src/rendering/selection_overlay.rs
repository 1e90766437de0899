//! Selection marker rendering.
//!
//! The marker is three nested one-pixel outlines: base colour hugging the
//! selection, a contrasting ring around it, and base colour again outside.
//! The middle ring stays visible on any underlying pixel colour.

use crate::palette::{SELECTION_BASE_COLOR, SELECTION_CONTRAST_COLOR};
use crate::traits::{Canvas, ColorIndex};

/// Screen-space bounds of the innermost ring, inclusive corners.
///
/// # Arguments
/// * `panel_origin` - Panel frame origin `(x, y)`
/// * `viewport` - Viewport offset `(x, y)`
/// * `selection` - Selection origin `(x, y)` in resource pixels
/// * `size` - Selection extent `(width, height)`
pub fn selection_ring_bounds(
    panel_origin: (i32, i32),
    viewport: (i32, i32),
    selection: (i32, i32),
    size: (i32, i32),
) -> (i32, i32, i32, i32) {
    // Resource pixel (sx, sy) lands at panel_origin + 1 + (s - viewport),
    // so the ring one pixel outside starts at panel_origin + (s - viewport).
    let x1 = panel_origin.0 + selection.0 - viewport.0;
    let y1 = panel_origin.1 + selection.1 - viewport.1;
    let x2 = x1 + size.0 + 1;
    let y2 = y1 + size.1 + 1;
    (x1, y1, x2, y2)
}

/// Draws the three-ring selection marker.
///
/// The caller is responsible for clipping to the panel interior.
pub fn render_selection_overlay(
    canvas: &mut dyn Canvas,
    panel_origin: (i32, i32),
    viewport: (i32, i32),
    selection: (i32, i32),
    size: (i32, i32),
) {
    let (x1, y1, x2, y2) = selection_ring_bounds(panel_origin, viewport, selection, size);

    let rings: [(i32, ColorIndex); 3] = [
        (0, SELECTION_BASE_COLOR),
        (1, SELECTION_CONTRAST_COLOR),
        (2, SELECTION_BASE_COLOR),
    ];
    for (grow, col) in rings {
        canvas.rectb(x1 - grow, y1 - grow, x2 + grow, y2 + grow, col);
    }
}
