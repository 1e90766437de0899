//! Viewport operations for coordinate transformation and pan quantisation.
//!
//! This module provides pure functions for:
//! - Converting screen pixels to backing-resource coordinates
//! - Snapping coordinates to the 8-pixel grid
//! - Splitting a drag accumulator into whole grid steps
//!
//! These functions are stateless and can be tested independently.

use crate::config::{PanelConfig, GRID_SIZE};

/// Rounds `value` down to the nearest multiple of the grid size.
///
/// Negative values round towards negative infinity, so `-1` snaps to `-8`.
pub fn snap_to_grid(value: i32) -> i32 {
    value.div_euclid(GRID_SIZE) * GRID_SIZE
}

/// Maps one screen axis to a snapped, clamped selection origin.
///
/// # Arguments
/// * `screen` - Screen coordinate of the pointer
/// * `viewport` - Current viewport offset on this axis
/// * `panel_origin` - Panel frame origin on this axis
/// * `select_size` - Selection extent on this axis
/// * `resource_size` - Backing resource extent on this axis
pub fn screen_to_view_axis(
    screen: i32,
    viewport: i32,
    panel_origin: i32,
    select_size: i32,
    resource_size: i32,
) -> i32 {
    // One pixel of frame sits between the panel origin and the first texel.
    let raw = screen + viewport - panel_origin - 1;
    let centered = raw - (select_size - GRID_SIZE) / 2;
    snap_to_grid(centered).clamp(0, resource_size - select_size)
}

/// Converts a screen point to the selection origin it would pick.
///
/// The result is always grid-aligned and inside
/// `[0, resource_size - select_size]` on both axes.
///
/// # Arguments
/// * `config` - Panel geometry
/// * `viewport` - Current viewport offset `(x, y)`
/// * `x`, `y` - Screen coordinates of the pointer
pub fn screen_to_view(config: &PanelConfig, viewport: (i32, i32), x: i32, y: i32) -> (i32, i32) {
    (
        screen_to_view_axis(
            x,
            viewport.0,
            config.rect.x,
            config.select_width,
            config.resource_size,
        ),
        screen_to_view_axis(
            y,
            viewport.1,
            config.rect.y,
            config.select_height,
            config.resource_size,
        ),
    )
}

/// Returns the whole grid steps contained in a drag accumulator.
///
/// The result is a multiple of the grid size with the same sign as
/// `accumulator`, or zero while `|accumulator| < GRID_SIZE`. Subtracting it
/// leaves a residue strictly inside `(-GRID_SIZE, GRID_SIZE)`.
pub fn extract_pan_step(accumulator: i32) -> i32 {
    if accumulator.abs() < GRID_SIZE {
        return 0;
    }
    // Truncating division: -9 yields -8, the same magnitude as +9 yields.
    (accumulator / GRID_SIZE) * GRID_SIZE
}

/// Clamps a viewport offset into `[0, max]`.
pub fn clamp_viewport(offset: i32, max: i32) -> i32 {
    offset.clamp(0, max.max(0))
}

/// Converts a viewport offset to the scroll-bar step that shows it.
pub fn viewport_to_steps(offset: i32, step_size: i32) -> i32 {
    offset.div_euclid(step_size)
}

/// Converts a scroll-bar step to a viewport offset.
pub fn steps_to_viewport(value: i32, step_size: i32) -> i32 {
    value * step_size
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::PanelMode;

    #[test]
    fn test_snap_to_grid_floors() {
        assert_eq!(snap_to_grid(0), 0);
        assert_eq!(snap_to_grid(7), 0);
        assert_eq!(snap_to_grid(8), 8);
        assert_eq!(snap_to_grid(15), 8);
        assert_eq!(snap_to_grid(-1), -8);
    }

    #[test]
    fn test_image_mode_panel_corner_maps_to_origin() {
        let config = PanelConfig::for_mode(PanelMode::Image);
        assert_eq!(screen_to_view(&config, (0, 0), 158, 17), (0, 0));
    }

    #[test]
    fn test_image_mode_centers_selection_on_pointer() {
        let config = PanelConfig::for_mode(PanelMode::Image);
        // Raw x = 12 -> centred 8 -> snapped 8
        assert_eq!(screen_to_view(&config, (0, 0), 158 + 12, 17).0, 8);
        // Raw x = 11 -> centred 7 -> snapped 0
        assert_eq!(screen_to_view(&config, (0, 0), 158 + 11, 17).0, 0);
    }

    #[test]
    fn test_tilemap_mode_snaps_without_centering() {
        let config = PanelConfig::for_mode(PanelMode::Tilemap);
        let (x, _) = screen_to_view(&config, (0, 0), 158 + 3, 81);
        assert_eq!(x, 0);
        let (x, y) = screen_to_view(&config, (16, 8), 158 + 9, 81 + 2);
        assert_eq!((x, y), (24, 8));
    }

    #[test]
    fn test_clamps_to_resource() {
        let config = PanelConfig::for_mode(PanelMode::Image);
        assert_eq!(screen_to_view(&config, (0, 0), 0, 0), (0, 0));
        assert_eq!(screen_to_view(&config, (192, 128), 1000, 1000), (240, 240));
    }

    #[test]
    fn test_extract_pan_step() {
        assert_eq!(extract_pan_step(0), 0);
        assert_eq!(extract_pan_step(7), 0);
        assert_eq!(extract_pan_step(-7), 0);
        assert_eq!(extract_pan_step(8), 8);
        assert_eq!(extract_pan_step(20), 16);
        assert_eq!(extract_pan_step(-20), -16);
        assert_eq!(extract_pan_step(-9), -8);
    }

    #[test]
    fn test_step_conversions() {
        assert_eq!(viewport_to_steps(40, 8), 5);
        assert_eq!(steps_to_viewport(5, 8), 40);
        assert_eq!(clamp_viewport(-8, 192), 0);
        assert_eq!(clamp_viewport(200, 192), 192);
    }
}
