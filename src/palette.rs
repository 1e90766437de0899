//! Display palette for palette-indexed pixels.
//!
//! Images and the framebuffer store 4-bit palette indices; the GUI resolves
//! them to RGB through [`PALETTE`] only when uploading a texture.
//!
//! # Examples
//!
//! ```
//! use rpixed::palette::{color_of, hex_to_color32};
//!
//! assert_eq!(color_of(0), hex_to_color32("#000000"));
//! ```

use egui::Color32;
use once_cell::sync::Lazy;
use crate::traits::ColorIndex;

/// Number of entries in the palette.
pub const PALETTE_SIZE: usize = 16;

/// Widget frame background.
pub const PANEL_COLOR: ColorIndex = 13;
/// Widget drop shadow.
pub const SHADOW_COLOR: ColorIndex = 5;
/// Inner and outer rings of the selection marker.
pub const SELECTION_BASE_COLOR: ColorIndex = 0;
/// Middle ring of the selection marker.
pub const SELECTION_CONTRAST_COLOR: ColorIndex = 7;
/// Scroll-bar slider and arrow glyphs.
pub const SCROLL_BAR_SLIDER_COLOR: ColorIndex = 1;
/// Scroll-bar track.
pub const SCROLL_BAR_TRACK_COLOR: ColorIndex = 6;
/// Framebuffer clear colour.
pub const BACKGROUND_COLOR: ColorIndex = 1;

const PALETTE_HEX: [&str; PALETTE_SIZE] = [
    "#000000", "#1D2B53", "#7E2553", "#008751",
    "#AB5236", "#5F574F", "#C2C3C7", "#FFF1E8",
    "#FF004D", "#FFA300", "#FFEC27", "#00E436",
    "#29ADFF", "#83769C", "#FF77A8", "#FFCCAA",
];

/// The 16-colour display palette.
pub static PALETTE: Lazy<[Color32; PALETTE_SIZE]> =
    Lazy::new(|| PALETTE_HEX.map(hex_to_color32));

/// Resolves a palette index; indices wrap into the 16-entry range.
pub fn color_of(index: ColorIndex) -> Color32 {
    PALETTE[index as usize % PALETTE_SIZE]
}

/// Converts a hex color string like "#RRGGBB" to Color32
pub fn hex_to_color32(hex: &str) -> Color32 {
    let hex = hex.trim_start_matches('#');

    if hex.len() == 6 {
        let r = u8::from_str_radix(&hex[0..2], 16).unwrap_or(0);
        let g = u8::from_str_radix(&hex[2..4], 16).unwrap_or(0);
        let b = u8::from_str_radix(&hex[4..6], 16).unwrap_or(0);
        Color32::from_rgb(r, g, b)
    } else {
        Color32::from_rgb(0, 0, 0) // Fallback to black
    }
}
