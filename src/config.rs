//! Per-mode panel configuration.
//!
//! All geometry that differs between image and tilemap editing lives in
//! [`PanelConfig`], chosen once at construction. Operations read from it
//! instead of branching on the mode.

use anyhow::{bail, Result};
use serde::{Deserialize, Serialize};
use crate::image::IMAGE_SIZE;

/// Snap grid and scroll step, in pixels.
pub const GRID_SIZE: i32 = 8;

/// Thickness of a scroll-bar in pixels.
pub const SCROLL_BAR_THICKNESS: i32 = 7;

/// Which editor embeds the panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PanelMode {
    /// Image editor: 16x16 selection owned by the parent's drawing position.
    Image,
    /// Tilemap editor: 8x8 tile picker owned by the panel.
    Tilemap,
}

impl PanelMode {
    /// Short label used by the GUI.
    pub fn label(self) -> &'static str {
        match self {
            PanelMode::Image => "Image",
            PanelMode::Tilemap => "Tilemap",
        }
    }
}

/// Scroll-bar direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Orientation {
    Horizontal,
    Vertical,
}

/// Integer rectangle in screen pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PixelRect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl PixelRect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self { x, y, width, height }
    }

    /// Returns true if `(px, py)` lies inside the rectangle.
    pub fn contains(&self, px: i32, py: i32) -> bool {
        px >= self.x && py >= self.y && px < self.x + self.width && py < self.y + self.height
    }

    /// Right edge, inclusive.
    pub fn right(&self) -> i32 {
        self.x + self.width - 1
    }

    /// Bottom edge, inclusive.
    pub fn bottom(&self) -> i32 {
        self.y + self.height - 1
    }
}

/// Construction parameters of one scroll-bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScrollBarConfig {
    pub x: i32,
    pub y: i32,
    /// Track length along the scrolling axis, including both arrow buttons.
    pub length: i32,
    pub orientation: Orientation,
    /// Number of steps spanned by the whole track.
    pub track_steps: i32,
    /// Number of steps covered by the slider (the visible range).
    pub visible_steps: i32,
    /// Pixels of viewport movement per step.
    pub step_size: i32,
}

impl ScrollBarConfig {
    /// Largest value the scroll-bar can hold.
    pub fn max_value(&self) -> i32 {
        (self.track_steps - self.visible_steps).max(0)
    }

    /// Screen rectangle covered by the bar.
    pub fn rect(&self) -> PixelRect {
        match self.orientation {
            Orientation::Horizontal => PixelRect::new(self.x, self.y, self.length, SCROLL_BAR_THICKNESS),
            Orientation::Vertical => PixelRect::new(self.x, self.y, SCROLL_BAR_THICKNESS, self.length),
        }
    }
}

/// Fixed geometry of an image panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub mode: PanelMode,
    /// Panel frame in screen pixels; the interior is inset by one pixel.
    pub rect: PixelRect,
    pub select_width: i32,
    pub select_height: i32,
    /// Largest horizontal viewport offset.
    pub viewport_max_x: i32,
    /// Largest vertical viewport offset.
    pub viewport_max_y: i32,
    /// Side length of the backing resource.
    pub resource_size: i32,
    pub h_scroll_bar: ScrollBarConfig,
    pub v_scroll_bar: ScrollBarConfig,
}

impl PanelConfig {
    /// Returns the editor layout for `mode`.
    pub fn for_mode(mode: PanelMode) -> Self {
        let h_scroll_bar = ScrollBarConfig {
            x: 157,
            y: 145,
            length: 66,
            orientation: Orientation::Horizontal,
            track_steps: 32,
            visible_steps: 8,
            step_size: GRID_SIZE,
        };

        match mode {
            PanelMode::Tilemap => Self {
                mode,
                rect: PixelRect::new(157, 80, 66, 66),
                select_width: 8,
                select_height: 8,
                viewport_max_x: 192,
                viewport_max_y: 192,
                resource_size: IMAGE_SIZE,
                h_scroll_bar,
                v_scroll_bar: ScrollBarConfig {
                    x: 222,
                    y: 80,
                    length: 66,
                    orientation: Orientation::Vertical,
                    track_steps: 32,
                    visible_steps: 8,
                    step_size: GRID_SIZE,
                },
            },
            PanelMode::Image => Self {
                mode,
                rect: PixelRect::new(157, 16, 66, 130),
                select_width: 16,
                select_height: 16,
                viewport_max_x: 192,
                viewport_max_y: 128,
                resource_size: IMAGE_SIZE,
                h_scroll_bar,
                v_scroll_bar: ScrollBarConfig {
                    x: 222,
                    y: 16,
                    length: 130,
                    orientation: Orientation::Vertical,
                    track_steps: 32,
                    visible_steps: 16,
                    step_size: GRID_SIZE,
                },
            },
        }
    }

    /// True when the parent owns the selection.
    pub fn selection_follows_parent(&self) -> bool {
        self.mode == PanelMode::Image
    }

    /// Checks that the geometry is internally consistent.
    pub fn validate(&self) -> Result<()> {
        for (axis, size) in [("width", self.select_width), ("height", self.select_height)] {
            if size <= 0 || size % GRID_SIZE != 0 {
                bail!("selection {} {} is not a positive multiple of {}", axis, size, GRID_SIZE);
            }
            if size > self.resource_size {
                bail!("selection {} {} exceeds resource size {}", axis, size, self.resource_size);
            }
        }

        if self.rect.width < 3 || self.rect.height < 3 {
            bail!("panel {}x{} has no interior", self.rect.width, self.rect.height);
        }

        for (axis, max, bar) in [
            ("horizontal", self.viewport_max_x, &self.h_scroll_bar),
            ("vertical", self.viewport_max_y, &self.v_scroll_bar),
        ] {
            if max < 0 || max % GRID_SIZE != 0 {
                bail!("{} viewport bound {} is not a non-negative multiple of {}", axis, max, GRID_SIZE);
            }
            if bar.step_size != GRID_SIZE {
                bail!("{} scroll-bar step {} differs from the {} px grid", axis, bar.step_size, GRID_SIZE);
            }
            if bar.max_value() * bar.step_size != max {
                bail!(
                    "{} scroll-bar reaches {} px but the viewport bound is {}",
                    axis,
                    bar.max_value() * bar.step_size,
                    max
                );
            }
            if bar.length <= 2 * SCROLL_BAR_THICKNESS - 2 {
                bail!("{} scroll-bar length {} leaves no track", axis, bar.length);
            }
        }

        Ok(())
    }
}
