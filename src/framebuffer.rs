//! Software screen implementing [`Canvas`].
//!
//! Drawing happens in palette indices at native resolution; the GUI scales
//! the finished frame up when it uploads it as a texture.

use crate::image::IndexedImage;
use crate::traits::{Canvas, ColorIndex};

/// Inclusive clip bounds `(x1, y1, x2, y2)`.
type ClipRect = (i32, i32, i32, i32);

/// A palette-indexed frame with an optional clip rectangle.
#[derive(Debug, Clone)]
pub struct Framebuffer {
    screen: IndexedImage,
    clip_rect: Option<ClipRect>,
}

impl Framebuffer {
    /// Creates a `width` x `height` framebuffer cleared to colour 0.
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            screen: IndexedImage::new(width, height),
            clip_rect: None,
        }
    }

    /// Returns the width in pixels.
    pub fn width(&self) -> i32 {
        self.screen.width()
    }

    /// Returns the height in pixels.
    pub fn height(&self) -> i32 {
        self.screen.height()
    }

    /// Fills the whole screen, ignoring the clip rectangle.
    pub fn cls(&mut self, col: ColorIndex) {
        for y in 0..self.height() {
            for x in 0..self.width() {
                self.screen.pset(x, y, col);
            }
        }
    }

    /// Reads back a pixel, or `None` off screen.
    pub fn pget(&self, x: i32, y: i32) -> Option<ColorIndex> {
        self.screen.pget(x, y)
    }

    /// Row-major palette indices of the current frame.
    pub fn pixels(&self) -> &[ColorIndex] {
        self.screen.pixels()
    }

    /// Returns the active clip rectangle, if any.
    pub fn clip_rect(&self) -> Option<(i32, i32, i32, i32)> {
        self.clip_rect
    }

    fn is_visible(&self, x: i32, y: i32) -> bool {
        match self.clip_rect {
            Some((x1, y1, x2, y2)) => x >= x1 && x <= x2 && y >= y1 && y <= y2,
            None => true,
        }
    }

    fn plot(&mut self, x: i32, y: i32, col: ColorIndex) {
        if self.is_visible(x, y) {
            self.screen.pset(x, y, col);
        }
    }
}

/// Orders two corners so that the first is top-left.
fn normalize(x1: i32, y1: i32, x2: i32, y2: i32) -> (i32, i32, i32, i32) {
    (x1.min(x2), y1.min(y2), x1.max(x2), y1.max(y2))
}

impl Canvas for Framebuffer {
    fn blt(&mut self, x: i32, y: i32, image: &IndexedImage, u: i32, v: i32, w: i32, h: i32) {
        for dy in 0..h.max(0) {
            for dx in 0..w.max(0) {
                if let Some(col) = image.pget(u + dx, v + dy) {
                    self.plot(x + dx, y + dy, col);
                }
            }
        }
    }

    fn rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, col: ColorIndex) {
        let (x1, y1, x2, y2) = normalize(x1, y1, x2, y2);
        for y in y1..=y2 {
            for x in x1..=x2 {
                self.plot(x, y, col);
            }
        }
    }

    fn rectb(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, col: ColorIndex) {
        let (x1, y1, x2, y2) = normalize(x1, y1, x2, y2);
        for x in x1..=x2 {
            self.plot(x, y1, col);
            self.plot(x, y2, col);
        }
        for y in y1..=y2 {
            self.plot(x1, y, col);
            self.plot(x2, y, col);
        }
    }

    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, col: ColorIndex) {
        // Widgets only ever draw axis-aligned lines.
        self.rect(x1, y1, x2, y2, col);
    }

    fn pset(&mut self, x: i32, y: i32, col: ColorIndex) {
        self.plot(x, y, col);
    }

    fn clip(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        self.clip_rect = Some(normalize(x1, y1, x2, y2));
    }

    fn clear_clip(&mut self) {
        self.clip_rect = None;
    }
}
