//! Scroll-bar widget paired with the image panel.
//!
//! The bar holds an integer step `value` in `0..=track_steps - visible_steps`.
//! User interaction (arrow buttons, slider drag, paging on the track) returns
//! the new value when it changed; [`ScrollBar::set_value`] is silent, so the
//! panel can push its viewport into the bar every frame without the bar
//! echoing a change back.

use crate::config::{Orientation, PixelRect, ScrollBarConfig};
use crate::palette::{SCROLL_BAR_SLIDER_COLOR, SCROLL_BAR_TRACK_COLOR};
use crate::traits::Canvas;

/// Length of each arrow button along the scrolling axis.
pub const ARROW_SIZE: i32 = 6;

/// Part of the bar under a given point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBarPart {
    DecrementButton,
    IncrementButton,
    TrackBefore,
    Slider,
    TrackAfter,
}

/// A horizontal or vertical scroll-bar.
#[derive(Debug, Clone)]
pub struct ScrollBar {
    config: ScrollBarConfig,
    value: i32,
    /// Pointer offset inside the slider while it is being dragged
    slider_grab: Option<i32>,
}

impl ScrollBar {
    /// Creates a bar with the given geometry and initial value.
    pub fn new(config: ScrollBarConfig, value: i32) -> Self {
        Self {
            config,
            value: value.clamp(0, config.max_value()),
            slider_grab: None,
        }
    }

    /// Returns the current step value.
    pub fn value(&self) -> i32 {
        self.value
    }

    /// Returns the largest step value.
    pub fn max_value(&self) -> i32 {
        self.config.max_value()
    }

    /// Returns the geometry this bar was built with.
    pub fn config(&self) -> &ScrollBarConfig {
        &self.config
    }

    /// Screen rectangle covered by the bar.
    pub fn rect(&self) -> PixelRect {
        self.config.rect()
    }

    /// Returns true while the slider is being dragged.
    pub fn is_dragging(&self) -> bool {
        self.slider_grab.is_some()
    }

    /// Sets the value without notifying. Out-of-range values are clamped.
    pub fn set_value(&mut self, value: i32) {
        self.value = value.clamp(0, self.max_value());
    }

    // ===== Geometry =====

    fn along_axis(&self, x: i32, y: i32) -> i32 {
        match self.config.orientation {
            Orientation::Horizontal => x - self.config.x,
            Orientation::Vertical => y - self.config.y,
        }
    }

    fn track_length(&self) -> i32 {
        (self.config.length - 2 * ARROW_SIZE).max(1)
    }

    /// Slider start and length along the axis, relative to the bar origin.
    pub fn slider_span(&self) -> (i32, i32) {
        let track = self.track_length();
        let steps = self.config.track_steps.max(1);
        let start = ARROW_SIZE + track * self.value / steps;
        let length = (track * self.config.visible_steps / steps).max(1);
        (start, length)
    }

    /// Classifies the point `(x, y)`; `None` if it lies outside the bar.
    pub fn part_at(&self, x: i32, y: i32) -> Option<ScrollBarPart> {
        if !self.rect().contains(x, y) {
            return None;
        }

        let pos = self.along_axis(x, y);
        let (slider_start, slider_length) = self.slider_span();

        let part = if pos < ARROW_SIZE {
            ScrollBarPart::DecrementButton
        } else if pos >= self.config.length - ARROW_SIZE {
            ScrollBarPart::IncrementButton
        } else if pos < slider_start {
            ScrollBarPart::TrackBefore
        } else if pos < slider_start + slider_length {
            ScrollBarPart::Slider
        } else {
            ScrollBarPart::TrackAfter
        };
        Some(part)
    }

    // ===== User Interaction =====

    /// Handles a press. Returns the new value if it changed.
    pub fn press(&mut self, x: i32, y: i32) -> Option<i32> {
        match self.part_at(x, y)? {
            ScrollBarPart::DecrementButton => self.change_to(self.value - 1),
            ScrollBarPart::IncrementButton => self.change_to(self.value + 1),
            ScrollBarPart::TrackBefore => self.change_to(self.value - self.config.visible_steps),
            ScrollBarPart::TrackAfter => self.change_to(self.value + self.config.visible_steps),
            ScrollBarPart::Slider => {
                let (slider_start, _) = self.slider_span();
                self.slider_grab = Some(self.along_axis(x, y) - slider_start);
                None
            }
        }
    }

    /// Handles a drag while the bar holds the pointer. Returns the new value if it changed.
    pub fn drag(&mut self, x: i32, y: i32) -> Option<i32> {
        let grab = self.slider_grab?;
        let slider_start = self.along_axis(x, y) - grab - ARROW_SIZE;
        let steps = self.config.track_steps as f32;
        let value = (slider_start as f32 * steps / self.track_length() as f32).round() as i32;
        self.change_to(value)
    }

    /// Ends a slider drag.
    pub fn release(&mut self) {
        self.slider_grab = None;
    }

    /// Applies a user-driven value, notifying only on an actual change.
    fn change_to(&mut self, value: i32) -> Option<i32> {
        let value = value.clamp(0, self.max_value());
        if value == self.value {
            return None;
        }
        self.value = value;
        Some(value)
    }

    // ===== Drawing =====

    /// Draws the track, both arrow buttons and the slider.
    pub fn draw(&self, canvas: &mut dyn Canvas) {
        let rect = self.rect();
        canvas.rect(rect.x, rect.y, rect.right(), rect.bottom(), SCROLL_BAR_TRACK_COLOR);

        let (slider_start, slider_length) = self.slider_span();
        let slider_end = slider_start + slider_length - 1;
        let far = self.config.length - 1;

        match self.config.orientation {
            Orientation::Horizontal => {
                let cy = rect.y + rect.height / 2;
                // Left and right pointing arrows
                canvas.pset(rect.x + 2, cy, SCROLL_BAR_SLIDER_COLOR);
                canvas.line(rect.x + 3, cy - 1, rect.x + 3, cy + 1, SCROLL_BAR_SLIDER_COLOR);
                canvas.pset(rect.x + far - 2, cy, SCROLL_BAR_SLIDER_COLOR);
                canvas.line(rect.x + far - 3, cy - 1, rect.x + far - 3, cy + 1, SCROLL_BAR_SLIDER_COLOR);
                canvas.rect(
                    rect.x + slider_start,
                    rect.y + 1,
                    rect.x + slider_end,
                    rect.bottom() - 1,
                    SCROLL_BAR_SLIDER_COLOR,
                );
            }
            Orientation::Vertical => {
                let cx = rect.x + rect.width / 2;
                // Up and down pointing arrows
                canvas.pset(cx, rect.y + 2, SCROLL_BAR_SLIDER_COLOR);
                canvas.line(cx - 1, rect.y + 3, cx + 1, rect.y + 3, SCROLL_BAR_SLIDER_COLOR);
                canvas.pset(cx, rect.y + far - 2, SCROLL_BAR_SLIDER_COLOR);
                canvas.line(cx - 1, rect.y + far - 3, cx + 1, rect.y + far - 3, SCROLL_BAR_SLIDER_COLOR);
                canvas.rect(
                    rect.x + 1,
                    rect.y + slider_start,
                    rect.right() - 1,
                    rect.y + slider_end,
                    SCROLL_BAR_SLIDER_COLOR,
                );
            }
        }
    }
}
