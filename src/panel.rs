//! The image panel widget.
//!
//! Shows a scrollable window onto a 256x256 image bank. The primary button
//! picks a grid-aligned selection, the secondary button pans in whole grid
//! steps, and two scroll-bars mirror the viewport.
//!
//! A host drives the panel once per frame in this order:
//! 1. input ([`ImagePanel::dispatch`] or the [`PanelEvents`] callbacks)
//! 2. [`PanelEvents::on_update`]
//! 3. [`PanelEvents::on_draw`] (or [`ImagePanel::draw_with_scroll_bars`])

use anyhow::{Context as _, Result};
use tracing::{debug, trace};
use crate::config::{PanelConfig, PanelMode};
use crate::domain::viewport_operations::{self, snap_to_grid, steps_to_viewport, viewport_to_steps};
use crate::rendering::selection_overlay;
use crate::scroll_bar::ScrollBar;
use crate::state::{InteractionState, PointerTarget, SelectionState, ViewportState};
use crate::traits::{Canvas, MouseButton, PanelEvents, PanelHost};

/// Help line shown while hovering in tilemap mode.
const TILEMAP_HELP: &str = "VIEW:R-DRAG";
/// Help line shown while hovering in image mode.
const IMAGE_HELP: &str = "TARGET:CURSOR VIEW:R-DRAG";

/// Raw pointer input in screen pixels, as delivered by the host loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// A button went down.
    Press { button: MouseButton, x: i32, y: i32 },
    /// The pointer moved by `(dx, dy)` while `button` is held.
    Drag { button: MouseButton, x: i32, y: i32, dx: i32, dy: i32 },
    /// A button went up.
    Release { button: MouseButton, x: i32, y: i32 },
    /// The pointer moved with no button held.
    Hover { x: i32, y: i32 },
}

/// Scrollable image-bank viewer with grid selection.
#[derive(Debug, Clone)]
pub struct ImagePanel {
    config: PanelConfig,
    viewport: ViewportState,
    selection: SelectionState,
    interaction: InteractionState,
    h_scroll_bar: ScrollBar,
    v_scroll_bar: ScrollBar,
}

impl ImagePanel {
    /// Creates a panel with the built-in layout for `mode`.
    pub fn new(mode: PanelMode) -> Self {
        Self::build(PanelConfig::for_mode(mode))
    }

    /// Creates a panel from custom geometry, rejecting inconsistent layouts.
    pub fn with_config(config: PanelConfig) -> Result<Self> {
        config
            .validate()
            .with_context(|| format!("invalid {} panel layout", config.mode.label()))?;
        Ok(Self::build(config))
    }

    fn build(config: PanelConfig) -> Self {
        Self {
            config,
            viewport: ViewportState::new(config.viewport_max_x, config.viewport_max_y),
            selection: SelectionState::new(
                config.select_width,
                config.select_height,
                config.resource_size,
            ),
            interaction: InteractionState::new(),
            h_scroll_bar: ScrollBar::new(config.h_scroll_bar, 0),
            v_scroll_bar: ScrollBar::new(config.v_scroll_bar, 0),
        }
    }

    // ===== Queries =====

    /// Returns the panel geometry.
    pub fn config(&self) -> &PanelConfig {
        &self.config
    }

    /// Returns the editing mode.
    pub fn mode(&self) -> PanelMode {
        self.config.mode
    }

    /// Returns the viewport offset `(x, y)`.
    pub fn viewport(&self) -> (i32, i32) {
        self.viewport.offset()
    }

    /// Returns the selection origin `(x, y)`.
    pub fn selection(&self) -> (i32, i32) {
        self.selection.position()
    }

    /// Returns the selection extent `(width, height)`.
    pub fn selection_size(&self) -> (i32, i32) {
        self.selection.size()
    }

    /// Returns the pan accumulator `(x, y)`.
    pub fn drag_offset(&self) -> (i32, i32) {
        self.interaction.drag_offset()
    }

    /// Returns the horizontal scroll-bar.
    pub fn h_scroll_bar(&self) -> &ScrollBar {
        &self.h_scroll_bar
    }

    /// Returns the vertical scroll-bar.
    pub fn v_scroll_bar(&self) -> &ScrollBar {
        &self.v_scroll_bar
    }

    /// Maps a screen point to the selection origin it would pick.
    pub fn screen_to_view(&self, x: i32, y: i32) -> (i32, i32) {
        viewport_operations::screen_to_view(&self.config, self.viewport.offset(), x, y)
    }

    // ===== Mutations =====

    /// Restores a persisted viewport, re-aligned and clamped.
    pub fn restore_viewport(&mut self, x: i32, y: i32) {
        self.viewport.restore(x, y);
    }

    /// Drops any gesture in progress: pointer capture, slider drags and the
    /// pan accumulator.
    pub fn cancel_interaction(&mut self) {
        self.interaction.reset();
        self.h_scroll_bar.release();
        self.v_scroll_bar.release();
    }

    /// Handles a change notification from the horizontal scroll-bar.
    pub fn on_h_scroll_bar_change(&mut self, value: i32) {
        self.viewport.set_x(steps_to_viewport(value, self.config.h_scroll_bar.step_size));
        debug!(value, viewport_x = self.viewport.x(), "horizontal scroll-bar changed");
    }

    /// Handles a change notification from the vertical scroll-bar.
    pub fn on_v_scroll_bar_change(&mut self, value: i32) {
        self.viewport.set_y(steps_to_viewport(value, self.config.v_scroll_bar.step_size));
        debug!(value, viewport_y = self.viewport.y(), "vertical scroll-bar changed");
    }

    /// Routes one raw input event to the scroll-bars or the panel body.
    ///
    /// A press is hit-tested against the scroll-bars first, then the panel.
    /// The hit widget captures the pointer and receives every drag until the
    /// release, wherever the pointer goes.
    ///
    /// # Returns
    /// True if a widget consumed the event
    pub fn dispatch(&mut self, host: &mut dyn PanelHost, event: InputEvent) -> bool {
        match event {
            InputEvent::Press { button, x, y } => {
                let Some(target) = self.hit_test(button, x, y) else {
                    return false;
                };
                self.interaction.capture(target);
                match target {
                    PointerTarget::Panel => self.on_press(host, button, x, y),
                    PointerTarget::HorizontalScrollBar => {
                        if let Some(value) = self.h_scroll_bar.press(x, y) {
                            self.on_h_scroll_bar_change(value);
                        }
                    }
                    PointerTarget::VerticalScrollBar => {
                        if let Some(value) = self.v_scroll_bar.press(x, y) {
                            self.on_v_scroll_bar_change(value);
                        }
                    }
                }
                true
            }
            InputEvent::Drag { button, x, y, dx, dy } => {
                match self.interaction.captured() {
                    Some(PointerTarget::Panel) => self.on_drag(host, button, x, y, dx, dy),
                    Some(PointerTarget::HorizontalScrollBar) => {
                        if let Some(value) = self.h_scroll_bar.drag(x, y) {
                            self.on_h_scroll_bar_change(value);
                        }
                    }
                    Some(PointerTarget::VerticalScrollBar) => {
                        if let Some(value) = self.v_scroll_bar.drag(x, y) {
                            self.on_v_scroll_bar_change(value);
                        }
                    }
                    None => return false,
                }
                true
            }
            InputEvent::Release { .. } => match self.interaction.release() {
                Some(PointerTarget::HorizontalScrollBar) => {
                    self.h_scroll_bar.release();
                    true
                }
                Some(PointerTarget::VerticalScrollBar) => {
                    self.v_scroll_bar.release();
                    true
                }
                Some(PointerTarget::Panel) => true,
                None => false,
            },
            InputEvent::Hover { x, y } => {
                if self.config.rect.contains(x, y) {
                    self.on_hover(host, x, y);
                    true
                } else {
                    false
                }
            }
        }
    }

    fn hit_test(&self, button: MouseButton, x: i32, y: i32) -> Option<PointerTarget> {
        if button == MouseButton::Primary {
            if self.h_scroll_bar.rect().contains(x, y) {
                return Some(PointerTarget::HorizontalScrollBar);
            }
            if self.v_scroll_bar.rect().contains(x, y) {
                return Some(PointerTarget::VerticalScrollBar);
            }
        }
        self.config.rect.contains(x, y).then_some(PointerTarget::Panel)
    }

    /// Draws the panel followed by its two scroll-bars.
    pub fn draw_with_scroll_bars(&self, host: &dyn PanelHost, canvas: &mut dyn Canvas) {
        self.on_draw(host, canvas);
        self.h_scroll_bar.draw(canvas);
        self.v_scroll_bar.draw(canvas);
    }
}

impl PanelEvents for ImagePanel {
    fn on_press(&mut self, host: &mut dyn PanelHost, button: MouseButton, x: i32, y: i32) {
        match button {
            MouseButton::Primary => {
                let (select_x, select_y) = self.screen_to_view(x, y);
                if self.selection.set_position(select_x, select_y) {
                    debug!(select_x, select_y, mode = self.config.mode.label(), "selection moved");
                }

                if self.config.selection_follows_parent() {
                    host.set_drawing_pos(select_x, select_y);
                }
            }
            MouseButton::Secondary => self.interaction.reset_drag(),
            MouseButton::Middle => {}
        }
    }

    fn on_drag(
        &mut self,
        host: &mut dyn PanelHost,
        button: MouseButton,
        x: i32,
        y: i32,
        dx: i32,
        dy: i32,
    ) {
        match button {
            MouseButton::Primary => self.on_press(host, button, x, y),
            MouseButton::Secondary => {
                let (step_x, step_y) = self.interaction.accumulate_drag(dx, dy);
                if step_x != 0 || step_y != 0 {
                    self.viewport.pan_by(step_x, step_y);
                    debug!(
                        step_x,
                        step_y,
                        viewport_x = self.viewport.x(),
                        viewport_y = self.viewport.y(),
                        "viewport panned"
                    );
                }
            }
            MouseButton::Middle => {}
        }
    }

    fn on_hover(&mut self, host: &mut dyn PanelHost, x: i32, y: i32) {
        let (view_x, view_y) = self.screen_to_view(x, y);
        let help = if self.config.selection_follows_parent() {
            IMAGE_HELP
        } else {
            TILEMAP_HELP
        };
        trace!(view_x, view_y, "hover");
        host.set_help_message(format!("{} ({},{})", help, view_x, view_y));
    }

    fn on_update(&mut self, host: &dyn PanelHost) {
        if self.config.selection_follows_parent() {
            let (drawing_x, drawing_y) = host.drawing_pos();
            self.selection.set_position(snap_to_grid(drawing_x), snap_to_grid(drawing_y));
        }

        self.h_scroll_bar
            .set_value(viewport_to_steps(self.viewport.x(), self.config.h_scroll_bar.step_size));
        self.v_scroll_bar
            .set_value(viewport_to_steps(self.viewport.y(), self.config.v_scroll_bar.step_size));
    }

    fn on_draw(&self, host: &dyn PanelHost, canvas: &mut dyn Canvas) {
        let rect = self.config.rect;
        let (viewport_x, viewport_y) = self.viewport.offset();

        canvas.draw_panel(rect.x, rect.y, rect.width, rect.height);

        canvas.blt(
            rect.x + 1,
            rect.y + 1,
            host.image(),
            viewport_x,
            viewport_y,
            rect.width - 2,
            rect.height - 2,
        );

        canvas.clip(rect.x + 1, rect.y + 1, rect.x + rect.width - 2, rect.y + rect.height - 2);

        selection_overlay::render_selection_overlay(
            canvas,
            (rect.x, rect.y),
            (viewport_x, viewport_y),
            self.selection.position(),
            self.selection.size(),
        );

        canvas.clear_clip();
    }
}
