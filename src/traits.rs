//! Host seams for the image panel.
//!
//! The panel never talks to a concrete toolkit. It draws through [`Canvas`],
//! reads and writes shared editor state through [`PanelHost`], and receives
//! its input/update/draw callbacks through [`PanelEvents`].

use crate::image::IndexedImage;

/// Palette index used by all drawing calls.
pub type ColorIndex = u8;

/// Mouse buttons the panel reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MouseButton {
    /// Left button: selects.
    Primary,
    /// Right button: pans.
    Secondary,
    /// Middle button: ignored by the panel.
    Middle,
}

/// Immediate-mode drawing API supplied by the host.
///
/// Rectangle calls take inclusive corner coordinates `(x1, y1)` to `(x2, y2)`
/// in screen pixels. Every call honours the current clip rectangle.
pub trait Canvas {
    /// Copies the `w` x `h` region at `(u, v)` of `image` to `(x, y)`.
    #[allow(clippy::too_many_arguments)]
    fn blt(&mut self, x: i32, y: i32, image: &IndexedImage, u: i32, v: i32, w: i32, h: i32);

    /// Fills the rectangle spanning the two corners.
    fn rect(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, col: ColorIndex);

    /// Draws the one-pixel outline of the rectangle spanning the two corners.
    fn rectb(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, col: ColorIndex);

    /// Draws a horizontal or vertical line between two points (inclusive).
    fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32, col: ColorIndex);

    /// Sets a single pixel.
    fn pset(&mut self, x: i32, y: i32, col: ColorIndex);

    /// Restricts subsequent drawing to the rectangle spanning the two corners.
    fn clip(&mut self, x1: i32, y1: i32, x2: i32, y2: i32);

    /// Removes the clip rectangle.
    fn clear_clip(&mut self);

    /// Draws the standard widget frame (background plus drop shadow).
    fn draw_panel(&mut self, x: i32, y: i32, width: i32, height: i32) {
        let x1 = x;
        let y1 = y;
        let x2 = x + width - 1;
        let y2 = y + height - 1;

        self.line(x1 + 1, y1, x2 - 1, y1, crate::palette::PANEL_COLOR);
        self.rect(x1, y1 + 1, x2, y2 - 1, crate::palette::PANEL_COLOR);
        self.line(x1 + 1, y2, x2 - 1, y2, crate::palette::PANEL_COLOR);

        self.line(x1 + 2, y2 + 1, x2, y2 + 1, crate::palette::SHADOW_COLOR);
        self.line(x2 + 1, y1 + 2, x2 + 1, y2, crate::palette::SHADOW_COLOR);
        self.pset(x2, y2, crate::palette::SHADOW_COLOR);
    }
}

/// The parent container that embeds a panel.
///
/// In image mode the parent is the system of record for the selection:
/// `drawing_pos` is authoritative and the panel only caches it.
pub trait PanelHost {
    /// Returns the authoritative drawing position `(drawing_x, drawing_y)`.
    fn drawing_pos(&self) -> (i32, i32);

    /// Writes the drawing position after a user edit in the panel.
    fn set_drawing_pos(&mut self, x: i32, y: i32);

    /// Replaces the shared help/status line.
    fn set_help_message(&mut self, message: String);

    /// The backing resource shown by the panel.
    fn image(&self) -> &IndexedImage;
}

/// Callbacks a widget registers with the host loop.
///
/// Within one frame the host must call the input callbacks first, then
/// [`PanelEvents::on_update`], then [`PanelEvents::on_draw`].
pub trait PanelEvents {
    /// A button went down at screen position `(x, y)`.
    fn on_press(&mut self, host: &mut dyn PanelHost, button: MouseButton, x: i32, y: i32);

    /// The pointer moved by `(dx, dy)` to `(x, y)` while `button` is held.
    fn on_drag(
        &mut self,
        host: &mut dyn PanelHost,
        button: MouseButton,
        x: i32,
        y: i32,
        dx: i32,
        dy: i32,
    );

    /// The pointer rests over the widget with no button held.
    fn on_hover(&mut self, host: &mut dyn PanelHost, x: i32, y: i32);

    /// Per-frame reconciliation, after input and before drawing.
    fn on_update(&mut self, host: &dyn PanelHost);

    /// Renders the widget.
    fn on_draw(&self, host: &dyn PanelHost, canvas: &mut dyn Canvas);
}
